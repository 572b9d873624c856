// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte level constants for the console protocol that the line editor speaks.
//!
//! ## Organization
//!
//! - **Input sequences**: the escape sequence prefix and final bytes of the arrow keys.
//! - **C0 control characters**: submit, erase, and end of input bytes.
//! - **Output sequences**: what the editor writes to redraw a line.
//!
//! ```rust
//! use r3bl_line_reader::{ANSI_CSI_BRACKET, ANSI_ESC, CSI_ARROW_UP_FINAL};
//!
//! let arrow_up = [ANSI_ESC, ANSI_CSI_BRACKET, CSI_ARROW_UP_FINAL];
//! assert_eq!(&arrow_up, b"\x1b[A");
//! ```

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Input sequences.

/// ESC sequence start: ESC (0x1B).
pub const ANSI_ESC: u8 = 0x1B;

/// Second byte of a CSI sequence: `[` (0x5B).
pub const ANSI_CSI_BRACKET: u8 = b'[';

/// `ESC [ A`: cursor up.
pub const CSI_ARROW_UP_FINAL: u8 = b'A';

/// `ESC [ B`: cursor down.
pub const CSI_ARROW_DOWN_FINAL: u8 = b'B';

/// `ESC [ C`: cursor forward (right).
pub const CSI_ARROW_RIGHT_FINAL: u8 = b'C';

/// `ESC [ D`: cursor back (left).
pub const CSI_ARROW_LEFT_FINAL: u8 = b'D';

// C0 control characters.

/// End of transmission (EOT), sent by `Ctrl+D`.
pub const END_OF_TRANSMISSION: u8 = 0x04;

/// Backspace control character (BS).
/// Moves cursor one position to the left.
pub const BACKSPACE: u8 = 0x08;

/// Line Feed control character (LF).
pub const LINE_FEED: u8 = b'\n';

/// Carriage Return control character (CR).
pub const CARRIAGE_RETURN: u8 = b'\r';

/// Delete (DEL). Most terminals send this for the backspace key.
pub const DELETE: u8 = 0x7F;

/// Used to blank out the last visible character after a deletion.
pub const SPACE: u8 = b' ';

/// Printable ASCII range accepted into the line buffer.
pub const PRINTABLE_ASCII_RANGE: std::ops::RangeInclusive<u8> = 0x20..=0x7E;

// Output sequences.

/// EL 0: erase from the cursor to the end of the line (`ESC [ K`).
pub const EL_ERASE_TO_END_OF_LINE: &[u8] = b"\x1b[K";

/// What gets written to the console when a line is submitted with `CR`.
pub const SUBMIT_ECHO: &[u8] = b"\n";
