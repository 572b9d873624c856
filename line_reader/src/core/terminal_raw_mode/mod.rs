// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw mode for the controlling terminal.
//!
//! In cooked (canonical) mode the tty driver assembles lines itself, echoes every key,
//! and turns `Ctrl+D` into end of file. The line editor needs to see every byte as it is
//! typed, including `ESC [ A` for the arrow keys, and it does its own echo. So the
//! terminal has to be in raw mode while [`crate::EditorSession::read_line()`] runs.
//!
//! Raw mode changes that matter here:
//! - No line buffering: each key press is delivered immediately (`VMIN=1`, `VTIME=0`).
//! - No echo: the editor writes everything the user sees.
//! - No `CR` to `LF` translation on input: `Enter` arrives as `\r`.
//! - No output post processing: writing `\n` does not return the carriage, so callers
//!   write `\r\n` when they print their own output.
//!
//! Prefer [`RawModeGuard`], which restores the original settings when dropped.
//!
//! ```no_run
//! use r3bl_line_reader::RawModeGuard;
//!
//! # fn main() -> miette::Result<()> {
//! let guard = RawModeGuard::new()?;
//! // ... read bytes ...
//! drop(guard); // Terminal is back in cooked mode.
//! # Ok(())
//! # }
//! ```

// Attach sources.
pub mod raw_mode_core;
#[cfg(unix)]
mod raw_mode_unix;

// Re-export.
pub use raw_mode_core::*;
