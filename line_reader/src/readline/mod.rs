// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The line editor. [`EditorSession`] is the entry point, and the rest of the types in
//! this module are the parts it is built from.
//!
//! | Module           | Responsibility                                              |
//! |------------------|-------------------------------------------------------------|
//! | `byte_source`    | [`ByteSource`] trait and its tty and channel implementations |
//! | `escape_decoder` | [`EscapeSequenceDecoder`] state machine for `ESC [ x`        |
//! | `line_buffer`    | [`LineBuffer`] fixed capacity line with in-place editing     |
//! | `history_ring`   | [`HistoryRing`] bounded history of committed lines           |
//! | `editor_session` | [`EditorSession`] read, decode, apply, and echo loop         |

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
pub mod byte_source;
pub mod editor_session;
pub mod escape_decoder;
pub mod history_ring;
pub mod line_buffer;

// Re-export the public API.
pub use byte_source::*;
pub use editor_session::*;
pub use escape_decoder::*;
pub use history_ring::*;
pub use line_buffer::*;

// External crates.
use smallvec::SmallVec;

// Constants.

/// Default capacity of a [`LineBuffer`], and of each slot in a [`HistoryRing`].
pub const LINE_LENGTH_MAX: usize = 64;

/// Default number of committed lines a [`HistoryRing`] retains.
pub const HISTORY_COUNT_MAX: usize = 8;

/// Echo and redraw bytes for a single edit are collected here before they are written
/// to the console with one `write_all()`. Big enough for a full line redraw without
/// spilling to the heap.
pub const ECHO_BUFFER_INLINE_SIZE: usize = 2 * LINE_LENGTH_MAX + 16;

// Type aliases.
pub type EchoBuffer = SmallVec<[u8; ECHO_BUFFER_INLINE_SIZE]>;
