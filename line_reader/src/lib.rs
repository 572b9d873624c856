// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

//! # Line reader for raw consoles
//!
//! This crate turns a stream of raw bytes coming from a console device into complete
//! logical lines. It is the kind of line reader you find in a small embedded shell: one
//! byte at a time, no allocation on the editing path, and everything the user sees on
//! the terminal is echoed synchronously as each byte is applied.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Mental model](#mental-model)
//! - [I/O devices](#io-devices)
//! - [Example](#example)
//! - [Logging and errors](#logging-and-errors)
//!
//! # Features
//!
//! 1. Fixed capacity [`LineBuffer`] with in-place insert, backspace, and left / right
//!    cursor movement. Full buffers silently reject input.
//! 2. Bounded [`HistoryRing`] of committed lines, browsed with the up / down arrow keys.
//!    Once more than `H` lines are committed, the oldest ones are overwritten.
//! 3. A three state [`EscapeSequenceDecoder`] that recognizes `ESC [ A/B/C/D`. Any other
//!    `ESC [ x` sequence is swallowed, and an `ESC` that is not followed by `[` replays
//!    the next byte as if the `ESC` never happened.
//! 4. `CR`, `LF`, and `CR LF` all submit exactly one line. `Ctrl+D` on an empty line
//!    signals end of input.
//!
//! # Mental model
//!
//! ```text
//! ByteSource ──▶ EscapeSequenceDecoder ──▶ EditorSession
//!  (blocking)                                 │
//!                         ┌───────────────────┴──────────────────┐
//!                         ▼                                      ▼
//!                    LineBuffer<C>                        HistoryRing<H, C>
//!                         │                                      │
//!                         └──────────────▶ &mut dyn Write ◀──────┘
//!                                         (echo and redraw)
//! ```
//!
//! [`EditorSession::read_line()`] writes the prompt, then loops: read one byte, decode
//! it, apply it, echo it. It returns [`ReadlineEvent::Line`] when the user submits a
//! line and [`ReadlineEvent::Eof`] when the input is over.
//!
//! There is no global state. Each [`EditorSession`] owns its buffer, its history, and
//! its decoder state. Hold one per console.
//!
//! # I/O devices
//!
//! - Input comes from anything that implements [`ByteSource`]. [`StdinByteSource`] reads
//!   from a raw mode tty, and [`ChannelByteSource`] receives bytes from a
//!   [`tokio::sync::mpsc`] channel. [`VecByteSource`] replays a canned byte sequence
//!   (for tests).
//! - Output goes to anything that implements [`std::io::Write`], eg: [`std::io::Stdout`]
//!   or [`StdoutMock`] in tests.
//!
//! # Example
//!
//! ```
//! use r3bl_line_reader::{EditorSession, ReadlineEvent, StdoutMock, VecByteSource};
//!
//! let mut session = EditorSession::<64, 8>::new();
//! let mut source = VecByteSource::new(b"hi\r");
//! let mut stdout_mock = StdoutMock::default();
//!
//! let event = session.read_line("> ", &mut source, &mut stdout_mock).unwrap();
//! assert_eq!(event, ReadlineEvent::Line("hi".into()));
//! assert_eq!(session.history().commit_count(), 1);
//! ```
//!
//! # Logging and errors
//!
//! The crate logs with [`tracing`]. Use [`TracingConfig`] to route logs to a file or to
//! stderr. Logs are never written to the console sink that the editor echoes to.
//!
//! Editing never fails: every boundary condition (full buffer, empty history, cursor at
//! the start of the line) is a silent no-op. The only errors are I/O errors raised by
//! the byte source or the console sink, reported as [`ReadlineError`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;
pub mod readline;

// Re-export.
pub use core::*;
pub use readline::*;
