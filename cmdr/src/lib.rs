// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # lr
//!
//! A small interactive prompt that shows off [`r3bl_line_reader`]. It puts the terminal
//! in raw mode and reads lines one byte at a time, so you get in-place editing and
//! history without any help from the tty driver.
//!
//! # Keys
//!
//! | Key                   | Action                                   |
//! |-----------------------|------------------------------------------|
//! | printable ASCII       | insert at the cursor                     |
//! | `Backspace`, `Delete` | delete the character before the cursor   |
//! | `Left`, `Right`       | move the cursor                          |
//! | `Up`, `Down`          | browse history                           |
//! | `Enter`               | submit the line                          |
//! | `Ctrl+D`              | exit, when the line is empty             |
//!
//! # Builtins
//!
//! - `history` lists the lines that are still in the history ring.
//! - `exit` or `quit` ends the session.
//! - Anything else is echoed back.
//!
//! # Run
//!
//! ```sh
//! cargo run --bin lr -- --prompt "lr> " --enable-logging --log-level trace
//! ```

// Attach sources.
pub mod lr;

// Re-export.
pub use lr::*;
