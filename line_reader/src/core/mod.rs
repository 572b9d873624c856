// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ambient building blocks shared by the [`crate::readline`] module: byte constants for
//! the console protocol, raw mode, error types, logging, and test fixtures.

// Attach sources.
pub mod ansi;
pub mod common;
pub mod decl_macros;
pub mod log;
pub mod terminal_raw_mode;
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use common::*;
pub use log::*;
pub use terminal_raw_mode::*;
pub use test_fixtures::*;
