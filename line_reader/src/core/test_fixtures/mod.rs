// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures that stand in for the console device in tests: [`StdoutMock`] captures
//! everything the editor echoes, and [`VecByteSource`] replays scripted key presses.

// Attach sources.
pub mod byte_source_fixtures;
pub mod stdout_mock;
pub mod temp_dir;

// Re-export.
pub use byte_source_fixtures::*;
pub use stdout_mock::*;
pub use temp_dir::*;
