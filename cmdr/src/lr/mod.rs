// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod app;
pub mod builtins;
pub mod clap_config;

// Re-export.
pub use app::*;
pub use builtins::*;
pub use clap_config::*;
