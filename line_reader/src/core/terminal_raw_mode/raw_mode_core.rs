// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The platform agnostic [`RawModeGuard`], which dispatches to the platform specific
//! implementation.

#[cfg(unix)]
use super::raw_mode_unix;

/// RAII guard that holds stdin in raw mode, and puts back the settings it found when it
/// is dropped.
///
/// Recommended way to use raw mode as it ensures terminal restoration even on panic.
/// Each guard owns the settings it replaced, so there is no process wide state.
#[derive(Debug)]
pub struct RawModeGuard {
    #[cfg(unix)]
    original: rustix::termios::Termios,
}

impl RawModeGuard {
    /// Switch stdin to raw mode.
    ///
    /// See [module documentation] for why raw mode is needed.
    ///
    /// # Errors
    ///
    /// Returns miette diagnostic errors if:
    /// - stdin is not a terminal
    /// - Terminal attributes cannot be retrieved or set
    /// - Platform is not supported
    ///
    /// [module documentation]: mod@crate::core::terminal_raw_mode
    pub fn new() -> miette::Result<Self> {
        #[cfg(unix)]
        {
            Ok(Self {
                original: raw_mode_unix::switch_stdin_to_raw_mode()?,
            })
        }

        #[cfg(not(unix))]
        {
            Err(miette::miette!("Platform not supported"))
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        if let Err(report) = raw_mode_unix::restore_stdin(&self.original) {
            // % is Display, ? is Debug.
            tracing::error!(message = "could not leave raw mode", error = %report);
        }
    }
}
