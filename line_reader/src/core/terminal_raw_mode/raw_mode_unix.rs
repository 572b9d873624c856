// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS implementation of raw mode using rustix's safe termios API.

use miette::miette;
use rustix::termios::{self, OptionalActions, Termios};
use std::io;

/// Applies `cfmakeraw` equivalent settings to stdin via [`Termios::make_raw()`]: no
/// canonical mode, no signals, no echo, no output post processing, `VMIN=1`, `VTIME=0`.
/// Returns the settings that were in effect before, so they can be restored.
///
/// Only stdin is switched. The editor reads from stdin, so falling back to `/dev/tty`
/// when stdin is a pipe would put a terminal in raw mode that nobody reads from.
pub(super) fn switch_stdin_to_raw_mode() -> miette::Result<Termios> {
    let stdin = io::stdin();
    if !termios::isatty(&stdin) {
        return Err(miette!("stdin is not a terminal, can't switch it to raw mode"));
    }

    let original = termios::tcgetattr(&stdin)
        .map_err(|e| miette!("failed to retrieve terminal attributes: {e}"))?;

    // rustix's Termios doesn't implement Copy.
    let mut raw = original.clone();
    raw.make_raw();

    termios::tcsetattr(&stdin, OptionalActions::Now, &raw)
        .map_err(|e| miette!("failed to set terminal attributes: {e}"))?;

    tracing::debug!(message = "stdin switched to raw mode");
    Ok(original)
}

pub(super) fn restore_stdin(original: &Termios) -> miette::Result<()> {
    termios::tcsetattr(io::stdin(), OptionalActions::Now, original)
        .map_err(|e| miette!("failed to restore terminal attributes: {e}"))?;

    tracing::debug!(message = "stdin restored to cooked mode");
    Ok(())
}
