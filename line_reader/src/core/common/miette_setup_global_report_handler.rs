// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Global report handler for [miette](https://docs.rs/miette/latest/miette/index.html).
//!
//! The hook is lazy: it runs when a report is rendered, not when it is installed. So the
//! terminal width is measured just before the output is generated, and never if no
//! error is ever shown.

use miette::MietteHandlerOpts;

/// Terminal width used when it can't be detected (eg: output is piped).
pub const MIETTE_FALLBACK_TERMINAL_WIDTH: u16 = 80;

/// Install a report handler that wraps to the terminal width and prints `issues_url` as
/// the footer. Installing a second time is a no-op, the first handler wins.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    let result = miette::set_hook(Box::new(move |_report| {
        Box::new(
            MietteHandlerOpts::new()
                .width(detect_report_width())
                .wrap_lines(true)
                .break_words(true)
                .context_lines(2)
                .tab_width(4)
                .with_cause_chain()
                .footer(format!("Please report this at {issues_url}"))
                .build(),
        )
    }));

    if result.is_err() {
        tracing::debug!(message = "miette report handler already installed");
    }
}

/// Width of the controlling terminal in columns, or
/// [`MIETTE_FALLBACK_TERMINAL_WIDTH`] if there isn't one.
#[must_use]
pub fn detect_report_width() -> usize {
    let columns = crossterm::terminal::size()
        .ok()
        .map(|(columns, _rows)| columns)
        .filter(|columns| *columns > 0)
        .unwrap_or(MIETTE_FALLBACK_TERMINAL_WIDTH);
    usize::from(columns)
}
