// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::IntoDiagnostic as _;
use tracing_appender::rolling::RollingFileAppender;

/// Create an appender that writes to exactly `path_str` (it never rolls over). Missing
/// parent folders are created, so `--log-file logs/lr.log` works on a fresh checkout.
///
/// Don't wrap this in [`tracing_appender::non_blocking()`]. The worker thread that it
/// spawns is not flushed when the program exits, and the tail of the log is lost.
///
/// # Errors
///
/// Returns an error if:
/// - The path doesn't end in a file name, eg: `/` or `logs/..`.
/// - The parent folder can't be created.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let Some(file_name) = path.file_name() else {
        miette::bail!("Log file path {} does not end in a file name.", path.display());
    };

    let folder = path.parent().unwrap_or_else(|| Path::new(""));
    if !folder.as_os_str().is_empty() {
        std::fs::create_dir_all(folder).into_diagnostic()?;
    }

    Ok(tracing_appender::rolling::never(folder, file_name))
}
