// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Library functions that have a precise failure mode return their own error type (eg:
///   [`crate::ReadlineError`]), and applications collect them all into this.
///
/// # Example
///
/// ```
/// use miette::IntoDiagnostic;
/// use r3bl_line_reader::CommonResult;
///
/// fn parse_capacity(it: &str) -> CommonResult<usize> {
///     let capacity = it.parse::<usize>().into_diagnostic()?;
///     Ok(capacity)
/// }
///
/// assert_eq!(parse_capacity("64").unwrap(), 64);
/// assert!(parse_capacity("sixty four").is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;
