// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_cmdr::{CLIArg, run_app};
use r3bl_line_reader::{CommonResult, setup_default_miette_global_report_handler, throws};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

#[allow(clippy::needless_return)]
fn main() -> CommonResult<()> {
    throws!({
        setup_default_miette_global_report_handler(ISSUES_URL);

        let cli_arg = CLIArg::parse();
        run_app(&cli_arg)?;
    })
}
