// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io;
use std::process::ExitCode;

use clap::Parser;

/// Prints a greeting to standard output.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
#[command(version, about, long_about = None)]
pub struct App {}

fn main() -> ExitCode {
    let _ = App::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    hello::run(&mut out).into()
}
