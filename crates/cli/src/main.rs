// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_check;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use emptycheck::cli::Cli;
use emptycheck::error::ExitCode;

fn main() -> std::process::ExitCode {
    init_logging();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return parse_error_exit(&e),
    };

    match cmd_check::run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("emptycheck: {:#}", e);
            ExitCode::Failure.into()
        }
    }
}

/// Help and version requests succeed; every other argument error fails the run.
fn parse_error_exit(e: &clap::Error) -> std::process::ExitCode {
    let _ = e.print();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success.into(),
        _ => ExitCode::Failure.into(),
    }
}

/// Log to stderr, filtered by `EMPTYCHECK_LOG` (default: warn).
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("EMPTYCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed; logging is optional.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
