// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.
//!
//! Probes every listed path, writes the report to stdout, and maps the
//! outcome to an exit code.

use std::io::Write;

use anyhow::Context;
use termcolor::StandardStream;

use emptycheck::checker;
use emptycheck::cli::{Cli, OutputFormat};
use emptycheck::color;
use emptycheck::error::ExitCode;
use emptycheck::report;
use emptycheck::verbose::VerboseLogger;

/// Run the check over `cli.paths`.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let verbose = VerboseLogger::new(cli.verbose);
    verbose.section("Settings");
    verbose.log(&format!("output: {:?}", cli.output));
    verbose.log(&format!("color: {:?}", cli.color_mode()));

    if cli.paths.is_empty() && cli.output == OutputFormat::Json {
        // Usage goes to stderr so stdout stays valid JSON.
        eprintln!("{}", Cli::usage());
    }

    let outcome = checker::check_paths(&cli.paths);
    verbose.files(&outcome);

    let stdout = StandardStream::stdout(color::resolve(cli.color_mode()));
    let mut handle = stdout.lock();
    report::format_report_to(&mut handle, cli.output, &outcome).context("writing report")?;
    handle.flush().context("flushing stdout")?;

    tracing::info!(
        checked = outcome.checked_count(),
        skipped = outcome.skipped_count(),
        empty = outcome.empty_files().count(),
        "check complete"
    );

    Ok(outcome.exit_code())
}
