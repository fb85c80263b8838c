// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes diagnostic output to stderr when `--verbose` is given, so stdout
//! stays reserved for the report and CI annotations.

use std::io::{self, Write};

use crate::checker::CheckOutcome;

/// Verbose output logger. Writes to stderr when enabled.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr (indented as content under a section).
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    /// Print every probed path with its status.
    pub fn files(&self, outcome: &CheckOutcome) {
        if !self.enabled {
            return;
        }
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        let _ = write_files(&mut handle, outcome);
    }
}

/// Write the "Files" section for an outcome.
pub fn write_files(writer: &mut dyn Write, outcome: &CheckOutcome) -> io::Result<()> {
    writeln!(writer, "\nFiles:")?;
    for file in outcome.files() {
        writeln!(writer, "  {}: {}", file.path.display(), file.status.label())?;
    }
    writeln!(
        writer,
        "  ({} checked, {} skipped)",
        outcome.checked_count(),
        outcome.skipped_count()
    )
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
