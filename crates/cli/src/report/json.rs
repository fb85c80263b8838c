// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::Write;

use serde::Serialize;
use termcolor::WriteColor;

use super::ReportFormatter;
use crate::checker::CheckOutcome;
use crate::error::Result;

/// JSON format report formatter.
pub struct JsonFormatter;

/// Serialized form of a check outcome.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub passed: bool,
    pub checked: usize,
    pub skipped: usize,
    pub empty: Vec<String>,
}

impl JsonReport {
    pub fn from_outcome(outcome: &CheckOutcome) -> Self {
        Self {
            passed: outcome.passed(),
            checked: outcome.checked_count(),
            skipped: outcome.skipped_count(),
            empty: outcome
                .empty_files()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, outcome: &CheckOutcome) -> Result<()> {
        let report = JsonReport::from_outcome(outcome);
        serde_json::to_writer(&mut *writer, &report)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
