// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check outcome reporting.
//!
//! Formats a [`CheckOutcome`] as CI annotations (text) or as a JSON summary.

mod json;
mod text;

use termcolor::WriteColor;

use crate::checker::CheckOutcome;
use crate::cli::OutputFormat;
use crate::error::Result;

pub use json::{JsonFormatter, JsonReport};
pub use text::{TextFormatter, write_annotation};

/// Status line printed when the input list is empty.
pub const NOTHING_TO_CHECK: &str = "No files to check.";

/// Status line printed when every checked file has content.
pub const ALL_HAVE_CONTENT: &str = "All checked files have content.";

/// Trait for writing a check outcome in a given output format.
pub trait ReportFormatter {
    /// Write the report for `outcome`.
    fn format_to(&self, writer: &mut dyn WriteColor, outcome: &CheckOutcome) -> Result<()>;
}

/// Write a report in the requested format.
pub fn format_report_to(
    writer: &mut dyn WriteColor,
    format: OutputFormat,
    outcome: &CheckOutcome,
) -> Result<()> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    formatter.format_to(writer, outcome)
}
