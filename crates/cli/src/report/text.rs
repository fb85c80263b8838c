// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.
//!
//! Empty files become `::error file=<path>::<message>` lines, the workflow
//! command syntax GitHub Actions turns into file annotations. Annotations are
//! never colored.

use std::io::{self, Write};
use std::path::Path;

use termcolor::WriteColor;

use super::{ALL_HAVE_CONTENT, NOTHING_TO_CHECK, ReportFormatter};
use crate::checker::{CheckOutcome, EMPTY_FILE_MESSAGE};
use crate::cli::Cli;
use crate::color::scheme;
use crate::error::Result;

/// Text format report formatter.
pub struct TextFormatter;

/// Write the annotation line for an empty file.
///
/// On unix the path is written as its raw bytes so non-UTF-8 names are
/// reported exactly as given on the command line.
pub fn write_annotation<W: Write + ?Sized>(writer: &mut W, path: &Path) -> io::Result<()> {
    writer.write_all(b"::error file=")?;
    write_path(writer, path)?;
    writeln!(writer, "::{}", EMPTY_FILE_MESSAGE)
}

#[cfg(unix)]
fn write_path<W: Write + ?Sized>(writer: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    writer.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path<W: Write + ?Sized>(writer: &mut W, path: &Path) -> io::Result<()> {
    write!(writer, "{}", path.display())
}

impl ReportFormatter for TextFormatter {
    fn format_to(&self, writer: &mut dyn WriteColor, outcome: &CheckOutcome) -> Result<()> {
        if outcome.is_nothing_to_check() {
            writeln!(writer, "{}", NOTHING_TO_CHECK)?;
            writeln!(writer, "{}", Cli::usage())?;
            return Ok(());
        }

        for path in outcome.empty_files() {
            write_annotation(writer, path)?;
        }

        if outcome.passed() {
            writer.set_color(&scheme::pass())?;
            write!(writer, "{}", ALL_HAVE_CONTENT)?;
            writer.reset()?;
            writeln!(writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
