// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Empty file detection.
//!
//! Each input path is probed once, in order. A path is empty when it exists
//! and its size is exactly zero bytes. Paths whose metadata cannot be read,
//! including paths that do not exist, are skipped and never count as empty.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExitCode;

/// Message attached to every empty-file annotation.
pub const EMPTY_FILE_MESSAGE: &str = "This file is empty and must have content.";

/// Result of probing a single path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Exists and is zero bytes.
    Empty,
    /// Exists and has at least one byte.
    HasContent { bytes: u64 },
    /// Missing or unreadable metadata.
    Skipped,
}

impl FileStatus {
    pub fn is_empty(&self) -> bool {
        matches!(self, FileStatus::Empty)
    }

    /// Short label used in verbose output.
    pub fn label(&self) -> String {
        match self {
            FileStatus::Empty => "empty".to_string(),
            FileStatus::HasContent { bytes } => format!("{} bytes", bytes),
            FileStatus::Skipped => "skipped (missing or unreadable)".to_string(),
        }
    }
}

/// A path from the input list paired with its probe result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedFile {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Outcome of one evaluation pass over the input list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    files: Vec<CheckedFile>,
}

impl CheckOutcome {
    /// All probed paths, in input order.
    pub fn files(&self) -> &[CheckedFile] {
        &self.files
    }

    /// Paths found to be empty, in input order. Duplicated inputs appear once
    /// per occurrence.
    pub fn empty_files(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|f| f.status.is_empty())
            .map(|f| f.path.as_path())
    }

    /// Number of paths in the input list.
    pub fn checked_count(&self) -> usize {
        self.files.len()
    }

    /// Number of paths skipped because they could not be inspected.
    pub fn skipped_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Skipped)
            .count()
    }

    /// True when the input list was empty.
    pub fn is_nothing_to_check(&self) -> bool {
        self.files.is_empty()
    }

    /// True when no empty file was found.
    pub fn passed(&self) -> bool {
        !self.files.iter().any(|f| f.status.is_empty())
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.passed() {
            ExitCode::Success
        } else {
            ExitCode::Failure
        }
    }
}

/// Probe a single path.
///
/// Metadata follows symlinks, so a link to an empty file is empty.
pub fn probe(path: &Path) -> FileStatus {
    match fs::metadata(path) {
        Ok(meta) if meta.len() == 0 => FileStatus::Empty,
        Ok(meta) => FileStatus::HasContent { bytes: meta.len() },
        Err(e) => {
            tracing::debug!("skipping {}: {}", path.display(), e.kind());
            FileStatus::Skipped
        }
    }
}

/// Probe every path in order and collect the outcome.
pub fn check_paths<P: AsRef<Path>>(paths: &[P]) -> CheckOutcome {
    let files = paths
        .iter()
        .map(|p| {
            let path = p.as_ref();
            let status = probe(path);
            tracing::debug!(path = %path.display(), status = ?status, "probed");
            CheckedFile {
                path: path.to_path_buf(),
                status,
            }
        })
        .collect();

    CheckOutcome { files }
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
