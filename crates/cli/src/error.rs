// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::io;

/// Errors raised while reporting a check outcome.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Writing the report to its destination failed.
    #[error("failed to write report: {0}")]
    Write(#[from] io::Error),

    /// Serializing the JSON report failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes returned by the `emptycheck` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Nothing to check, or every checked file has content.
    Success = 0,
    /// At least one listed file is empty, or the report could not be written.
    Failure = 1,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
