// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! emptycheck library.
//!
//! Checks a list of paths for zero-byte files and reports the result in a
//! form CI systems can annotate.

pub mod checker;
pub mod cli;
pub mod color;
pub mod error;
pub mod report;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;
