//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::color::ColorMode;

/// Fail a CI job when any of the listed files is empty
#[derive(Parser)]
#[command(name = "emptycheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Files to check
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Print per-file diagnostics to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Effective color mode after applying `--no-color`.
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color {
            ColorMode::Never
        } else {
            self.color
        }
    }

    /// One-line usage string, e.g. `Usage: emptycheck [OPTIONS] [PATH]...`.
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
