// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// When to use color on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve a color mode for stdout.
pub fn resolve(mode: ColorMode) -> ColorChoice {
    resolve_color(mode, std::io::stdout().is_terminal())
}

/// Resolve a color mode given whether the destination is a terminal.
///
/// `Auto` on a non-terminal never colors. `Always` forces escape codes even
/// when piped.
pub fn resolve_color(mode: ColorMode, is_terminal: bool) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if is_terminal => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

/// Color specs for report output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
