// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use wildcard::Strategy;

// ---

/// Matches a text string against a wildcard pattern and profiles the matching algorithm.
///
/// The pattern supports '?' for any single character, '*' for any sequence of characters
/// and backslash escapes '\*', '\?' and '\\'. Text and pattern are prompted for
/// on standard input unless given with --text and --pattern.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Matching algorithm [default: from configuration, greedy unless overridden].
    #[arg(short, long, env = "WMATCH_SOLVER", overrides_with = "solver")]
    #[arg(value_enum)]
    pub solver: Option<Strategy>,

    /// Run every algorithm on the same input and check that they agree.
    #[arg(short, long, conflicts_with = "solver")]
    pub all: bool,

    /// Text string to match, prompted for if not given.
    #[arg(short, long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Wildcard pattern, prompted for if not given.
    #[arg(short, long, allow_hyphen_values = true)]
    pub pattern: Option<String>,

    /// Color output options.
    #[arg(long, default_value = "auto", env = "WMATCH_COLOR", overrides_with = "color")]
    #[arg(value_enum)]
    pub color: ColorOption,

    /// Configuration file to layer over the defaults.
    #[arg(long, env = "WMATCH_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not print warnings, overrides configuration.
    #[arg(long)]
    pub hide_warnings: bool,

    /// List available algorithms and exit.
    #[arg(long)]
    pub list_solvers: bool,

    /// Print shell auto-completion script and exit.
    #[arg(long, value_name = "SHELL")]
    pub shell_completions: Option<Shell>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOption {
    Auto,
    Always,
    Never,
}

#[cfg(test)]
mod tests;
