//! Application configuration from CLI flags and environment.

use clap::Parser;

/// fibbound — Fibonacci bound analyzer.
#[derive(Parser, Debug)]
#[command(name = "fibbound", version, about)]
pub struct AppConfig {
    /// Inclusive upper bound for sequence membership.
    #[arg(short, long, default_value = "4000000", env = "FIBBOUND_BOUND")]
    pub bound: u64,

    /// Filter to apply: all, even, or odd.
    #[arg(short, long, default_value = "even")]
    pub filter: String,

    /// Run all three filters and verify the even/odd partition.
    #[arg(long)]
    pub all_filters: bool,

    /// Report the Dedekind cut at the bound instead of the plain analysis.
    #[arg(long)]
    pub cut: bool,

    /// Sum the multiples of 3 or 5 below N (exclusive) and exit.
    #[arg(long, value_name = "N")]
    pub multiples: Option<u64>,

    /// Verbose output (print full term sequences).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show the term sequence in reports.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the headline number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the analysis record to a file as JSON.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
