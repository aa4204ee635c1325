//! Terminal output helpers

use owo_colors::OwoColorize;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a detail line under a status message
    pub fn detail(label: &str, value: &str) {
        eprintln!("  {} {}", format!("{}:", label).dimmed(), value);
    }
}
