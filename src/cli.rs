//! CLI argument parsing, the report command and interactive rule selection

pub mod args;
pub mod common;
pub mod interactive;
pub mod logging;
pub mod report;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, ReportOptions};
pub use interactive::{RulePrompt, TerminalPrompt, run_interactive, select_rules};
pub use report::{ReportOutcome, run_report, run_report_with};
