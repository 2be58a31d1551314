//! CLI argument parsing using clap
//!
//! Every option can also be supplied through an `ADOPT_RUFF_*` environment
//! variable, which is how CI workflows usually configure the tool.

use crate::engine::ClassifyOptions;
use clap::builder::FalseyValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl ColorChoice {
    /// Resolve to a termcolor choice for stderr
    pub fn for_stderr(self) -> termcolor::ColorChoice {
        use std::io::IsTerminal;
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if std::io::stderr().is_terminal() => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}

/// adopt-ruff CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "adopt-ruff")]
#[command(about = "Find the Ruff rules a repository is ready to adopt")]
#[command(version)]
pub struct Cli {
    /// Directory (or file) to analyze
    #[arg(env = "ADOPT_RUFF_TARGET", default_value = ".")]
    pub target: PathBuf,

    /// Ruff configuration file (searched for in the target directory if omitted)
    #[arg(long, env = "ADOPT_RUFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Repository name shown in the report title
    #[arg(long, env = "ADOPT_RUFF_REPO_NAME")]
    pub repo_name: Option<String>,

    /// Consider preview (unstable) rules
    #[arg(long, env = "ADOPT_RUFF_INCLUDE_PREVIEW", value_parser = FalseyValueParser::new())]
    pub include_preview: bool,

    /// Count rules whose fix is only sometimes available as auto-fixable
    #[arg(
        long,
        env = "ADOPT_RUFF_INCLUDE_SOMETIMES_FIXABLE",
        value_parser = FalseyValueParser::new()
    )]
    pub include_sometimes_fixable: bool,

    /// After the report, choose rules to add to the Ruff configuration
    #[arg(long, env = "ADOPT_RUFF_INTERACTIVE", value_parser = FalseyValueParser::new())]
    pub interactive: bool,

    /// Ruff executable name or path
    #[arg(long, env = "ADOPT_RUFF_RUFF", default_value = "ruff")]
    pub ruff: String,

    /// Directory for CSV exports and the debug log
    #[arg(long, env = "ADOPT_RUFF_OUTPUT_DIR", default_value = "artifacts")]
    pub output_dir: PathBuf,

    /// Path of the Markdown report
    #[arg(long, env = "ADOPT_RUFF_REPORT", default_value = "result.md")]
    pub report: PathBuf,

    /// Output coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

/// Resolved options for one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub target: PathBuf,
    pub config: Option<PathBuf>,
    pub repo_name: Option<String>,
    pub classify: ClassifyOptions,
    pub ruff: String,
    pub output_dir: PathBuf,
    pub report: PathBuf,
    pub interactive: bool,
}

impl From<&Cli> for ReportOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            target: cli.target.clone(),
            config: cli.config.clone(),
            repo_name: cli.repo_name.clone().filter(|name| !name.trim().is_empty()),
            classify: ClassifyOptions {
                include_preview: cli.include_preview,
                include_sometimes_fixable: cli.include_sometimes_fixable,
            },
            ruff: cli.ruff.clone(),
            output_dir: cli.output_dir.clone(),
            report: cli.report.clone(),
            interactive: cli.interactive,
        }
    }
}
