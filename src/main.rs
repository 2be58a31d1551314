//! adopt-ruff CLI entry point

use adopt_ruff::cli::logging::init_logging;
use adopt_ruff::cli::{Cli, ReportOptions, run_report};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(Some(cli.output_dir.as_path()));

    let options = ReportOptions::from(&cli);
    let exit_code = run_report(&options, cli.color);

    process::exit(exit_code);
}
