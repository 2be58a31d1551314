//! Report command implementation
//!
//! This module implements the whole adopt-ruff run, which:
//! - Asks the linter for its version and rule catalog
//! - Reads the project's Ruff configuration to find already-enabled rules
//! - Runs the linter with every rule enabled and counts violations per rule
//! - Classifies the remaining rules into Respected / Autofixable / Applicable
//! - Writes the Markdown report and per-category CSV exports
//! - Optionally lets the user merge chosen rules into the configuration
//! - Returns an appropriate exit code

use crate::cli::args::{ColorChoice, ReportOptions};
use crate::cli::common::{
    EXIT_ERROR, EXIT_LINTER_ERROR, EXIT_SUCCESS, config_search_dir, resolve_config_path,
};
use crate::cli::interactive::{TerminalPrompt, run_interactive};
use crate::config::{EnabledRuleSet, LintSelection};
use crate::engine::{Classification, Classifier, Linter, RuffCli, ViolationCounts};
use crate::error::AdoptError;
use crate::output::{CsvExporter, MarkdownReport, ReportMeta, Summary, WrittenFiles};
use crate::rules::RuleCatalog;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub linter_version: String,
    /// Configuration file the enabled rules were read from, if any
    pub config_path: Option<PathBuf>,
    pub classification: Classification,
    pub files: WrittenFiles,
}

/// Run the report command against the Ruff executable named in `options`
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Ruff could not be located or invoked
/// - 2: Any other fatal error (unreadable catalog, unwritable output)
///
/// Keeping 2 apart from 1 lets CI tell "Ruff is missing or broken" from
/// "Ruff worked but adopt-ruff could not finish".
///
/// Interactive mode needs a terminal on stdin; without one the run stops
/// with exit code 1 before Ruff is invoked.
pub fn run_report(options: &ReportOptions, color: ColorChoice) -> i32 {
    if options.interactive && !std::io::stdin().is_terminal() {
        eprintln!(
            "Error: Interactive mode requires a TTY (interactive terminal); \
             it cannot run in non-interactive environments such as CI pipelines"
        );
        return EXIT_LINTER_ERROR;
    }

    let result = RuffCli::locate(&options.ruff)
        .map_err(AdoptError::from)
        .and_then(|ruff| {
            info!(ruff = %ruff.program().display(), "Using Ruff");
            run_report_with(options, &ruff)
        });

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => return exit_code_for(&e),
    };

    let summary = Summary::new(&outcome.classification, &outcome.files);
    if let Err(e) = summary.print(color.for_stderr()) {
        warn!(error = %e, "Could not print summary");
    }

    if options.interactive {
        let config_path = outcome
            .config_path
            .clone()
            .unwrap_or_else(|| config_search_dir(&options.target).join("ruff.toml"));
        if let Err(e) = run_interactive(&outcome.classification, &config_path, &TerminalPrompt) {
            return exit_code_for(&e);
        }
    }

    EXIT_SUCCESS
}

fn exit_code_for(e: &AdoptError) -> i32 {
    eprintln!("Error: {}", e);
    match e {
        AdoptError::Linter(_) => EXIT_LINTER_ERROR,
        _ => EXIT_ERROR,
    }
}

/// Run the full pipeline with any `Linter` implementation
///
/// # Errors
///
/// Returns `AdoptError::Linter` if the version or rule catalog cannot be
/// obtained, `AdoptError::Catalog` if the catalog is unreadable, and
/// `AdoptError::Io`/`AdoptError::Csv` if outputs cannot be written. A failed
/// violation run is not an error: the affected rules are omitted instead.
pub fn run_report_with(
    options: &ReportOptions,
    linter: &dyn Linter,
) -> Result<ReportOutcome, AdoptError> {
    info!(
        target = %options.target.display(),
        include_preview = options.classify.include_preview,
        include_sometimes_fixable = options.classify.include_sometimes_fixable,
        repo_name = options.repo_name.as_deref().unwrap_or(""),
        "Starting adopt-ruff"
    );

    // 1. Linter version and rule catalog
    let linter_version = linter.version()?;
    let catalog = RuleCatalog::from_json(&linter.rule_catalog()?)?;
    if catalog.is_empty() {
        warn!("Ruff reported no rules, the report will be empty");
    }

    // 2. Rules the project already enabled or ignored
    let config_path = resolve_config_path(options.config.as_deref(), &options.target);
    let selection = LintSelection::load_or_empty(config_path.as_deref());
    let enabled = EnabledRuleSet::resolve(&selection, &catalog);

    // 3. Violation counts with every rule enabled
    let counts = count_violations(options, linter);

    // 4. Classify
    let classification = Classifier::new(options.classify).classify(&catalog, &enabled, &counts);

    // 5. Write report and exports
    let meta = ReportMeta {
        repo_name: options.repo_name.clone(),
        linter_version: linter_version.clone(),
        unknown_selectors: enabled.unknown_selectors().to_vec(),
        counts_unavailable: counts.is_unavailable(),
    };
    MarkdownReport::new().write(&classification, &meta, &options.report)?;
    let exports = CsvExporter::new(&options.output_dir).export(&classification)?;

    info!(report = %options.report.display(), "Wrote report");

    Ok(ReportOutcome {
        linter_version,
        config_path,
        classification,
        files: WrittenFiles {
            report: Some(options.report.clone()),
            exports,
        },
    })
}

fn count_violations(options: &ReportOptions, linter: &dyn Linter) -> ViolationCounts {
    let output = match linter.check(&options.target, options.classify.include_preview) {
        Ok(output) => output,
        Err(e) => {
            warn!(error = %e, "Ruff check failed, violation counts are unavailable");
            return ViolationCounts::unavailable();
        }
    };

    match ViolationCounts::from_json(&output) {
        Ok(counts) => counts,
        Err(e) => {
            warn!(error = %e, "Could not read Ruff's violation report, counts are unavailable");
            ViolationCounts::unavailable()
        }
    }
}
