//! Interactive rule selection
//!
//! After a report run, walks the user through each non-empty category,
//! lets them pick rules, previews the choice and merges it into the Ruff
//! configuration. Prompts go through the `RulePrompt` trait so the flow can
//! be driven by a script in tests.

use crate::config::{SelectUpdate, add_to_select_file};
use crate::engine::Classification;
use crate::error::AdoptError;
use crate::rules::Rule;
use crate::types::{Category, RuleCode};
use dialoguer::{Confirm, MultiSelect, Select};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{info, warn};

/// Number of codes per line in the preview
const PREVIEW_COLUMNS: usize = 5;

/// Source of answers for the interactive flow
pub trait RulePrompt {
    /// Yes/no question
    fn confirm(&self, prompt: &str, default: bool) -> dialoguer::Result<bool>;

    /// Pick one of `items`, returning its index
    fn select(&self, prompt: &str, items: &[String]) -> dialoguer::Result<usize>;

    /// Pick any number of `items`, returning their indices
    fn multi_select(&self, prompt: &str, items: &[String]) -> dialoguer::Result<Vec<usize>>;
}

/// Prompts on the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl RulePrompt for TerminalPrompt {
    fn confirm(&self, prompt: &str, default: bool) -> dialoguer::Result<bool> {
        Confirm::new().with_prompt(prompt).default(default).interact()
    }

    fn select(&self, prompt: &str, items: &[String]) -> dialoguer::Result<usize> {
        Select::new().with_prompt(prompt).items(items).default(0).interact()
    }

    fn multi_select(&self, prompt: &str, items: &[String]) -> dialoguer::Result<Vec<usize>> {
        MultiSelect::new().with_prompt(prompt).items(items).interact()
    }
}

/// What to do with one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CategoryAction {
    All,
    Specific,
    Skip,
}

impl CategoryAction {
    const CHOICES: [CategoryAction; 3] = [
        CategoryAction::All,
        CategoryAction::Specific,
        CategoryAction::Skip,
    ];

    fn label(self) -> &'static str {
        match self {
            CategoryAction::All => "Select all rules in this category",
            CategoryAction::Specific => "Choose specific rules",
            CategoryAction::Skip => "Skip this category",
        }
    }
}

/// Ask which rules to adopt, category by category
///
/// Returns the chosen codes sorted and without duplicates.
pub fn select_rules(
    classification: &Classification,
    prompt: &dyn RulePrompt,
) -> dialoguer::Result<Vec<RuleCode>> {
    let mut selected = BTreeSet::new();

    for category in Category::ALL {
        let rules = classification.rules(category);
        if rules.is_empty() {
            continue;
        }

        let question = format!(
            "{} rules: {} rules {}. Explore this category?",
            category.title(),
            rules.len(),
            category.description()
        );
        if !prompt.confirm(&question, true)? {
            continue;
        }

        let labels: Vec<String> = CategoryAction::CHOICES
            .iter()
            .map(|a| a.label().to_string())
            .collect();
        let choice = prompt.select(
            &format!("How would you like to proceed with {} rules?", category.title()),
            &labels,
        )?;

        match CategoryAction::CHOICES.get(choice) {
            Some(CategoryAction::All) => {
                selected.extend(rules.iter().map(|r| r.code.clone()));
                info!(category = %category, count = rules.len(), "Selected every rule");
            }
            Some(CategoryAction::Specific) => {
                let items: Vec<String> = rules.iter().map(|r| choice_label(r)).collect();
                let picked = prompt.multi_select(
                    &format!("Select {} rules (space to toggle, enter to confirm)", category.title()),
                    &items,
                )?;
                let before = selected.len();
                selected.extend(
                    picked
                        .into_iter()
                        .filter_map(|i| rules.get(i))
                        .map(|r| r.code.clone()),
                );
                info!(category = %category, count = selected.len() - before, "Selected rules");
            }
            Some(CategoryAction::Skip) | None => {}
        }
    }

    Ok(selected.into_iter().collect())
}

/// Select rules, confirm, and merge them into the configuration at `config_path`
///
/// Returns `None` when nothing was written because there was nothing to
/// choose from, nothing was chosen, or the user cancelled.
///
/// # Errors
///
/// Returns `AdoptError::Prompt` if the terminal interaction fails and
/// `AdoptError::Config` if the configuration cannot be updated.
pub fn run_interactive(
    classification: &Classification,
    config_path: &Path,
    prompt: &dyn RulePrompt,
) -> Result<Option<SelectUpdate>, AdoptError> {
    if classification.is_empty() {
        eprintln!("No rules to add! Your configuration is already comprehensive.");
        return Ok(None);
    }

    let codes = select_rules(classification, prompt)?;
    if codes.is_empty() {
        eprintln!("No rules selected. Exiting without changes.");
        return Ok(None);
    }

    eprintln!("\nPreview: {} rules will be added to your configuration\n", codes.len());
    for line in preview_lines(&codes) {
        eprintln!("  {}", line);
    }

    let file_name = config_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config_path.display().to_string());
    let question = format!("Add these {} rules to {}?", codes.len(), file_name);
    if !prompt.confirm(&question, true)? {
        eprintln!("Cancelled. No changes made.");
        return Ok(None);
    }

    let update = add_to_select_file(config_path, &codes)?;
    if update.added.is_empty() {
        warn!("All selected rules are already in the configuration");
    } else {
        eprintln!(
            "Added {} rules to `{}` in {}",
            update.added.len(),
            update.key,
            config_path.display()
        );
    }
    Ok(Some(update))
}

fn choice_label(rule: &Rule) -> String {
    format!("{:8} - {:50} ({})", rule.code.as_str(), rule.name, rule.linter)
}

fn preview_lines(codes: &[RuleCode]) -> Vec<String> {
    codes
        .chunks(PREVIEW_COLUMNS)
        .map(|chunk| {
            chunk
                .iter()
                .map(RuleCode::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect()
}
