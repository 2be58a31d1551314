//! Reading the rule selection out of a project's Ruff configuration
//!
//! Ruff reads its settings from `pyproject.toml` (under `[tool.ruff]`),
//! `ruff.toml` or `.ruff.toml`. Rule selection lives under `[lint]`, or at the
//! top level of the Ruff table for older configurations; both are honored,
//! with `[lint]` taking precedence.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File names Ruff reads configuration from, in lookup order
pub const CONFIG_FILE_NAMES: [&str; 3] = ["pyproject.toml", "ruff.toml", ".ruff.toml"];

/// Ruff's default selection when `select` is not configured
pub const DEFAULT_SELECT: [&str; 4] = ["E4", "E7", "E9", "F"];

/// Raw rule selectors as written in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LintSelection {
    /// Selectors from `select` and `extend-select`
    pub select: Vec<String>,

    /// Selectors from `ignore` and `extend-ignore`
    pub ignore: Vec<String>,
}

impl LintSelection {
    /// Ruff's selection for a project that configures nothing
    pub fn ruff_default() -> Self {
        Self {
            select: DEFAULT_SELECT.iter().map(|s| s.to_string()).collect(),
            ignore: Vec::new(),
        }
    }

    /// Load the selection from a Ruff configuration file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read,
    /// `ConfigError::Parse` if it is not valid TOML, and
    /// `ConfigError::UnsupportedFile` for any other file name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let kind = ConfigKind::from_path(path)?;
        let content = fs::read_to_string(path)?;
        Self::parse(&content, kind)
    }

    /// Parse the selection from the contents of a configuration file
    pub fn parse(content: &str, kind: ConfigKind) -> Result<Self, ConfigError> {
        let table = match kind {
            ConfigKind::PyProject => {
                let pyproject: PyProject = toml::from_str(content)?;
                match pyproject.tool.and_then(|tool| tool.ruff) {
                    Some(ruff) => ruff,
                    None => return Ok(Self::ruff_default()),
                }
            }
            ConfigKind::RuffToml => toml::from_str(content)?,
        };

        Ok(table.into_selection())
    }

    /// Load the selection, treating a missing or unreadable file as "nothing enabled"
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            warn!("No Ruff configuration file found, treating every rule as not enabled");
            return Self::default();
        };

        match Self::from_path(path) {
            Ok(selection) => {
                info!(
                    config = %path.display(),
                    select = selection.select.len(),
                    ignore = selection.ignore.len(),
                    "Loaded rule selection"
                );
                selection
            }
            Err(e) => {
                warn!(
                    config = %path.display(),
                    error = %e,
                    "Could not read Ruff configuration, treating every rule as not enabled"
                );
                Self::default()
            }
        }
    }

    /// Check if nothing is selected or ignored
    pub fn is_empty(&self) -> bool {
        self.select.is_empty() && self.ignore.is_empty()
    }
}

/// Which layout a configuration file uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    /// `pyproject.toml`, settings under `[tool.ruff]`
    PyProject,
    /// `ruff.toml` or `.ruff.toml`, settings at the top level
    RuffToml,
}

impl ConfigKind {
    /// Determine the layout from the file name
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.file_name().and_then(|name| name.to_str()) {
            Some("pyproject.toml") => Ok(ConfigKind::PyProject),
            Some("ruff.toml") | Some(".ruff.toml") => Ok(ConfigKind::RuffToml),
            _ => Err(ConfigError::UnsupportedFile(path.to_path_buf())),
        }
    }
}

/// Search a directory for a Ruff configuration file
pub fn search_config_file(dir: &Path) -> Option<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let candidate = dir.join(name);
        if candidate.is_file() {
            info!(config = %candidate.display(), "Found Ruff configuration file");
            return Some(candidate);
        }
    }
    None
}

#[derive(Debug, Deserialize)]
struct PyProject {
    tool: Option<Tool>,
}

#[derive(Debug, Deserialize)]
struct Tool {
    ruff: Option<RuffTable>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct SelectorLists {
    select: Option<Vec<String>>,
    #[serde(default)]
    extend_select: Vec<String>,
    ignore: Option<Vec<String>>,
    #[serde(default)]
    extend_ignore: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RuffTable {
    #[serde(default)]
    lint: Option<SelectorLists>,
    #[serde(flatten)]
    legacy: SelectorLists,
}

impl RuffTable {
    fn into_selection(self) -> LintSelection {
        let lint = self.lint.unwrap_or_default();
        let legacy = self.legacy;

        let mut select = lint
            .select
            .or(legacy.select)
            .unwrap_or_else(|| DEFAULT_SELECT.iter().map(|s| s.to_string()).collect());
        select.extend(legacy.extend_select);
        select.extend(lint.extend_select);

        let mut ignore = lint.ignore.or(legacy.ignore).unwrap_or_default();
        ignore.extend(legacy.extend_ignore);
        ignore.extend(lint.extend_ignore);

        dedup_in_order(&mut select);
        dedup_in_order(&mut ignore);

        LintSelection { select, ignore }
    }
}

fn dedup_in_order(values: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    values.retain(|v| seen.insert(v.clone()));
}
