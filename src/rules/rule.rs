#![forbid(unsafe_code)]

//! A single Ruff rule as described by `ruff rule --all --output-format=json`

use crate::types::{Fixability, RuleCode};
use serde::{Deserialize, Serialize};

/// Metadata for one lint rule
///
/// Rules are immutable and sourced once per run from the linter's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Rule code, e.g. `E501`
    pub code: RuleCode,

    /// Kebab-case rule name, e.g. `line-too-long`
    pub name: String,

    /// Originating linter family, e.g. `pycodestyle`
    pub linter: String,

    /// Whether violations can be fixed automatically
    pub fix: Fixability,

    /// Experimental rule not yet considered stable
    #[serde(default)]
    pub preview: bool,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub explanation: String,

    #[serde(default)]
    pub message_formats: Vec<String>,
}

impl Rule {
    /// Documentation page for this rule
    pub fn docs_url(&self) -> String {
        format!("https://docs.astral.sh/ruff/rules/{}", self.name)
    }

    /// Whether Ruff can fix violations of this rule at least some of the time
    pub fn is_fixable(&self) -> bool {
        self.fix.is_fixable()
    }
}
