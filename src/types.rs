#![forbid(unsafe_code)]

//! Core domain types for adopt-ruff
//!
//! This module defines the fundamental types shared by the catalog loader,
//! the classifier and the reporters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated Ruff rule code (e.g. `E501`, `RUF001`)
///
/// Rule codes must be non-empty and contain only ASCII alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleCode(String);

impl RuleCode {
    /// Creates a new RuleCode, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(RuleCode(code))
    }

    /// Returns the rule code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the leading alphabetic run of the code (`PLW0127` -> `PLW`)
    pub fn category_prefix(&self) -> &str {
        category_prefix(&self.0)
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RuleCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RuleCode::new(value.clone()).ok_or_else(|| format!("Invalid rule code '{}'", value))
    }
}

impl From<RuleCode> for String {
    fn from(code: RuleCode) -> Self {
        code.0
    }
}

/// Extract the category prefix of a rule code or selector
///
/// The prefix is the leading run of ASCII letters: `RUF001` -> `RUF`,
/// `B010` -> `B`, `ASYNC100` -> `ASYNC`. A bare prefix maps to itself.
pub fn category_prefix(code: &str) -> &str {
    let end = code
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(code.len());
    &code[..end]
}

/// Whether Ruff can fix violations of a rule automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Fixability {
    Never,
    Sometimes,
    Always,
}

impl Fixability {
    /// Parse the sentence Ruff prints in its rule catalog, or a short form
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fix is always available." | "always" => Some(Fixability::Always),
            "fix is sometimes available." | "sometimes" => Some(Fixability::Sometimes),
            "fix is not available." | "never" | "none" | "no" => Some(Fixability::Never),
            _ => None,
        }
    }

    /// One-word rendering used in report tables
    pub fn one_word(&self) -> &'static str {
        match self {
            Fixability::Always => "Always",
            Fixability::Sometimes => "Sometimes",
            Fixability::Never => "No",
        }
    }

    /// True if Ruff offers a fix at least some of the time
    pub fn is_fixable(&self) -> bool {
        matches!(self, Fixability::Always | Fixability::Sometimes)
    }

    fn catalog_sentence(&self) -> &'static str {
        match self {
            Fixability::Always => "Fix is always available.",
            Fixability::Sometimes => "Fix is sometimes available.",
            Fixability::Never => "Fix is not available.",
        }
    }
}

impl fmt::Display for Fixability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.one_word())
    }
}

impl TryFrom<String> for Fixability {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Fixability::parse(&value).ok_or_else(|| format!("Unknown fix availability '{}'", value))
    }
}

impl From<Fixability> for String {
    fn from(fix: Fixability) -> Self {
        fix.catalog_sentence().to_string()
    }
}

/// Adoption-readiness tier a rule is placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Not enabled, no violations in the codebase
    Respected,
    /// Not enabled, violated, but Ruff can fix the violations
    Autofixable,
    /// Not enabled, violated, needs manual fixes
    Applicable,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Respected,
        Category::Autofixable,
        Category::Applicable,
    ];

    /// Section title used in the report
    pub fn title(&self) -> &'static str {
        match self {
            Category::Respected => "Respected",
            Category::Autofixable => "Autofixable",
            Category::Applicable => "Applicable",
        }
    }

    /// Sentence following the rule count in the report
    pub fn description(&self) -> &'static str {
        match self {
            Category::Respected => {
                "are already respected in the repo - they can be added right away 🚀"
            }
            Category::Autofixable => "are violated in the repo, but can be auto-fixed 🪄",
            Category::Applicable => "are not yet configured in the repository 🛠️",
        }
    }

    /// File stem for the per-category export
    pub fn file_stem(&self) -> &'static str {
        match self {
            Category::Respected => "respected",
            Category::Autofixable => "autofixable",
            Category::Applicable => "applicable",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_code_validation() {
        assert!(RuleCode::new("E501").is_some());
        assert!(RuleCode::new("RUF001").is_some());
        assert!(RuleCode::new("B").is_some());
        assert!(RuleCode::new("").is_none());
        assert!(RuleCode::new("E 501").is_none());
        assert!(RuleCode::new("E-501").is_none());
    }

    #[test]
    fn test_rule_code_ordering() {
        let mut codes = vec![
            RuleCode::new("RUF001").unwrap(),
            RuleCode::new("B010").unwrap(),
            RuleCode::new("E501").unwrap(),
        ];
        codes.sort();
        let codes: Vec<&str> = codes.iter().map(RuleCode::as_str).collect();
        assert_eq!(codes, vec!["B010", "E501", "RUF001"]);
    }

    #[test]
    fn test_simple_prefix() {
        assert_eq!(category_prefix("B010"), "B");
        assert_eq!(category_prefix("C401"), "C");
        assert_eq!(category_prefix("E501"), "E");
    }

    #[test]
    fn test_multi_letter_prefix() {
        assert_eq!(category_prefix("RUF001"), "RUF");
        assert_eq!(category_prefix("ASYNC100"), "ASYNC");
        assert_eq!(category_prefix("PLW0127"), "PLW");
    }

    #[test]
    fn test_prefix_only() {
        assert_eq!(category_prefix("RUF"), "RUF");
        assert_eq!(category_prefix("B"), "B");
        assert_eq!(RuleCode::new("PLW0127").unwrap().category_prefix(), "PLW");
    }

    #[test]
    fn test_fixability_parse_catalog_sentences() {
        assert_eq!(
            Fixability::parse("Fix is always available."),
            Some(Fixability::Always)
        );
        assert_eq!(
            Fixability::parse("Fix is sometimes available."),
            Some(Fixability::Sometimes)
        );
        assert_eq!(
            Fixability::parse("Fix is not available."),
            Some(Fixability::Never)
        );
        assert_eq!(Fixability::parse("ALWAYS"), Some(Fixability::Always));
        assert_eq!(Fixability::parse("maybe"), None);
    }

    #[test]
    fn test_fixability_deserialize() {
        let fix: Fixability = serde_json::from_str("\"Fix is sometimes available.\"").unwrap();
        assert_eq!(fix, Fixability::Sometimes);

        let err = serde_json::from_str::<Fixability>("\"Fix is occasionally available.\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_fixability_one_word() {
        assert_eq!(Fixability::Always.one_word(), "Always");
        assert_eq!(Fixability::Sometimes.one_word(), "Sometimes");
        assert_eq!(Fixability::Never.one_word(), "No");
        assert!(Fixability::Sometimes.is_fixable());
        assert!(!Fixability::Never.is_fixable());
    }

    #[test]
    fn test_category_file_stems() {
        let stems: Vec<&str> = Category::ALL.iter().map(Category::file_stem).collect();
        assert_eq!(stems, vec!["respected", "autofixable", "applicable"]);
    }
}
