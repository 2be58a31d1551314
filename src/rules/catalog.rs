#![forbid(unsafe_code)]

//! Rule catalog for looking up and grouping Ruff rules
//!
//! The RuleCatalog is responsible for:
//! - Parsing the linter's machine-readable rule listing
//! - Providing access to rules by code
//! - Expanding configuration selectors (`ALL`, `E`, `E5`, `PL`, `E501`) to rules
//! - Detecting rule categories that are entirely contained in a subset

use crate::error::CatalogError;
use crate::rules::Rule;
use crate::types::{RuleCode, category_prefix};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, warn};

/// Selector that enables every rule
pub const SELECT_ALL: &str = "ALL";

/// All rules known to the linter, ordered by code
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
    index: HashMap<RuleCode, usize>,
}

impl RuleCatalog {
    /// Build a catalog from already-parsed rules
    ///
    /// Duplicate codes keep the first occurrence.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut unique: Vec<Rule> = Vec::new();
        let mut seen = HashSet::new();
        for rule in rules {
            if !seen.insert(rule.code.clone()) {
                warn!(code = %rule.code, "Duplicate rule in catalog, keeping first occurrence");
                continue;
            }
            unique.push(rule);
        }

        unique.sort_by(|a, b| a.code.cmp(&b.code));

        let index = unique
            .iter()
            .enumerate()
            .map(|(i, rule)| (rule.code.clone(), i))
            .collect();

        Self {
            rules: unique,
            index,
        }
    }

    /// Parse the output of `ruff rule --all --output-format=json`
    ///
    /// Entries that fail to parse are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the input is not JSON or not a JSON array.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let entries = match value {
            serde_json::Value::Array(entries) => entries,
            other => return Err(CatalogError::NotAnArray(json_kind(&other))),
        };

        let mut rules = Vec::with_capacity(entries.len());
        for entry in entries {
            let code = entry
                .get("code")
                .and_then(|c| c.as_str())
                .unwrap_or("<unknown>")
                .to_string();
            match serde_json::from_value::<Rule>(entry) {
                Ok(rule) => rules.push(rule),
                Err(e) => warn!(%code, error = %e, "Skipping malformed rule catalog entry"),
            }
        }

        let catalog = Self::new(rules);
        debug!(rules = catalog.len(), "Loaded rule catalog");
        Ok(catalog)
    }

    /// Look up a rule by code
    pub fn get(&self, code: &RuleCode) -> Option<&Rule> {
        self.index.get(code).map(|&i| &self.rules[i])
    }

    /// Iterate over all rules in code order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of rules in the catalog
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check whether any rule has exactly this category prefix
    pub fn has_category(&self, prefix: &str) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.code.category_prefix() == prefix)
    }

    /// Expand a configuration selector into the rules it enables
    ///
    /// - `ALL` selects every rule.
    /// - A selector matches a code that starts with it when the rest of the code
    ///   is empty or starts with a digit (`E` matches `E501` but not `ERA001`).
    /// - A selector that is not itself a category prefix (`PL`) matches every
    ///   code starting with it (`PLC`, `PLE`, `PLR`, `PLW`).
    pub fn resolve_selector(&self, selector: &str) -> Vec<&Rule> {
        let selector = selector.trim();
        if selector == SELECT_ALL {
            return self.rules.iter().collect();
        }
        if selector.is_empty() {
            return Vec::new();
        }

        let is_category = self.has_category(selector);

        self.rules
            .iter()
            .filter(|rule| {
                let Some(rest) = rule.code.as_str().strip_prefix(selector) else {
                    return false;
                };
                rest.is_empty() || rest.starts_with(|c: char| c.is_ascii_digit()) || !is_category
            })
            .collect()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Find categories whose rules are all contained in `subset`
///
/// Returns a map from category prefix to (linter names, number of rules) for
/// every prefix present in `subset` where each rule of `universe` carrying that
/// prefix is also in `subset`. A prefix shared by several linters (`C` covers
/// flake8-comprehensions and mccabe) lists each of them, comma-separated.
pub fn find_complete_categories<'a>(
    subset: impl IntoIterator<Item = &'a Rule>,
    universe: impl IntoIterator<Item = &'a Rule>,
) -> BTreeMap<String, (String, usize)> {
    let mut in_subset: HashMap<&str, Vec<&RuleCode>> = HashMap::new();
    let mut linters: HashMap<&str, Vec<&str>> = HashMap::new();
    for rule in subset {
        let prefix = category_prefix(rule.code.as_str());
        in_subset.entry(prefix).or_default().push(&rule.code);
        let names = linters.entry(prefix).or_default();
        if !names.contains(&rule.linter.as_str()) {
            names.push(rule.linter.as_str());
        }
    }

    let mut totals: HashMap<&str, Vec<&RuleCode>> = HashMap::new();
    for rule in universe {
        let prefix = category_prefix(rule.code.as_str());
        if in_subset.contains_key(prefix) {
            totals.entry(prefix).or_default().push(&rule.code);
        }
    }

    let mut complete = BTreeMap::new();
    for (prefix, codes) in &in_subset {
        let total = totals.get(prefix).map(Vec::as_slice).unwrap_or_default();
        if total.iter().all(|code| codes.contains(code)) {
            let linter = linters.get(prefix).map(|names| names.join(", ")).unwrap_or_default();
            complete.insert((*prefix).to_string(), (linter, codes.len()));
        }
    }

    complete
}
