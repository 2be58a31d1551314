//! Resolving configured selectors into the set of already-adopted rules

use crate::config::ruff_toml::LintSelection;
use crate::rules::RuleCatalog;
use crate::types::RuleCode;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Rule codes the project has already made a decision about
///
/// Both selected and ignored rules count: an ignored rule was deliberately
/// turned off, so it is not a candidate for adoption either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnabledRuleSet {
    codes: HashSet<RuleCode>,
    unknown_selectors: Vec<String>,
}

impl EnabledRuleSet {
    /// Expand every selector of `selection` against the catalog
    pub fn resolve(selection: &LintSelection, catalog: &RuleCatalog) -> Self {
        let mut set = Self::default();

        for selector in selection.select.iter().chain(&selection.ignore) {
            let rules = catalog.resolve_selector(selector);
            if rules.is_empty() {
                warn!(%selector, "Configured selector matches no known rule, skipping");
                set.unknown_selectors.push(selector.clone());
                continue;
            }
            debug!(%selector, rules = rules.len(), "Resolved selector");
            set.codes.extend(rules.into_iter().map(|rule| rule.code.clone()));
        }

        set
    }

    /// Build a set directly from rule codes
    pub fn from_codes(codes: impl IntoIterator<Item = RuleCode>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
            unknown_selectors: Vec::new(),
        }
    }

    pub fn contains(&self, code: &RuleCode) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Selectors that matched no rule in the catalog
    pub fn unknown_selectors(&self) -> &[String] {
        &self.unknown_selectors
    }
}
