//! Partitioning the rule catalog into adoption-readiness tiers
//!
//! Every rule that is neither enabled nor filtered out as preview lands in
//! exactly one of three categories:
//! - Respected: no violations, can be enabled right away
//! - Autofixable: violated, but Ruff can fix the violations
//! - Applicable: violated and needs manual work, ordered lowest-effort first

use crate::config::EnabledRuleSet;
use crate::engine::violations::ViolationCounts;
use crate::rules::{Rule, RuleCatalog, find_complete_categories};
use crate::types::{Category, Fixability, RuleCode};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Flags that widen what the classifier considers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassifyOptions {
    /// Keep preview (unstable) rules
    pub include_preview: bool,

    /// Treat sometimes-fixable rules as auto-fixable
    pub include_sometimes_fixable: bool,
}

/// A violated rule together with its violation count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolatedRule {
    pub rule: Rule,
    pub violations: u64,
}

/// Result of one classification run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Not enabled and not violated, sorted by code
    pub respected: Vec<Rule>,

    /// Not enabled, violated and fixable, sorted by code
    pub autofixable: Vec<ViolatedRule>,

    /// Not enabled, violated and not fixable, sorted by violations, linter, code
    pub applicable: Vec<ViolatedRule>,

    /// Rules left out because their violation counts were unavailable
    pub omitted: Vec<RuleCode>,

    /// Category prefixes whose every candidate rule is respected
    pub respected_categories: BTreeMap<String, (String, usize)>,
}

impl Classification {
    /// Rules of one category, in report order
    pub fn rules(&self, category: Category) -> Vec<&Rule> {
        match category {
            Category::Respected => self.respected.iter().collect(),
            Category::Autofixable => self.autofixable.iter().map(|a| &a.rule).collect(),
            Category::Applicable => self.applicable.iter().map(|a| &a.rule).collect(),
        }
    }

    /// Number of rules in one category
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Respected => self.respected.len(),
            Category::Autofixable => self.autofixable.len(),
            Category::Applicable => self.applicable.len(),
        }
    }

    /// Check whether every category is empty
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&c| self.count(c) == 0)
    }
}

/// Assigns rules to categories
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    options: ClassifyOptions,
}

impl Classifier {
    pub fn new(options: ClassifyOptions) -> Self {
        Self { options }
    }

    /// Whether a rule survives the preview filter
    fn is_considered(&self, rule: &Rule) -> bool {
        self.options.include_preview || !rule.preview
    }

    /// Whether a violated rule counts as auto-fixable under the current options
    fn is_autofixable(&self, rule: &Rule) -> bool {
        match rule.fix {
            Fixability::Always => true,
            _ => self.options.include_sometimes_fixable && rule.is_fixable(),
        }
    }

    /// Category for a single rule, or None if it is enabled or filtered out
    pub fn categorize(
        &self,
        rule: &Rule,
        enabled: &EnabledRuleSet,
        violations: u64,
    ) -> Option<Category> {
        if !self.is_considered(rule) || enabled.contains(&rule.code) {
            return None;
        }
        Some(if violations == 0 {
            Category::Respected
        } else if self.is_autofixable(rule) {
            Category::Autofixable
        } else {
            Category::Applicable
        })
    }

    /// Partition the catalog relative to the enabled set and violation counts
    pub fn classify(
        &self,
        catalog: &RuleCatalog,
        enabled: &EnabledRuleSet,
        counts: &ViolationCounts,
    ) -> Classification {
        let mut result = Classification::default();
        let mut candidates: Vec<&Rule> = Vec::new();

        for rule in catalog.iter() {
            if !self.is_considered(rule) || enabled.contains(&rule.code) {
                continue;
            }
            candidates.push(rule);

            let Some(violations) = counts.get(&rule.code) else {
                warn!(code = %rule.code, "Violation count unavailable, omitting rule");
                result.omitted.push(rule.code.clone());
                continue;
            };

            match self.categorize(rule, enabled, violations) {
                Some(Category::Respected) => result.respected.push(rule.clone()),
                Some(Category::Autofixable) => result.autofixable.push(ViolatedRule {
                    rule: rule.clone(),
                    violations,
                }),
                Some(Category::Applicable) => result.applicable.push(ViolatedRule {
                    rule: rule.clone(),
                    violations,
                }),
                None => {}
            }
        }

        result.respected.sort_by(|a, b| a.code.cmp(&b.code));
        result.autofixable.sort_by(|a, b| a.rule.code.cmp(&b.rule.code));
        result.applicable.sort_by(|a, b| {
            a.violations
                .cmp(&b.violations)
                .then_with(|| a.rule.linter.cmp(&b.rule.linter))
                .then_with(|| a.rule.code.cmp(&b.rule.code))
        });

        result.respected_categories = find_complete_categories(&result.respected, candidates);

        debug!(
            respected = result.respected.len(),
            autofixable = result.autofixable.len(),
            applicable = result.applicable.len(),
            omitted = result.omitted.len(),
            "Classified rules"
        );

        result
    }
}
