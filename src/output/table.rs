#![forbid(unsafe_code)]

//! Tabular rows shared by the Markdown report and the CSV exports

use crate::engine::Classification;
use crate::rules::Rule;
use crate::types::Category;
use serde::Serialize;

/// One row of a category table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Fixable")]
    pub fixable: &'static str,
    #[serde(rename = "Preview")]
    pub preview: bool,
    #[serde(rename = "Linter")]
    pub linter: String,
    #[serde(rename = "Violations", skip_serializing_if = "Option::is_none")]
    pub violations: Option<u64>,
}

impl TableRow {
    fn new(rule: &Rule, violations: Option<u64>) -> Self {
        Self {
            code: rule.code.as_str().to_string(),
            name: rule.name.clone(),
            fixable: rule.fix.one_word(),
            preview: rule.preview,
            linter: rule.linter.clone(),
            violations,
        }
    }

    /// Column headers for a category's table
    pub fn headers(category: Category) -> Vec<&'static str> {
        let mut headers = vec!["Code", "Name", "Fixable", "Preview", "Linter"];
        if category == Category::Applicable {
            headers.push("Violations");
        }
        headers
    }

    /// Cell values in header order
    pub fn cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.code.clone(),
            self.name.clone(),
            self.fixable.to_string(),
            self.preview.to_string(),
            self.linter.clone(),
        ];
        if let Some(violations) = self.violations {
            cells.push(violations.to_string());
        }
        cells
    }
}

/// Rows of one category in report order
///
/// Only the Applicable table carries violation counts.
pub fn category_rows(classification: &Classification, category: Category) -> Vec<TableRow> {
    match category {
        Category::Respected => classification
            .respected
            .iter()
            .map(|rule| TableRow::new(rule, None))
            .collect(),
        Category::Autofixable => classification
            .autofixable
            .iter()
            .map(|a| TableRow::new(&a.rule, None))
            .collect(),
        Category::Applicable => classification
            .applicable
            .iter()
            .map(|a| TableRow::new(&a.rule, Some(a.violations)))
            .collect(),
    }
}
