#![forbid(unsafe_code)]

//! Markdown report formatter
//!
//! Renders one section per non-empty category. Each section holds a
//! GitHub-flavored table wrapped in a collapsible `<details>` block, with rule
//! names linked to their documentation pages.

use crate::engine::Classification;
use crate::output::suggestion::generate_pyproject_suggestion;
use crate::output::table::{TableRow, category_rows};
use crate::types::Category;
use std::fs;
use std::io;
use std::path::Path;

const DOCS_BASE_URL: &str = "https://docs.astral.sh/ruff/rules/";

/// Labels printed in the report header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportMeta {
    /// Repository label, omitted from the title when empty
    pub repo_name: Option<String>,

    /// Version of the linter that produced the data
    pub linter_version: String,

    /// Configured selectors that matched no rule in the catalog
    pub unknown_selectors: Vec<String>,

    /// The violation report could not be obtained at all
    pub counts_unavailable: bool,
}

/// Markdown formatter for a classification
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReport;

impl MarkdownReport {
    pub fn new() -> Self {
        Self
    }

    /// Render the full report
    pub fn render(&self, classification: &Classification, meta: &ReportMeta) -> String {
        let mut output = String::new();

        let repo = match meta.repo_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => format!("for {} ", name),
            _ => String::new(),
        };
        output.push_str(&format!(
            "# adopt-ruff report {}(ruff {})\n\n",
            repo, meta.linter_version
        ));

        if meta.counts_unavailable {
            output.push_str(
                "> **Note:** Ruff's violation report could not be read, so no rule could be classified.\n\n",
            );
        }
        if !meta.unknown_selectors.is_empty() {
            let selectors: Vec<String> = meta
                .unknown_selectors
                .iter()
                .map(|s| format!("`{}`", s))
                .collect();
            output.push_str(&format!(
                "> **Note:** these configured selectors match no known rule and were ignored: {}\n\n",
                selectors.join(", ")
            ));
        }

        if classification.is_empty() && classification.omitted.is_empty() {
            output.push_str("No rules to add! Your configuration is already comprehensive.\n\n");
        }

        for category in Category::ALL {
            let rows = category_rows(classification, category);
            if rows.is_empty() {
                continue;
            }

            output.push_str(&format!("## {} Ruff rules\n\n", category.title()));
            output.push_str(&format!(
                "{} Ruff rules {}\n\n",
                rows.len(),
                category.description()
            ));

            if category == Category::Respected && !classification.respected_categories.is_empty() {
                output.push_str(&self.render_categories(classification));
            }

            output.push_str(&self.render_table(category, &rows));
        }

        if !classification.omitted.is_empty() {
            let codes: Vec<String> = classification
                .omitted
                .iter()
                .map(|code| format!("`{}`", code))
                .collect();
            output.push_str("## Omitted rules\n\n");
            output.push_str(&format!(
                "{} rules were left out because their violation counts were unavailable: {}\n\n",
                codes.len(),
                codes.join(", ")
            ));
        }

        output
    }

    /// Write the rendered report to `path`
    pub fn write(
        &self,
        classification: &Classification,
        meta: &ReportMeta,
        path: &Path,
    ) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.render(classification, meta))
    }

    fn render_categories(&self, classification: &Classification) -> String {
        let mut output = String::from(
            "Every not-yet-enabled rule in these categories is respected, so they can be selected as a whole:\n\n",
        );
        for (prefix, (linter, count)) in &classification.respected_categories {
            output.push_str(&format!("- `{}` ({}, {} rules)\n", prefix, linter, count));
        }
        output.push('\n');

        let prefixes: Vec<&str> = classification
            .respected_categories
            .keys()
            .map(String::as_str)
            .collect();
        output.push_str(&generate_pyproject_suggestion(&prefixes, "extend-select"));
        output.push('\n');
        output
    }

    fn render_table(&self, category: Category, rows: &[TableRow]) -> String {
        let headers = TableRow::headers(category);
        let body: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                let mut cells = row.cells();
                cells[1] = format!("[{}]({}{})", row.name, DOCS_BASE_URL, row.name);
                cells.iter().map(|c| escape_cell(c)).collect()
            })
            .collect();

        make_collapsible(&github_table(&headers, &body), "Details")
    }
}

/// Wrap content in a `<details>` block
pub fn make_collapsible(content: &str, summary: &str) -> String {
    format!(
        "<details>\n<summary>{}</summary>\n\n{}\n\n</details>\n\n",
        summary, content
    )
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}

/// Render a GitHub-flavored table with padded columns
fn github_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count().max(3)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect();
        format!("| {} |", padded.join(" | "))
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers.to_vec()));
    let separator: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    lines.push(format!("|-{}-|", separator.join("-|-")));
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str).collect()));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ViolatedRule;
    use crate::rules::Rule;
    use crate::types::{Fixability, RuleCode};

    fn rule(code: &str, name: &str, fix: Fixability) -> Rule {
        Rule {
            code: RuleCode::new(code).unwrap(),
            name: name.to_string(),
            linter: "pycodestyle".to_string(),
            fix,
            preview: false,
            summary: String::new(),
            explanation: String::new(),
            message_formats: vec![],
        }
    }

    fn sample() -> Classification {
        Classification {
            respected: vec![rule("E711", "none-comparison", Fixability::Always)],
            autofixable: vec![ViolatedRule {
                rule: rule("W291", "trailing-whitespace", Fixability::Always),
                violations: 8,
            }],
            applicable: vec![ViolatedRule {
                rule: rule("E501", "line-too-long", Fixability::Never),
                violations: 3,
            }],
            omitted: vec![],
            respected_categories: Default::default(),
        }
    }

    fn meta(repo: Option<&str>) -> ReportMeta {
        ReportMeta {
            repo_name: repo.map(str::to_string),
            linter_version: "0.6.4".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_header_with_repo_name() {
        let report = MarkdownReport::new().render(&sample(), &meta(Some("acme/widgets")));
        assert!(report.starts_with("# adopt-ruff report for acme/widgets (ruff 0.6.4)\n"));
    }

    #[test]
    fn test_header_without_repo_name() {
        let report = MarkdownReport::new().render(&sample(), &meta(Some("  ")));
        assert!(report.starts_with("# adopt-ruff report (ruff 0.6.4)\n"));
    }

    #[test]
    fn test_sections_in_category_order() {
        let report = MarkdownReport::new().render(&sample(), &meta(None));
        let respected = report.find("## Respected Ruff rules").unwrap();
        let autofixable = report.find("## Autofixable Ruff rules").unwrap();
        let applicable = report.find("## Applicable Ruff rules").unwrap();
        assert!(respected < autofixable && autofixable < applicable);
        assert!(report.contains("1 Ruff rules are already respected in the repo"));
        assert_eq!(report.matches("<details>").count(), 3);
    }

    #[test]
    fn test_only_applicable_table_has_violations_column() {
        let report = MarkdownReport::new().render(&sample(), &meta(None));
        assert_eq!(report.matches("| Violations |").count(), 1);
        assert!(report.contains("| E501 | [line-too-long](https://docs.astral.sh/ruff/rules/line-too-long) | No"));
    }

    #[test]
    fn test_notes_for_unknown_selectors_and_missing_counts() {
        let mut meta = meta(None);
        assert!(!MarkdownReport::new().render(&sample(), &meta).contains("**Note:**"));

        meta.unknown_selectors = vec!["XYZ".to_string(), "E999".to_string()];
        meta.counts_unavailable = true;
        let report = MarkdownReport::new().render(&Classification::default(), &meta);
        assert!(report.contains("violation report could not be read"));
        assert!(report.contains("were ignored: `XYZ`, `E999`"));
    }

    #[test]
    fn test_empty_categories_are_skipped() {
        let mut classification = sample();
        classification.autofixable.clear();
        let report = MarkdownReport::new().render(&classification, &meta(None));
        assert!(!report.contains("Autofixable"));
    }

    #[test]
    fn test_nothing_to_add() {
        let report = MarkdownReport::new().render(&Classification::default(), &meta(None));
        assert!(report.contains("No rules to add!"));
        assert!(!report.contains("## "));
    }

    #[test]
    fn test_respected_categories_suggestion() {
        let mut classification = sample();
        classification
            .respected_categories
            .insert("E".to_string(), ("pycodestyle".to_string(), 1));
        let report = MarkdownReport::new().render(&classification, &meta(None));
        assert!(report.contains("- `E` (pycodestyle, 1 rules)"));
        assert!(report.contains(r#"extend-select = ["E"]"#));
    }

    #[test]
    fn test_omitted_rules_listed() {
        let mut classification = sample();
        classification.omitted = vec![RuleCode::new("F401").unwrap()];
        let report = MarkdownReport::new().render(&classification, &meta(None));
        assert!(report.contains("## Omitted rules"));
        assert!(report.contains("`F401`"));
    }

    #[test]
    fn test_only_omitted_rules_is_not_nothing_to_add() {
        let classification = Classification {
            omitted: vec![RuleCode::new("F401").unwrap()],
            ..Default::default()
        };
        let report = MarkdownReport::new().render(&classification, &meta(None));
        assert!(!report.contains("No rules to add!"));
        assert!(report.contains("1 rules were left out"));
    }

    #[test]
    fn test_github_table_alignment() {
        let table = github_table(
            &["Code", "Name"],
            &[vec!["E501".to_string(), "line-too-long".to_string()]],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "| Code | Name          |");
        assert_eq!(lines[1], "|------|---------------|");
        assert_eq!(lines[2], "| E501 | line-too-long |");
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("reports").join("result.md");
        MarkdownReport::new()
            .write(&sample(), &meta(None), &path)
            .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("## Applicable Ruff rules"));
    }
}
