//! Counting violations per rule from Ruff's JSON report

use crate::types::RuleCode;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Error raised when the violation report as a whole cannot be read
#[derive(Debug, thiserror::Error)]
pub enum ViolationReportError {
    #[error("Invalid violation report JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Violation report must be a JSON array")]
    NotAnArray,
}

/// One diagnostic from `ruff check --output-format=json`
///
/// Only the fields needed to attribute and sanity-check a violation are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Diagnostic {
    pub code: RuleCode,
    pub filename: String,
    pub message: String,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Location {
    pub row: u64,
    pub column: u64,
}

/// Number of detected violations per rule code
///
/// A code is *unavailable* when its violation data could not be trusted;
/// lookups for it return `None` so callers can omit the rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationCounts {
    counts: HashMap<RuleCode, u64>,
    unavailable: HashSet<RuleCode>,
    all_unavailable: bool,
}

impl ViolationCounts {
    /// Counts where every code is unavailable (the check run failed)
    pub fn unavailable() -> Self {
        Self {
            all_unavailable: true,
            ..Self::default()
        }
    }

    /// Parse Ruff's JSON violation report
    ///
    /// - Diagnostics with `"code": null` (syntax errors) are ignored.
    /// - Diagnostics without a usable code are skipped with a warning.
    /// - Diagnostics with a code but malformed otherwise make that code unavailable.
    ///
    /// # Errors
    ///
    /// Returns `ViolationReportError` if the report is not a JSON array.
    pub fn from_json(json: &str) -> Result<Self, ViolationReportError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Array(entries) = value else {
            return Err(ViolationReportError::NotAnArray);
        };

        let mut counts = Self::default();
        for (index, entry) in entries.into_iter().enumerate() {
            let code = match entry.get("code") {
                Some(serde_json::Value::Null) => {
                    debug!(index, "Ignoring diagnostic without a rule code (syntax error)");
                    continue;
                }
                Some(serde_json::Value::String(code)) => match RuleCode::new(code.as_str()) {
                    Some(code) => code,
                    None => {
                        warn!(index, %code, "Skipping diagnostic with an invalid rule code");
                        continue;
                    }
                },
                _ => {
                    warn!(index, "Skipping diagnostic without a rule code");
                    continue;
                }
            };

            match serde_json::from_value::<Diagnostic>(entry) {
                Ok(diagnostic) => counts.record(diagnostic.code),
                Err(e) => {
                    warn!(%code, error = %e, "Malformed violation data, omitting rule");
                    counts.mark_unavailable(code);
                }
            }
        }

        debug!(
            violations = counts.total(),
            rules = counts.counts.len(),
            "Counted violations"
        );
        Ok(counts)
    }

    /// Record one violation of `code`
    pub fn record(&mut self, code: RuleCode) {
        *self.counts.entry(code).or_insert(0) += 1;
    }

    /// Mark the data for `code` as untrustworthy
    pub fn mark_unavailable(&mut self, code: RuleCode) {
        self.unavailable.insert(code);
    }

    /// Violation count for `code`
    ///
    /// Returns `Some(0)` for codes never seen, and `None` if unavailable.
    pub fn get(&self, code: &RuleCode) -> Option<u64> {
        if self.all_unavailable || self.unavailable.contains(code) {
            return None;
        }
        Some(self.counts.get(code).copied().unwrap_or(0))
    }

    /// Total number of counted violations
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Whether no counts at all could be obtained
    pub fn is_unavailable(&self) -> bool {
        self.all_unavailable
    }
}

impl FromIterator<(RuleCode, u64)> for ViolationCounts {
    fn from_iter<I: IntoIterator<Item = (RuleCode, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> RuleCode {
        RuleCode::new(s).unwrap()
    }

    const REPORT: &str = r#"[
        {
            "cell": null,
            "code": "F401",
            "end_location": {"column": 10, "row": 1},
            "filename": "/repo/app.py",
            "fix": {
                "applicability": "safe",
                "edits": [{"content": "", "end_location": {"column": 1, "row": 2}, "location": {"column": 1, "row": 1}}],
                "message": "Remove unused import: `os`"
            },
            "location": {"column": 8, "row": 1},
            "message": "`os` imported but unused",
            "noqa_row": 1,
            "url": "https://docs.astral.sh/ruff/rules/unused-import"
        },
        {
            "code": "F401",
            "filename": "/repo/lib.py",
            "fix": null,
            "location": {"column": 8, "row": 3},
            "message": "`sys` imported but unused"
        },
        {
            "code": "E501",
            "filename": "/repo/lib.py",
            "location": {"column": 89, "row": 7},
            "message": "Line too long (101 > 88)"
        },
        {
            "code": null,
            "filename": "/repo/broken.py",
            "location": {"column": 1, "row": 1},
            "message": "SyntaxError: Expected an expression"
        }
    ]"#;

    #[test]
    fn test_counts_per_code() {
        let counts = ViolationCounts::from_json(REPORT).unwrap();
        assert_eq!(counts.get(&code("F401")), Some(2));
        assert_eq!(counts.get(&code("E501")), Some(1));
        assert_eq!(counts.get(&code("B010")), Some(0));
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_malformed_entry_marks_code_unavailable() {
        let json = r#"[
            {"code": "E501", "filename": "a.py", "location": {"column": 1, "row": 1}, "message": "x"},
            {"code": "E501", "filename": "a.py", "location": "nowhere", "message": "x"},
            {"code": "F401", "filename": "a.py", "location": {"column": 1, "row": 1}, "message": "y"}
        ]"#;
        let counts = ViolationCounts::from_json(json).unwrap();
        assert_eq!(counts.get(&code("E501")), None);
        assert_eq!(counts.get(&code("F401")), Some(1));
    }

    #[test]
    fn test_entries_without_code_are_skipped() {
        let json = r#"[
            {"filename": "a.py", "location": {"column": 1, "row": 1}, "message": "x"},
            {"code": 42, "filename": "a.py", "location": {"column": 1, "row": 1}, "message": "x"},
            {"code": "not a code", "filename": "a.py", "location": {"column": 1, "row": 1}, "message": "x"}
        ]"#;
        let counts = ViolationCounts::from_json(json).unwrap();
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_report_must_be_array() {
        assert!(matches!(
            ViolationCounts::from_json("{}"),
            Err(ViolationReportError::NotAnArray)
        ));
        assert!(matches!(
            ViolationCounts::from_json("[{"),
            Err(ViolationReportError::Json(_))
        ));
    }

    #[test]
    fn test_empty_report() {
        let counts = ViolationCounts::from_json("[]").unwrap();
        assert_eq!(counts.get(&code("E501")), Some(0));
        assert!(!counts.is_unavailable());
    }

    #[test]
    fn test_unavailable_counts() {
        let counts = ViolationCounts::unavailable();
        assert!(counts.is_unavailable());
        assert_eq!(counts.get(&code("E501")), None);
    }

    #[test]
    fn test_from_iterator() {
        let counts: ViolationCounts = [(code("B010"), 4), (code("E501"), 0)].into_iter().collect();
        assert_eq!(counts.get(&code("B010")), Some(4));
        assert_eq!(counts.get(&code("E501")), Some(0));
        assert_eq!(counts.total(), 4);
    }
}
