//! Test utilities for adopt-ruff integration tests

#![allow(dead_code)]

use adopt_ruff::engine::Linter;
use adopt_ruff::error::LinterError;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Rule catalog in the shape of `ruff rule --all --output-format=json`
pub const CATALOG_JSON: &str = r###"[
  {
    "name": "line-too-long",
    "code": "E501",
    "linter": "pycodestyle",
    "summary": "Line too long ({width} > {limit})",
    "message_formats": ["Line too long ({width} > {limit})"],
    "fix": "Fix is not available.",
    "explanation": "## What it does\nChecks for lines that exceed the specified maximum character length.\n",
    "preview": false
  },
  {
    "name": "none-comparison",
    "code": "E711",
    "linter": "pycodestyle",
    "summary": "Comparison to `None` should be `cond is None`",
    "message_formats": ["Comparison to `None` should be `cond is None`"],
    "fix": "Fix is always available.",
    "explanation": "",
    "preview": false
  },
  {
    "name": "unused-import",
    "code": "F401",
    "linter": "Pyflakes",
    "summary": "`{name}` imported but unused",
    "message_formats": ["`{name}` imported but unused"],
    "fix": "Fix is sometimes available.",
    "explanation": "",
    "preview": false
  },
  {
    "name": "line-contains-todo",
    "code": "FIX002",
    "linter": "flake8-fixme",
    "summary": "Line contains TODO, consider resolving the issue",
    "message_formats": ["Line contains TODO, consider resolving the issue"],
    "fix": "Fix is not available.",
    "explanation": "",
    "preview": true
  },
  {
    "name": "print",
    "code": "T201",
    "linter": "flake8-print",
    "summary": "`print` found",
    "message_formats": ["`print` found"],
    "fix": "Fix is sometimes available.",
    "explanation": "",
    "preview": false
  },
  {
    "name": "useless-object-inheritance",
    "code": "UP004",
    "linter": "pyupgrade",
    "summary": "Class `{name}` inherits from `object`",
    "message_formats": ["Class `{name}` inherits from `object`"],
    "fix": "Fix is always available.",
    "explanation": "",
    "preview": false
  },
  {
    "name": "trailing-whitespace",
    "code": "W291",
    "linter": "pycodestyle",
    "summary": "Trailing whitespace",
    "message_formats": ["Trailing whitespace"],
    "fix": "Fix is always available.",
    "explanation": "",
    "preview": false
  }
]"###;

/// Build one diagnostic in the shape of `ruff check --output-format=json`
pub fn diagnostic(code: Option<&str>, filename: &str, row: u64) -> String {
    let code = match code {
        Some(code) => format!("\"{}\"", code),
        None => "null".to_string(),
    };
    format!(
        r#"{{"code": {}, "filename": "{}", "message": "violation", "location": {{"row": {}, "column": 1}}, "end_location": {{"row": {}, "column": 5}}, "fix": null, "noqa_row": {}, "url": null}}"#,
        code, filename, row, row, row
    )
}

/// Violation report for the fixture catalog
///
/// W291 x2, E501 x3, T201 x1 and one syntax error without a code.
pub fn violations_json() -> String {
    let entries = [
        diagnostic(Some("W291"), "app/main.py", 3),
        diagnostic(Some("E501"), "app/main.py", 4),
        diagnostic(Some("W291"), "app/util.py", 7),
        diagnostic(Some("E501"), "app/util.py", 9),
        diagnostic(Some("T201"), "app/util.py", 12),
        diagnostic(Some("E501"), "app/cli.py", 1),
        diagnostic(None, "app/broken.py", 2),
    ];
    format!("[{}]", entries.join(",\n"))
}

/// Recorded call to `FakeLinter::check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCall {
    pub target: PathBuf,
    pub include_preview: bool,
}

/// In-memory `Linter` returning canned output
pub struct FakeLinter {
    pub version: Result<String, String>,
    pub catalog: String,
    pub check: Result<String, String>,
    pub calls: RefCell<Vec<CheckCall>>,
}

impl FakeLinter {
    pub fn new() -> Self {
        Self {
            version: Ok("0.6.4".to_string()),
            catalog: CATALOG_JSON.to_string(),
            check: Ok(violations_json()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_check(mut self, output: &str) -> Self {
        self.check = Ok(output.to_string());
        self
    }

    pub fn with_failing_check(mut self, stderr: &str) -> Self {
        self.check = Err(stderr.to_string());
        self
    }

    pub fn with_failing_version(mut self, stderr: &str) -> Self {
        self.version = Err(stderr.to_string());
        self
    }
}

fn failed(command: &str, stderr: &str) -> LinterError {
    LinterError::Failed {
        command: command.to_string(),
        status: 2,
        stderr: stderr.to_string(),
    }
}

impl Linter for FakeLinter {
    fn version(&self) -> Result<String, LinterError> {
        self.version
            .clone()
            .map_err(|stderr| failed("ruff --version", &stderr))
    }

    fn rule_catalog(&self) -> Result<String, LinterError> {
        Ok(self.catalog.clone())
    }

    fn check(&self, target: &Path, include_preview: bool) -> Result<String, LinterError> {
        self.calls.borrow_mut().push(CheckCall {
            target: target.to_path_buf(),
            include_preview,
        });
        self.check
            .clone()
            .map_err(|stderr| failed("ruff check", &stderr))
    }
}
