//! Adding rule codes to a Ruff configuration file
//!
//! Edits go through `toml_edit`, so comments, key order and formatting of
//! everything except the edited list survive. Codes are merged into `select`
//! when the file has one. Otherwise they go to `extend-select`, which keeps
//! Ruff's default selection in force.

use crate::config::ruff_toml::ConfigKind;
use crate::error::ConfigError;
use crate::types::RuleCode;
use std::fs;
use std::io;
use std::path::Path;
use toml_edit::{Array, DocumentMut, Item, Table, value};
use tracing::info;

/// Outcome of merging codes into a configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectUpdate {
    /// File contents after the edit (unchanged when nothing was added)
    pub content: String,

    /// Key the codes were merged into, `select` or `extend-select`
    pub key: &'static str,

    /// Codes that were not listed before
    pub added: Vec<String>,

    /// Full list now stored under `key`, sorted when anything was added
    pub selectors: Vec<String>,
}

/// Merge `codes` into the rule selection of a configuration file's contents
///
/// The list is rewritten sorted and deduplicated. Codes already listed are
/// left alone; if every code is already there the content is returned as is.
///
/// # Errors
///
/// Returns `ConfigError::Edit` if the content is not valid TOML and
/// `ConfigError::UnexpectedValue` if a Ruff table or the selector list has an
/// unexpected type.
pub fn add_to_select(
    content: &str,
    kind: ConfigKind,
    codes: &[RuleCode],
) -> Result<SelectUpdate, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let table = lint_table(doc.as_table_mut(), kind)?;

    let key = if table.contains_key("select") {
        "select"
    } else {
        "extend-select"
    };
    let mut selectors = string_list(table, key)?;

    let mut added: Vec<String> = Vec::new();
    for code in codes {
        let code = code.as_str();
        if !selectors.iter().any(|s| s == code) && !added.iter().any(|s| s == code) {
            added.push(code.to_string());
        }
    }

    if added.is_empty() {
        return Ok(SelectUpdate {
            content: content.to_string(),
            key,
            added,
            selectors,
        });
    }

    selectors.extend(added.iter().cloned());
    selectors.sort();
    selectors.dedup();
    added.sort();
    set_string_list(table, key, &selectors);

    Ok(SelectUpdate {
        content: doc.to_string(),
        key,
        added,
        selectors,
    })
}

/// Merge `codes` into the configuration file at `path`, writing it back
///
/// A file that does not exist yet is created.
///
/// # Errors
///
/// Returns `ConfigError::UnsupportedFile` for file names Ruff does not read,
/// `ConfigError::Io` if the file cannot be read or written, and the errors of
/// [`add_to_select`].
pub fn add_to_select_file(path: &Path, codes: &[RuleCode]) -> Result<SelectUpdate, ConfigError> {
    let kind = ConfigKind::from_path(path)?;
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let update = add_to_select(&content, kind, codes)?;
    if !update.added.is_empty() {
        fs::write(path, &update.content)?;
        info!(
            config = %path.display(),
            key = update.key,
            added = update.added.len(),
            "Updated Ruff configuration"
        );
    }
    Ok(update)
}

/// Table holding the rule selection, created when missing
fn lint_table(root: &mut Table, kind: ConfigKind) -> Result<&mut Table, ConfigError> {
    let ruff = match kind {
        ConfigKind::PyProject => {
            let tool = child_table(root, "tool", true)?;
            child_table(tool, "ruff", true)?
        }
        ConfigKind::RuffToml => root,
    };

    // Legacy layout: selectors at the top of the Ruff table
    let legacy = !ruff.contains_key("lint")
        && (ruff.contains_key("select") || ruff.contains_key("extend-select"));
    if legacy {
        return Ok(ruff);
    }
    child_table(ruff, "lint", false)
}

fn child_table<'a>(
    parent: &'a mut Table,
    key: &str,
    implicit: bool,
) -> Result<&'a mut Table, ConfigError> {
    let item = parent.entry(key).or_insert_with(|| {
        let mut table = Table::new();
        table.set_implicit(implicit);
        Item::Table(table)
    });
    item.as_table_mut()
        .ok_or_else(|| ConfigError::UnexpectedValue {
            key: key.to_string(),
            expected: "a table",
        })
}

fn string_list(table: &Table, key: &str) -> Result<Vec<String>, ConfigError> {
    let Some(item) = table.get(key) else {
        return Ok(Vec::new());
    };
    let unexpected = || ConfigError::UnexpectedValue {
        key: key.to_string(),
        expected: "a list of strings",
    };

    item.as_array()
        .ok_or_else(unexpected)?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(unexpected))
        .collect()
}

/// Store `values` under `key`, keeping the old value's surrounding whitespace and comment
fn set_string_list(table: &mut Table, key: &str, values: &[String]) {
    let mut array = Array::new();
    for v in values {
        array.push(v.as_str());
    }

    match table.get_mut(key) {
        Some(item) => {
            let decor = item.as_value().map(|v| v.decor().clone());
            *item = value(array);
            if let (Some(decor), Some(new_value)) = (decor, item.as_value_mut()) {
                *new_value.decor_mut() = decor;
            }
        }
        None => {
            table.insert(key, value(array));
        }
    }
}
