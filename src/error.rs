//! Error types for adopt-ruff
//!
//! This module defines the error types used throughout adopt-ruff, following
//! a hierarchical structure with specific error variants for each layer:
//! configuration, rule catalog, and the external linter.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Not one of the file names Ruff reads its settings from
    #[error(
        "Unsupported configuration file {}: expected pyproject.toml, ruff.toml or .ruff.toml",
        .0.display()
    )]
    UnsupportedFile(PathBuf),

    /// Configuration could not be parsed for editing
    #[error("Cannot edit configuration: {0}")]
    Edit(#[from] toml_edit::TomlError),

    /// A key that must hold a table or a list of strings holds something else
    #[error("Unexpected value for `{key}`: expected {expected}")]
    UnexpectedValue { key: String, expected: &'static str },
}

/// Rule catalog errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Output was not valid JSON
    #[error("Invalid rule catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Output was JSON but not a list of rules
    #[error("Rule catalog must be a JSON array, got {0}")]
    NotAnArray(&'static str),
}

/// Errors raised while invoking the external linter
#[derive(Debug, thiserror::Error)]
pub enum LinterError {
    /// The linter executable could not be located
    #[error("'{program}' not found on PATH. Make sure ruff is installed (pip install ruff)")]
    NotFound { program: String },

    /// The linter could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The linter exited unsuccessfully
    #[error("`{command}` exited with status {status}: {stderr}")]
    Failed {
        command: String,
        status: i32,
        stderr: String,
    },

    /// The linter produced output we cannot interpret
    #[error("Unexpected output from `{command}`: {message}")]
    UnexpectedOutput { command: String, message: String },
}

/// Top-level error type for adopt-ruff
#[derive(Debug, thiserror::Error)]
pub enum AdoptError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule catalog error
    #[error("Rule catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// External linter error
    #[error("Linter error: {0}")]
    Linter(#[from] LinterError),

    /// CSV export error
    #[error("CSV export error in {}: {source}", .file.display())]
    Csv {
        file: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Interactive prompt failed
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
