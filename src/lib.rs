#![forbid(unsafe_code)]

//! adopt-ruff: find the Ruff rules a codebase is ready to adopt
//!
//! adopt-ruff compares Ruff's full rule catalog with the rules a project
//! already enables and with the violations Ruff finds when every rule is on.
//! Rules that are not enabled yet are sorted into three tiers so stricter
//! linting can be rolled out incrementally:
//!
//! - **Respected**: no violations, enable right away
//! - **Autofixable**: violated, but `ruff check --fix` cleans them up
//! - **Applicable**: violated and needs manual fixes, fewest violations first
//!
//! With `--interactive`, chosen rules are merged into the project's Ruff
//! configuration afterwards.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{AdoptError, CatalogError, ConfigError, LinterError};

// Re-export core domain types for convenient access
pub use types::{Category, Fixability, RuleCode};
