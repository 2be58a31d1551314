//! Project configuration: which Ruff rules are already enabled, and adding more

pub mod enabled;
pub mod rewrite;
pub mod ruff_toml;

pub use enabled::EnabledRuleSet;
pub use rewrite::{SelectUpdate, add_to_select, add_to_select_file};
pub use ruff_toml::{ConfigKind, LintSelection, search_config_file};
