#![forbid(unsafe_code)]

//! Rule metadata and the rule catalog

mod catalog;
mod rule;

pub use catalog::{RuleCatalog, SELECT_ALL, find_complete_categories};
pub use rule::Rule;
