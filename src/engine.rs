//! Linter invocation, violation counting and rule classification

pub mod classifier;
pub mod linter;
pub mod violations;

pub use classifier::{Classification, Classifier, ClassifyOptions, ViolatedRule};
pub use linter::{Linter, RuffCli};
pub use violations::{ViolationCounts, ViolationReportError};
