//! Report formatters (Markdown report, CSV exports, terminal summary)

pub mod csv_export;
pub mod markdown;
pub mod suggestion;
pub mod summary;
pub mod table;

pub use csv_export::CsvExporter;
pub use markdown::{MarkdownReport, ReportMeta};
pub use suggestion::generate_pyproject_suggestion;
pub use summary::{Summary, WrittenFiles};
