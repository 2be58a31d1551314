#![forbid(unsafe_code)]

//! Per-category CSV exports

use crate::engine::Classification;
use crate::error::AdoptError;
use crate::output::table::category_rows;
use crate::types::Category;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Writes one CSV file per non-empty category into a directory
#[derive(Debug, Clone)]
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the export for `category` is written to
    pub fn path_for(&self, category: Category) -> PathBuf {
        self.dir.join(format!("{}.csv", category.file_stem()))
    }

    /// Export every non-empty category, returning the written paths
    ///
    /// # Errors
    ///
    /// Returns `AdoptError::Io` if the directory cannot be created and
    /// `AdoptError::Csv` if a file cannot be written.
    pub fn export(&self, classification: &Classification) -> Result<Vec<PathBuf>, AdoptError> {
        fs::create_dir_all(&self.dir)?;

        let mut written = Vec::new();
        for category in Category::ALL {
            let path = self.path_for(category);
            let rows = category_rows(classification, category);
            if rows.is_empty() {
                warn!(file = %display_name(&path), "No rules to write, skipping");
                continue;
            }

            let csv_error = |source| AdoptError::Csv {
                file: path.clone(),
                source,
            };
            let mut writer = csv::Writer::from_path(&path).map_err(csv_error)?;
            for row in &rows {
                writer.serialize(row).map_err(csv_error)?;
            }
            writer.flush()?;

            debug!(rows = rows.len(), file = %path.display(), "Wrote CSV export");
            written.push(path);
        }

        Ok(written)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
