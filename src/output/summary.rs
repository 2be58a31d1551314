#![forbid(unsafe_code)]

//! Colored terminal summary printed after a run

use crate::engine::Classification;
use crate::types::Category;
use std::io;
use std::path::PathBuf;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Where the run wrote its outputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenFiles {
    pub report: Option<PathBuf>,
    pub exports: Vec<PathBuf>,
}

/// Human-readable summary of a classification
pub struct Summary<'a> {
    classification: &'a Classification,
    files: &'a WrittenFiles,
}

impl<'a> Summary<'a> {
    pub fn new(classification: &'a Classification, files: &'a WrittenFiles) -> Self {
        Self {
            classification,
            files,
        }
    }

    /// Write the summary to any color-capable writer
    pub fn write_to(&self, out: &mut impl WriteColor) -> io::Result<()> {
        writeln!(out, "Results:")?;
        for category in Category::ALL {
            let count = self.classification.count(category);
            out.set_color(ColorSpec::new().set_fg(Some(color_for(category))).set_bold(true))?;
            write!(out, "  {:<12}", category.title())?;
            out.reset()?;
            writeln!(out, " {} rules", count)?;
        }

        if !self.classification.omitted.is_empty() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            write!(out, "  {:<12}", "Omitted")?;
            out.reset()?;
            writeln!(
                out,
                " {} rules (violation counts unavailable)",
                self.classification.omitted.len()
            )?;
        }

        if let Some(report) = &self.files.report {
            writeln!(out)?;
            writeln!(out, "Report written to {}", report.display())?;
        }
        for export in &self.files.exports {
            writeln!(out, "Exported {}", export.display())?;
        }

        Ok(())
    }

    /// Print the summary to stderr
    pub fn print(&self, color: ColorChoice) -> io::Result<()> {
        let mut stderr = StandardStream::stderr(color);
        self.write_to(&mut stderr)
    }
}

fn color_for(category: Category) -> Color {
    match category {
        Category::Respected => Color::Green,
        Category::Autofixable => Color::Cyan,
        Category::Applicable => Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuleCode;
    use termcolor::Buffer;

    #[test]
    fn test_summary_plain_text() {
        let classification = Classification {
            omitted: vec![RuleCode::new("E501").unwrap()],
            ..Default::default()
        };
        let files = WrittenFiles {
            report: Some(PathBuf::from("result.md")),
            exports: vec![PathBuf::from("artifacts/respected.csv")],
        };

        let mut buffer = Buffer::no_color();
        Summary::new(&classification, &files)
            .write_to(&mut buffer)
            .unwrap();
        let text = String::from_utf8(buffer.into_inner()).unwrap();

        assert!(text.contains("  Respected    0 rules"));
        assert!(text.contains("  Omitted      1 rules (violation counts unavailable)"));
        assert!(text.contains("Report written to result.md"));
        assert!(text.contains("Exported artifacts/respected.csv"));
    }

    #[test]
    fn test_summary_ansi_colors() {
        let classification = Classification::default();
        let files = WrittenFiles::default();

        let mut buffer = Buffer::ansi();
        Summary::new(&classification, &files)
            .write_to(&mut buffer)
            .unwrap();
        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(text.contains("\x1b["));
        assert!(!text.contains("Report written"));
    }
}
