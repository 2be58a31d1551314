//! Invoking the external linter
//!
//! The `Linter` trait is the seam between the pipeline and the Ruff process:
//! each method returns the raw stdout of one invocation, leaving parsing to
//! the catalog and violation modules.

use crate::error::LinterError;
use regex::Regex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Source of the rule catalog and violation report
pub trait Linter {
    /// Linter version, e.g. `0.6.4`
    fn version(&self) -> Result<String, LinterError>;

    /// Machine-readable listing of every rule the linter supports
    fn rule_catalog(&self) -> Result<String, LinterError>;

    /// Machine-readable report of every violation in `target` with all rules enabled
    fn check(&self, target: &Path, include_preview: bool) -> Result<String, LinterError>;
}

/// Ruff invoked as a child process
#[derive(Debug, Clone)]
pub struct RuffCli {
    program: PathBuf,
}

impl RuffCli {
    /// Locate the Ruff executable
    ///
    /// `program` may be a bare name looked up on `PATH` or a path to the binary.
    ///
    /// # Errors
    ///
    /// Returns `LinterError::NotFound` if no such executable exists.
    pub fn locate(program: &str) -> Result<Self, LinterError> {
        let program_path = which::which(program).map_err(|_| LinterError::NotFound {
            program: program.to_string(),
        })?;
        debug!(path = %program_path.display(), "Located ruff executable");
        Ok(Self {
            program: program_path,
        })
    }

    /// Path of the located executable
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, args: &[OsString]) -> Result<String, LinterError> {
        let command = self.describe(args);
        debug!(%command, "Running linter");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| LinterError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(LinterError::Failed {
                command,
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn describe(&self, args: &[OsString]) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

impl Linter for RuffCli {
    fn version(&self) -> Result<String, LinterError> {
        let args = [OsString::from("--version")];
        let stdout = self.run(&args)?;
        let version = parse_version(&stdout).ok_or_else(|| LinterError::UnexpectedOutput {
            command: self.describe(&args),
            message: format!("cannot find a version in {:?}", stdout.trim()),
        })?;
        info!(%version, "Detected ruff");
        Ok(version)
    }

    fn rule_catalog(&self) -> Result<String, LinterError> {
        self.run(&["rule", "--all", "--output-format=json"].map(OsString::from))
    }

    fn check(&self, target: &Path, include_preview: bool) -> Result<String, LinterError> {
        let mut args: Vec<OsString> = vec!["check".into(), target.as_os_str().to_os_string()];
        args.extend(
            [
                "--output-format=json",
                "--select=ALL",
                "--exit-zero",
                "--no-cache",
            ]
            .map(OsString::from),
        );
        if include_preview {
            args.push("--preview".into());
        }
        self.run(&args)
    }
}

/// Extract the version from `ruff --version` output (`ruff 0.6.4`)
pub fn parse_version(output: &str) -> Option<String> {
    let re = Regex::new(r"(?m)^ruff\s+(\d+\.\d+\.\d+\S*)").ok()?;
    re.captures(output.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
