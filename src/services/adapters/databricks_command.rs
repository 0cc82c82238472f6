use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use crate::domain::{AppError, CliFailure};
use crate::ports::BundleCli;

pub const DEFAULT_PROGRAM: &str = "databricks";

/// Runs the bundle CLI as a child process.
#[derive(Debug, Clone)]
pub struct DatabricksCommandAdapter {
    program: String,
}

impl Default for DatabricksCommandAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl DatabricksCommandAdapter {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl BundleCli for DatabricksCommandAdapter {
    fn bundle_validate(
        &self,
        project_root: &Path,
        target: &str,
        profile: &str,
    ) -> Result<String, AppError> {
        let args = ["bundle", "validate", "-o", "json", "-t", target, "-p", profile];
        let command_line = format!("{} {}", self.program, args.join(" "));
        tracing::debug!(
            command = %command_line,
            cwd = %project_root.display(),
            "running bundle CLI"
        );

        let output =
            Command::new(&self.program).args(args).current_dir(project_root).output().map_err(
                |err| match err.kind() {
                    ErrorKind::NotFound => AppError::CliNotFound { program: self.program.clone() },
                    _ => AppError::Io(err),
                },
            )?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(
                status = ?output.status.code(),
                stderr = %stderr.trim(),
                "bundle CLI failed"
            );
            return Err(AppError::CliFailed {
                status: output.status.code(),
                target: target.to_string(),
                profile: profile.to_string(),
                failure: CliFailure::from_stderr(&stderr),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|err| AppError::CliOutputInvalid(format!("output is not UTF-8: {err}")))?;
        Ok(stdout.trim().to_string())
    }
}
