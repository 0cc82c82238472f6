use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, CliFailure};
use crate::ports::BundleCli;

enum Response {
    Stdout(String),
    Failure { status: i32, stderr: String },
    NotInstalled,
}

/// Scripted stand-in for the bundle CLI that records every invocation.
pub struct FakeBundleCli {
    response: Response,
    pub calls: Mutex<Vec<(PathBuf, String, String)>>,
}

impl FakeBundleCli {
    pub fn with_stdout(stdout: &str) -> Self {
        Self::new(Response::Stdout(stdout.to_string()))
    }

    pub fn failing(stderr: &str) -> Self {
        Self::new(Response::Failure { status: 1, stderr: stderr.to_string() })
    }

    pub fn not_installed() -> Self {
        Self::new(Response::NotInstalled)
    }

    fn new(response: Response) -> Self {
        Self { response, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<(PathBuf, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl BundleCli for FakeBundleCli {
    fn bundle_validate(
        &self,
        project_root: &Path,
        target: &str,
        profile: &str,
    ) -> Result<String, AppError> {
        self.calls.lock().unwrap().push((
            project_root.to_path_buf(),
            target.to_string(),
            profile.to_string(),
        ));

        match &self.response {
            Response::Stdout(stdout) => Ok(stdout.clone()),
            Response::Failure { status, stderr } => Err(AppError::CliFailed {
                status: Some(*status),
                target: target.to_string(),
                profile: profile.to_string(),
                failure: CliFailure::from_stderr(stderr),
            }),
            Response::NotInstalled => {
                Err(AppError::CliNotFound { program: "databricks".to_string() })
            }
        }
    }
}
