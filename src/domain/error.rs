use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::cli_failure::{CliFailure, CliFailureKind};
use crate::domain::variables::VariableName;

/// Library-wide error type for dashvars operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Bundle configuration file not found in the project root.
    #[error("Bundle configuration not found: {}", .0.display())]
    BundleConfigMissing(PathBuf),

    /// Bundle configuration file could not be parsed.
    #[error("Failed to parse bundle configuration {}: {details}", .path.display())]
    BundleConfigParse { path: PathBuf, details: String },

    /// Project configuration file (dashvars.toml) could not be parsed.
    #[error("Failed to parse project configuration {}: {details}", .path.display())]
    ProjectConfigParse { path: PathBuf, details: String },

    /// Target is not declared in the bundle configuration.
    #[error("Target '{target}' not found in bundle configuration")]
    TargetNotFound { target: String, available: Vec<String> },

    /// Dashboard file not found.
    #[error("Dashboard file not found: {}", .0.display())]
    DashboardMissing(PathBuf),

    /// Dashboard template not found.
    #[error("Dashboard template not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    /// Dashboard file is not valid JSON.
    #[error("Failed to parse dashboard file {}: {details}", .path.display())]
    DashboardParse { path: PathBuf, details: String },

    /// Dashboard JSON has no `datasets` section.
    #[error("No 'datasets' section found in dashboard file")]
    DatasetsMissing,

    /// The bundle CLI executable could not be started.
    #[error("'{program}' command not found")]
    CliNotFound { program: String },

    /// The bundle CLI exited unsuccessfully.
    #[error("{}", cli_failed_message(.status, .failure))]
    CliFailed { status: Option<i32>, target: String, profile: String, failure: CliFailure },

    /// The bundle CLI printed something that is not JSON.
    #[error("Failed to parse JSON output from bundle CLI: {0}")]
    CliOutputInvalid(String),

    /// Validation output has no `variables` section.
    #[error("No 'variables' section found in bundle validation output")]
    VariablesSectionMissing,

    /// A required variable is not declared.
    #[error("'{0}' variable not found in bundle configuration")]
    VariableMissing(VariableName),

    /// A required variable resolved to an empty value.
    #[error("'{0}' variable has no value")]
    VariableEmpty(VariableName),

    /// Write was rejected by the filesystem.
    #[error("Permission denied when writing to {}: {details}", .path.display())]
    PermissionDenied { path: PathBuf, details: String },
}

fn cli_failed_message(status: &Option<i32>, failure: &CliFailure) -> String {
    let mut message = match status {
        Some(code) => format!("Bundle CLI command failed with return code {code}"),
        None => "Bundle CLI command was terminated by a signal".to_string(),
    };
    if let Some(line) = &failure.error_line {
        message.push_str("\n   ");
        message.push_str(line);
    }
    message
}

impl AppError {
    /// Suggested remedy lines shown below the error message.
    pub fn remedy(&self) -> Vec<String> {
        match self {
            AppError::Io(_) => vec!["Check your environment and try again".into()],
            AppError::BundleConfigMissing(_) => vec![
                "Make sure you're running this command from a bundle project directory".into(),
            ],
            AppError::BundleConfigParse { .. } => {
                vec!["Check that the bundle configuration is valid YAML".into()]
            }
            AppError::ProjectConfigParse { .. } => {
                vec!["Check dashvars.toml for unknown keys or invalid values".into()]
            }
            AppError::TargetNotFound { available, .. } => {
                let mut lines =
                    vec!["Check your bundle configuration for available targets".to_string()];
                if !available.is_empty() {
                    lines.push(format!("   Available targets: {}", available.join(", ")));
                }
                lines
            }
            AppError::DashboardMissing(_) => vec![
                "Make sure the dashboard file exists in the src/ directory".into(),
                "   The bundle validation requires this file to be present".into(),
            ],
            AppError::TemplateMissing(_) => {
                vec!["Make sure the dashboard template exists or pass --template".into()]
            }
            AppError::DashboardParse { .. } => {
                vec!["Check if the dashboard file is valid JSON".into()]
            }
            AppError::DatasetsMissing => {
                vec!["Check if the dashboard file is properly formatted".into()]
            }
            AppError::CliNotFound { .. } => vec![
                "Install the Databricks CLI and ensure it's in your PATH".into(),
                "   See: https://docs.databricks.com/dev-tools/cli/install.html".into(),
            ],
            AppError::CliFailed { target, profile, failure, .. } => {
                cli_failure_remedy(&failure.kind, target, profile)
            }
            AppError::CliOutputInvalid(_) => {
                vec!["Check if the Databricks CLI is working correctly".into()]
            }
            AppError::VariablesSectionMissing => {
                vec!["Check your databricks.yml configuration".into()]
            }
            AppError::VariableMissing(_) => {
                vec!["Check your databricks.yml variables section".into()]
            }
            AppError::VariableEmpty(name) => {
                vec![format!("Check your databricks.yml {name} variable configuration")]
            }
            AppError::PermissionDenied { .. } => vec![
                "Check file permissions or run with appropriate privileges".into(),
            ],
        }
    }
}

fn cli_failure_remedy(kind: &CliFailureKind, target: &str, profile: &str) -> Vec<String> {
    match kind {
        CliFailureKind::ProfileNotFound => vec![
            format!("Profile '{profile}' not found in your Databricks configuration"),
            "   Run 'databricks auth profiles' to see available profiles".into(),
            "   Or run 'databricks configure' to set up a new profile".into(),
        ],
        CliFailureKind::Authentication => vec![
            format!("Authentication issue with profile '{profile}'"),
            "   Run 'databricks auth login' to authenticate".into(),
            "   Or check your ~/.databrickscfg file for correct profile configuration".into(),
        ],
        CliFailureKind::TargetNotFound { available } => {
            let mut lines = vec![
                format!("Target '{target}' not found in your databricks.yml"),
                "   Check your databricks.yml file for available targets".into(),
            ];
            if let Some(available) = available {
                lines.push(format!("   Available targets: {available}"));
            }
            lines
        }
        CliFailureKind::Workspace => vec![
            "Workspace configuration issue".into(),
            "   Check your databricks.yml workspace configuration".into(),
        ],
        CliFailureKind::DashboardUnreadable => vec![
            "Dashboard file missing or inaccessible".into(),
            "   Make sure the dashboard file exists and is readable".into(),
            "   Check file permissions and path".into(),
        ],
        CliFailureKind::Unclassified => {
            vec!["Check the bundle CLI output above and try again".into()]
        }
    }
}
