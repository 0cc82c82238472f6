//! Project configuration (`dashvars.toml`) and project root discovery.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;
use crate::services::adapters::databricks_command::DEFAULT_PROGRAM;

pub const CONFIG_FILE: &str = "dashvars.toml";
pub const DEFAULT_BUNDLE_FILE: &str = "databricks.yml";
pub const DEFAULT_DASHBOARD: &str = "src/dbsql_metrics.lvdash.json";
pub const DEFAULT_TEMPLATE: &str = "src/dbsql_metrics_template.lvdash.json";

/// Optional per-project settings. Relative paths resolve against the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Bundle configuration file.
    pub bundle_file: Option<PathBuf>,
    /// Dashboard updated in place by `update`.
    pub dashboard: Option<PathBuf>,
    /// Template read by `render`.
    pub template: Option<PathBuf>,
    /// File written by `render`. Defaults to the dashboard path.
    pub output: Option<PathBuf>,
    /// Bundle CLI executable.
    pub cli: Option<String>,
}

impl ProjectConfig {
    /// Load `dashvars.toml` from `project_root`, falling back to defaults when absent.
    pub fn load(project_root: &Path) -> Result<Self, AppError> {
        let path = project_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        tracing::debug!(path = %path.display(), "loading project configuration");

        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
            .map_err(|err| AppError::ProjectConfigParse { path, details: err.to_string() })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn bundle_file(&self) -> &Path {
        self.bundle_file.as_deref().unwrap_or(Path::new(DEFAULT_BUNDLE_FILE))
    }

    pub fn dashboard(&self) -> &Path {
        self.dashboard.as_deref().unwrap_or(Path::new(DEFAULT_DASHBOARD))
    }

    pub fn template(&self) -> &Path {
        self.template.as_deref().unwrap_or(Path::new(DEFAULT_TEMPLATE))
    }

    pub fn output(&self) -> &Path {
        self.output.as_deref().unwrap_or_else(|| self.dashboard())
    }

    pub fn cli(&self) -> &str {
        self.cli.as_deref().unwrap_or(DEFAULT_PROGRAM)
    }
}

/// Project root for a working directory: the directory itself, or its parent
/// when invoked from inside the project's `src/` directory.
pub fn locate_project_root(cwd: &Path) -> PathBuf {
    match (cwd.file_name(), cwd.parent()) {
        (Some(name), Some(parent)) if name == "src" => parent.to_path_buf(),
        _ => cwd.to_path_buf(),
    }
}
