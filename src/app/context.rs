use std::path::{Path, PathBuf};

use crate::app::commands::Strategy;
use crate::app::config::ProjectConfig;
use crate::domain::AppError;
use crate::ports::VariableSource;
use crate::services::{BundleValidateSource, DatabricksCommandAdapter, StaticConfigSource};

/// Application context: where the project lives and how it is configured.
#[derive(Debug, Clone)]
pub struct AppContext {
    project_root: PathBuf,
    config: ProjectConfig,
}

impl AppContext {
    pub fn new(project_root: PathBuf, config: ProjectConfig) -> Self {
        Self { project_root, config }
    }

    /// Build a context, reading `dashvars.toml` from the project root if present.
    pub fn load(project_root: PathBuf) -> Result<Self, AppError> {
        let config = ProjectConfig::load(&project_root)?;
        Ok(Self::new(project_root, config))
    }

    /// Resolve a possibly relative path against the project root.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        self.project_root.join(path)
    }

    pub fn bundle_file(&self) -> PathBuf {
        self.resolve_path(self.config.bundle_file())
    }

    pub fn dashboard(&self) -> PathBuf {
        self.resolve_path(self.config.dashboard())
    }

    pub fn template(&self) -> PathBuf {
        self.resolve_path(self.config.template())
    }

    pub fn output(&self) -> PathBuf {
        self.resolve_path(self.config.output())
    }

    /// Variable source for `strategy`. `dashboard` is the file bundle validation
    /// expects to find.
    pub fn variable_source(&self, strategy: Strategy, dashboard: &Path) -> Box<dyn VariableSource> {
        match strategy {
            Strategy::Static => Box::new(StaticConfigSource::new(self.bundle_file())),
            Strategy::Bundle => Box::new(BundleValidateSource::new(
                DatabricksCommandAdapter::new(self.config.cli()),
                self.project_root.clone(),
                self.bundle_file(),
                dashboard.to_path_buf(),
            )),
        }
    }
}
