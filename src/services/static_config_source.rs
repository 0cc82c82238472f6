use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, BundleConfig, DashboardVariables};
use crate::ports::VariableSource;

/// Reads variable defaults straight from the bundle configuration file.
#[derive(Debug, Clone)]
pub struct StaticConfigSource {
    bundle_file: PathBuf,
}

impl StaticConfigSource {
    pub fn new(bundle_file: PathBuf) -> Self {
        Self { bundle_file }
    }

    fn load(&self) -> Result<BundleConfig, AppError> {
        if !self.bundle_file.exists() {
            return Err(AppError::BundleConfigMissing(self.bundle_file.clone()));
        }
        tracing::debug!(path = %self.bundle_file.display(), "reading bundle configuration");

        let content = fs::read_to_string(&self.bundle_file)?;
        BundleConfig::parse(&content).map_err(|err| AppError::BundleConfigParse {
            path: self.bundle_file.clone(),
            details: err.to_string(),
        })
    }
}

impl VariableSource for StaticConfigSource {
    fn resolve(&self, target: &str, _profile: &str) -> Result<DashboardVariables, AppError> {
        self.load()?.resolve(target)
    }
}
