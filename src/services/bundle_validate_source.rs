use std::path::PathBuf;

use crate::domain::{AppError, DashboardVariables, variables_from_validate_output};
use crate::ports::{BundleCli, VariableSource};

/// Resolves variables by asking the bundle CLI to validate the bundle.
///
/// Validation loads the serialized dashboard, so both the bundle file and the
/// dashboard must exist before the CLI is invoked.
#[derive(Debug, Clone)]
pub struct BundleValidateSource<C: BundleCli> {
    cli: C,
    project_root: PathBuf,
    bundle_file: PathBuf,
    dashboard: PathBuf,
}

impl<C: BundleCli> BundleValidateSource<C> {
    pub fn new(cli: C, project_root: PathBuf, bundle_file: PathBuf, dashboard: PathBuf) -> Self {
        Self { cli, project_root, bundle_file, dashboard }
    }

    fn preflight(&self) -> Result<(), AppError> {
        if !self.bundle_file.exists() {
            return Err(AppError::BundleConfigMissing(self.bundle_file.clone()));
        }
        if !self.dashboard.exists() {
            return Err(AppError::DashboardMissing(self.dashboard.clone()));
        }
        Ok(())
    }
}

impl<C: BundleCli> VariableSource for BundleValidateSource<C> {
    fn resolve(&self, target: &str, profile: &str) -> Result<DashboardVariables, AppError> {
        self.preflight()?;
        let stdout = self.cli.bundle_validate(&self.project_root, target, profile)?;
        variables_from_validate_output(&stdout)
    }
}
