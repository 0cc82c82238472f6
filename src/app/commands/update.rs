//! Structured update: rewrite the catalog/schema parameters of a dashboard in place.

use std::path::{Path, PathBuf};

use crate::app::commands::{VariableRequest, resolve};
use crate::domain::{AppError, DashboardVariables, ParameterUpdate, apply_parameters};
use crate::ports::VariableSource;
use crate::services::dashboard_filesystem::{read_dashboard, write_dashboard};

/// Options for the update command.
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    pub request: VariableRequest,
    /// Dashboard to update. Defaults to the configured dashboard.
    pub dashboard: Option<PathBuf>,
}

/// Result of an update operation.
#[derive(Debug)]
pub struct UpdateResult {
    pub dashboard: PathBuf,
    pub variables: DashboardVariables,
    pub parameters: ParameterUpdate,
    /// Whether any parameter value differs from what the file held before.
    pub changed: bool,
}

/// Resolve variables, apply them to `dashboard`, and overwrite it.
///
/// Nothing is written unless every step before the write succeeded.
pub fn execute(
    dashboard: &Path,
    source: &dyn VariableSource,
    request: &VariableRequest,
) -> Result<UpdateResult, AppError> {
    let variables = resolve::execute(source, request)?;

    let mut document = read_dashboard(dashboard)?;
    let original = document.clone();
    let parameters = apply_parameters(&mut document, &variables)?;
    for skipped in &parameters.skipped {
        tracing::debug!(%skipped, "parameter left unchanged");
    }

    write_dashboard(dashboard, &document)?;

    Ok(UpdateResult {
        dashboard: dashboard.to_path_buf(),
        variables,
        parameters,
        changed: document != original,
    })
}
