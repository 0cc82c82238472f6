use crate::domain::{AppError, DashboardVariables};

/// A strategy for resolving the catalog/schema pair of a target environment.
pub trait VariableSource {
    fn resolve(&self, target: &str, profile: &str) -> Result<DashboardVariables, AppError>;
}
