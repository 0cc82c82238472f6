pub mod bundle_config;
pub mod cli_failure;
pub mod dashboard;
pub mod error;
pub mod validate_output;
pub mod variables;

pub use bundle_config::BundleConfig;
pub use cli_failure::{CliFailure, CliFailureKind};
pub use dashboard::{ParameterUpdate, SkippedParameter, apply_parameters, substitute_placeholders};
pub use error::AppError;
pub use validate_output::variables_from_validate_output;
pub use variables::{DashboardVariables, VariableName};
