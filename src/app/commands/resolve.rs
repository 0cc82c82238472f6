//! Variable resolution shared by every command.

use crate::app::commands::VariableRequest;
use crate::domain::{AppError, DashboardVariables};
use crate::ports::VariableSource;

pub fn execute(
    source: &dyn VariableSource,
    request: &VariableRequest,
) -> Result<DashboardVariables, AppError> {
    tracing::debug!(
        target_env = %request.target,
        profile = %request.profile,
        strategy = %request.strategy,
        "resolving variables"
    );
    let variables = source.resolve(&request.target, &request.profile)?;
    tracing::debug!(
        catalog = variables.catalog(),
        schema = variables.schema(),
        "resolved variables"
    );
    Ok(variables)
}
