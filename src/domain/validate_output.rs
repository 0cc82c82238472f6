//! Extraction of resolved variables from `bundle validate -o json` output.

use serde_json::Value;

use crate::domain::{AppError, DashboardVariables, VariableName};

/// Parse the CLI's stdout and pull `variables.<name>.value` for catalog and schema.
pub fn variables_from_validate_output(stdout: &str) -> Result<DashboardVariables, AppError> {
    let document: Value = serde_json::from_str(stdout.trim())
        .map_err(|err| AppError::CliOutputInvalid(err.to_string()))?;

    let variables = document
        .get("variables")
        .filter(|value| value.is_object())
        .ok_or(AppError::VariablesSectionMissing)?;

    let catalog = resolved_value(variables, VariableName::Catalog)?;
    let schema = resolved_value(variables, VariableName::Schema)?;
    DashboardVariables::new(catalog, schema)
}

fn resolved_value(variables: &Value, name: VariableName) -> Result<String, AppError> {
    let entry = variables.get(name.keyword()).ok_or(AppError::VariableMissing(name))?;

    Ok(match entry.get("value") {
        Some(Value::String(value)) => value.clone(),
        Some(Value::Number(value)) => value.to_string(),
        Some(Value::Bool(value)) => value.to_string(),
        _ => String::new(),
    })
}
