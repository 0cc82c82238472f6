//! Model of the bundle configuration file (`databricks.yml`).
//!
//! Only the parts needed to resolve variable defaults are modeled; every other
//! key in the file is ignored.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_yaml::Value;

use crate::domain::{AppError, DashboardVariables, VariableName};

/// Variable bindings keyed by name. Values are kept untyped so that variables
/// other than catalog and schema may use any shape, including complex defaults.
pub type VariableBindings = BTreeMap<String, Value>;

#[derive(Debug, Default, Deserialize)]
pub struct BundleConfig {
    /// Bundle-wide variable declarations.
    #[serde(default)]
    pub variables: Option<VariableBindings>,
    #[serde(default)]
    pub targets: BTreeMap<String, Option<TargetConfig>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TargetConfig {
    #[serde(default)]
    pub variables: Option<VariableBindings>,
}

impl BundleConfig {
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn target_names(&self) -> Vec<String> {
        self.targets.keys().cloned().collect()
    }

    /// Resolve catalog and schema for `target`.
    ///
    /// Target-level bindings take precedence over bundle-wide defaults.
    pub fn resolve(&self, target: &str) -> Result<DashboardVariables, AppError> {
        let target_config = self.targets.get(target).ok_or_else(|| AppError::TargetNotFound {
            target: target.to_string(),
            available: self.target_names(),
        })?;

        let catalog = self.lookup(target_config.as_ref(), VariableName::Catalog)?;
        let schema = self.lookup(target_config.as_ref(), VariableName::Schema)?;
        DashboardVariables::new(catalog, schema)
    }

    fn lookup(
        &self,
        target: Option<&TargetConfig>,
        name: VariableName,
    ) -> Result<String, AppError> {
        let binding = target
            .and_then(|config| config.variables.as_ref())
            .and_then(|variables| variables.get(name.keyword()))
            .or_else(|| self.variables.as_ref()?.get(name.keyword()))
            .ok_or(AppError::VariableMissing(name))?;

        Ok(binding_text(binding).unwrap_or_default())
    }
}

/// Text of a binding: the scalar itself, or the scalar `default` of a declaration.
/// Null, sequences and complex defaults have no text.
fn binding_text(binding: &Value) -> Option<String> {
    match binding {
        Value::Mapping(declaration) => declaration.get("default").and_then(scalar_text),
        other => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        // Number's Display keeps the float form (`1.0`) and the full u64 range.
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
