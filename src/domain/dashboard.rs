//! Substitution of resolved variables into dashboard documents.

use std::fmt;

use serde_json::Value;

use crate::domain::{AppError, DashboardVariables, VariableName};

/// Replace the catalog and schema placeholder tokens verbatim.
///
/// Catalog is replaced first, then schema, across the whole text.
pub fn substitute_placeholders(template: &str, variables: &DashboardVariables) -> String {
    VariableName::ALL.into_iter().fold(template.to_string(), |text, name| {
        text.replace(name.placeholder(), variables.get(name))
    })
}

/// A parameter matching a variable keyword whose default value could not be located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedParameter {
    pub variable: VariableName,
    pub dataset_index: usize,
    pub parameter_index: usize,
}

impl fmt::Display for SkippedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not update {} parameter (datasets[{}].parameters[{}]) - unexpected structure",
            self.variable, self.dataset_index, self.parameter_index
        )
    }
}

/// Outcome of a structured update.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParameterUpdate {
    pub catalog_updates: usize,
    pub schema_updates: usize,
    pub skipped: Vec<SkippedParameter>,
}

impl ParameterUpdate {
    pub fn updates(&self, name: VariableName) -> usize {
        match name {
            VariableName::Catalog => self.catalog_updates,
            VariableName::Schema => self.schema_updates,
        }
    }

    fn record(&mut self, name: VariableName) {
        match name {
            VariableName::Catalog => self.catalog_updates += 1,
            VariableName::Schema => self.schema_updates += 1,
        }
    }
}

/// Overwrite `defaultSelection.values.values[0].value` of every `catalog` and
/// `schema` parameter, visiting datasets then parameters in document order.
///
/// Parameters with other keywords are left untouched. When a keyword appears more
/// than once every occurrence is written, so the last write wins.
pub fn apply_parameters(
    document: &mut Value,
    variables: &DashboardVariables,
) -> Result<ParameterUpdate, AppError> {
    let datasets = document.get_mut("datasets").ok_or(AppError::DatasetsMissing)?;
    let mut update = ParameterUpdate::default();

    let Some(datasets) = datasets.as_array_mut() else {
        return Ok(update);
    };

    for (dataset_index, dataset) in datasets.iter_mut().enumerate() {
        let Some(parameters) = dataset.get_mut("parameters").and_then(Value::as_array_mut) else {
            continue;
        };

        for (parameter_index, parameter) in parameters.iter_mut().enumerate() {
            let keyword = parameter.get("keyword").and_then(Value::as_str);
            let Some(name) = keyword.and_then(VariableName::from_keyword) else {
                continue;
            };

            match default_value_slot(parameter) {
                Some(slot) => {
                    let value = Value::String(variables.get(name).to_string());
                    slot.insert("value".to_string(), value);
                    update.record(name);
                }
                None => update.skipped.push(SkippedParameter {
                    variable: name,
                    dataset_index,
                    parameter_index,
                }),
            }
        }
    }

    Ok(update)
}

fn default_value_slot(parameter: &mut Value) -> Option<&mut serde_json::Map<String, Value>> {
    parameter
        .get_mut("defaultSelection")?
        .get_mut("values")?
        .get_mut("values")?
        .as_array_mut()?
        .first_mut()?
        .as_object_mut()
}
