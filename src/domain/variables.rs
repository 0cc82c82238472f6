use std::fmt;

use serde::Serialize;

use crate::domain::AppError;

/// The two bundle variables a dashboard is parameterized by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableName {
    Catalog,
    Schema,
}

impl VariableName {
    pub const ALL: [VariableName; 2] = [VariableName::Catalog, VariableName::Schema];

    /// Variable name in the bundle config and parameter keyword in the dashboard.
    pub fn keyword(self) -> &'static str {
        match self {
            VariableName::Catalog => "catalog",
            VariableName::Schema => "schema",
        }
    }

    /// Placeholder token used by dashboard templates.
    pub fn placeholder(self) -> &'static str {
        match self {
            VariableName::Catalog => "CATALOG_NAME",
            VariableName::Schema => "SCHEMA_NAME",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.keyword() == keyword)
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Resolved catalog/schema pair. Both values are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardVariables {
    catalog: String,
    schema: String,
}

impl DashboardVariables {
    pub fn new(catalog: impl Into<String>, schema: impl Into<String>) -> Result<Self, AppError> {
        let catalog = catalog.into();
        let schema = schema.into();
        if catalog.is_empty() {
            return Err(AppError::VariableEmpty(VariableName::Catalog));
        }
        if schema.is_empty() {
            return Err(AppError::VariableEmpty(VariableName::Schema));
        }
        Ok(Self { catalog, schema })
    }

    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn get(&self, name: VariableName) -> &str {
        match name {
            VariableName::Catalog => &self.catalog,
            VariableName::Schema => &self.schema,
        }
    }
}
