use std::sync::Mutex;

use crate::domain::{AppError, DashboardVariables};
use crate::ports::VariableSource;

/// Variable source returning fixed values (or a fixed error) and recording requests.
pub struct FakeVariableSource {
    result: Result<DashboardVariables, fn() -> AppError>,
    pub requests: Mutex<Vec<(String, String)>>,
}

impl FakeVariableSource {
    pub fn new(catalog: &str, schema: &str) -> Self {
        let variables = DashboardVariables::new(catalog, schema).unwrap();
        Self { result: Ok(variables), requests: Mutex::new(Vec::new()) }
    }

    pub fn failing(error: fn() -> AppError) -> Self {
        Self { result: Err(error), requests: Mutex::new(Vec::new()) }
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl VariableSource for FakeVariableSource {
    fn resolve(&self, target: &str, profile: &str) -> Result<DashboardVariables, AppError> {
        self.requests.lock().unwrap().push((target.to_string(), profile.to_string()));
        match &self.result {
            Ok(variables) => Ok(variables.clone()),
            Err(error) => Err(error()),
        }
    }
}
