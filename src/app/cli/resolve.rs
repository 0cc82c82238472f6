//! Resolve command implementation.

use std::io;
use std::path::PathBuf;

use crate::app::api::{self, VariableRequest};
use crate::domain::AppError;

pub fn run_resolve(root: PathBuf, request: VariableRequest, json: bool) -> Result<(), AppError> {
    let variables = api::resolve_at(root, request)?;

    if json {
        let rendered = serde_json::to_string_pretty(&variables).map_err(io::Error::from)?;
        println!("{}", rendered);
    } else {
        println!("catalog={}", variables.catalog());
        println!("schema={}", variables.schema());
    }
    Ok(())
}
