//! Update command implementation.

use std::path::PathBuf;

use crate::app::api::{self, UpdateOptions, VariableRequest};
use crate::domain::{AppError, VariableName};

pub fn run_update(
    root: PathBuf,
    request: VariableRequest,
    dashboard: Option<PathBuf>,
) -> Result<(), AppError> {
    println!("🔍 Retrieving bundle variables ({} strategy)...", request.strategy);
    let target = request.target.clone();
    let result = api::update_at(root, UpdateOptions { request, dashboard })?;

    println!("✅ Using target environment: {}", target);
    println!("✅ Using catalog: {}", result.variables.catalog());
    println!("✅ Using schema: {}", result.variables.schema());

    for name in VariableName::ALL {
        match result.parameters.updates(name) {
            0 => println!("⚠️  Warning: No {} parameter found to update", name),
            count => println!(
                "✅ Updated {} {} parameter(s) to: {}",
                count,
                name,
                result.variables.get(name)
            ),
        }
    }
    for skipped in &result.parameters.skipped {
        println!("⚠️  Warning: {}", skipped);
    }

    println!(
        "🎉 Successfully updated {} with catalog '{}' and schema '{}'",
        result.dashboard.display(),
        result.variables.catalog(),
        result.variables.schema()
    );
    Ok(())
}
