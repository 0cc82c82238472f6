//! Render command implementation.

use std::path::PathBuf;

use crate::app::api::{self, RenderOptions, VariableRequest};
use crate::domain::AppError;

pub fn run_render(
    root: PathBuf,
    request: VariableRequest,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let target = request.target.clone();
    let result = api::render_at(root, RenderOptions { request, template, output })?;

    println!("✅ Using target environment: {}", target);
    println!("✅ Using catalog: {}", result.variables.catalog());
    println!("✅ Using schema: {}", result.variables.schema());

    for (name, count) in &result.replacements {
        if *count == 0 {
            println!("⚠️  Warning: Template contains no {} placeholder", name.placeholder());
        }
    }

    println!(
        "🎉 Successfully created {} with catalog '{}' and schema '{}'",
        result.output.display(),
        result.variables.catalog(),
        result.variables.schema()
    );
    Ok(())
}
