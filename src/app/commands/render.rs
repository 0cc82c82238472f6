//! Text mode: fill a dashboard template's placeholder tokens and write the result.

use std::path::{Path, PathBuf};

use crate::app::commands::{VariableRequest, resolve};
use crate::domain::{AppError, DashboardVariables, VariableName, substitute_placeholders};
use crate::ports::VariableSource;
use crate::services::dashboard_filesystem::{read_template, write_atomic};

/// Options for the render command.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub request: VariableRequest,
    /// Template to read. Defaults to the configured template.
    pub template: Option<PathBuf>,
    /// File to write. Defaults to the configured output.
    pub output: Option<PathBuf>,
}

/// Result of a render operation.
#[derive(Debug)]
pub struct RenderResult {
    pub template: PathBuf,
    pub output: PathBuf,
    pub variables: DashboardVariables,
    /// Number of placeholder occurrences replaced, per variable.
    pub replacements: Vec<(VariableName, usize)>,
}

impl RenderResult {
    pub fn total_replacements(&self) -> usize {
        self.replacements.iter().map(|(_, count)| count).sum()
    }
}

/// Resolve variables, substitute them into `template`, and write `output`.
///
/// The template itself is never modified.
pub fn execute(
    template: &Path,
    output: &Path,
    source: &dyn VariableSource,
    request: &VariableRequest,
) -> Result<RenderResult, AppError> {
    let variables = resolve::execute(source, request)?;

    let content = read_template(template)?;
    let replacements = VariableName::ALL
        .into_iter()
        .map(|name| (name, content.matches(name.placeholder()).count()))
        .collect();
    let rendered = substitute_placeholders(&content, &variables);

    write_atomic(output, &rendered)?;

    Ok(RenderResult {
        template: template.to_path_buf(),
        output: output.to_path_buf(),
        variables,
        replacements,
    })
}
