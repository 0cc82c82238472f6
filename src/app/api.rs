//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::commands::{render, resolve, update};
use crate::app::config::locate_project_root;

pub use crate::app::commands::render::{RenderOptions, RenderResult};
pub use crate::app::commands::update::{UpdateOptions, UpdateResult};
pub use crate::app::commands::{Strategy, VariableRequest};
pub use crate::domain::{AppError, DashboardVariables};

/// Project root for the current working directory.
pub fn current_project_root() -> Result<PathBuf, AppError> {
    Ok(locate_project_root(&std::env::current_dir()?))
}

/// Resolve catalog and schema for the project in the current directory.
pub fn resolve(request: VariableRequest) -> Result<DashboardVariables, AppError> {
    resolve_at(current_project_root()?, request)
}

/// Resolve catalog and schema for the project at `root`.
pub fn resolve_at(
    root: impl Into<PathBuf>,
    request: VariableRequest,
) -> Result<DashboardVariables, AppError> {
    let ctx = AppContext::load(root.into())?;
    let source = ctx.variable_source(request.strategy, &ctx.dashboard());
    resolve::execute(source.as_ref(), &request)
}

/// Update the dashboard of the project in the current directory.
pub fn update(options: UpdateOptions) -> Result<UpdateResult, AppError> {
    update_at(current_project_root()?, options)
}

/// Update the dashboard parameters of the project at `root` in place.
pub fn update_at(
    root: impl Into<PathBuf>,
    options: UpdateOptions,
) -> Result<UpdateResult, AppError> {
    let ctx = AppContext::load(root.into())?;
    let dashboard = path_or(&ctx, options.dashboard.as_deref(), ctx.dashboard());
    let source = ctx.variable_source(options.request.strategy, &dashboard);
    update::execute(&dashboard, source.as_ref(), &options.request)
}

/// Render the dashboard template of the project in the current directory.
pub fn render(options: RenderOptions) -> Result<RenderResult, AppError> {
    render_at(current_project_root()?, options)
}

/// Render the dashboard template of the project at `root`.
pub fn render_at(
    root: impl Into<PathBuf>,
    options: RenderOptions,
) -> Result<RenderResult, AppError> {
    let ctx = AppContext::load(root.into())?;
    let template = path_or(&ctx, options.template.as_deref(), ctx.template());
    let output = path_or(&ctx, options.output.as_deref(), ctx.output());
    let source = ctx.variable_source(options.request.strategy, &ctx.dashboard());
    render::execute(&template, &output, source.as_ref(), &options.request)
}

fn path_or(ctx: &AppContext, path: Option<&Path>, default: PathBuf) -> PathBuf {
    path.map(|path| ctx.resolve_path(path)).unwrap_or(default)
}
