//! dashvars: resolve bundle catalog/schema variables and substitute them into dashboards.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    RenderOptions, RenderResult, Strategy, UpdateOptions, UpdateResult, VariableRequest, render,
    render_at, resolve, resolve_at, update, update_at,
};
pub use domain::{
    AppError, DashboardVariables, ParameterUpdate, VariableName, apply_parameters,
    substitute_placeholders,
};
