mod bundle_cli;
mod variable_source;

pub use bundle_cli::BundleCli;
pub use variable_source::VariableSource;
