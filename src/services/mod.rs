pub mod adapters;
pub mod dashboard_filesystem;

mod bundle_validate_source;
mod static_config_source;

pub use adapters::databricks_command::DatabricksCommandAdapter;
pub use bundle_validate_source::BundleValidateSource;
pub use static_config_source::StaticConfigSource;
