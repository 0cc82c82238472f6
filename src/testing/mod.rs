mod fake_bundle_cli;
mod fake_variable_source;

pub use fake_bundle_cli::FakeBundleCli;
pub use fake_variable_source::FakeVariableSource;
