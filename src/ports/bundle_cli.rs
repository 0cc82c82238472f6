use std::path::Path;

use crate::domain::AppError;

/// The external bundle tool.
pub trait BundleCli {
    /// Validate the bundle for `target` using `profile` and return its JSON stdout.
    ///
    /// A non-zero exit surfaces as `AppError::CliFailed` with the stderr classified.
    fn bundle_validate(
        &self,
        project_root: &Path,
        target: &str,
        profile: &str,
    ) -> Result<String, AppError>;
}
