//! Reading and persisting dashboard files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::AppError;

/// Read and parse a dashboard JSON document.
pub fn read_dashboard(path: &Path) -> Result<Value, AppError> {
    if !path.exists() {
        return Err(AppError::DashboardMissing(path.to_path_buf()));
    }
    tracing::debug!(path = %path.display(), "reading dashboard");

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|err| AppError::DashboardParse {
        path: path.to_path_buf(),
        details: err.to_string(),
    })
}

/// Serialize `document` with two-space indentation and replace `path` with it.
pub fn write_dashboard(path: &Path, document: &Value) -> Result<(), AppError> {
    let content = serde_json::to_string_pretty(document).map_err(io::Error::from)?;
    write_atomic(path, &content)
}

/// Read a dashboard template as raw text.
pub fn read_template(path: &Path) -> Result<String, AppError> {
    if !path.exists() {
        return Err(AppError::TemplateMissing(path.to_path_buf()));
    }
    tracing::debug!(path = %path.display(), "reading dashboard template");
    Ok(fs::read_to_string(path)?)
}

/// Write `content` to a sibling temporary file, then rename it over `path`.
///
/// The destination is either fully replaced or left as it was. A read-only
/// destination is rejected, and an existing destination keeps its permissions.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), AppError> {
    let permissions = match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => return Err(write_error(path, err)),
    };
    if permissions.as_ref().is_some_and(|permissions| permissions.readonly()) {
        return Err(AppError::PermissionDenied {
            path: path.to_path_buf(),
            details: "file is read-only".to_string(),
        });
    }

    let staging = staging_path(path);
    tracing::debug!(path = %path.display(), staging = %staging.display(), "writing file");

    let result = fs::write(&staging, content)
        .and_then(|()| match permissions {
            Some(permissions) => fs::set_permissions(&staging, permissions),
            None => Ok(()),
        })
        .and_then(|()| fs::rename(&staging, path));
    if let Err(err) = result {
        let _ = fs::remove_file(&staging);
        return Err(write_error(path, err));
    }
    Ok(())
}

fn write_error(path: &Path, err: io::Error) -> AppError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => AppError::PermissionDenied {
            path: path.to_path_buf(),
            details: err.to_string(),
        },
        _ => AppError::Io(err),
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let file_name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
    path.with_file_name(format!(".{file_name}.dashvars.tmp"))
}
