//! JSON export of a content package.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ContentPackage};

/// File name offered when the user does not pick one.
pub const DEFAULT_EXPORT_FILE: &str = "social_preview.json";

/// Pretty-printed JSON (2-space indent, UTF-8, non-ASCII kept as-is).
pub fn to_json(package: &ContentPackage) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(package)?)
}

/// Write the export to `path`, creating parent directories as needed.
pub fn write(package: &ContentPackage, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut json = to_json(package)?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
