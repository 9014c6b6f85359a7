use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Read a whole log file. Engine logs are not guaranteed to be valid UTF-8,
/// so invalid bytes are replaced instead of failing the read.
pub fn read_log_file(path: &Path) -> AppResult<String> {
    if !path.is_file() {
        return Err(AppError::FileAccess(format!(
            "No such file: '{}'",
            path.display()
        )));
    }

    let bytes = fs::read(path)
        .map_err(|e| AppError::FileAccess(format!("'{}': {e}", path.display())))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
