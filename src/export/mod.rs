// src/export/mod.rs

pub mod csv;
mod fs_utils;

pub use csv::{frags_to_csv_string, read_frags_csv, write_frags_csv};
pub use fs_utils::ensure_writable;

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
