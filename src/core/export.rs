use crate::core::input::read_log_file;
use crate::core::show::warn_if_unordered;
use crate::errors::AppResult;
use crate::export::{ensure_writable, notify_export_success, write_frags_csv};
use crate::parser::parse_log;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Parse `log_path` and write its frags to `out` as CSV.
    /// Returns the number of rows written.
    pub fn export_csv(log_path: &Path, out: &Path, force: bool) -> AppResult<usize> {
        let log_data = read_log_file(log_path)?;
        let parsed = parse_log(&log_data)?;
        warn_if_unordered(&parsed);

        ensure_writable(out, force)?;
        write_frags_csv(out, &parsed.frags)?;

        notify_export_success("CSV", out);
        Ok(parsed.frags.len())
    }
}
