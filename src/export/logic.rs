// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::TrajectoryRow;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of trajectory rows.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `rows` to `path` in the requested format.
    ///
    /// - `format`: csv | json | xlsx
    /// - `force`: overwrite an existing file without asking
    ///
    /// The file is written even without rows (header only / `[]`).
    pub fn export(
        rows: &[TrajectoryRow],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        if rows.is_empty() {
            warning("No trajectory rows: writing an empty dataset.");
        }

        ensure_writable(path, force)?;
        ensure_parent_dir(path)?;

        log::debug!(
            "exporting {} rows as {} to {}",
            rows.len(),
            format.as_str(),
            path.display()
        );

        match format {
            ExportFormat::Csv => export_csv(rows, path)?,
            ExportFormat::Json => export_json(rows, path)?,
            ExportFormat::Xlsx => export_xlsx(rows, path)?,
        }

        Ok(())
    }
}
