// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::TrajectoryRow;
use crate::models::trajectory::HEADERS;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[TrajectoryRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let mut file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut file, rows)?;
    file.flush()?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV. The header is written up front so an empty dataset
/// still carries the column contract.
pub(crate) fn export_csv(rows: &[TrajectoryRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let csv_err = |source| AppError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;

    wtr.write_record(HEADERS).map_err(csv_err)?;

    for row in rows {
        wtr.serialize(row).map_err(csv_err)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
