use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{RawEvent, RawTimestamp};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::path::Path;

/// Columns of a daily log; anything else in the file is ignored.
#[derive(Debug, Deserialize)]
struct LogRow {
    timestamp: String,
    customer_no: String,
    location: Option<String>,
}

/// Read one daily log (`timestamp;customer_no;location`).
///
/// Timestamps are parsed with the configured formats; cells that do not
/// parse are kept as text or numbers so validation can reject them.
pub fn read_log(path: &Path, cfg: &Config) -> AppResult<Vec<RawEvent>> {
    let csv_err = |source| AppError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .delimiter(cfg.separator()?)
        .trim(Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    let mut out = Vec::new();
    for row in rdr.deserialize::<LogRow>() {
        let row = row.map_err(csv_err)?;
        out.push(RawEvent {
            customer_no: row.customer_no,
            timestamp: RawTimestamp::parse(&row.timestamp, &cfg.timestamp_formats),
            location: row.location.filter(|l| !l.is_empty()),
        });
    }

    Ok(out)
}
