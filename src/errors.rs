//! Unified application error type.
//! All modules (ingest, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDateTime;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    // ---------------------------
    // Pipeline errors
    // ---------------------------
    #[error("Schema error: timestamp of row {row} is {found}, expected a datetime ({value})")]
    Schema {
        row: usize,
        found: &'static str,
        value: String,
    },

    #[error("Empty visit: {0} has no events to synthesize boundaries from")]
    EmptyVisit(String),

    #[error("Missing location for visit {visit_id} at {timestamp}")]
    MissingLocation {
        visit_id: String,
        timestamp: NaiveDateTime,
    },

    #[error("No input logs found in {0}")]
    NoInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
