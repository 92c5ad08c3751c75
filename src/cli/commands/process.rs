use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Pipeline;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::ingest;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        inputs,
        file,
        format,
        force,
    } = cmd
    {
        let files = ingest::resolve_inputs(inputs, cfg)?;
        info(format!("Loading {} log file(s)…", files.len()));

        let events = ingest::load_logs(&files, cfg)?;
        let out = Pipeline::run(&events)?;

        let format: ExportFormat = match format {
            Some(f) => *f,
            None => cfg.default_format.parse()?,
        };
        let path = file
            .clone()
            .unwrap_or_else(|| PathBuf::from(&cfg.output_file));

        ExportLogic::export(&out.rows, format, &path, *force)?;

        success(format!(
            "{} events → {} visits, {} minute rows",
            events.len(),
            out.visits.len(),
            out.rows.len()
        ));
    }
    Ok(())
}
