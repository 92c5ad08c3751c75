use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{identify, validate};
use crate::errors::AppResult;
use crate::ingest;
use crate::ui::messages::{info, success};

/// Handle the `validate` command: schema check + visit grouping, no output file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Validate { inputs } = cmd {
        let files = ingest::resolve_inputs(inputs, cfg)?;
        info(format!("Loading {} log file(s)…", files.len()));

        let events = ingest::load_logs(&files, cfg)?;
        let observations = validate::validate(&events)?;
        let visits = identify::identify_visits(observations)?;

        success(format!(
            "{} events OK, {} visits",
            events.len(),
            visits.len()
        ));
    }
    Ok(())
}
