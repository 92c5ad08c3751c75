use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Pipeline, VisitSummary};
use crate::errors::AppResult;
use crate::ingest;
use crate::ui::messages::{header, warning};
use crate::utils::formatting::{mins2readable, yes_no};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Visits { inputs } = cmd {
        let files = ingest::resolve_inputs(inputs, cfg)?;
        let events = ingest::load_logs(&files, cfg)?;
        let out = Pipeline::run(&events)?;

        if out.visits.is_empty() {
            warning("No visits found.");
            return Ok(());
        }

        header(format!("{} visits", out.visits.len()));
        println!("{}", render(&out.visits));
    }
    Ok(())
}

fn render(visits: &[VisitSummary]) -> String {
    let mut table = Table::new([
        "visit", "customer", "day", "start", "end", "duration", "observed", "minutes",
        "checkout+",
    ]);

    for v in visits {
        table.add_row(vec![
            v.visit_id.clone(),
            v.customer_no.clone(),
            v.dayname.to_string(),
            v.start.format("%H:%M").to_string(),
            v.end.format("%H:%M").to_string(),
            mins2readable(v.duration_minutes),
            v.observed_events.to_string(),
            v.minutes.to_string(),
            yes_no(v.synthetic_checkout).to_string(),
        ]);
    }

    table.render()
}
