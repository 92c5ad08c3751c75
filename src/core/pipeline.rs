use crate::core::summary::VisitSummary;
use crate::core::{boundary, identify, resample, transition, validate};
use crate::errors::{AppError, AppResult};
use crate::models::{RawEvent, TrajectoryRow, Visit};
use rayon::prelude::*;

/// Result of one visit going through synthesis, resampling and labeling.
#[derive(Debug, Clone)]
pub struct ProcessedVisit {
    pub summary: VisitSummary,
    pub rows: Vec<TrajectoryRow>,
}

/// Whole-batch output: rows of all visits, plus one summary per visit.
#[derive(Debug, Default, Clone)]
pub struct Trajectories {
    pub visits: Vec<VisitSummary>,
    pub rows: Vec<TrajectoryRow>,
}

impl Trajectories {
    pub fn rows_of<'a>(&'a self, visit_id: &'a str) -> impl Iterator<Item = &'a TrajectoryRow> {
        self.rows.iter().filter(move |r| r.visit_id == visit_id)
    }
}

pub struct Pipeline;

impl Pipeline {
    /// Validate → identify → synthesize → resample → label.
    ///
    /// Visits are processed in parallel; the output keeps visit-key order,
    /// rows ascending by minute within each visit.
    pub fn run(events: &[RawEvent]) -> AppResult<Trajectories> {
        let observations = validate::validate(events)?;

        if observations.is_empty() {
            log::warn!("empty batch, nothing to resample");
            return Ok(Trajectories::default());
        }

        let visits = identify::identify_visits(observations)?;

        let processed: Vec<ProcessedVisit> = visits
            .par_iter()
            .map(Self::process_visit)
            .collect::<AppResult<_>>()?;

        let mut out = Trajectories {
            visits: Vec::with_capacity(processed.len()),
            rows: Vec::with_capacity(processed.iter().map(|p| p.rows.len()).sum()),
        };

        for p in processed {
            out.visits.push(p.summary);
            out.rows.extend(p.rows);
        }

        log::info!(
            "processed {} events into {} visits, {} minute rows",
            events.len(),
            out.visits.len(),
            out.rows.len()
        );

        Ok(out)
    }

    /// Per-visit part of the pipeline; needs nothing from other visits.
    pub fn process_visit(visit: &Visit) -> AppResult<ProcessedVisit> {
        let bounded = boundary::synthesize(visit)?;
        let resampled = resample::resample(&bounded)?;
        let rows = transition::label(&resampled);

        let summary = VisitSummary::build(&bounded, &resampled)
            .ok_or_else(|| AppError::EmptyVisit(visit.id.to_string()))?;

        Ok(ProcessedVisit { summary, rows })
    }
}
