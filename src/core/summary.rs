//! Per-visit figures reported next to the trajectories.

use crate::models::Visit;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitSummary {
    pub visit_id: String,
    pub customer_no: String,
    pub dayname: &'static str,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
    pub observed_events: usize,
    pub minutes: usize,
    pub synthetic_checkout: bool,
}

impl VisitSummary {
    /// `bounded` is the visit after boundary synthesis, `resampled` the same
    /// visit after resampling. Returns `None` for an empty visit.
    pub fn build(bounded: &Visit, resampled: &Visit) -> Option<Self> {
        let first = bounded.first()?;
        let start = resampled.start()?;
        let end = resampled.end()?;

        Some(Self {
            visit_id: bounded.id.to_string(),
            customer_no: bounded.id.customer_no.clone(),
            dayname: first.dayname(),
            start,
            end,
            duration_minutes: resampled.duration_minutes(),
            observed_events: bounded.observed_count(),
            minutes: resampled.len(),
            synthetic_checkout: bounded.has_synthetic_checkout(),
        })
    }
}
