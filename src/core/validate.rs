//! Precondition check on the loaded batch: every timestamp must be a real
//! datetime before anything is grouped or sorted by it.

use crate::errors::{AppError, AppResult};
use crate::models::{Observation, RawEvent};

/// Reject the whole batch if any timestamp is not chronological.
///
/// No partial result: the first offending row aborts the run.
pub fn validate(events: &[RawEvent]) -> AppResult<Vec<Observation>> {
    let mut out = Vec::with_capacity(events.len());

    for (row, ev) in events.iter().enumerate() {
        let timestamp = ev.timestamp.as_datetime().ok_or_else(|| AppError::Schema {
            row,
            found: ev.timestamp.kind(),
            value: ev.timestamp.to_string(),
        })?;

        out.push(Observation {
            customer_no: ev.customer_no.clone(),
            timestamp,
            location: ev.location.clone(),
        });
    }

    log::debug!("validated {} events", out.len());
    Ok(out)
}
