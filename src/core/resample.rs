//! One-minute resampling of a boundary-complete visit.

use crate::errors::{AppError, AppResult};
use crate::models::{Event, Origin, Visit};
use crate::utils::time::{floor_minute, minutes_between, one_minute};

/// Expand `visit` to one event per minute, entrance to checkout inclusive.
///
/// Timestamps are truncated to the minute. When several events share a
/// minute the latest one wins; a minute with no event carries forward the
/// location of the previous minute. Location is never interpolated.
pub fn resample(visit: &Visit) -> AppResult<Visit> {
    let (start, end) = match (visit.start(), visit.end()) {
        (Some(s), Some(e)) => (floor_minute(s), floor_minute(e)),
        _ => return Err(AppError::EmptyVisit(visit.id.to_string())),
    };

    let capacity = minutes_between(start, end).max(0) as usize + 1;
    let mut out: Vec<Event> = Vec::with_capacity(capacity);

    let mut pending = visit.events().iter().peekable();
    let mut tick = start;

    while tick <= end {
        let mut here: Option<&Event> = None;
        while let Some(ev) = pending.next_if(|e| floor_minute(e.timestamp) <= tick) {
            here = Some(ev);
        }

        let row = match (here, out.last()) {
            (Some(ev), _) => Event {
                timestamp: tick,
                ..ev.clone()
            },
            (None, Some(prev)) => Event {
                visit_id: prev.visit_id.clone(),
                timestamp: tick,
                location: prev.location.clone(),
                origin: Origin::Filled,
            },
            // the first tick always holds the visit's first event
            (None, None) => return Err(AppError::EmptyVisit(visit.id.to_string())),
        };

        out.push(row);
        tick += one_minute();
    }

    log::debug!(
        "resampled visit {}: {} events → {} minutes",
        visit.id,
        visit.len(),
        out.len()
    );

    Ok(Visit::new(visit.id.clone(), out))
}
