//! Grouping of validated observations into visits.

use crate::errors::{AppError, AppResult};
use crate::models::{Event, Location, Observation, Visit, VisitId};
use std::collections::BTreeMap;

/// Assign every observation to its visit (`customer_no` + weekday).
///
/// Visits come out in key order. A customer seen on the same weekday of two
/// different weeks ends up in a single visit.
pub fn identify_visits(observations: Vec<Observation>) -> AppResult<Vec<Visit>> {
    let mut groups: BTreeMap<VisitId, Vec<Event>> = BTreeMap::new();

    for obs in observations {
        let id = VisitId::for_observation(&obs.customer_no, obs.timestamp);

        let location = obs
            .location
            .as_deref()
            .and_then(Location::parse)
            .ok_or_else(|| AppError::MissingLocation {
                visit_id: id.to_string(),
                timestamp: obs.timestamp,
            })?;

        groups
            .entry(id.clone())
            .or_default()
            .push(Event::observed(id, obs.timestamp, location));
    }

    log::debug!("identified {} visits", groups.len());

    Ok(groups
        .into_iter()
        .map(|(id, events)| Visit::new(id, events))
        .collect())
}
