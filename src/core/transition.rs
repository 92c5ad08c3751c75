use crate::models::{Location, TrajectoryRow, Visit};

/// Attach to every minute the location of the following minute.
/// The last minute of a visit points to checkout.
pub fn label(visit: &Visit) -> Vec<TrajectoryRow> {
    let events = visit.events();

    events
        .iter()
        .enumerate()
        .map(|(i, ev)| {
            let next = events
                .get(i + 1)
                .map(|n| n.location.clone())
                .unwrap_or(Location::Checkout);
            TrajectoryRow::from_event(ev, next)
        })
        .collect()
}
