//! Entrance / checkout synthesis for a single visit.

use crate::errors::{AppError, AppResult};
use crate::models::{Event, Location, Origin, Visit};
use crate::utils::time::one_minute;

/// Synthetic rows to add around a visit's observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundaries {
    pub entrance: Event,
    pub checkout: Option<Event>,
}

/// Work out the boundary rows for `visit` without touching it.
///
/// - entrance: always, one minute before the first observation (even when
///   that observation is itself an entrance)
/// - checkout: one minute after the last observation, unless the last
///   observed location already is checkout
pub fn boundaries(visit: &Visit) -> AppResult<Boundaries> {
    let (first, last) = match (visit.first(), visit.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(AppError::EmptyVisit(visit.id.to_string())),
    };

    let entrance = Event {
        visit_id: visit.id.clone(),
        timestamp: first.timestamp - one_minute(),
        location: Location::Entrance,
        origin: Origin::SyntheticEntrance,
    };

    let checkout = (!last.location.is_checkout()).then(|| Event {
        visit_id: visit.id.clone(),
        timestamp: last.timestamp + one_minute(),
        location: Location::Checkout,
        origin: Origin::SyntheticCheckout,
    });

    Ok(Boundaries { entrance, checkout })
}

/// Return a new visit framed by `entrance` … `checkout`.
pub fn synthesize(visit: &Visit) -> AppResult<Visit> {
    let Boundaries { entrance, checkout } = boundaries(visit)?;

    if checkout.is_some() {
        log::debug!("visit {} never reached checkout, adding one", visit.id);
    }

    let mut events = Vec::with_capacity(visit.len() + 2);
    events.push(entrance);
    events.extend(visit.events().iter().cloned());
    events.extend(checkout);

    // already chronological; Visit::new keeps the order stable
    Ok(Visit::new(visit.id.clone(), events))
}
