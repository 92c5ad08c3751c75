use super::event::{Event, Origin};
use super::location::Location;
use crate::utils::time::ts_serde;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One minute of one visit, the unit handed to the exporters.
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrajectoryRow {
    pub visit_id: String,
    pub customer_no: String,
    pub weekday: u32,
    pub dayname: &'static str,
    #[serde(serialize_with = "ts_serde::serialize")]
    pub timestamp: NaiveDateTime,
    pub location: Location,
    pub location_next: Location,

    #[serde(skip)]
    pub origin: Origin,
}

impl TrajectoryRow {
    pub fn from_event(ev: &Event, location_next: Location) -> Self {
        Self {
            visit_id: ev.visit_id.to_string(),
            customer_no: ev.customer_no().to_string(),
            weekday: ev.weekday().num_days_from_monday(),
            dayname: ev.dayname(),
            timestamp: ev.timestamp,
            location: ev.location.clone(),
            location_next,
            origin: ev.origin,
        }
    }
}

/// Output columns, in order.
pub const HEADERS: [&str; 7] = [
    "visit_id",
    "customer_no",
    "weekday",
    "dayname",
    "timestamp",
    "location",
    "location_next",
];
