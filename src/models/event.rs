use super::location::Location;
use crate::utils::time::day_name;
use chrono::{Datelike, NaiveDateTime, Weekday};
use std::cmp::Ordering;
use std::fmt;

/// Composite visit key: the same customer on the same weekday is one visit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitId {
    pub customer_no: String,
    pub weekday: Weekday,
}

impl VisitId {
    pub fn new(customer_no: impl Into<String>, weekday: Weekday) -> Self {
        Self {
            customer_no: customer_no.into(),
            weekday,
        }
    }

    /// Key for an observation taken at `timestamp`.
    pub fn for_observation(customer_no: &str, timestamp: NaiveDateTime) -> Self {
        Self::new(customer_no, timestamp.weekday())
    }
}

impl Ord for VisitId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.customer_no
            .cmp(&other.customer_no)
            .then_with(|| {
                self.weekday
                    .num_days_from_monday()
                    .cmp(&other.weekday.num_days_from_monday())
            })
    }
}

impl PartialOrd for VisitId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VisitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Monday = 0 … Sunday = 6
        write!(
            f,
            "{}_{}",
            self.customer_no,
            self.weekday.num_days_from_monday()
        )
    }
}

/// Where a row of a visit comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read from the location log.
    Observed,
    /// Fabricated one minute before the first observation.
    SyntheticEntrance,
    /// Fabricated one minute after the last observation.
    SyntheticCheckout,
    /// Created by resampling, location carried forward.
    Filled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub visit_id: VisitId,
    pub timestamp: NaiveDateTime,
    pub location: Location,
    pub origin: Origin,
}

impl Event {
    pub fn observed(visit_id: VisitId, timestamp: NaiveDateTime, location: Location) -> Self {
        Self {
            visit_id,
            timestamp,
            location,
            origin: Origin::Observed,
        }
    }

    pub fn customer_no(&self) -> &str {
        &self.visit_id.customer_no
    }

    pub fn weekday(&self) -> Weekday {
        self.visit_id.weekday
    }

    pub fn dayname(&self) -> &'static str {
        day_name(self.visit_id.weekday)
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}
