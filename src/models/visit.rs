use super::event::{Event, Origin, VisitId};
use chrono::NaiveDateTime;

/// All events of one customer visit, kept in ascending timestamp order.
///
/// Stages never mutate a `Visit` in place: each one consumes a reference and
/// builds the next value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: VisitId,
    events: Vec<Event>,
}

impl Visit {
    /// Build a visit, sorting the events chronologically.
    /// The sort is stable: events sharing a timestamp keep their log order.
    pub fn new(id: VisitId, mut events: Vec<Event>) -> Self {
        events.sort_by_key(|e| e.timestamp);
        Self { id, events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn first(&self) -> Option<&Event> {
        self.events.first()
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.first().map(|e| e.timestamp)
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.last().map(|e| e.timestamp)
    }

    pub fn duration_minutes(&self) -> i64 {
        match (self.start(), self.end()) {
            (Some(s), Some(e)) => (e - s).num_minutes(),
            _ => 0,
        }
    }

    pub fn observed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.origin == Origin::Observed)
            .count()
    }

    pub fn has_synthetic_checkout(&self) -> bool {
        self.events
            .iter()
            .any(|e| e.origin == Origin::SyntheticCheckout)
    }
}
