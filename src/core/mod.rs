//! Visit reconstruction: from sparse location events to labelled minutes.

pub mod boundary;
pub mod identify;
pub mod pipeline;
pub mod resample;
pub mod summary;
pub mod transition;
pub mod validate;

pub use pipeline::{Pipeline, ProcessedVisit, Trajectories};
pub use summary::VisitSummary;
