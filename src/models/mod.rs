pub mod event;
pub mod location;
pub mod raw_event;
pub mod trajectory;
pub mod visit;

pub use event::{Event, Origin, VisitId};
pub use location::Location;
pub use raw_event::{Observation, RawEvent, RawTimestamp};
pub use trajectory::TrajectoryRow;
pub use visit::Visit;
