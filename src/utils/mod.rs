pub mod formatting;
pub mod table;
pub mod time;

pub use formatting::mins2readable;
