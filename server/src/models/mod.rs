pub mod event;

pub use event::{Event, Venue, Violation};
