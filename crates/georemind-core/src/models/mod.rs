//! Data models for georemind

mod draft;
mod location;
mod reminder;

pub use draft::DraftReminder;
pub use location::{LatLng, MapSelection, PointOfInterest};
pub use reminder::{Reminder, ReminderId};
