pub mod availability;
pub mod timestamp;

pub use availability::{AvailabilityResponse, TimeSlot};
pub use timestamp::{SlotTime, TimestampError};
