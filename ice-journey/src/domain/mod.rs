//! Domain types for on-train journey data.
//!
//! These types hold one snapshot of a trip and the train's status after
//! conversion from the portal's wire format. They are rebuilt on every
//! fetch and never mutated afterwards.

mod error;
mod status;
mod stop;
mod time;
mod train;
mod trip;

pub use error::DomainError;
pub use status::Status;
pub use stop::{DelayReason, Stop, Track};
pub use time::{EpochMillis, format_duration};
pub use train::TrainId;
pub use trip::Trip;
