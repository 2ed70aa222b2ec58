//! Journey progress derivation.
//!
//! Turns one trip snapshot into what a rider wants to know: where they are
//! getting off, which stop is next, how many stops are left, and how long
//! and how far until arrival.
//!
//! Everything here is a pure function of the trip, the configuration and a
//! single `now` instant. Nothing is cached between calls.

mod config;
mod project;
mod resolve;
mod view;

#[cfg(test)]
mod view_tests;

pub use config::{DEFAULT_ALERT_THRESHOLD_SECS, ProgressConfig};
pub use project::{DELAY_SEPARATOR, GET_OUT_NOW, NOT_AVAILABLE, Projector, delay_text};
pub use resolve::{
    format_progress, next_stop, passed_count, resolve_destination, stops_to_destination,
};
pub use view::{JourneyView, JourneyViewBuilder, StopView, build_journey_view, build_stop_views};
