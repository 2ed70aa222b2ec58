//! Stop types for a train trip.
//!
//! A `Stop` is one station on the trip's schedule, carrying its arrival
//! times, track assignment, distance along the route and any reported
//! delay reasons.

use super::EpochMillis;

/// Scheduled and actual track at a stop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Track {
    /// Track from the timetable
    pub scheduled: String,
    /// Track the train is actually using
    pub actual: String,
}

impl Track {
    /// Creates a track assignment where actual matches scheduled.
    pub fn new(track: impl Into<String>) -> Self {
        let track = track.into();
        Self {
            scheduled: track.clone(),
            actual: track,
        }
    }
}

/// One reported reason for a delay at a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayReason {
    /// Machine-readable reason code (may be empty)
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl DelayReason {
    /// Creates a delay reason.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// A station stop on the trip.
///
/// Stops are kept in schedule order by their `Trip`; the position in that
/// sequence is the journey order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// Station display name, unique within one trip
    pub station: String,
    /// Scheduled arrival
    pub scheduled_arrival: Option<EpochMillis>,
    /// Actual (or currently forecast) arrival
    pub actual_arrival: Option<EpochMillis>,
    /// Track assignment
    pub track: Track,
    /// Meters from the start of the journey
    pub distance_from_start: i64,
    /// Whether the train has already departed this stop
    pub passed: bool,
    /// Delay reasons in reporting order
    pub delay_reasons: Vec<DelayReason>,
}

impl Stop {
    /// Creates an unpassed stop with no times, track or delays.
    pub fn new(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            scheduled_arrival: None,
            actual_arrival: None,
            track: Track::default(),
            distance_from_start: 0,
            passed: false,
            delay_reasons: Vec::new(),
        }
    }

    /// Returns true if this stop's station name is exactly `name`.
    pub fn is_named(&self, name: &str) -> bool {
        self.station == name
    }
}
