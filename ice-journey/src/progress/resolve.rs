//! Destination resolution and stop counting.
//!
//! All scans walk the stop sequence in journey order and never re-sort it.

use tracing::debug;

use crate::domain::{DomainError, Stop, Trip};

/// Resolve the rider's destination station name.
///
/// Without an override this is the schedule's final station, whether or not
/// it also appears in the stop list. With an override, the first stop whose
/// name matches exactly is used; no match is an error.
pub fn resolve_destination(
    trip: &Trip,
    destination_override: Option<&str>,
) -> Result<String, DomainError> {
    let Some(wanted) = destination_override else {
        return Ok(trip.final_station_name.clone());
    };

    let stop = trip
        .stops
        .iter()
        .find(|s| s.is_named(wanted))
        .ok_or_else(|| DomainError::DestinationNotFound(wanted.to_string()))?;

    debug!(destination = %stop.station, "destination overridden");
    Ok(stop.station.clone())
}

/// Number of stops from the first up to and including the destination.
///
/// If the destination is not in the list, every stop is counted.
pub fn stops_to_destination(stops: &[Stop], destination: &str) -> usize {
    stops
        .iter()
        .position(|s| s.is_named(destination))
        .map_or(stops.len(), |idx| idx + 1)
}

/// Number of stops flagged as passed, across the whole trip.
pub fn passed_count(stops: &[Stop]) -> usize {
    stops.iter().filter(|s| s.passed).count()
}

/// Render progress as `passed/total`.
///
/// Not clamped: with an early destination `passed` may exceed `total`.
pub fn format_progress(passed: usize, stops_to_destination: usize) -> String {
    format!("{passed}/{stops_to_destination}")
}

/// The first stop the train has not yet departed, if any.
pub fn next_stop(stops: &[Stop]) -> Option<&Stop> {
    stops.iter().find(|s| !s.passed)
}
