//! Journey views: the display-ready result of progress derivation.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{DomainError, Trip};

use super::config::ProgressConfig;
use super::project::{NOT_AVAILABLE, Projector, delay_text};
use super::resolve::{
    format_progress, next_stop, passed_count, resolve_destination, stops_to_destination,
};

/// Trip-level progress towards the rider's destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyView {
    /// Train identifier, e.g. "ICE1009"
    pub train: String,
    /// Resolved destination (override or final station)
    pub your_destination: String,
    /// Final station of the schedule
    pub final_destination: String,
    /// First stop not yet passed, or `-`
    pub next_stop: String,
    /// Stops the train has departed from
    pub passed_count: usize,
    /// Stops up to and including the destination
    pub stops_to_destination: usize,
    /// `passed/stops_to_destination`
    pub progress: String,
    /// Countdown to arrival at the destination
    pub time_to_arrival: String,
    /// Kilometers left to the destination
    pub remaining_distance: String,
    /// Track the train arrives on at the destination
    pub arrival_track: String,
}

/// One row of the stop list.
///
/// Derived fields are empty for the origin stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopView {
    pub station: String,
    pub track: String,
    pub time_to_arrival: String,
    pub remaining_distance: String,
    pub delay_reasons: String,
}

/// Builds journey and stop views for one trip snapshot.
///
/// The destination is resolved once at construction, and `now` is fixed
/// for everything the builder produces.
#[derive(Debug, Clone)]
pub struct JourneyViewBuilder<'a> {
    trip: &'a Trip,
    destination: String,
    config: ProgressConfig,
    now: DateTime<Utc>,
}

impl<'a> JourneyViewBuilder<'a> {
    /// Resolve the destination for `trip` and prepare to build views.
    ///
    /// Fails if the configured destination override is not a stop.
    pub fn new(
        trip: &'a Trip,
        config: &ProgressConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let destination = resolve_destination(trip, config.destination_override.as_deref())?;
        debug!(%destination, train = %trip.train, "building journey view");

        Ok(Self {
            trip,
            destination,
            config: config.clone(),
            now,
        })
    }

    /// The resolved destination station name.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    fn projector(&self) -> Projector<'_> {
        Projector::new(
            self.trip,
            &self.destination,
            self.now,
            self.config.alert_threshold(),
        )
    }

    /// Trip-level view.
    ///
    /// Countdown, distance and track come from the destination stop; if it
    /// isn't in the stop list they are `-`.
    pub fn journey_view(&self) -> JourneyView {
        let stops = &self.trip.stops;
        let passed = passed_count(stops);
        let total = stops_to_destination(stops, &self.destination);
        let projector = self.projector();

        let (time_to_arrival, remaining_distance, arrival_track) =
            match self.trip.find_stop(&self.destination) {
                Some((_, stop)) => (
                    projector.arrival_countdown(stop),
                    projector.remaining_distance(stop),
                    stop.track.actual.clone(),
                ),
                None => (
                    NOT_AVAILABLE.to_string(),
                    NOT_AVAILABLE.to_string(),
                    NOT_AVAILABLE.to_string(),
                ),
            };

        JourneyView {
            train: self.trip.train.to_string(),
            your_destination: self.destination.clone(),
            final_destination: self.trip.final_station_name.clone(),
            next_stop: next_stop(stops)
                .map_or_else(|| NOT_AVAILABLE.to_string(), |s| s.station.clone()),
            passed_count: passed,
            stops_to_destination: total,
            progress: format_progress(passed, total),
            time_to_arrival,
            remaining_distance,
            arrival_track,
        }
    }

    /// One row per stop, from the origin up to and including the destination.
    pub fn stop_views(&self) -> Vec<StopView> {
        let projector = self.projector();
        let count = stops_to_destination(&self.trip.stops, &self.destination);

        self.trip
            .stops
            .iter()
            .take(count)
            .enumerate()
            .map(|(idx, stop)| {
                let is_origin = idx == 0;
                StopView {
                    station: stop.station.clone(),
                    track: stop.track.actual.clone(),
                    time_to_arrival: if is_origin {
                        String::new()
                    } else {
                        projector.arrival_countdown(stop)
                    },
                    remaining_distance: if is_origin {
                        String::new()
                    } else {
                        projector.remaining_distance(stop)
                    },
                    delay_reasons: if is_origin {
                        String::new()
                    } else {
                        delay_text(stop)
                    },
                }
            })
            .collect()
    }
}

/// Build the trip-level view in one call.
pub fn build_journey_view(
    trip: &Trip,
    config: &ProgressConfig,
    now: DateTime<Utc>,
) -> Result<JourneyView, DomainError> {
    Ok(JourneyViewBuilder::new(trip, config, now)?.journey_view())
}

/// Build the stop list in one call.
pub fn build_stop_views(
    trip: &Trip,
    config: &ProgressConfig,
    now: DateTime<Utc>,
) -> Result<Vec<StopView>, DomainError> {
    Ok(JourneyViewBuilder::new(trip, config, now)?.stop_views())
}
