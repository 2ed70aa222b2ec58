//! Time, distance and delay projections for a single stop.
//!
//! Every projection is relative to one `now` instant and one resolved
//! destination, both fixed when the `Projector` is built, so all rows of
//! one view agree with each other.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{Stop, Trip, format_duration};

/// Shown when a value does not apply (arrival passed, distance covered,
/// no delays, stop not found).
pub const NOT_AVAILABLE: &str = "-";

/// Shown instead of a countdown when the destination is imminent.
pub const GET_OUT_NOW: &str = "GET OUT NOW";

/// Separator between delay reason messages.
pub const DELAY_SEPARATOR: &str = "; ";

/// Projects arrival countdowns and remaining distances for stops of a trip.
#[derive(Debug, Clone)]
pub struct Projector<'a> {
    trip: &'a Trip,
    destination: &'a str,
    now: DateTime<Utc>,
    alert_threshold: Duration,
}

impl<'a> Projector<'a> {
    /// Create a projector for `trip` as seen at `now`.
    pub fn new(
        trip: &'a Trip,
        destination: &'a str,
        now: DateTime<Utc>,
        alert_threshold: Duration,
    ) -> Self {
        Self {
            trip,
            destination,
            now,
            alert_threshold,
        }
    }

    /// Time left until the train arrives at `stop`, if its arrival is known.
    ///
    /// Negative when the arrival lies in the past.
    pub fn time_until_arrival(&self, stop: &Stop) -> Option<Duration> {
        let arrival = stop.actual_arrival?.to_instant()?;
        Some(arrival.signed_duration_since(self.now))
    }

    /// Arrival countdown text for `stop`.
    ///
    /// `-` once the arrival has passed (or is unknown), an alert when the
    /// destination is less than the threshold away, otherwise the remaining
    /// time at whole-second resolution.
    pub fn arrival_countdown(&self, stop: &Stop) -> String {
        let Some(remaining) = self.time_until_arrival(stop) else {
            return NOT_AVAILABLE.to_string();
        };

        if remaining < Duration::zero() {
            return NOT_AVAILABLE.to_string();
        }

        if stop.is_named(self.destination) && remaining < self.alert_threshold {
            return GET_OUT_NOW.to_string();
        }

        format_duration(remaining)
    }

    /// Meters left to `stop`. Negative once the stop is behind the train.
    pub fn remaining_meters(&self, stop: &Stop) -> i64 {
        stop.distance_from_start - self.trip.traveled_distance()
    }

    /// Remaining distance text for `stop`: whole kilometers, truncated.
    ///
    /// `-` when that rounds to zero or below.
    pub fn remaining_distance(&self, stop: &Stop) -> String {
        let kilometers = self.remaining_meters(stop) / 1000;
        if kilometers <= 0 {
            return NOT_AVAILABLE.to_string();
        }
        format!("{kilometers} km")
    }
}

/// Delay reasons for `stop` joined in reporting order, or `-` if none.
pub fn delay_text(stop: &Stop) -> String {
    if stop.delay_reasons.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    stop.delay_reasons
        .iter()
        .map(|r| r.message.as_str())
        .collect::<Vec<_>>()
        .join(DELAY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DelayReason, EpochMillis, TrainId};

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 250_000_000).unwrap()
    }

    fn at(offset: Duration) -> EpochMillis {
        EpochMillis::from_instant(DateTime::from_timestamp(1_700_000_000, 0).unwrap() + offset)
    }

    fn stop(name: &str, arrival: Option<Duration>, distance: i64) -> Stop {
        let mut stop = Stop::new(name);
        stop.actual_arrival = arrival.map(at);
        stop.distance_from_start = distance;
        stop
    }

    fn trip(position: i64, since_last: i64) -> Trip {
        let mut trip = Trip::new(
            TrainId::new("ICE", "1"),
            vec![stop("A", None, 0), stop("B", None, 50_000)],
        );
        trip.actual_position = position;
        trip.distance_from_last_stop = since_last;
        trip
    }

    fn projector<'a>(trip: &'a Trip, destination: &'a str) -> Projector<'a> {
        Projector::new(trip, destination, now(), Duration::minutes(3))
    }

    #[test]
    fn countdown_past_arrival() {
        let t = trip(0, 0);
        let p = projector(&t, "B");
        assert_eq!(p.arrival_countdown(&stop("B", Some(Duration::minutes(-1)), 0)), "-");
        assert_eq!(p.arrival_countdown(&stop("X", Some(Duration::hours(-2)), 0)), "-");
    }

    #[test]
    fn countdown_unknown_arrival() {
        let t = trip(0, 0);
        let p = projector(&t, "B");
        assert_eq!(p.arrival_countdown(&stop("X", None, 0)), "-");
    }

    #[test]
    fn countdown_alert_only_at_destination() {
        let t = trip(0, 0);
        let p = projector(&t, "B");
        let soon = Some(Duration::minutes(2));
        assert_eq!(p.arrival_countdown(&stop("B", soon, 0)), GET_OUT_NOW);
        // 2 minutes minus the 250ms `now` is past the whole second.
        assert_eq!(p.arrival_countdown(&stop("X", soon, 0)), "1m59s");
    }

    #[test]
    fn countdown_at_threshold_is_numeric() {
        let t = trip(0, 0);
        let p = Projector::new(
            &t,
            "B",
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            Duration::minutes(3),
        );
        assert_eq!(
            p.arrival_countdown(&stop("B", Some(Duration::minutes(3)), 0)),
            "3m0s"
        );
    }

    #[test]
    fn countdown_truncates_to_seconds() {
        let t = trip(0, 0);
        let p = projector(&t, "B");
        let arrival = Some(Duration::hours(1) + Duration::minutes(2) + Duration::seconds(3));
        assert_eq!(p.arrival_countdown(&stop("X", arrival, 0)), "1h2m2s");
    }

    #[test]
    fn time_until_arrival_signed() {
        let t = trip(0, 0);
        let p = projector(&t, "B");
        let past = p.time_until_arrival(&stop("X", Some(Duration::seconds(-10)), 0));
        assert!(past.unwrap() < Duration::zero());
        assert!(p.time_until_arrival(&stop("X", None, 0)).is_none());
    }

    #[test]
    fn distance_example() {
        let t = trip(12_000, 0);
        let p = projector(&t, "B");
        assert_eq!(p.remaining_meters(&t.stops[1]), 38_000);
        assert_eq!(p.remaining_distance(&t.stops[1]), "38 km");
    }

    #[test]
    fn distance_behind_train() {
        let t = trip(51_000, 0);
        let p = projector(&t, "B");
        assert_eq!(p.remaining_distance(&t.stops[1]), "-");
    }

    #[test]
    fn distance_under_one_km() {
        let t = trip(49_001, 0);
        let p = projector(&t, "B");
        assert_eq!(p.remaining_meters(&t.stops[1]), 999);
        assert_eq!(p.remaining_distance(&t.stops[1]), "-");
    }

    #[test]
    fn distance_counts_both_position_terms() {
        let t = trip(10_000, 2_000);
        let p = projector(&t, "B");
        assert_eq!(p.remaining_distance(&t.stops[1]), "38 km");
    }

    #[test]
    fn delay_text_empty() {
        assert_eq!(delay_text(&Stop::new("A")), "-");
    }

    #[test]
    fn delay_text_joined_in_order() {
        let mut s = Stop::new("A");
        s.delay_reasons = vec![
            DelayReason::new("1", "Signalstörung"),
            DelayReason::new("2", "Reparatur am Zug"),
            DelayReason::new("1", "Signalstörung"),
        ];
        assert_eq!(
            delay_text(&s),
            "Signalstörung; Reparatur am Zug; Signalstörung"
        );
    }
}
