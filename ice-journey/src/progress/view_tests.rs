//! Unit tests for journey and stop views.

use chrono::{DateTime, Duration, Utc};

use super::*;
use crate::domain::{DelayReason, DomainError, EpochMillis, Stop, Track, TrainId, Trip};

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn arriving_in(offset: Duration) -> Option<EpochMillis> {
    Some(EpochMillis::from_instant(now() + offset))
}

fn make_stop(
    name: &str,
    passed: bool,
    arrival: Option<Duration>,
    distance: i64,
    track: &str,
) -> Stop {
    let mut stop = Stop::new(name);
    stop.passed = passed;
    stop.actual_arrival = arrival.and_then(arriving_in);
    stop.distance_from_start = distance;
    stop.track = Track::new(track);
    stop
}

/// Berlin → Hamburg with the train between Spandau and Wittenberge.
fn make_trip() -> Trip {
    let mut berlin = make_stop("Berlin Hbf", true, Some(Duration::minutes(-40)), 0, "7");
    berlin
        .delay_reasons
        .push(DelayReason::new("1", "Verspätung aus vorheriger Fahrt"));

    let spandau = make_stop(
        "Berlin-Spandau",
        true,
        Some(Duration::minutes(-25)),
        15_000,
        "3",
    );

    let mut wittenberge = make_stop(
        "Wittenberge",
        false,
        Some(Duration::minutes(30)),
        140_000,
        "2",
    );
    wittenberge
        .delay_reasons
        .push(DelayReason::new("38", "Technische Störung am Zug"));
    wittenberge
        .delay_reasons
        .push(DelayReason::new("9", "Bauarbeiten"));

    let ludwigslust = make_stop(
        "Ludwigslust",
        false,
        Some(Duration::minutes(50)),
        175_000,
        "1",
    );
    let hamburg = make_stop(
        "Hamburg Hbf",
        false,
        Some(Duration::minutes(100) + Duration::seconds(7)),
        285_000,
        "14",
    );

    let mut trip = Trip::new(
        TrainId::new("ICE", "1009"),
        vec![berlin, spandau, wittenberge, ludwigslust, hamburg],
    );
    trip.actual_position = 40_000;
    trip.distance_from_last_stop = 2_000;
    trip
}

fn override_to(name: &str) -> ProgressConfig {
    ProgressConfig::new(Some(name.to_string()))
}

// Journey view

#[test]
fn journey_view_to_final_station() {
    let trip = make_trip();
    let view = build_journey_view(&trip, &ProgressConfig::default(), now()).unwrap();

    assert_eq!(view.train, "ICE1009");
    assert_eq!(view.your_destination, "Hamburg Hbf");
    assert_eq!(view.final_destination, "Hamburg Hbf");
    assert_eq!(view.next_stop, "Wittenberge");
    assert_eq!(view.passed_count, 2);
    assert_eq!(view.stops_to_destination, 5);
    assert_eq!(view.progress, "2/5");
    assert_eq!(view.time_to_arrival, "1h40m7s");
    // 285000 - (40000 + 2000) = 243000
    assert_eq!(view.remaining_distance, "243 km");
    assert_eq!(view.arrival_track, "14");
}

#[test]
fn journey_view_with_override() {
    let trip = make_trip();
    let view = build_journey_view(&trip, &override_to("Wittenberge"), now()).unwrap();

    assert_eq!(view.your_destination, "Wittenberge");
    assert_eq!(view.final_destination, "Hamburg Hbf");
    assert_eq!(view.stops_to_destination, 3);
    assert_eq!(view.progress, "2/3");
    assert_eq!(view.time_to_arrival, "30m0s");
    assert_eq!(view.remaining_distance, "98 km");
    assert_eq!(view.arrival_track, "2");
}

#[test]
fn journey_view_unknown_override_fails() {
    let trip = make_trip();
    let result = build_journey_view(&trip, &override_to("Zürich HB"), now());
    assert_eq!(
        result,
        Err(DomainError::DestinationNotFound("Zürich HB".into()))
    );
}

#[test]
fn journey_view_override_to_passed_station() {
    let trip = make_trip();
    let view = build_journey_view(&trip, &override_to("Berlin Hbf"), now()).unwrap();

    assert_eq!(view.stops_to_destination, 1);
    assert_eq!(view.progress, "2/1");
    assert_eq!(view.time_to_arrival, "-");
    assert_eq!(view.remaining_distance, "-");
    assert_eq!(view.arrival_track, "7");
}

#[test]
fn journey_view_imminent_destination() {
    let mut trip = make_trip();
    trip.stops[2].actual_arrival = arriving_in(Duration::seconds(150));
    let view = build_journey_view(&trip, &override_to("Wittenberge"), now()).unwrap();
    assert_eq!(view.time_to_arrival, GET_OUT_NOW);
}

#[test]
fn journey_view_final_station_not_in_stop_list() {
    let mut trip = make_trip();
    trip.final_station_name = "Hamburg-Altona".into();
    let view = build_journey_view(&trip, &ProgressConfig::default(), now()).unwrap();

    assert_eq!(view.your_destination, "Hamburg-Altona");
    assert_eq!(view.stops_to_destination, 5);
    assert_eq!(view.progress, "2/5");
    assert_eq!(view.time_to_arrival, "-");
    assert_eq!(view.remaining_distance, "-");
    assert_eq!(view.arrival_track, "-");
}

#[test]
fn journey_view_all_passed() {
    let mut trip = make_trip();
    for stop in &mut trip.stops {
        stop.passed = true;
    }
    let view = build_journey_view(&trip, &ProgressConfig::default(), now()).unwrap();

    assert_eq!(view.next_stop, "-");
    assert_eq!(view.progress, "5/5");
}

// Stop views

#[test]
fn stop_views_up_to_final_station() {
    let trip = make_trip();
    let rows = build_stop_views(&trip, &ProgressConfig::default(), now()).unwrap();

    let stations: Vec<_> = rows.iter().map(|r| r.station.as_str()).collect();
    assert_eq!(
        stations,
        [
            "Berlin Hbf",
            "Berlin-Spandau",
            "Wittenberge",
            "Ludwigslust",
            "Hamburg Hbf"
        ]
    );

    assert_eq!(rows[1].time_to_arrival, "-");
    assert_eq!(rows[1].remaining_distance, "-");
    assert_eq!(rows[1].delay_reasons, "-");
    assert_eq!(rows[1].track, "3");

    assert_eq!(rows[2].time_to_arrival, "30m0s");
    assert_eq!(rows[2].remaining_distance, "98 km");
    assert_eq!(
        rows[2].delay_reasons,
        "Technische Störung am Zug; Bauarbeiten"
    );

    assert_eq!(rows[3].time_to_arrival, "50m0s");
    assert_eq!(rows[3].remaining_distance, "133 km");

    assert_eq!(rows[4].time_to_arrival, "1h40m7s");
    assert_eq!(rows[4].remaining_distance, "243 km");
    assert_eq!(rows[4].track, "14");
}

#[test]
fn stop_views_origin_suppressed() {
    let trip = make_trip();
    let rows = build_stop_views(&trip, &ProgressConfig::default(), now()).unwrap();

    let origin = &rows[0];
    assert_eq!(origin.station, "Berlin Hbf");
    assert_eq!(origin.track, "7");
    assert_eq!(origin.time_to_arrival, "");
    assert_eq!(origin.remaining_distance, "");
    assert_eq!(origin.delay_reasons, "");
}

#[test]
fn stop_views_stop_at_override() {
    let trip = make_trip();
    let rows = build_stop_views(&trip, &override_to("Wittenberge"), now()).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows.last().unwrap().station, "Wittenberge");
}

#[test]
fn stop_views_alert_only_at_destination() {
    let mut trip = make_trip();
    trip.stops[2].actual_arrival = arriving_in(Duration::seconds(90));
    trip.stops[3].actual_arrival = arriving_in(Duration::seconds(100));

    let rows = build_stop_views(&trip, &override_to("Ludwigslust"), now()).unwrap();
    assert_eq!(rows[2].time_to_arrival, "1m30s");
    assert_eq!(rows[3].time_to_arrival, GET_OUT_NOW);
}

#[test]
fn stop_views_unknown_override_fails() {
    let trip = make_trip();
    assert!(build_stop_views(&trip, &override_to("Paris Est"), now()).is_err());
}

#[test]
fn stop_views_missing_final_station_lists_everything() {
    let mut trip = make_trip();
    trip.final_station_name = "Hamburg-Altona".into();
    let rows = build_stop_views(&trip, &ProgressConfig::default(), now()).unwrap();
    assert_eq!(rows.len(), 5);
}

#[test]
fn builder_shares_destination_and_instant() {
    let trip = make_trip();
    let builder = JourneyViewBuilder::new(&trip, &override_to("Ludwigslust"), now()).unwrap();

    assert_eq!(builder.destination(), "Ludwigslust");

    let journey = builder.journey_view();
    let rows = builder.stop_views();
    let last = rows.last().unwrap();
    assert_eq!(last.station, journey.your_destination);
    assert_eq!(last.time_to_arrival, journey.time_to_arrival);
    assert_eq!(last.remaining_distance, journey.remaining_distance);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The origin row's derived fields are empty whatever its data.
        #[test]
        fn origin_always_suppressed(
            passed in any::<bool>(),
            offset_secs in -100_000i64..100_000,
            distance in -1_000_000i64..1_000_000,
            reasons in 0usize..4,
        ) {
            let mut trip = make_trip();
            let origin = &mut trip.stops[0];
            origin.passed = passed;
            origin.actual_arrival = arriving_in(Duration::seconds(offset_secs));
            origin.distance_from_start = distance;
            origin.delay_reasons = (0..reasons).map(|i| DelayReason::new("", format!("r{i}"))).collect();

            let rows = build_stop_views(&trip, &ProgressConfig::default(), now()).unwrap();
            prop_assert_eq!(&rows[0].time_to_arrival, "");
            prop_assert_eq!(&rows[0].remaining_distance, "");
            prop_assert_eq!(&rows[0].delay_reasons, "");
        }

        /// Rows end exactly at the destination.
        #[test]
        fn rows_end_at_destination(pick in 0usize..5) {
            let trip = make_trip();
            let name = trip.stops[pick].station.clone();
            let rows = build_stop_views(&trip, &override_to(&name), now()).unwrap();
            prop_assert_eq!(rows.len(), pick + 1);
            prop_assert_eq!(&rows[pick].station, &name);
        }
    }
}
