//! On-board portal API response DTOs.
//!
//! These types map directly to the portal's JSON responses. They use
//! `Option` and `#[serde(default)]` liberally because the portal sends
//! `null` for fields it doesn't know yet (e.g. the origin's arrival time).
//! Plain fields go through [`null_as_default`] so an explicit `null`
//! reads as the zero value, the same as a missing key.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response from `/tripInfo/trip`.
#[derive(Debug, Clone, Deserialize)]
pub struct TripEnvelope {
    pub trip: TripDto,
}

/// The train's trip: schedule, stops and current position.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    /// Train series (e.g., "ICE").
    #[serde(default, deserialize_with = "null_as_default")]
    pub train_type: String,

    /// Train number ("Zugnummer").
    #[serde(default, deserialize_with = "null_as_default")]
    pub vzn: String,

    /// Total distance of the trip in meters.
    pub total_distance: Option<i64>,

    /// Train position in meters from the journey start.
    #[serde(default, deserialize_with = "null_as_default")]
    pub actual_position: i64,

    /// Meters covered since the last stop.
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance_from_last_stop: i64,

    /// Summary of next/last stops and the final station.
    pub stop_info: StopInfoDto,

    /// Stops in journey order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub stops: Vec<StopDto>,
}

/// Summary of where the train is on its schedule.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopInfoDto {
    /// EVA number of the next scheduled stop.
    pub scheduled_next: Option<String>,

    /// EVA number of the next stop the train will actually make.
    pub actual_next: Option<String>,

    /// EVA number of the last stop made.
    pub actual_last: Option<String>,

    /// EVA number of the stop the train last started from.
    pub actual_last_started: Option<String>,

    /// Display name of the final station.
    #[serde(default, deserialize_with = "null_as_default")]
    pub final_station_name: String,

    /// EVA number of the final station.
    pub final_station_eva_nr: Option<String>,
}

/// One stop on the trip.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDto {
    pub station: StationDto,

    pub timetable: TimetableDto,

    #[serde(default, deserialize_with = "null_as_default")]
    pub track: TrackDto,

    pub info: StopInfoFlagsDto,

    /// Delay reasons; `null` when there are none.
    pub delay_reasons: Option<Vec<DelayReasonDto>>,
}

/// Station identity and location.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    /// EVA station number.
    pub eva_nr: Option<String>,

    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Station coordinates.
    pub geocoordinates: Option<GeoCoordinatesDto>,
}

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GeoCoordinatesDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: f64,
}

/// Arrival and departure times, as epoch milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableDto {
    pub scheduled_arrival_time: Option<u64>,
    pub actual_arrival_time: Option<u64>,
    pub show_actual_arrival_time: Option<bool>,
    /// Human-readable arrival delay (e.g., "+5").
    pub arrival_delay: Option<String>,
    pub scheduled_departure_time: Option<u64>,
    pub actual_departure_time: Option<u64>,
    pub show_actual_departure_time: Option<bool>,
    /// Human-readable departure delay.
    pub departure_delay: Option<String>,
}

/// Scheduled and actual track.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackDto {
    pub scheduled: Option<String>,
    pub actual: Option<String>,
}

/// Position flags for a stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopInfoFlagsDto {
    pub status: Option<i32>,

    /// Whether the train has departed this stop.
    #[serde(default, deserialize_with = "null_as_default")]
    pub passed: bool,

    /// Position relative to the train (e.g., "passed", "future").
    pub position_status: Option<String>,

    /// Meters from the previous stop.
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance: i64,

    /// Meters from the journey start.
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance_from_start: i64,
}

/// A reported delay reason.
#[derive(Debug, Clone, Deserialize)]
pub struct DelayReasonDto {
    pub code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

/// Response from `/status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub train_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub wagon_class: String,

    /// Connectivity quality (e.g., "HIGH", "WEAK").
    pub connectivity: Option<ConnectivityDto>,

    /// Older firmware reports connectivity as a flat string.
    pub internet: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub speed: f32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: f32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: f32,

    pub gps_status: Option<String>,

    /// Server clock in epoch milliseconds.
    pub server_time: Option<u64>,
}

/// Connectivity block of newer status responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityDto {
    pub current_state: Option<String>,
    pub next_state: Option<String>,
    pub remaining_time_seconds: Option<i64>,
}
