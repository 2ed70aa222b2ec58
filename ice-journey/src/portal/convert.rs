//! Conversion from portal DTOs to domain types.
//!
//! The portal omits or nulls fields freely; this is where those gaps get
//! their defaults so that the progress engine only ever sees complete
//! domain values.

use tracing::{trace, warn};

use crate::domain::{DelayReason, EpochMillis, Status, Stop, Track, TrainId, Trip};

use super::types::{StatusDto, StopDto, TripDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The trip has no stops at all
    #[error("trip has no stops")]
    EmptySchedule,
}

/// Convert a trip response to a domain `Trip`.
///
/// Stop order is kept exactly as received.
pub fn convert_trip(dto: &TripDto) -> Result<Trip, ConversionError> {
    if dto.stops.is_empty() {
        return Err(ConversionError::EmptySchedule);
    }

    let stops = dto
        .stops
        .iter()
        .map(convert_stop)
        .collect::<Result<Vec<_>, _>>()?;

    let final_station_name = dto.stop_info.final_station_name.clone();
    if final_station_name.is_empty() {
        warn!("trip has no final station name");
    }

    Ok(Trip {
        train: TrainId::new(dto.train_type.clone(), dto.vzn.clone()),
        stops,
        actual_position: dto.actual_position,
        distance_from_last_stop: dto.distance_from_last_stop,
        final_station_name,
    })
}

/// Convert a single stop.
fn convert_stop(dto: &StopDto) -> Result<Stop, ConversionError> {
    if dto.station.name.is_empty() {
        return Err(ConversionError::MissingField("station.name"));
    }

    let delay_reasons = match &dto.delay_reasons {
        Some(reasons) => reasons
            .iter()
            .map(|r| DelayReason::new(r.code.clone().unwrap_or_default(), r.message.clone()))
            .collect(),
        None => Vec::new(),
    };

    if dto.timetable.actual_arrival_time.is_none() {
        trace!(station = %dto.station.name, "no actual arrival time");
    }

    Ok(Stop {
        station: dto.station.name.clone(),
        scheduled_arrival: dto.timetable.scheduled_arrival_time.map(EpochMillis),
        actual_arrival: dto.timetable.actual_arrival_time.map(EpochMillis),
        track: Track {
            scheduled: dto.track.scheduled.clone().unwrap_or_default(),
            actual: dto.track.actual.clone().unwrap_or_default(),
        },
        distance_from_start: dto.info.distance_from_start,
        passed: dto.info.passed,
        delay_reasons,
    })
}

/// Convert a status response to a domain `Status`.
///
/// Connectivity comes from the flat `internet` field when present and
/// from the `connectivity` block otherwise.
pub fn convert_status(dto: &StatusDto) -> Status {
    let internet = dto
        .internet
        .clone()
        .or_else(|| {
            dto.connectivity
                .as_ref()
                .and_then(|c| c.current_state.clone())
        })
        .unwrap_or_default();

    Status {
        train_type: dto.train_type.clone(),
        wagon_class: dto.wagon_class.clone(),
        internet,
        speed: dto.speed,
        latitude: dto.latitude,
        longitude: dto.longitude,
        gps_status: dto.gps_status.clone().unwrap_or_default(),
        server_time: dto.server_time.map(EpochMillis),
    }
}
