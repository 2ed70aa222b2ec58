//! Live train status.

use super::EpochMillis;

/// On-board status snapshot: train, connectivity and GPS position.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    /// Train series (e.g., "ICE")
    pub train_type: String,
    /// Class of the wagon the request came from
    pub wagon_class: String,
    /// Connectivity quality (e.g., "HIGH")
    pub internet: String,
    /// Speed in km/h
    pub speed: f32,
    /// Latitude in degrees
    pub latitude: f32,
    /// Longitude in degrees
    pub longitude: f32,
    /// GPS fix status (e.g., "VALID")
    pub gps_status: String,
    /// Server clock at snapshot time
    pub server_time: Option<EpochMillis>,
}
