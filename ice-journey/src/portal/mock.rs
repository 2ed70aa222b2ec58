//! Mock portal client for use off the train.
//!
//! Loads a recorded trip and status snapshot from JSON files and serves
//! them as if they were live API responses.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{Status, Trip};

use super::SnapshotProvider;
use super::convert::{convert_status, convert_trip};
use super::error::PortalError;
use super::types::{StatusDto, TripEnvelope};

/// File name of the recorded `/tripInfo/trip` response.
pub const TRIP_FILE: &str = "trip.json";

/// File name of the recorded `/status` response.
pub const STATUS_FILE: &str = "status.json";

/// Mock portal client that serves snapshots from a directory.
///
/// Expects `trip.json` and/or `status.json` in the directory. Both are
/// parsed eagerly so malformed files fail at construction.
#[derive(Debug, Clone)]
pub struct MockPortalClient {
    data_dir: PathBuf,
    trip: Option<TripEnvelope>,
    status: Option<StatusDto>,
}

impl MockPortalClient {
    /// Create a new mock client by loading JSON files from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, PortalError> {
        let data_dir = data_dir.as_ref();

        if !data_dir.is_dir() {
            return Err(PortalError::MockData(format!(
                "{} is not a directory",
                data_dir.display()
            )));
        }

        let trip: Option<TripEnvelope> = load_json(&data_dir.join(TRIP_FILE))?;
        let status: Option<StatusDto> = load_json(&data_dir.join(STATUS_FILE))?;

        if trip.is_none() && status.is_none() {
            return Err(PortalError::MockData(format!(
                "no {TRIP_FILE} or {STATUS_FILE} in {}",
                data_dir.display()
            )));
        }

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            trip,
            status,
        })
    }

    /// Directory the snapshots were loaded from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn missing(&self, file: &str) -> PortalError {
        PortalError::MockData(format!("no {file} in {}", self.data_dir.display()))
    }
}

/// Read and parse a JSON file, or `None` if it doesn't exist.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PortalError> {
    if !path.is_file() {
        return Ok(None);
    }

    debug!(path = %path.display(), "loading mock snapshot");

    let json = std::fs::read_to_string(path).map_err(|e| {
        PortalError::MockData(format!("failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&json).map(Some).map_err(|e| PortalError::Json {
        message: format!("{}: {}", path.display(), e),
        body: None,
    })
}

impl SnapshotProvider for MockPortalClient {
    async fn fetch_trip(&self) -> Result<Trip, PortalError> {
        let envelope = self.trip.as_ref().ok_or_else(|| self.missing(TRIP_FILE))?;
        Ok(convert_trip(&envelope.trip)?)
    }

    async fn fetch_status(&self) -> Result<Status, PortalError> {
        let dto = self.status.as_ref().ok_or_else(|| self.missing(STATUS_FILE))?;
        Ok(convert_status(dto))
    }
}
