//! On-board portal HTTP client.
//!
//! Fetches the trip and status snapshots and converts them to domain types.
//! Each call is one request: no retry, no caching.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{Status, Trip};

use super::SnapshotProvider;
use super::convert::{convert_status, convert_trip};
use super::error::PortalError;
use super::types::{StatusDto, TripEnvelope};

/// Default base URL for the on-board portal API.
pub const DEFAULT_BASE_URL: &str = "https://iceportal.de/api1/rs";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const TRIP_ENDPOINT: &str = "/tripInfo/trip";
const STATUS_ENDPOINT: &str = "/status";

/// Configuration for the portal client.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL for the API (defaults to the on-board portal)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl PortalConfig {
    /// Create a config pointing at the on-board portal.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or other portals).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// On-board portal API client.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    /// Create a new client with the given configuration.
    pub fn new(config: PortalConfig) -> Result<Self, PortalError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the URL for an endpoint path.
    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// GET an endpoint and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, PortalError> {
        let url = self.url(endpoint);
        debug!(%url, "fetching snapshot");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        debug!(%url, status = status.as_u16(), "portal responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PortalError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Fetch the current trip.
    pub async fn get_trip(&self) -> Result<Trip, PortalError> {
        let envelope: TripEnvelope = self.get_json(TRIP_ENDPOINT).await?;
        Ok(convert_trip(&envelope.trip)?)
    }

    /// Fetch the current train status.
    pub async fn get_status(&self) -> Result<Status, PortalError> {
        let dto: StatusDto = self.get_json(STATUS_ENDPOINT).await?;
        Ok(convert_status(&dto))
    }
}

/// Map a non-success response to its error.
fn status_error(status: StatusCode, body: String) -> PortalError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PortalError::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => PortalError::RateLimited,
        _ => PortalError::ApiError {
            status: status.as_u16(),
            message: body,
        },
    }
}

impl SnapshotProvider for PortalClient {
    async fn fetch_trip(&self) -> Result<Trip, PortalError> {
        self.get_trip().await
    }

    async fn fetch_status(&self) -> Result<Status, PortalError> {
        self.get_status().await
    }
}
