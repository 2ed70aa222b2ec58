//! On-board portal snapshot provider.
//!
//! The portal exposes the train's trip (schedule, stops, position) and its
//! live status as JSON. This module fetches those snapshots, either live
//! over HTTP or from recorded files, and converts them to domain types.
//!
//! Key characteristics of the portal:
//! - Only reachable from the train's WiFi
//! - Times are epoch milliseconds; the origin stop has no arrival time
//! - Missing values are sent as `null` rather than omitted

mod client;
mod convert;
mod error;
mod mock;
mod types;

use std::future::Future;

use crate::domain::{Status, Trip};

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, PortalClient, PortalConfig};
pub use convert::{ConversionError, convert_status, convert_trip};
pub use error::PortalError;
pub use mock::{MockPortalClient, STATUS_FILE, TRIP_FILE};
pub use types::{StatusDto, StopDto, TripDto, TripEnvelope};

/// Source of point-in-time snapshots.
///
/// A fetch either yields a complete domain value or an error; there is no
/// partial result.
pub trait SnapshotProvider {
    /// Fetch the current trip.
    fn fetch_trip(&self) -> impl Future<Output = Result<Trip, PortalError>>;

    /// Fetch the current train status.
    fn fetch_status(&self) -> impl Future<Output = Result<Status, PortalError>>;
}
