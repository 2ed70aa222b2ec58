//! Configuration for journey progress derivation.

use chrono::Duration;

/// Default window before arrival in which the destination shows an alert.
pub const DEFAULT_ALERT_THRESHOLD_SECS: i64 = 3 * 60;

/// Parameters for deriving a journey view from a trip snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Station to treat as the rider's destination instead of the
    /// schedule's final station. Must match a stop name exactly.
    pub destination_override: Option<String>,

    /// Arrivals at the destination closer than this (seconds) render as
    /// an alert instead of a countdown.
    pub alert_threshold_secs: i64,
}

impl ProgressConfig {
    /// Create a configuration with the given destination override.
    ///
    /// An empty override is the same as none.
    pub fn new(destination_override: Option<String>) -> Self {
        Self {
            destination_override: destination_override.filter(|d| !d.is_empty()),
            alert_threshold_secs: DEFAULT_ALERT_THRESHOLD_SECS,
        }
    }

    /// Set the alert threshold.
    pub fn with_alert_threshold_secs(mut self, secs: i64) -> Self {
        self.alert_threshold_secs = secs;
        self
    }

    /// Returns the alert threshold as a Duration.
    pub fn alert_threshold(&self) -> Duration {
        Duration::seconds(self.alert_threshold_secs)
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
