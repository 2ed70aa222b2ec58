//! Timestamp handling for portal data.
//!
//! The portal reports instants as integer milliseconds since the Unix epoch.
//! Countdowns are shown at whole-second resolution, so converting to an
//! instant drops the millisecond part.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// An instant as reported by the portal: milliseconds since the Unix epoch.
///
/// # Examples
///
/// ```
/// use ice_journey::domain::EpochMillis;
///
/// let t = EpochMillis(1_700_000_000_999);
/// assert_eq!(t.to_instant().unwrap().timestamp(), 1_700_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpochMillis(pub u64);

impl EpochMillis {
    /// Converts to a UTC instant, truncated to the whole second.
    ///
    /// Returns `None` if the value is outside chrono's representable range.
    pub fn to_instant(self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.0 / 1000).ok()?;
        DateTime::from_timestamp(secs, 0)
    }

    /// Builds a timestamp from an instant. Instants before the epoch clamp to zero.
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self(u64::try_from(instant.timestamp_millis()).unwrap_or(0))
    }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_instant() {
            Some(instant) => write!(f, "{}", instant.format("%Y-%m-%d %H:%M:%S UTC")),
            None => write!(f, "{}ms", self.0),
        }
    }
}

/// Formats a duration truncated to whole seconds as `1h2m3s`.
///
/// Leading zero units are left out, so short durations read `4m10s` or
/// `45s`. Negative durations get a leading `-`.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use ice_journey::domain::format_duration;
///
/// assert_eq!(format_duration(Duration::milliseconds(3_723_900)), "1h2m3s");
/// assert_eq!(format_duration(Duration::seconds(250)), "4m10s");
/// assert_eq!(format_duration(Duration::milliseconds(45_500)), "45s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{sign}{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{seconds}s")
    } else {
        format!("{sign}{seconds}s")
    }
}
