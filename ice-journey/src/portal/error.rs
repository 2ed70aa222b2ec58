//! Portal client error types.

use std::fmt;

use super::convert::ConversionError;

/// Errors from fetching or decoding a portal snapshot.
#[derive(Debug)]
pub enum PortalError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Response decoded but could not be converted to domain types
    Conversion(ConversionError),

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Rate limited by the portal
    RateLimited,

    /// Portal refused the request (usually: not connected to the on-board WiFi)
    Unauthorized,

    /// Mock snapshot data missing or unreadable
    MockData(String),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::Http(e) => write!(f, "HTTP error: {e}"),
            PortalError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            PortalError::Conversion(e) => write!(f, "invalid snapshot: {e}"),
            PortalError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            PortalError::RateLimited => write!(f, "rate limited by portal"),
            PortalError::Unauthorized => {
                write!(f, "unauthorized (are you connected to the on-board WiFi?)")
            }
            PortalError::MockData(msg) => write!(f, "mock data: {msg}"),
        }
    }
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PortalError::Http(e) => Some(e),
            PortalError::Conversion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        PortalError::Http(err)
    }
}

impl From<ConversionError> for PortalError {
    fn from(err: ConversionError) -> Self {
        PortalError::Conversion(err)
    }
}
