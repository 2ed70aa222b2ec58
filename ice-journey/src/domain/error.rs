//! Domain error types.
//!
//! These errors come from the user's request not matching the snapshot.
//! They are distinct from fetch and decode errors.

/// Domain-level errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// The requested destination is not a stop on this trip
    #[error("overridden destination not found in schedule: {0}")]
    DestinationNotFound(String),
}
