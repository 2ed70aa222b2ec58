//! Train identifier type.

use std::fmt;

/// Identifies the train a snapshot was taken on: its product type and number.
///
/// Displayed the way it is printed on board, with no separator.
///
/// # Examples
///
/// ```
/// use ice_journey::domain::TrainId;
///
/// let train = TrainId::new("ICE", "1009");
/// assert_eq!(train.to_string(), "ICE1009");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TrainId {
    /// Product type (e.g., "ICE")
    pub train_type: String,
    /// Train number (e.g., "1009")
    pub number: String,
}

impl TrainId {
    /// Creates a new train identifier.
    pub fn new(train_type: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            train_type: train_type.into(),
            number: number.into(),
        }
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.train_type, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_concatenates() {
        assert_eq!(TrainId::new("ICE", "578").to_string(), "ICE578");
    }

    #[test]
    fn display_missing_number() {
        assert_eq!(TrainId::new("ICE", "").to_string(), "ICE");
    }
}
