//! Trip type: one train's schedule and position at snapshot time.

use super::{Stop, TrainId};

/// A train trip as seen in one snapshot.
///
/// The stop sequence is the authoritative journey order. Stops the train
/// has departed from form a prefix of it; nothing here re-sorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    /// Train identifier
    pub train: TrainId,
    /// Stops in journey order
    pub stops: Vec<Stop>,
    /// Train position in meters from the journey start
    pub actual_position: i64,
    /// Meters covered since the last stop
    pub distance_from_last_stop: i64,
    /// Final station according to the schedule
    pub final_station_name: String,
}

impl Trip {
    /// Creates a trip with the given stops, positioned at the start.
    ///
    /// The final station defaults to the last stop's name.
    pub fn new(train: TrainId, stops: Vec<Stop>) -> Self {
        let final_station_name = stops.last().map(|s| s.station.clone()).unwrap_or_default();
        Self {
            train,
            stops,
            actual_position: 0,
            distance_from_last_stop: 0,
            final_station_name,
        }
    }

    /// Distance the train has traveled, as the portal reports it.
    ///
    /// This is `actual_position + distance_from_last_stop`. Some feeds
    /// already include the second term in the first, in which case it is
    /// counted twice.
    pub fn traveled_distance(&self) -> i64 {
        self.actual_position + self.distance_from_last_stop
    }

    /// Returns the first stop whose station is exactly `name`, with its index.
    pub fn find_stop(&self, name: &str) -> Option<(usize, &Stop)> {
        self.stops.iter().enumerate().find(|(_, s)| s.is_named(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip() -> Trip {
        Trip::new(
            TrainId::new("ICE", "1"),
            vec![Stop::new("A"), Stop::new("B"), Stop::new("C")],
        )
    }

    #[test]
    fn final_station_defaults_to_last_stop() {
        assert_eq!(trip().final_station_name, "C");
    }

    #[test]
    fn final_station_empty_without_stops() {
        let t = Trip::new(TrainId::default(), vec![]);
        assert_eq!(t.final_station_name, "");
    }

    #[test]
    fn traveled_distance_adds_both_terms() {
        let mut t = trip();
        t.actual_position = 12_000;
        t.distance_from_last_stop = 500;
        assert_eq!(t.traveled_distance(), 12_500);
    }

    #[test]
    fn find_stop() {
        let t = trip();
        let (idx, stop) = t.find_stop("B").unwrap();
        assert_eq!(idx, 1);
        assert_eq!(stop.station, "B");
        assert!(t.find_stop("Z").is_none());
    }
}
