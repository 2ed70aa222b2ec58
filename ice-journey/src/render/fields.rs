//! Named output fields for each view.
//!
//! Every view has a fixed set of columns. The column header doubles as the
//! filter token, so `--filter "NEXT STOP"` selects the `NEXT STOP` column.

use crate::domain::Status;
use crate::progress::{JourneyView, StopView};

use super::RenderError;

/// A named column of some view.
pub trait Field: Copy + Sized + 'static {
    /// All columns in display order.
    const ALL: &'static [Self];

    /// Column header, also the filter token.
    fn header(self) -> &'static str;

    /// Look up a column by its exact filter token.
    fn parse(token: &str) -> Result<Self, RenderError> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.header() == token)
            .ok_or_else(|| RenderError::UnknownFilterField(token.to_string()))
    }
}

/// A value that renders as one row of named columns.
pub trait Tabular {
    type Field: Field;

    /// Display text of one column.
    fn cell(&self, field: Self::Field) -> String;

    /// Display text of every column, in order.
    fn cells(&self) -> Vec<String> {
        Self::Field::ALL.iter().map(|&f| self.cell(f)).collect()
    }
}

/// Columns of the trip view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripField {
    Train,
    YourDestination,
    FinalDestination,
    NextStop,
    Progress,
    Arriving,
    RemainingDistance,
    ArrivalTrack,
}

impl Field for TripField {
    const ALL: &'static [Self] = &[
        TripField::Train,
        TripField::YourDestination,
        TripField::FinalDestination,
        TripField::NextStop,
        TripField::Progress,
        TripField::Arriving,
        TripField::RemainingDistance,
        TripField::ArrivalTrack,
    ];

    fn header(self) -> &'static str {
        match self {
            TripField::Train => "TRAIN",
            TripField::YourDestination => "YOUR DESTINATION",
            TripField::FinalDestination => "FINAL DESTINATION",
            TripField::NextStop => "NEXT STOP",
            TripField::Progress => "PROGRESS",
            TripField::Arriving => "ARRIVING",
            TripField::RemainingDistance => "REMAINING DISTANCE",
            TripField::ArrivalTrack => "ARRIVAL TRACK",
        }
    }
}

impl Tabular for JourneyView {
    type Field = TripField;

    fn cell(&self, field: TripField) -> String {
        match field {
            TripField::Train => self.train.clone(),
            TripField::YourDestination => self.your_destination.clone(),
            TripField::FinalDestination => self.final_destination.clone(),
            TripField::NextStop => self.next_stop.clone(),
            TripField::Progress => self.progress.clone(),
            TripField::Arriving => self.time_to_arrival.clone(),
            TripField::RemainingDistance => self.remaining_distance.clone(),
            TripField::ArrivalTrack => self.arrival_track.clone(),
        }
    }
}

/// Columns of the stop list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopField {
    Station,
    Track,
    Arriving,
    RemainingDistance,
    DelayReasons,
}

impl Field for StopField {
    const ALL: &'static [Self] = &[
        StopField::Station,
        StopField::Track,
        StopField::Arriving,
        StopField::RemainingDistance,
        StopField::DelayReasons,
    ];

    fn header(self) -> &'static str {
        match self {
            StopField::Station => "STATION",
            StopField::Track => "TRACK",
            StopField::Arriving => "ARRIVING",
            StopField::RemainingDistance => "REMAINING DISTANCE",
            StopField::DelayReasons => "REASONS FOR DELAY",
        }
    }
}

impl Tabular for StopView {
    type Field = StopField;

    fn cell(&self, field: StopField) -> String {
        match field {
            StopField::Station => self.station.clone(),
            StopField::Track => self.track.clone(),
            StopField::Arriving => self.time_to_arrival.clone(),
            StopField::RemainingDistance => self.remaining_distance.clone(),
            StopField::DelayReasons => self.delay_reasons.clone(),
        }
    }
}

/// Columns of the status view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusField {
    TrainType,
    WagonClass,
    Internet,
    Speed,
    Latitude,
    Longitude,
    Gps,
}

impl Field for StatusField {
    const ALL: &'static [Self] = &[
        StatusField::TrainType,
        StatusField::WagonClass,
        StatusField::Internet,
        StatusField::Speed,
        StatusField::Latitude,
        StatusField::Longitude,
        StatusField::Gps,
    ];

    fn header(self) -> &'static str {
        match self {
            StatusField::TrainType => "TRAIN TYPE",
            StatusField::WagonClass => "WAGON CLASS",
            StatusField::Internet => "INTERNET",
            StatusField::Speed => "SPEED",
            StatusField::Latitude => "LATITUDE",
            StatusField::Longitude => "LONGITUDE",
            StatusField::Gps => "GPS",
        }
    }
}

impl Tabular for Status {
    type Field = StatusField;

    fn cell(&self, field: StatusField) -> String {
        match field {
            StatusField::TrainType => self.train_type.clone(),
            StatusField::WagonClass => self.wagon_class.clone(),
            StatusField::Internet => self.internet.clone(),
            StatusField::Speed => format!("{:.6}", self.speed),
            StatusField::Latitude => format!("{:.6}", self.latitude),
            StatusField::Longitude => format!("{:.6}", self.longitude),
            StatusField::Gps => self.gps_status.clone(),
        }
    }
}
