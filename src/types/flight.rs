use crate::types::{ExtensionLayout, PositionFix, SensorFix};
use chrono::{DateTime, NaiveDate, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata collected from H records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightHeader {
    pub flight_date: Option<NaiveDate>,
    pub pilot: Option<String>,
    pub glider_type: Option<String>,
    pub glider_id: Option<String>,
    pub competition_id: Option<String>,
    pub competition_class: Option<String>,
}

/// Lightweight projection of a file for display before conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightSummary {
    pub pilot: Option<String>,
    pub glider_type: Option<String>,
    pub glider_id: Option<String>,
    pub competition_id: Option<String>,
    pub competition_class: Option<String>,
    pub flight_date: Option<NaiveDate>,
    /// Time of the first B record combined with the flight date
    pub first_fix_time: Option<DateTime<Utc>>,
    pub position_fix_count: usize,
    pub sensor_fix_count: usize,
    pub has_extensions: bool,
}

impl FlightSummary {
    /// Best timestamp to show for the flight: the first fix, else the date at midnight
    pub fn display_time(&self) -> Option<DateTime<Utc>> {
        self.first_fix_time.or_else(|| {
            self.flight_date
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc())
        })
    }

    pub fn total_fix_count(&self) -> usize {
        self.position_fix_count + self.sensor_fix_count
    }

    pub fn has_sensor_fixes(&self) -> bool {
        self.sensor_fix_count > 0
    }
}

/// Fully decoded IGC file
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IgcFlight {
    pub header: FlightHeader,
    pub flight_date: NaiveDate,
    pub position_layout: ExtensionLayout,
    pub sensor_layout: ExtensionLayout,
    pub position_fixes: Vec<PositionFix>,
    pub sensor_fixes: Vec<SensorFix>,
}

impl IgcFlight {
    /// Check if this flight has any K-record data
    pub fn has_sensor_data(&self) -> bool {
        !self.sensor_fixes.is_empty()
    }

    /// Seconds between the first and last position fix
    pub fn duration_seconds(&self) -> i64 {
        match (self.position_fixes.first(), self.position_fixes.last()) {
            (Some(first), Some(last)) => (last.timestamp - first.timestamp).num_seconds(),
            _ => 0,
        }
    }
}

/// CSV output of a conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub position_fix_count: usize,
    pub sensor_fix_count: usize,
    pub position_csv: Vec<u8>,
    /// Absent when the file has no sensor fixes
    pub sensor_csv: Option<Vec<u8>>,
}

impl ConversionOutcome {
    /// True when the header was fine but no fix survived decoding
    pub fn is_empty(&self) -> bool {
        self.position_fix_count == 0 && self.sensor_fix_count == 0
    }
}
