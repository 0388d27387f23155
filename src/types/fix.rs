use crate::types::FieldValue;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Records that carry a UTC instant, so the sequencer can order them
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Position fix decoded from a B record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionFix {
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    /// Fix validity flag as recorded (`A` = 3D, `V` = 2D/no GPS). Not exported.
    pub validity: char,
    pub pressure_altitude_m: Option<i64>,
    pub gps_altitude_m: Option<i64>,
    pub extensions: HashMap<String, FieldValue>,
}

impl PositionFix {
    pub fn extension(&self, code: &str) -> Option<&FieldValue> {
        self.extensions.get(code)
    }
}

impl Timestamped for PositionFix {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Sensor fix decoded from a K record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorFix {
    pub timestamp: DateTime<Utc>,
    pub extensions: HashMap<String, FieldValue>,
}

impl SensorFix {
    pub fn extension(&self, code: &str) -> Option<&FieldValue> {
        self.extensions.get(code)
    }
}

impl Timestamped for SensorFix {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
