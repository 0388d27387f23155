//! Fixed-column decoding of B and K records
//!
//! B record layout (0-based byte ranges):
//! - `[1,7)` time HHMMSS
//! - `[7,14)` latitude DDMMmmm, `[14,15)` N/S
//! - `[15,23)` longitude DDDMMmmm, `[23,24)` E/W
//! - `[24,25)` fix validity
//! - `[25,30)` pressure altitude, `[30,35)` GPS altitude
//! - extensions as declared by the `I` record
//!
//! K records carry the same time field followed by `J`-declared extensions.
//! A line that fails any check decodes to `None` and is dropped by the caller.

use crate::conversion::{convert_latitude, convert_longitude, normalize_field, parse_digits};
use crate::parser::classify::{MIN_POSITION_FIX_LEN, MIN_SENSOR_FIX_LEN};
use crate::types::{ExtensionLayout, FieldValue, PositionFix, SensorFix};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::collections::HashMap;

/// Decode the HHMMSS field at `[1,7)` into a time of day
pub fn decode_time_of_day(line: &str) -> Option<NaiveTime> {
    let hour = parse_digits(line.get(1..3)?)?;
    let minute = parse_digits(line.get(3..5)?)?;
    let second = parse_digits(line.get(5..7)?)?;
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Combine a calendar date with a time of day as a UTC instant
pub fn build_timestamp(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

/// Decode a B record against the reference date and the `I` layout
pub fn decode_position_fix(
    line: &str,
    reference_date: NaiveDate,
    layout: &ExtensionLayout,
) -> Option<PositionFix> {
    if line.len() < MIN_POSITION_FIX_LEN {
        return None;
    }

    let time = decode_time_of_day(line)?;
    let latitude = convert_latitude(line.get(7..14)?, line.get(14..15)?)?;
    let longitude = convert_longitude(line.get(15..23)?, line.get(23..24)?)?;
    // Informational only, so a non-ASCII byte here never drops the line
    let validity = char::from(line.as_bytes()[24]);

    let pressure_altitude_m = decode_altitude(line.get(25..30));
    let gps_altitude_m = decode_altitude(line.get(30..35));

    Some(PositionFix {
        timestamp: build_timestamp(reference_date, time),
        latitude,
        longitude,
        validity,
        pressure_altitude_m,
        gps_altitude_m,
        extensions: decode_extensions(line, layout),
    })
}

/// Decode a K record against the reference date and the `J` layout
pub fn decode_sensor_fix(
    line: &str,
    reference_date: NaiveDate,
    layout: &ExtensionLayout,
) -> Option<SensorFix> {
    if line.len() < MIN_SENSOR_FIX_LEN {
        return None;
    }

    let time = decode_time_of_day(line)?;

    Some(SensorFix {
        timestamp: build_timestamp(reference_date, time),
        extensions: decode_extensions(line, layout),
    })
}

fn decode_altitude(raw: Option<&str>) -> Option<i64> {
    raw.map(normalize_field).and_then(|value| value.as_integer())
}

/// Slice and normalize every extension that fits inside the line
fn decode_extensions(line: &str, layout: &ExtensionLayout) -> HashMap<String, FieldValue> {
    layout
        .fields()
        .iter()
        .filter_map(|field| {
            field
                .slice(line)
                .map(|raw| (field.code.clone(), normalize_field(raw)))
        })
        .collect()
}
