//! Export functionality for IGC data
//!
//! Renders decoded fixes as CSV tables in memory, and writes a conversion
//! outcome to disk for callers that want files.

use crate::types::*;
use crate::Result;
use chrono::{DateTime, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Fixed leading columns of the position-fix table
pub const POSITION_COLUMNS: [&str; 5] = [
    "date",
    "Latitude",
    "Longitude",
    "GPS Altitude",
    "Pressure Altitude",
];
/// Fixed leading column of the sensor-fix table
pub const SENSOR_COLUMNS: [&str; 1] = ["date"];

/// Export options for controlling file output
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory for CSV files (default: same as input file)
    pub output_dir: Option<String>,
    /// Write the sensor-fix CSV when the file has K records
    pub sensors: bool,
    /// Write files even when no position fix was decoded
    pub force_export: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            sensors: true,
            force_export: false,
        }
    }
}

/// Paths written by [`export_to_csv`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub position_csv_path: Option<PathBuf>,
    pub sensor_csv_path: Option<PathBuf>,
    pub skipped: bool,
}

/// Render a UTC instant as ISO-8601 without fractional seconds
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Render a coordinate with exactly six decimals
pub fn format_coordinate(value: f64) -> String {
    format!("{value:.6}")
}

fn format_altitude(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn format_extension(value: Option<&FieldValue>) -> String {
    value.map(FieldValue::render).unwrap_or_default()
}

fn csv_writer() -> csv::Writer<Vec<u8>> {
    // Values are never quoted; the format assumes no embedded commas or newlines
    WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|err| crate::IgcError::Io(err.into_error()))
}

/// Serialize position fixes as CSV with one column per extension in layout order
pub fn position_fixes_to_csv(fixes: &[PositionFix], layout: &ExtensionLayout) -> Result<Vec<u8>> {
    let mut writer = csv_writer();

    let mut header: Vec<&str> = POSITION_COLUMNS.to_vec();
    header.extend(layout.codes());
    writer.write_record(&header)?;

    for fix in fixes {
        let mut row = vec![
            format_timestamp(&fix.timestamp),
            format_coordinate(fix.latitude),
            format_coordinate(fix.longitude),
            format_altitude(fix.gps_altitude_m),
            format_altitude(fix.pressure_altitude_m),
        ];
        row.extend(layout.codes().map(|code| format_extension(fix.extension(code))));
        writer.write_record(&row)?;
    }

    finish(writer)
}

/// Serialize sensor fixes as CSV with one column per extension in layout order
pub fn sensor_fixes_to_csv(fixes: &[SensorFix], layout: &ExtensionLayout) -> Result<Vec<u8>> {
    let mut writer = csv_writer();

    let mut header: Vec<&str> = SENSOR_COLUMNS.to_vec();
    header.extend(layout.codes());
    writer.write_record(&header)?;

    for fix in fixes {
        let mut row = vec![format_timestamp(&fix.timestamp)];
        row.extend(layout.codes().map(|code| format_extension(fix.extension(code))));
        writer.write_record(&row)?;
    }

    finish(writer)
}

/// Render both tables for a decoded flight. The sensor table is omitted when
/// the flight has no sensor fixes.
pub fn flight_to_csv(flight: &IgcFlight) -> Result<ConversionOutcome> {
    let position_csv = position_fixes_to_csv(&flight.position_fixes, &flight.position_layout)?;
    let sensor_csv = if flight.has_sensor_data() {
        Some(sensor_fixes_to_csv(&flight.sensor_fixes, &flight.sensor_layout)?)
    } else {
        None
    };

    Ok(ConversionOutcome {
        position_fix_count: flight.position_fixes.len(),
        sensor_fix_count: flight.sensor_fixes.len(),
        position_csv,
        sensor_csv,
    })
}

/// Compute output paths for the position and sensor CSV files.
///
/// Returns `(position_csv, sensor_csv)`: `<stem>.csv` and `<stem>.sensors.csv`
/// inside `output_dir`, or next to the input when no directory is set.
pub fn compute_export_paths(input_path: &Path, export_options: &ExportOptions) -> (PathBuf, PathBuf) {
    let base_name = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("flight");

    let output_dir = match export_options.output_dir {
        Some(ref dir) => PathBuf::from(dir),
        None => input_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    (
        output_dir.join(format!("{base_name}.csv")),
        output_dir.join(format!("{base_name}.sensors.csv")),
    )
}

/// Write a conversion outcome to CSV files next to `input_path` (or in `output_dir`)
pub fn export_to_csv(
    outcome: &ConversionOutcome,
    input_path: &Path,
    export_options: &ExportOptions,
) -> Result<ExportReport> {
    if outcome.position_fix_count == 0 && !export_options.force_export {
        warn!("No position fixes decoded from {:?}, skipping export", input_path);
        return Ok(ExportReport {
            skipped: true,
            ..Default::default()
        });
    }

    let (position_path, sensor_path) = compute_export_paths(input_path, export_options);

    if let Some(dir) = position_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
            debug!("Created output directory: {dir:?}");
        }
    }

    let mut report = ExportReport::default();

    std::fs::write(&position_path, &outcome.position_csv)?;
    debug!(
        "Wrote {} position fix row(s) to {:?}",
        outcome.position_fix_count, position_path
    );
    report.position_csv_path = Some(position_path);

    if export_options.sensors {
        if let Some(ref sensor_csv) = outcome.sensor_csv {
            std::fs::write(&sensor_path, sensor_csv)?;
            debug!(
                "Wrote {} sensor fix row(s) to {:?}",
                outcome.sensor_fix_count, sensor_path
            );
            report.sensor_csv_path = Some(sensor_path);
        }
    }

    Ok(report)
}
