use crate::export::flight_to_csv;
use crate::parser::classify::{classify_line, split_lines, LineKind};
use crate::parser::extension::parse_extension_layout;
use crate::parser::header::parse_header_lines;
use crate::parser::record::{decode_position_fix, decode_sensor_fix};
use crate::parser::sequencer::TimestampSequencer;
use crate::parser::summary::build_summary;
use crate::types::*;
use crate::{IgcError, Result};
use chrono::NaiveDate;
use log::{debug, trace, warn};
use std::borrow::Cow;
use std::path::Path;

/// Everything the fix decoder needs, known only after the first pass
#[derive(Debug, Clone)]
struct FlightDefinitions {
    header: FlightHeader,
    flight_date: NaiveDate,
    position_layout: ExtensionLayout,
    sensor_layout: ExtensionLayout,
}

/// First pass: header metadata, flight date and the final I/J layouts
fn scan_definitions(lines: &[&str]) -> Result<FlightDefinitions> {
    let header = parse_header_lines(lines.iter().copied());
    let flight_date = header.flight_date.ok_or(IgcError::NoDateFound)?;

    let mut position_layout = ExtensionLayout::new();
    let mut sensor_layout = ExtensionLayout::new();
    for line in lines {
        match classify_line(line) {
            LineKind::ExtensionDefB => position_layout = parse_extension_layout(line),
            LineKind::ExtensionDefK => sensor_layout = parse_extension_layout(line),
            _ => {}
        }
    }

    debug!(
        "Flight date {}, {} B extension(s), {} K extension(s)",
        flight_date,
        position_layout.len(),
        sensor_layout.len()
    );

    Ok(FlightDefinitions {
        header,
        flight_date,
        position_layout,
        sensor_layout,
    })
}

/// Second pass: decode every fix line in file order through one sequencer
fn decode_fixes(lines: &[&str], definitions: &FlightDefinitions) -> (Vec<PositionFix>, Vec<SensorFix>) {
    let mut sequencer = TimestampSequencer::new(definitions.flight_date);
    let mut position_fixes = Vec::new();
    let mut sensor_fixes = Vec::new();
    let mut dropped = 0usize;

    for (index, line) in lines.iter().enumerate() {
        match classify_line(line) {
            LineKind::PositionFix => {
                match sequencer.sequence(|date| {
                    decode_position_fix(line, date, &definitions.position_layout)
                }) {
                    Some(fix) => position_fixes.push(fix),
                    None => {
                        trace!("Dropping B record on line {}: {}", index + 1, line);
                        dropped += 1;
                    }
                }
            }
            LineKind::SensorFix => {
                match sequencer.sequence(|date| {
                    decode_sensor_fix(line, date, &definitions.sensor_layout)
                }) {
                    Some(fix) => sensor_fixes.push(fix),
                    None => {
                        trace!("Dropping K record on line {}: {}", index + 1, line);
                        dropped += 1;
                    }
                }
            }
            _ => {}
        }
    }

    debug!(
        "Decoded {} position fix(es), {} sensor fix(es), dropped {}, {} midnight rollover(s)",
        position_fixes.len(),
        sensor_fixes.len(),
        dropped,
        sequencer.rollovers()
    );

    (position_fixes, sensor_fixes)
}

/// Parse an already split line sequence
pub fn parse_igc_lines(lines: &[&str]) -> Result<IgcFlight> {
    if lines.iter().all(|line| line.trim().is_empty()) {
        return Err(IgcError::EmptyInput);
    }

    let definitions = scan_definitions(lines)?;
    let (position_fixes, sensor_fixes) = decode_fixes(lines, &definitions);

    if position_fixes.is_empty() {
        warn!("IGC data produced no position fixes");
    }

    Ok(IgcFlight {
        header: definitions.header,
        flight_date: definitions.flight_date,
        position_layout: definitions.position_layout,
        sensor_layout: definitions.sensor_layout,
        position_fixes,
        sensor_fixes,
    })
}

/// Parse IGC text held in memory
pub fn parse_igc_str(text: &str) -> Result<IgcFlight> {
    parse_igc_lines(&split_lines(text))
}

/// Parse raw IGC bytes. Invalid UTF-8 (e.g. Latin-1 pilot names) is replaced.
pub fn parse_igc_bytes(data: &[u8]) -> Result<IgcFlight> {
    parse_igc_str(&decode_text(data))
}

/// Read and parse an IGC file
pub fn parse_igc_file(file_path: &Path) -> Result<IgcFlight> {
    debug!("Parsing IGC file {:?}", file_path);
    let data = std::fs::read(file_path)?;
    parse_igc_bytes(&data)
}

/// Parse and render both CSV tables from IGC text
pub fn convert_igc_str(text: &str) -> Result<ConversionOutcome> {
    let flight = parse_igc_str(text)?;
    flight_to_csv(&flight)
}

pub fn convert_igc_bytes(data: &[u8]) -> Result<ConversionOutcome> {
    convert_igc_str(&decode_text(data))
}

pub fn convert_igc_file(file_path: &Path) -> Result<ConversionOutcome> {
    let flight = parse_igc_file(file_path)?;
    flight_to_csv(&flight)
}

/// Summarize IGC text without decoding positions
pub fn summarize_igc_str(text: &str) -> FlightSummary {
    build_summary(split_lines(text))
}

pub fn summarize_igc_bytes(data: &[u8]) -> FlightSummary {
    summarize_igc_str(&decode_text(data))
}

pub fn summarize_igc_file(file_path: &Path) -> Result<FlightSummary> {
    let data = std::fs::read(file_path)?;
    Ok(summarize_igc_bytes(&data))
}

fn decode_text(data: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(data)
}
