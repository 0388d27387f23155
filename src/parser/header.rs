use crate::conversion::{expand_two_digit_year, parse_digits};
use crate::parser::classify::{classify_line, LineKind};
use crate::types::FlightHeader;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Three-letter codes of the free-text H records we extract
pub const PILOT_CODE: &str = "PLT";
pub const GLIDER_TYPE_CODE: &str = "GTY";
pub const GLIDER_ID_CODE: &str = "GID";
pub const COMPETITION_ID_CODE: &str = "CID";
pub const COMPETITION_CLASS_CODE: &str = "CCL";

const DATE_CODE: &str = "DTE";

fn date_digits() -> Option<&'static Regex> {
    static DATE_DIGITS: OnceLock<Option<Regex>> = OnceLock::new();
    DATE_DIGITS
        .get_or_init(|| Regex::new("[0-9]{6}").ok())
        .as_ref()
}

/// Parse the flight date from an H record containing `DTE`.
///
/// The first six consecutive digits after the marker are read as DDMMYY.
/// Both `HFDTE010180` and `HFDTEDATE:010180,01` forms are accepted.
pub fn parse_flight_date(line: &str) -> Option<NaiveDate> {
    let marker = line.to_ascii_uppercase().find(DATE_CODE)?;
    let rest = line.get(marker + DATE_CODE.len()..)?;
    let digits = date_digits()?.find(rest)?.as_str();

    let day = parse_digits(&digits[0..2])?;
    let month = parse_digits(&digits[2..4])?;
    let year = expand_two_digit_year(parse_digits(&digits[4..6])?);

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Extract a free-text header value: the trimmed text after the first colon
/// of a line whose key (the text before that colon) mentions `code`.
/// Blank values are treated as missing.
pub fn extract_field_value(line: &str, code: &str) -> Option<String> {
    let (key, value) = line.split_once(':')?;
    if !key.to_ascii_uppercase().contains(&code.to_ascii_uppercase()) {
        return None;
    }
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Fold one H record into the header, keeping the first value found per field
pub fn apply_header_line(header: &mut FlightHeader, line: &str) {
    if header.flight_date.is_none() {
        header.flight_date = parse_flight_date(line);
    }

    let slots = [
        (&mut header.pilot, PILOT_CODE),
        (&mut header.glider_type, GLIDER_TYPE_CODE),
        (&mut header.glider_id, GLIDER_ID_CODE),
        (&mut header.competition_id, COMPETITION_ID_CODE),
        (&mut header.competition_class, COMPETITION_CLASS_CODE),
    ];
    for (slot, code) in slots {
        if slot.is_none() {
            *slot = extract_field_value(line, code);
        }
    }
}

/// Parse header metadata from every H record in a line sequence
pub fn parse_header_lines<'a, I>(lines: I) -> FlightHeader
where
    I: IntoIterator<Item = &'a str>,
{
    let mut header = FlightHeader::default();
    for line in lines {
        if classify_line(line) == LineKind::Header {
            apply_header_line(&mut header, line);
        }
    }
    header
}
