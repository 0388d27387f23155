//! Property tests for the decoding and normalization rules

use chrono::{Datelike, TimeZone, Utc};
use igc_parser::{
    decode_position_fix, format_coordinate, normalize_field, parse_flight_date, parse_igc_str,
    position_fixes_to_csv, ExtensionLayout, FieldValue, PositionFix,
};
use proptest::prelude::*;
use std::collections::HashMap;

fn valid_day_month() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=12).prop_flat_map(|month| (1u32..=28, Just(month)))
}

proptest! {
    #[test]
    fn prop_two_digit_year_window((day, month) in valid_day_month(), yy in 0u32..100) {
        let line = format!("HFDTE{day:02}{month:02}{yy:02}");
        let date = parse_flight_date(&line).expect("valid date");
        let expected = if yy < 80 { 2000 + yy as i32 } else { 1900 + yy as i32 };
        prop_assert_eq!(date.year(), expected);
        prop_assert_eq!(date.month(), month);
        prop_assert_eq!(date.day(), day);
    }

    #[test]
    fn prop_short_position_lines_never_decode(line in "B[0-9NSEWA]{0,33}") {
        let date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        prop_assert!(decode_position_fix(&line, date, &ExtensionLayout::new()).is_none());
    }

    #[test]
    fn prop_non_digit_time_never_decodes(
        prefix in "[0-9]{0,5}",
        bad in "[A-Z :]",
    ) {
        let mut time = format!("{prefix}{bad}");
        while time.len() < 6 {
            time.push('0');
        }
        let line = format!("B{time}5213123N00019456WA0010000150");
        let date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        prop_assert!(decode_position_fix(&line, date, &ExtensionLayout::new()).is_none());
    }

    #[test]
    fn prop_coordinate_text_round_trips(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
        for value in [lat, lon] {
            let text = format_coordinate(value);
            let parsed: f64 = text.parse().unwrap();
            prop_assert!((parsed - value).abs() <= 5e-7);
        }
    }

    #[test]
    fn prop_emitted_coordinates_round_trip(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
        let fix = PositionFix {
            timestamp: Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap(),
            latitude: lat,
            longitude: lon,
            validity: 'A',
            pressure_altitude_m: Some(100),
            gps_altitude_m: Some(150),
            extensions: HashMap::new(),
        };

        let csv = position_fixes_to_csv(&[fix], &ExtensionLayout::new()).unwrap();
        let text = String::from_utf8(csv).unwrap();
        let row: Vec<&str> = text.lines().nth(1).unwrap().split(',').collect();
        prop_assert_eq!(row.len(), 5);

        for (cell, value) in [(row[1], lat), (row[2], lon)] {
            prop_assert_eq!(cell.split('.').nth(1).map(str::len), Some(6));
            let parsed: f64 = cell.parse().unwrap();
            prop_assert!((parsed - value).abs() <= 5e-7);
        }
    }

    #[test]
    fn prop_rollover_keeps_timestamps_monotonic(
        times in proptest::collection::vec((0u32..24, 0u32..60, 0u32..60), 1..40)
    ) {
        let mut igc = String::from("HFDTE010120\n");
        for (h, m, s) in &times {
            igc.push_str(&format!("B{h:02}{m:02}{s:02}5213123N00019456WA0010000150\n"));
        }

        let flight = parse_igc_str(&igc).unwrap();
        prop_assert_eq!(flight.position_fixes.len(), times.len());

        let mut wraps = 0i64;
        for pair in flight.position_fixes.windows(2) {
            prop_assert!(pair[1].timestamp >= pair[0].timestamp);
            let days = (pair[1].timestamp.date_naive() - pair[0].timestamp.date_naive()).num_days();
            prop_assert!(days == 0 || days == 1);
            wraps += days;
        }
        let expected_wraps = times
            .windows(2)
            .filter(|pair| pair[1] < pair[0])
            .count() as i64;
        prop_assert_eq!(wraps, expected_wraps);
    }

    #[test]
    fn prop_normalize_is_idempotent(raw in "[ 0-9A-Za-z.+-]{0,8}") {
        let first = normalize_field(&raw);
        let second = normalize_field(&first.render());
        match (&first, &second) {
            (FieldValue::Real(a), FieldValue::Real(b)) => prop_assert_eq!(a.to_bits(), b.to_bits()),
            _ => prop_assert_eq!(first, second),
        }
    }

    #[test]
    fn prop_trailing_dash_pad_is_stripped(value in 0i64..1_000_000, pad in 1usize..4) {
        let raw = format!("{value}{}", "-".repeat(pad));
        prop_assert_eq!(normalize_field(&raw), FieldValue::Integer(value));
    }
}

#[test]
fn test_all_dashes_absent_and_leading_dash_kept() {
    assert_eq!(normalize_field("----"), FieldValue::Absent);
    assert_eq!(normalize_field("1234-"), FieldValue::Integer(1234));
    assert_eq!(normalize_field("-12-"), FieldValue::Integer(-12));
}
