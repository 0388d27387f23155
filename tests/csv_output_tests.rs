//! Integration tests for CSV output validation
//!
//! Converts the bundled sample log and checks the shape and content of both tables.

use igc_parser::{convert_igc_str, summarize_igc_str};

const SAMPLE: &str = include_str!("data/sample.igc");

fn table(csv: &[u8]) -> Vec<Vec<String>> {
    String::from_utf8(csv.to_vec())
        .expect("CSV is valid UTF-8")
        .lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

#[test]
fn test_csv_field_count_consistency() {
    let outcome = convert_igc_str(SAMPLE).expect("sample converts");
    let rows = table(&outcome.position_csv);

    let header_fields = rows[0].len();
    assert_eq!(header_fields, 8);
    for (i, row) in rows.iter().enumerate().skip(1) {
        assert_eq!(
            row.len(),
            header_fields,
            "Row {} has {} fields, but header has {} fields: {:?}",
            i + 1,
            row.len(),
            header_fields,
            row
        );
    }
}

#[test]
fn test_position_table_content() {
    let outcome = convert_igc_str(SAMPLE).unwrap();
    // The B line with a bad seconds digit is dropped
    assert_eq!(outcome.position_fix_count, 5);

    let rows = table(&outcome.position_csv);
    assert_eq!(
        rows[0],
        [
            "date",
            "Latitude",
            "Longitude",
            "GPS Altitude",
            "Pressure Altitude",
            "FXA",
            "SIU",
            "ENL"
        ]
    );
    assert_eq!(
        rows[1],
        [
            "2020-12-31T23:59:56Z",
            "52.218717",
            "-0.324267",
            "150",
            "100",
            "35",
            "9",
            "12"
        ]
    );
    // Dash-padded ENL is absent
    assert_eq!(rows[3][0], "2021-01-01T00:00:00Z");
    assert_eq!(rows[3][7], "");
    // Truncated line: FXA fits, SIU and ENL do not
    assert_eq!(&rows[4][5..], ["35", "", ""]);
    // Trailing dash pad stripped from ENL
    assert_eq!(rows[5][0], "2021-01-01T00:00:04Z");
    assert_eq!(rows[5][7], "80");
    assert_eq!(rows.len(), 6);
}

#[test]
fn test_sensor_table_content() {
    let outcome = convert_igc_str(SAMPLE).unwrap();
    assert_eq!(outcome.sensor_fix_count, 2);

    let rows = table(outcome.sensor_csv.as_deref().expect("sensor table present"));
    assert_eq!(rows[0], ["date", "HDT"]);
    assert_eq!(rows[1], ["2020-12-31T23:59:59Z", "180"]);
    assert_eq!(rows[2], ["2021-01-01T00:00:03Z", "181"]);
}

#[test]
fn test_timestamps_are_monotonic_across_midnight() {
    let outcome = convert_igc_str(SAMPLE).unwrap();
    let rows = table(&outcome.position_csv);

    let dates: Vec<&str> = rows.iter().skip(1).map(|row| row[0].as_str()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn test_altitude_fields_are_numeric() {
    let outcome = convert_igc_str(SAMPLE).unwrap();
    for row in table(&outcome.position_csv).iter().skip(1) {
        for value in &row[3..5] {
            assert!(value.parse::<i64>().is_ok(), "altitude {value:?} should be numeric");
        }
        for value in &row[1..3] {
            let decimals = value.split('.').nth(1).map(str::len);
            assert_eq!(decimals, Some(6), "coordinate {value:?} should have 6 decimals");
        }
    }
}

#[test]
fn test_summary_of_sample() {
    let summary = summarize_igc_str(SAMPLE);
    assert_eq!(summary.pilot.as_deref(), Some("Jane Doe"));
    assert_eq!(summary.glider_type.as_deref(), Some("ASG 29"));
    assert_eq!(summary.glider_id.as_deref(), Some("D-KXXX"));
    assert_eq!(summary.competition_id.as_deref(), Some("JD"));
    assert_eq!(summary.competition_class.as_deref(), Some("18m"));
    // Counted by classification, the malformed B line included
    assert_eq!(summary.position_fix_count, 6);
    assert_eq!(summary.sensor_fix_count, 2);
    assert!(summary.has_extensions);
    assert_eq!(
        summary.first_fix_time.map(|t| t.to_rfc3339()),
        Some("2020-12-31T23:59:56+00:00".to_string())
    );
}
