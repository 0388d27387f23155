use crate::parser::classify::{classify_line, LineKind};
use crate::parser::header::apply_header_line;
use crate::parser::record::{build_timestamp, decode_time_of_day};
use crate::types::{FlightHeader, FlightSummary};

/// Build a display summary in one pass over the lines.
///
/// Fix lines are counted by classification only; the first B record's time
/// is the only fix field decoded.
pub fn build_summary<'a, I>(lines: I) -> FlightSummary
where
    I: IntoIterator<Item = &'a str>,
{
    let mut header = FlightHeader::default();
    let mut summary = FlightSummary::default();
    let mut first_fix_time = None;

    for line in lines {
        match classify_line(line) {
            LineKind::Header => apply_header_line(&mut header, line),
            LineKind::ExtensionDefB => summary.has_extensions = true,
            LineKind::PositionFix => {
                if summary.position_fix_count == 0 {
                    first_fix_time = decode_time_of_day(line);
                }
                summary.position_fix_count += 1;
            }
            LineKind::SensorFix => summary.sensor_fix_count += 1,
            LineKind::ExtensionDefK | LineKind::Ignored => {}
        }
    }

    summary.first_fix_time = header
        .flight_date
        .zip(first_fix_time)
        .map(|(date, time)| build_timestamp(date, time));
    summary.flight_date = header.flight_date;
    summary.pilot = header.pilot;
    summary.glider_type = header.glider_type;
    summary.glider_id = header.glider_id;
    summary.competition_id = header.competition_id;
    summary.competition_class = header.competition_class;

    summary
}
