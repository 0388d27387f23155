use crate::types::Timestamped;
use chrono::{DateTime, NaiveDate, Utc};
use log::trace;

/// Rolling date state for one conversion pass.
///
/// Fix records only carry a time of day. The sequencer owns the reference
/// date they are decoded against and advances it by one day whenever a
/// record would otherwise go back in time (a UTC midnight crossing).
/// Assumes less than 24 hours between consecutive fixes.
#[derive(Debug, Clone)]
pub struct TimestampSequencer {
    reference_date: NaiveDate,
    last_timestamp: Option<DateTime<Utc>>,
    rollovers: u32,
}

impl TimestampSequencer {
    pub fn new(flight_date: NaiveDate) -> Self {
        Self {
            reference_date: flight_date,
            last_timestamp: None,
            rollovers: 0,
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.last_timestamp
    }

    /// Number of midnight crossings detected so far
    pub fn rollovers(&self) -> u32 {
        self.rollovers
    }

    /// Decode one record with `decode` and keep timestamps non-decreasing.
    ///
    /// When the record lands before the previous one, the reference date is
    /// advanced by one day and the line is decoded once more. A record that
    /// fails to decode either time is dropped.
    pub fn sequence<T, F>(&mut self, decode: F) -> Option<T>
    where
        T: Timestamped,
        F: Fn(NaiveDate) -> Option<T>,
    {
        let record = decode(self.reference_date)?;

        let record = match self.last_timestamp {
            Some(last) if record.timestamp() < last => {
                let next_date = self.reference_date.succ_opt()?;
                trace!(
                    "Time went back from {} to {}, advancing reference date to {}",
                    last,
                    record.timestamp(),
                    next_date
                );
                self.reference_date = next_date;
                self.rollovers += 1;
                decode(next_date)?
            }
            _ => record,
        };

        self.last_timestamp = Some(record.timestamp());
        Some(record)
    }
}
