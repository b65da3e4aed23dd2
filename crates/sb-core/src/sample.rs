use crate::{Record, Result};

/// A record whose time field has been normalized to whole-second
/// resolution for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    time_ms: i64,
    record: Record,
}

impl Sample {
    /// Format an inbound record for the chart: truncates the time field
    /// to the start of its second. Fails when the time field is missing
    /// or not a timestamp.
    #[track_caller]
    pub fn from_record(record: Record, time_field: &str) -> Result<Self> {
        let raw = record.timestamp_ms(time_field)?;
        let time_ms = raw - raw.rem_euclid(1000);
        Ok(Self { time_ms, record })
    }

    /// Epoch milliseconds, truncated to the start of the second.
    pub fn time_ms(&self) -> i64 {
        self.time_ms
    }

    pub fn metric(&self, field: &str) -> Result<f64> {
        self.record.metric(field)
    }

    pub fn record(&self) -> &Record {
        &self.record
    }
}
