use crate::{CoreError, Result};

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An upstream event: an open mapping of field name to value.
///
/// No schema is assumed. Components that inspect record content declare
/// exactly which field names they read; everything else is carried opaquely.
/// Records are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Decode a record from its serialized wire form.
    #[track_caller]
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes).map_err(|source| CoreError::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;
        Self::from_value(value)
    }

    /// Build a record from an already-parsed JSON value.
    #[track_caller]
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            _ => Err(CoreError::NotAnObject {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Millisecond timestamp read from `field`. Accepts a JSON number
    /// (epoch milliseconds) or an RFC 3339 string.
    #[track_caller]
    pub fn timestamp_ms(&self, field: &str) -> Result<i64> {
        match self.get(field) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .ok_or_else(|| CoreError::invalid_field(field, "timestamp out of range")),
            Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.timestamp_millis())
                .map_err(|e| CoreError::invalid_field(field, format!("not a timestamp: {e}"))),
            Some(_) => Err(CoreError::invalid_field(field, "not a timestamp")),
            None => Err(CoreError::missing_field(field)),
        }
    }

    /// Numeric metric read from `field`.
    #[track_caller]
    pub fn metric(&self, field: &str) -> Result<f64> {
        match self.get(field) {
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| CoreError::invalid_field(field, "metric out of range")),
            Some(_) => Err(CoreError::invalid_field(field, "not a number")),
            None => Err(CoreError::missing_field(field)),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
