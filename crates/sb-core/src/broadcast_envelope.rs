use crate::{CoreError, Record, Result, SourceKind};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::Value;

/// Field injected into every outgoing message to identify its source
/// category. The only server-side mutation applied before fan-out.
pub const DISCRIMINATOR_FIELD: &str = "type";

/// A record tagged with its source category, ready for fan-out.
#[derive(Debug, Clone)]
pub struct BroadcastEnvelope {
    source: SourceKind,
    record: Record,
}

impl BroadcastEnvelope {
    pub fn new(source: SourceKind, record: Record) -> Self {
        Self { source, record }
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Canonical wire form: the record's fields plus the discriminator.
    /// Serialized once per broadcast; every connection receives the same
    /// bytes.
    #[track_caller]
    pub fn to_wire(&self) -> Result<String> {
        let mut fields = self.record.fields().clone();
        fields.insert(
            DISCRIMINATOR_FIELD.to_string(),
            Value::String(self.source.discriminator().to_string()),
        );
        serde_json::to_string(&fields).map_err(|source| CoreError::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
