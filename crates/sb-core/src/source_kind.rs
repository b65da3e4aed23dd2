use serde::{Deserialize, Serialize};

/// Originating source category for a broadcast record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Source A: order events delivered on a fixed polling interval.
    Ecommerce,
    /// Source B: weight telemetry delivered as asynchronous batches.
    Weight,
}

impl SourceKind {
    /// Value injected into the outgoing envelope's discriminator field.
    pub fn discriminator(&self) -> &'static str {
        match self {
            Self::Ecommerce => "ecommerce",
            Self::Weight => "weight",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.discriminator())
    }
}
