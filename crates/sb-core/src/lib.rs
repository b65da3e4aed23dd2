pub mod broadcast_envelope;
pub mod error;
pub mod record;
pub mod sample;
pub mod source_kind;
pub mod source_state;

pub use broadcast_envelope::{BroadcastEnvelope, DISCRIMINATOR_FIELD};
pub use error::{CoreError, Result};
pub use record::Record;
pub use sample::Sample;
pub use source_kind::SourceKind;
pub use source_state::SourceState;

#[cfg(test)]
mod tests;
