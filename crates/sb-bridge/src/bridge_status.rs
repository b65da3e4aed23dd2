use std::fmt::{Display, Formatter, Result as FmtResult};

use sb_core::SourceState;

/// Snapshot of the initialization outcome for each pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeStatus {
    pub poll_source: SourceState,
    pub batch_source: SourceState,
    pub producer: SourceState,
}

impl BridgeStatus {
    pub fn new() -> Self {
        Self {
            poll_source: SourceState::Uninitialized,
            batch_source: SourceState::Uninitialized,
            producer: SourceState::Uninitialized,
        }
    }

    pub fn any_failed(&self) -> bool {
        self.poll_source.is_failed() || self.batch_source.is_failed() || self.producer.is_failed()
    }
}

impl Default for BridgeStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for BridgeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "poll source: {:?}, batch source: {:?}, producer: {:?}",
            self.poll_source, self.batch_source, self.producer
        )
    }
}
