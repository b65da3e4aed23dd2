/// Lifecycle state of an upstream source or the outbound producer.
///
/// Transitions are one-directional: Uninitialized -> Initializing ->
/// {Ready, Failed}. There is no automatic recovery from Failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceState {
    #[default]
    Uninitialized,
    Initializing,
    Ready,
    Failed,
}

impl SourceState {
    /// Whether records from this source may be forwarded downstream.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Initializing => "initializing",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SourceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
