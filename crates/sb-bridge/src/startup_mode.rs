use std::fmt::{Display, Formatter, Result as FmtResult};

/// Failure policy for the initialization sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartupMode {
    /// Any initialization failure aborts the sequence.
    #[default]
    Strict,

    /// A failed stage is marked failed and left out of the pipeline;
    /// later stages still attempt initialization independently.
    Permissive,
}

impl StartupMode {
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl Display for StartupMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Permissive => write!(f, "permissive"),
        }
    }
}
