use crate::StartupMode;

use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct BridgeConfig {
    pub startup_mode: StartupMode,

    /// Interval between `poll` calls on source A.
    pub poll_interval: Duration,
}
