use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_COMMAND_TOPIC: &str = "streamboard-commands";

/// Command relay settings: the fixed destination for client-originated
/// commands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub command_topic: String,
    pub partition: i32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            command_topic: String::from(DEFAULT_COMMAND_TOPIC),
            partition: 0,
        }
    }
}

impl RelayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.command_topic.trim().is_empty() {
            return Err(ConfigError::config("relay.command_topic must not be empty"));
        }

        if self.partition < 0 {
            return Err(ConfigError::config(format!(
                "relay.partition must be >= 0, got {}",
                self.partition
            )));
        }

        Ok(())
    }
}
