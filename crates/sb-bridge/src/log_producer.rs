use crate::{CommandProducer, Result};

use async_trait::async_trait;
use bytes::Bytes;
use log::debug;

/// Producer that logs and discards every send. Used when no command
/// topic is wired up, keeping the relay path exercised end to end.
pub struct LogProducer;

#[async_trait]
impl CommandProducer for LogProducer {
    async fn init(&mut self) -> Result<()> {
        Ok(())
    }

    async fn send(&self, topic: &str, partition: i32, payload: Bytes) -> Result<()> {
        debug!(
            "discarding {} byte command for {topic}[{partition}]",
            payload.len()
        );

        Ok(())
    }
}
