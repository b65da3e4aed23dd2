use crate::{BridgeError, CommandProducer, Result};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;

/// A message accepted by [`ChannelProducer`], preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducedMessage {
    pub topic: String,
    pub partition: i32,
    pub payload: Bytes,
}

/// Producer backed by an in-process channel, used when the command
/// topic lives in the same process (and by tests to observe sends).
pub struct ChannelProducer {
    sender: mpsc::UnboundedSender<ProducedMessage>,
}

impl ChannelProducer {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ProducedMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (Self { sender }, receiver)
    }
}

#[async_trait]
impl CommandProducer for ChannelProducer {
    async fn init(&mut self) -> Result<()> {
        Ok(())
    }

    async fn send(&self, topic: &str, partition: i32, payload: Bytes) -> Result<()> {
        let message = ProducedMessage {
            topic: topic.to_owned(),
            partition,
            payload,
        };

        self.sender
            .send(message)
            .map_err(|_| BridgeError::producer_send("command channel closed"))
    }
}
