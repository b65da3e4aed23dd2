use crate::CommandProducer;

use std::sync::Arc;

use bytes::Bytes;
use log::{debug, error};

/// Forwards client command payloads verbatim to the configured topic
/// and partition. Delivery is fire and forget: failures are logged
/// and swallowed, and the originating connection is never informed.
pub struct CommandRelay {
    producer: Arc<dyn CommandProducer>,
    topic: String,
    partition: i32,
    enabled: bool,
}

impl CommandRelay {
    pub fn new(
        producer: Arc<dyn CommandProducer>,
        topic: String,
        partition: i32,
        enabled: bool,
    ) -> Self {
        Self {
            producer,
            topic,
            partition,
            enabled,
        }
    }

    pub async fn on_client_message(&self, connection_id: &str, payload: Bytes) {
        if !self.enabled {
            debug!("Relay disabled, dropping {} byte command from connection {connection_id}", payload.len());

            return;
        }

        if let Err(error) = self
            .producer
            .send(&self.topic, self.partition, payload)
            .await
        {
            error!("Relaying command from connection {connection_id} failed: {error}");
        }
    }
}
