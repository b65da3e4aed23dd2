use crate::Result;

use bytes::Bytes;

use async_trait::async_trait;

/// Outbound producer seam: fire-and-forget delivery into a downstream
/// topic. No delivery confirmation is required by the pipeline.
#[async_trait]
pub trait CommandProducer: Send + Sync {
    async fn init(&mut self) -> Result<()>;

    async fn send(&self, topic: &str, partition: i32, payload: Bytes) -> Result<()>;
}
