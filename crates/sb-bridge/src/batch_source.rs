use crate::Result;

use bytes::Bytes;

use async_trait::async_trait;

/// Source B seam: a push-style upstream feed delivering message
/// batches. Each batch entry is a serialized payload that must be
/// decoded into a record before use.
#[async_trait]
pub trait BatchSource: Send {
    async fn init(&mut self) -> Result<()>;

    /// Wait for the next batch. `None` means the subscription ended.
    async fn next_batch(&mut self) -> Result<Option<Vec<Bytes>>>;
}
