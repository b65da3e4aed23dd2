use crate::Result;

use sb_core::Record;

use async_trait::async_trait;

/// Source A seam: a periodic-pull upstream feed.
///
/// The bridge calls `poll` on a fixed interval; each call yields the
/// records that arrived since the previous one.
#[async_trait]
pub trait PollSource: Send {
    async fn init(&mut self) -> Result<()>;

    async fn poll(&mut self) -> Result<Vec<Record>>;
}
