
use crate::{BatchSource, BridgeError, CommandProducer, PollSource, Result};

use async_trait::async_trait;
use bytes::Bytes;
use sb_core::Record;

pub fn record(value: serde_json::Value) -> Record {
    Record::from_value(value).unwrap()
}

pub struct FailingPollSource;

#[async_trait]
impl PollSource for FailingPollSource {
    async fn init(&mut self) -> Result<()> {
        Err(BridgeError::init("poll source", "connection refused"))
    }

    async fn poll(&mut self) -> Result<Vec<Record>> {
        Ok(Vec::new())
    }
}

pub struct FailingBatchSource;

#[async_trait]
impl BatchSource for FailingBatchSource {
    async fn init(&mut self) -> Result<()> {
        Err(BridgeError::init("batch source", "subscription rejected"))
    }

    async fn next_batch(&mut self) -> Result<Option<Vec<Bytes>>> {
        Ok(None)
    }
}

pub struct FailingProducer;

#[async_trait]
impl CommandProducer for FailingProducer {
    async fn init(&mut self) -> Result<()> {
        Ok(())
    }

    async fn send(&self, _topic: &str, _partition: i32, _payload: Bytes) -> Result<()> {
        Err(BridgeError::producer_send("broker unavailable"))
    }
}
