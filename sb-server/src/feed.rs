use sb_core::Record;
use sb_ws::ShutdownGuard;

use std::time::Duration;

use bytes::Bytes;
use log::info;
use rand::Rng;
use serde_json::{Map, Value};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;

/// Development stand-in for the external upstream feeds.
///
/// Generates purchase-like records for the poll source and weight
/// telemetry batches for the batch source at fixed cadences, feeding
/// the channel-backed seams the bridge polls.
pub struct SimulatedFeed {
    pub order_interval: Duration,
    pub weight_interval: Duration,
}

impl Default for SimulatedFeed {
    fn default() -> Self {
        Self {
            order_interval: Duration::from_secs(1),
            weight_interval: Duration::from_secs(5),
        }
    }
}

impl SimulatedFeed {
    pub fn spawn(
        self,
        records: mpsc::UnboundedSender<Record>,
        batches: mpsc::UnboundedSender<Vec<Bytes>>,
        mut shutdown_guard: ShutdownGuard,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut order_ticker = interval(self.order_interval);
            let mut weight_ticker = interval(self.weight_interval);

            loop {
                tokio::select! {
                    _ = order_ticker.tick() => {
                        if records.send(order_record()).is_err() {
                            return;
                        }
                    },
                    _ = weight_ticker.tick() => {
                        if batches.send(weight_batch()).is_err() {
                            return;
                        }
                    },
                    _ = shutdown_guard.wait() => {
                        info!("Simulated feed stopped");
                        return;
                    },
                }
            }
        })
    }
}

/// One purchase-like record: current time plus a random order total.
pub fn order_record() -> Record {
    let mut rng = rand::rng();
    let total = (rng.random_range(10.0..500.0_f64) * 100.0).round() / 100.0;
    let items: i64 = rng.random_range(1..=8);

    let mut fields = Map::new();
    fields.insert(
        "time".to_string(),
        Value::from(chrono::Utc::now().timestamp_millis()),
    );
    fields.insert("total".to_string(), Value::from(total));
    fields.insert("items".to_string(), Value::from(items));

    Record::new(fields)
}

/// One batch of serialized weight telemetry entries.
pub fn weight_batch() -> Vec<Bytes> {
    let mut rng = rand::rng();
    let count = rng.random_range(1..=3);

    (0..count)
        .map(|_| {
            let weight = (rng.random_range(50.0..90.0_f64) * 10.0).round() / 10.0;

            let mut fields = Map::new();
            fields.insert(
                "time".to_string(),
                Value::from(chrono::Utc::now().timestamp_millis()),
            );
            fields.insert("weight".to_string(), Value::from(weight));

            Bytes::from(Value::Object(fields).to_string())
        })
        .collect()
}
