use crate::{ConnectionRegistry, Result as WsErrorResult, ShutdownGuard};

use sb_core::{BroadcastEnvelope, Record, SourceKind};

use axum::extract::ws::Message;
use log::{error, info, warn};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Fans records out to every registered connection.
///
/// The envelope is serialized once per broadcast; every connection
/// receives the same bytes. Delivery is per-connection best effort: a
/// full outgoing queue drops the message for that connection only, and
/// a closed queue gets the connection unregistered.
#[derive(Clone)]
pub struct BroadcastHub {
    registry: ConnectionRegistry,
}

impl BroadcastHub {
    pub fn new(registry: ConnectionRegistry) -> Self {
        Self { registry }
    }

    /// Broadcast one record to all connections, returning how many
    /// outgoing queues accepted it.
    pub async fn broadcast(&self, source: SourceKind, record: Record) -> WsErrorResult<usize> {
        let envelope = BroadcastEnvelope::new(source, record);
        let wire = envelope.to_wire()?;
        let message = Message::Text(wire.into());

        let mut delivered = 0;
        let mut closed = Vec::new();

        for (connection_id, sender) in self.registry.connections().await {
            match sender.try_send(message.clone()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!("Send buffer full for connection {connection_id}, dropping message");
                },
                Err(TrySendError::Closed(_)) => closed.push(connection_id),
            }
        }

        for connection_id in closed {
            self.registry.unregister(connection_id).await;
        }

        Ok(delivered)
    }

    /// Consume the bridge's forward channel until it closes or shutdown
    /// is signaled. A single pump task keeps per-source arrival order.
    pub async fn run_pump(
        self,
        mut records: mpsc::UnboundedReceiver<(SourceKind, Record)>,
        mut shutdown_guard: ShutdownGuard,
    ) {
        loop {
            tokio::select! {
                next = records.recv() => {
                    match next {
                        Some((source, record)) => {
                            if let Err(e) = self.broadcast(source, record).await {
                                error!("Broadcast failed: {e}");
                            }
                        },
                        None => {
                            info!("Record stream ended, stopping broadcast pump");
                            return;
                        },
                    }
                },
                _ = shutdown_guard.wait() => {
                    info!("Broadcast pump stopped");
                    return;
                },
            }
        }
    }
}
