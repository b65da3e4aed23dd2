use crate::{ConnectionId, Result as WsErrorResult, ShutdownGuard, WsError};

use sb_bridge::CommandRelay;

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

/// Manages a single WebSocket connection.
///
/// Outgoing traffic flows through the bounded queue owned by the
/// registry; incoming client payloads are handed to the command relay
/// verbatim, with no response sent back.
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    relay: Arc<CommandRelay>,
}

impl WebSocketConnection {
    pub fn new(connection_id: ConnectionId, relay: Arc<CommandRelay>) -> Self {
        Self {
            connection_id,
            relay,
        }
    }

    /// Handle the WebSocket connection lifecycle
    pub async fn handle(
        self,
        socket: WebSocket,
        outgoing_sender: mpsc::Sender<Message>,
        mut outgoing: mpsc::Receiver<Message>,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        log::info!("WebSocket connection {} established", self.connection_id);

        // Split socket into sender and receiver
        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Spawn send task draining the bounded outgoing queue
        let send_task = tokio::spawn(async move {
            while let Some(msg) = outgoing.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        let result = loop {
            tokio::select! {
                // Handle incoming messages from client
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(msg)) => {
                            if let Err(e) = self.handle_client_message(msg, &outgoing_sender).await {
                                log::error!(
                                    "Error handling message from connection {}: {}",
                                    self.connection_id,
                                    e
                                );
                                break Err(e);
                            }
                        }
                        Some(Err(e)) => {
                            log::error!(
                                "WebSocket error on connection {}: {}",
                                self.connection_id,
                                e
                            );
                            break Err(WsError::connection_closed(format!("WebSocket error: {e}")));
                        }
                        None => {
                            log::info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                // Handle graceful shutdown
                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    break Ok(());
                }
            }
        };

        // Cleanup: closing our sender alone doesn't close the queue
        // (the registry holds a clone until unregistration), so the
        // send task is aborted rather than joined.
        drop(outgoing_sender);
        send_task.abort();
        let _ = send_task.await;

        log::info!("WebSocket connection {} closed", self.connection_id);

        result
    }

    /// Handle a message from the client
    async fn handle_client_message(
        &self,
        msg: Message,
        outgoing: &mpsc::Sender<Message>,
    ) -> WsErrorResult<()> {
        match msg {
            Message::Text(text) => {
                self.relay
                    .on_client_message(
                        &self.connection_id.to_string(),
                        Bytes::copy_from_slice(text.as_bytes()),
                    )
                    .await;
                Ok(())
            }
            Message::Binary(data) => {
                self.relay
                    .on_client_message(&self.connection_id.to_string(), data)
                    .await;
                Ok(())
            }
            Message::Ping(data) => {
                outgoing
                    .send(Message::Pong(data))
                    .await
                    .map_err(|_| WsError::send_buffer_full())?;
                Ok(())
            }
            Message::Pong(_) => {
                // Heartbeat response received
                Ok(())
            }
            Message::Close(_) => {
                log::info!("Received close frame from connection {}", self.connection_id);
                Ok(())
            }
        }
    }
}
