use crate::{
    ConnectionConfig, ConnectionRegistry, ShutdownCoordinator, WebSocketConnection,
};

use sb_bridge::CommandRelay;

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use log::{error, warn};
use tokio::sync::mpsc;

/// Shared application state for WebSocket handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: ConnectionRegistry,
    pub relay: Arc<CommandRelay>,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

/// WebSocket upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    // Create the bounded outgoing queue and register it before the
    // upgrade, so the connection limit is enforced up front.
    let (sender, receiver) = mpsc::channel(state.config.send_buffer_size);

    let connection_id = state.registry.register(sender.clone()).await.map_err(|e| {
        warn!("Rejecting connection: {e}");
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, connection_id, sender, receiver, state)))
}

/// Handle WebSocket connection after upgrade
async fn handle_socket(
    socket: WebSocket,
    connection_id: crate::ConnectionId,
    sender: mpsc::Sender<axum::extract::ws::Message>,
    receiver: mpsc::Receiver<axum::extract::ws::Message>,
    state: AppState,
) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection = WebSocketConnection::new(connection_id, Arc::clone(&state.relay));

    // Handle connection lifecycle
    let result = connection
        .handle(socket, sender, receiver, shutdown_guard)
        .await;

    // Unregister on disconnect
    state.registry.unregister(connection_id).await;

    if let Err(e) = result {
        error!("Connection {connection_id} error: {e}");
    }
}
