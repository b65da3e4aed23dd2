use crate::ConnectionId;

use axum::extract::ws::Message;
use chrono::DateTime;
use tokio::sync::mpsc;

/// Registry entry for an active connection. The sender feeds the
/// connection's bounded outgoing queue.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub connected_at: DateTime<chrono::Utc>,
    pub sender: mpsc::Sender<Message>,
}
