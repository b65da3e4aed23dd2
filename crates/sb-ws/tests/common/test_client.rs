use axum_test::{TestServer, TestWebSocket, WsMessage};
use bytes::Bytes;

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect to the WebSocket endpoint
    pub async fn connect(server: &TestServer) -> Self {
        let ws = server.get_websocket("/ws").await.into_websocket().await;

        Self { ws }
    }

    /// Send binary message
    pub async fn send_binary(&mut self, data: impl Into<Bytes>) {
        let bytes = data.into();
        self.ws.send_message(WsMessage::Binary(bytes)).await;
    }

    /// Send text message
    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    /// Receive text message
    pub async fn receive_text(&mut self) -> String {
        self.ws.receive_text().await
    }

    /// Receive a text message and parse it as a JSON object
    pub async fn receive_json_object(&mut self) -> serde_json::Map<String, serde_json::Value> {
        serde_json::from_str(&self.receive_text().await).expect("expected a JSON object frame")
    }

    /// Close the WebSocket connection
    pub async fn close(self) {
        self.ws.close().await;
    }
}
