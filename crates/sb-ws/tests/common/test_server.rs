#![allow(dead_code)]

use sb_bridge::{ChannelProducer, CommandRelay, ProducedMessage};
use sb_ws::{
    AppState, BroadcastHub, ConnectionConfig, ConnectionLimits, ConnectionRegistry,
    ShutdownCoordinator,
};

use std::sync::Arc;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tokio::sync::mpsc;

/// Default command topic for tests
pub const TEST_COMMAND_TOPIC: &str = "streamboard-commands";

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections_total: usize,
    pub send_buffer_size: usize,
    pub command_topic: String,
    pub command_partition: i32,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections_total: 100,
            send_buffer_size: 100,
            command_topic: TEST_COMMAND_TOPIC.to_string(),
            command_partition: 0,
        }
    }
}

impl TestServerConfig {
    /// Create config with strict connection limits (for limit tests)
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections_total: 2,
            ..Default::default()
        }
    }
}

/// Test server with access to AppState, the hub, and the command sink
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
    pub hub: BroadcastHub,
    pub produced: mpsc::UnboundedReceiver<ProducedMessage>,
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let (app, app_state, hub, produced) = create_app(config);
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState {
        server,
        app_state,
        hub,
        produced,
    }
}

/// Build the Axum Router with AppState
fn create_app(
    config: TestServerConfig,
) -> (
    Router,
    AppState,
    BroadcastHub,
    mpsc::UnboundedReceiver<ProducedMessage>,
) {
    let limits = ConnectionLimits {
        max_total: config.max_connections_total,
    };
    let registry = ConnectionRegistry::new(limits);

    let hub = BroadcastHub::new(registry.clone());

    // Command relay backed by an in-process sink the tests can observe
    let (producer, produced) = ChannelProducer::new();
    let relay = Arc::new(CommandRelay::new(
        Arc::new(producer),
        config.command_topic,
        config.command_partition,
        true,
    ));

    let shutdown = ShutdownCoordinator::new();

    let connection_config = ConnectionConfig {
        send_buffer_size: config.send_buffer_size,
    };

    let app_state = AppState {
        registry,
        relay,
        shutdown,
        config: connection_config,
    };

    let router = Router::new()
        .route("/ws", get(sb_ws::handler))
        .with_state(app_state.clone());

    (router, app_state, hub, produced)
}
