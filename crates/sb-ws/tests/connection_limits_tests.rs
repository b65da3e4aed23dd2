mod common;

use common::{
    test_client::WsTestClient,
    test_server::{TestServerConfig, create_test_server_with_config},
};

use axum::http::StatusCode;
use tokio::time::{Duration, sleep, timeout};

#[tokio::test]
async fn given_limit_reached_when_client_connects_then_upgrade_is_rejected() {
    // Given - Server with a limit of 2, both slots taken
    let test_server = create_test_server_with_config(TestServerConfig::with_strict_limits());
    let _client1 = WsTestClient::connect(&test_server.server).await;
    let _client2 = WsTestClient::connect(&test_server.server).await;

    // When - A third client attempts to connect
    let response = test_server.server.get_websocket("/ws").await;

    // Then - The upgrade is refused before completing
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(test_server.app_state.registry.total_count().await, 2);
}

#[tokio::test]
async fn given_client_disconnects_when_slot_frees_then_new_client_connects() {
    // Given - Server at its limit of 2
    let test_server = create_test_server_with_config(TestServerConfig::with_strict_limits());
    let client1 = WsTestClient::connect(&test_server.server).await;
    let _client2 = WsTestClient::connect(&test_server.server).await;

    // When - One client disconnects
    client1.close().await;
    timeout(Duration::from_secs(5), async {
        while test_server.app_state.registry.total_count().await != 1 {
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("slot never freed");

    // Then - A new client can take the freed slot
    let _client3 = WsTestClient::connect(&test_server.server).await;
    assert_eq!(test_server.app_state.registry.total_count().await, 2);
}
