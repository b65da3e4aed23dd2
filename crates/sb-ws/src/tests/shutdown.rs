use crate::ShutdownCoordinator;

use std::time::Duration;

use tokio::time::timeout;

#[tokio::test]
async fn given_guard_when_shutdown_triggered_then_wait_resolves() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();

    coordinator.shutdown();

    timeout(Duration::from_secs(1), guard.wait()).await.unwrap();
}

#[tokio::test]
async fn given_multiple_guards_when_shutdown_triggered_then_all_resolve() {
    let coordinator = ShutdownCoordinator::new();
    let mut first = coordinator.subscribe_guard();
    let mut second = coordinator.subscribe_guard();

    coordinator.shutdown();

    timeout(Duration::from_secs(1), first.wait()).await.unwrap();
    timeout(Duration::from_secs(1), second.wait()).await.unwrap();
}

#[tokio::test]
async fn given_no_shutdown_when_guard_waits_then_it_blocks() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();

    let result = timeout(Duration::from_millis(50), guard.wait()).await;

    assert!(result.is_err());
}
