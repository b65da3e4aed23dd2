use sb_bridge::CommandRelay;
use sb_config::UpstreamMode;
use sb_server::{SimulatedFeed, build_router, logger, upstream};
use sb_ws::{
    AppState, BroadcastHub, ConnectionConfig, ConnectionLimits, ConnectionRegistry,
    ShutdownCoordinator,
};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = sb_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = sb_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Assemble and initialize the upstream bridge. A strict-mode init
    // failure aborts here, before the listener binds.
    let mut upstream = upstream::build(&config);
    let status = match upstream.bridge.initialize().await {
        Ok(status) => status,
        Err(e) => {
            error!("Upstream initialization failed: {e}");
            return Err(e.into());
        }
    };
    info!("Upstream bridge initialized: {status}");

    // Shutdown coordinator drives every long-running task
    let shutdown = ShutdownCoordinator::new();

    let upstream::Upstream {
        bridge,
        records,
        feed,
    } = upstream;
    let handles = bridge.start(shutdown.sender());

    // Command relay: enabled whenever an upstream is configured and the
    // producer came up
    let relay_enabled =
        config.upstream.mode != UpstreamMode::Disabled && handles.status.producer.is_ready();
    let relay = Arc::new(CommandRelay::new(
        handles.producer,
        config.relay.command_topic.clone(),
        config.relay.partition,
        relay_enabled,
    ));

    // Connection registry with limits
    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.server.max_connections,
    });

    // Fan-out hub; a single pump preserves per-source record order
    let hub = BroadcastHub::new(registry.clone());
    tokio::spawn(hub.run_pump(records, shutdown.subscribe_guard()));

    // Development feed (simulated mode only)
    if let Some(inputs) = feed {
        SimulatedFeed::default().spawn(inputs.records, inputs.batches, shutdown.subscribe_guard());
        info!("Simulated upstream feed running");
    }

    // Create connection config for sb-ws
    let connection_config = ConnectionConfig {
        send_buffer_size: config.websocket.send_buffer_size,
    };

    // Build application state
    let app_state = AppState {
        registry,
        relay,
        shutdown: shutdown.clone(),
        config: connection_config,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {actual_addr}");

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {e}");
            }
        }
    });

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
