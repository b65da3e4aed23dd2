use crate::{
    BatchSource, BridgeConfig, BridgeError, BridgeHandles, BridgeStatus, CommandProducer,
    PollSource, Result,
};

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use sb_core::{Record, SourceKind, SourceState};
use tokio::sync::{broadcast, mpsc};
use tokio::time::{interval, MissedTickBehavior};

/// Owns the upstream seams and drives them in a fixed order: poll
/// source, then batch source, then producer. Once started, each ready
/// source runs its own pump task, forwarding decoded records into a
/// single channel so per-source arrival order is preserved downstream.
pub struct UpstreamBridge {
    poll_source: Box<dyn PollSource>,
    batch_source: Box<dyn BatchSource>,
    producer: Box<dyn CommandProducer>,
    config: BridgeConfig,
    status: BridgeStatus,
    forward_sender: mpsc::UnboundedSender<(SourceKind, Record)>,
}

impl UpstreamBridge {
    pub fn new(
        poll_source: Box<dyn PollSource>,
        batch_source: Box<dyn BatchSource>,
        producer: Box<dyn CommandProducer>,
        config: BridgeConfig,
    ) -> (Self, mpsc::UnboundedReceiver<(SourceKind, Record)>) {
        let (forward_sender, forward_receiver) = mpsc::unbounded_channel();

        let bridge = Self {
            poll_source,
            batch_source,
            producer,
            config,
            status: BridgeStatus::new(),
            forward_sender,
        };

        (bridge, forward_receiver)
    }

    pub fn status(&self) -> BridgeStatus {
        self.status
    }

    /// Runs the initialization sequence. In strict mode the first
    /// failure aborts and is returned; in permissive mode the failed
    /// stage is marked and the sequence continues.
    pub async fn initialize(&mut self) -> Result<BridgeStatus> {
        info!("Initializing upstream bridge ({})", self.config.startup_mode);

        self.status.poll_source = SourceState::Initializing;
        match self.poll_source.init().await {
            Ok(()) => {
                self.status.poll_source = SourceState::Ready;

                info!("Poll source ready");
            },
            Err(error) => {
                self.status.poll_source = SourceState::Failed;

                if self.config.startup_mode.is_strict() {
                    return Err(BridgeError::init("poll source", error.to_string()));
                }

                error!("Poll source failed to initialize, continuing without it: {error}");
            },
        }

        self.status.batch_source = SourceState::Initializing;
        match self.batch_source.init().await {
            Ok(()) => {
                self.status.batch_source = SourceState::Ready;

                info!("Batch source ready");
            },
            Err(error) => {
                self.status.batch_source = SourceState::Failed;

                if self.config.startup_mode.is_strict() {
                    return Err(BridgeError::init("batch source", error.to_string()));
                }

                error!("Batch source failed to initialize, continuing without it: {error}");
            },
        }

        self.status.producer = SourceState::Initializing;
        match self.producer.init().await {
            Ok(()) => {
                self.status.producer = SourceState::Ready;

                info!("Command producer ready");
            },
            Err(error) => {
                self.status.producer = SourceState::Failed;

                if self.config.startup_mode.is_strict() {
                    return Err(BridgeError::init("command producer", error.to_string()));
                }

                error!("Command producer failed to initialize, continuing without it: {error}");
            },
        }

        Ok(self.status)
    }

    /// Spawns a pump task per ready source and hands back the producer
    /// for the command relay. Each pump stops on the shutdown signal
    /// or when the forward channel closes.
    pub fn start(self, shutdown: &broadcast::Sender<()>) -> BridgeHandles {
        let mut tasks = Vec::new();

        if self.status.poll_source.is_ready() {
            tasks.push(tokio::spawn(run_poll_pump(
                self.poll_source,
                self.config.poll_interval,
                self.forward_sender.clone(),
                shutdown.subscribe(),
            )));
        }

        if self.status.batch_source.is_ready() {
            tasks.push(tokio::spawn(run_batch_pump(
                self.batch_source,
                self.forward_sender,
                shutdown.subscribe(),
            )));
        }

        BridgeHandles {
            producer: Arc::from(self.producer),
            status: self.status,
            tasks,
        }
    }
}

/// Polls source A on a fixed interval. Mid-stream failures are logged
/// and the next tick polls again; there is no retry or state change.
async fn run_poll_pump(
    mut source: Box<dyn PollSource>,
    poll_interval: Duration,
    forward_sender: mpsc::UnboundedSender<(SourceKind, Record)>,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut ticker = interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match source.poll().await {
                    Ok(records) => {
                        for record in records {
                            if forward_sender.send((SourceKind::Ecommerce, record)).is_err() {
                                return;
                            }
                        }
                    },
                    Err(error) => warn!("Poll source failed: {error}"),
                }
            },
            _ = shutdown.recv() => {
                info!("Poll pump stopped");

                return;
            },
        }
    }
}

/// Waits on source B batches. Malformed entries are dropped
/// individually so one bad payload never sinks its batch.
async fn run_batch_pump(
    mut source: Box<dyn BatchSource>,
    forward_sender: mpsc::UnboundedSender<(SourceKind, Record)>,
    mut shutdown: broadcast::Receiver<()>,
) {
    loop {
        tokio::select! {
            batch = source.next_batch() => {
                match batch {
                    Ok(Some(entries)) => {
                        for entry in entries {
                            match Record::from_slice(&entry) {
                                Ok(record) => {
                                    if forward_sender.send((SourceKind::Weight, record)).is_err() {
                                        return;
                                    }
                                },
                                Err(error) => warn!("Dropping malformed batch entry: {error}"),
                            }
                        }
                    },
                    Ok(None) => {
                        info!("Batch source subscription ended");

                        return;
                    },
                    Err(error) => warn!("Batch source receive failed: {error}"),
                }
            },
            _ = shutdown.recv() => {
                info!("Batch pump stopped");

                return;
            },
        }
    }
}
