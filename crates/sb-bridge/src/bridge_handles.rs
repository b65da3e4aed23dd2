use crate::{BridgeStatus, CommandProducer};

use std::sync::Arc;

use tokio::task::JoinHandle;

/// Everything a started bridge hands back to its host: the producer
/// for the command relay, the final status snapshot, and the pump
/// tasks for shutdown joining.
pub struct BridgeHandles {
    pub producer: Arc<dyn CommandProducer>,
    pub status: BridgeStatus,
    pub tasks: Vec<JoinHandle<()>>,
}
