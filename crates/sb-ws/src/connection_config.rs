/// Per-connection tuning
#[derive(Debug, Clone, Copy)]
pub struct ConnectionConfig {
    /// Capacity of the bounded outgoing queue. A broadcast that finds
    /// this queue full is dropped for that connection only.
    pub send_buffer_size: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: 100,
        }
    }
}
