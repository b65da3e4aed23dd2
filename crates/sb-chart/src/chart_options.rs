/// Recognized renderer options.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Mount point selector, carried for the rendering adapter.
    pub selector: String,
    /// Field holding the sample timestamp
    pub x_field: String,
    /// Field holding the plotted metric
    pub y_field: String,
    /// Scroll animation duration in milliseconds
    pub transition_ms: u64,
    /// SampleBuffer capacity
    pub max_buffer_size: usize,
    /// Axis tick window length in seconds
    pub max_display_points: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            selector: String::from("#chart"),
            x_field: String::from("time"),
            y_field: String::from("total"),
            transition_ms: 3000,
            max_buffer_size: 120,
            max_display_points: 90,
        }
    }
}
