pub mod animation;
pub mod axis_layout;
pub mod chart_options;
pub mod linear_scale;
pub mod path_geometry;
pub mod render_frame;
pub mod sample_buffer;
pub mod stream_chart;
pub mod viewport;

pub use animation::AnimationDescriptor;
pub use axis_layout::{AxisLayout, AxisTick, TickAnchor};
pub use chart_options::ChartOptions;
pub use linear_scale::LinearScale;
pub use path_geometry::{PathGeometry, PathPoint};
pub use render_frame::RenderFrame;
pub use sample_buffer::SampleBuffer;
pub use stream_chart::{RIGHT_EDGE_SECS, StreamChart, TICK_SPACING_SECS};
pub use viewport::Viewport;

#[cfg(test)]
mod tests;
