use crate::{AnimationDescriptor, AxisLayout, PathGeometry};

/// Output of one update/resize cycle: everything the rendering adapter
/// needs to draw the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub clip_width: f64,
    pub clip_height: f64,
    pub axis: AxisLayout,
    pub path: PathGeometry,
    /// Present only for update-driven frames; resize redraws in place.
    pub animation: Option<AnimationDescriptor>,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
}
