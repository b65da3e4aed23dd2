/// Conveyor scroll descriptor, executed by the rendering adapter.
///
/// The path is drawn instantly at its resting position, then translated
/// by `translate_x` over `duration_ms` with linear easing, sliding the
/// whole line left by one sample-interval's width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDescriptor {
    pub duration_ms: u64,
    pub translate_x: f64,
}
