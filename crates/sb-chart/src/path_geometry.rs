/// One vertex of the sample path, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// The sample line in pixel space, oldest point first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathGeometry {
    pub points: Vec<PathPoint>,
}

impl PathGeometry {
    pub fn new(points: Vec<PathPoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
