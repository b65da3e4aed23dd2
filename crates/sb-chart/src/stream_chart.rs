use crate::{
    AnimationDescriptor, AxisLayout, ChartOptions, LinearScale, PathGeometry, PathPoint,
    RenderFrame, SampleBuffer, Viewport,
};

use sb_core::{Record, Sample};

use log::warn;

/// Seconds-ago offset of the right axis edge. The newest points are
/// rendered beyond it, so the line enters from outside the visible
/// window instead of popping in at the edge.
pub const RIGHT_EDGE_SECS: u32 = 3;

/// Spacing between x-axis ticks, in seconds.
pub const TICK_SPACING_SECS: u32 = 15;

/// Streaming chart core: a sliding sample window driving a
/// scale/axis/line update cycle.
///
/// Pure with respect to rendering: `update` and `resize` return a
/// `RenderFrame` for a thin drawing adapter to execute. Both re-enter
/// the same four-step cycle (y domain, pixel ranges, axis, path).
#[derive(Debug)]
pub struct StreamChart {
    options: ChartOptions,
    buffer: SampleBuffer<Sample>,
    x_scale: LinearScale,
    y_scale: LinearScale,
    initialized: bool,
}

impl StreamChart {
    pub fn new(options: ChartOptions) -> Self {
        let window = options.max_display_points + RIGHT_EDGE_SECS;
        let buffer = SampleBuffer::new(options.max_buffer_size);

        // Seconds-ago domain is reversed: the oldest second maps to the
        // left pixel edge.
        let x_scale = LinearScale::new((window as f64, RIGHT_EDGE_SECS as f64), (0.0, 0.0));
        let y_scale = LinearScale::new((0.0, 0.0), (0.0, 0.0));

        Self {
            options,
            buffer,
            x_scale,
            y_scale,
            initialized: false,
        }
    }

    /// Transition Uninit -> Ready. Updates before `init` are no-ops.
    pub fn init(&mut self) {
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn buffer(&self) -> &SampleBuffer<Sample> {
        &self.buffer
    }

    /// Push a new record and recompute the frame.
    ///
    /// `now_ms` is the wall-clock render time. A record with a missing
    /// or invalid time or metric field is dropped without touching the
    /// buffer, so one malformed record never stalls later frames.
    pub fn update(
        &mut self,
        record: &Record,
        now_ms: i64,
        viewport: Viewport,
    ) -> Option<RenderFrame> {
        if !self.initialized {
            return None;
        }

        let sample = match Sample::from_record(record.clone(), &self.options.x_field) {
            Ok(sample) => sample,
            Err(e) => {
                warn!("chart: dropping record: {e}");
                return None;
            }
        };

        if let Err(e) = sample.metric(&self.options.y_field) {
            warn!("chart: dropping record: {e}");
            return None;
        }

        self.buffer.push(sample);
        self.render(now_ms, viewport, true)
    }

    /// Recompute layout for new viewport dimensions. Never appends
    /// data; idempotent for unchanged dimensions.
    pub fn resize(&mut self, viewport: Viewport, now_ms: i64) -> Option<RenderFrame> {
        if !self.initialized {
            return None;
        }

        self.render(now_ms, viewport, false)
    }

    fn render(&mut self, now_ms: i64, viewport: Viewport, animate: bool) -> Option<RenderFrame> {
        if self.buffer.is_empty() {
            return None;
        }

        // Step 1: y domain from the buffer's metric max, rounded
        // outward to a nice bound. A point without a usable metric is
        // left out rather than aborting the pass.
        let mut metrics = Vec::with_capacity(self.buffer.len());
        for sample in self.buffer.items() {
            match sample.metric(&self.options.y_field) {
                Ok(value) => metrics.push((sample.time_ms(), value)),
                Err(e) => warn!("chart: skipping point: {e}"),
            }
        }
        if metrics.is_empty() {
            return None;
        }
        let max = metrics.iter().map(|(_, v)| *v).fold(0.0, f64::max);
        self.y_scale.set_domain(0.0, max);
        self.y_scale.nice();

        // Step 2: pixel ranges from the current viewport.
        self.x_scale.set_range(0.0, viewport.width);
        self.y_scale.set_range(viewport.height, 0.0);

        // Step 3: axis ticks at fixed seconds-ago spacing.
        let axis = AxisLayout::compute(
            &self.x_scale,
            self.options.max_display_points,
            RIGHT_EDGE_SECS,
            TICK_SPACING_SECS,
            viewport.height,
        );

        // Step 4: the path. Every point is positioned by its true age
        // at render time except the newest, which is pinned at
        // seconds-ago zero so render/network latency never jitters the
        // leading edge.
        let last = metrics.len() - 1;
        let points = metrics
            .iter()
            .enumerate()
            .map(|(index, (time_ms, value))| {
                let seconds_ago = if index == last {
                    0.0
                } else {
                    ((now_ms - time_ms) as f64 / 1000.0).floor()
                };
                PathPoint {
                    x: self.x_scale.scale(seconds_ago),
                    y: self.y_scale.scale(*value),
                }
            })
            .collect();

        let animation = animate.then(|| AnimationDescriptor {
            duration_ms: self.options.transition_ms,
            translate_x: self.x_scale.scale(self.x_scale.domain().0 + 1.0),
        });

        Some(RenderFrame {
            clip_width: viewport.width,
            clip_height: viewport.height,
            axis,
            path: PathGeometry::new(points),
            animation,
            x_domain: self.x_scale.domain(),
            y_domain: self.y_scale.domain(),
        })
    }
}
