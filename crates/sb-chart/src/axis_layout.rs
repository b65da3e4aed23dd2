use crate::LinearScale;

/// Horizontal anchor for a tick label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAnchor {
    Start,
    Middle,
    End,
}

/// One x-axis tick at a fixed seconds-ago position.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub seconds_ago: u32,
    pub x: f64,
    pub label: String,
    pub anchor: TickAnchor,
}

/// Tick layout for the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub ticks: Vec<AxisTick>,
    /// Pixel offset of the axis line below the chart area.
    pub baseline_y: f64,
}

/// Vertical gap between the chart area and the axis baseline.
const BASELINE_OFFSET_PX: f64 = 15.0;

impl AxisLayout {
    /// Lay out ticks every `spacing` seconds across the display window.
    ///
    /// Tick values run from `right_edge` (rightmost pixel) to
    /// `window + right_edge` (leftmost). The two edge labels get Start
    /// and End anchors so they stay inside the viewport; everything in
    /// between is centered.
    pub fn compute(
        x_scale: &LinearScale,
        window: u32,
        right_edge: u32,
        spacing: u32,
        viewport_height: f64,
    ) -> Self {
        let values: Vec<u32> = (right_edge..=window + right_edge)
            .step_by(spacing.max(1) as usize)
            .collect();
        let count = values.len();

        let ticks = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let anchor = if index == 0 {
                    TickAnchor::End
                } else if index == count - 1 {
                    TickAnchor::Start
                } else {
                    TickAnchor::Middle
                };

                AxisTick {
                    seconds_ago: value - right_edge,
                    x: x_scale.scale(value as f64),
                    label: format!("{}s", value - right_edge),
                    anchor,
                }
            })
            .collect();

        Self {
            ticks,
            baseline_y: viewport_height + BASELINE_OFFSET_PX,
        }
    }
}
