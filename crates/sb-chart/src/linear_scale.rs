/// Linear mapping from a data domain onto a pixel range.
///
/// The domain may be reversed (d0 > d1), which the x scale uses to map
/// "seconds ago" onto left-to-right pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn set_domain(&mut self, start: f64, stop: f64) {
        self.domain = (start, stop);
    }

    pub fn set_range(&mut self, start: f64, stop: f64) {
        self.range = (start, stop);
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round the domain outward to "nice" bounds, so axis extremes land
    /// on round values. Mirrors the d3 tick-increment rules for a
    /// ten-tick scale.
    pub fn nice(&mut self) {
        let (start, stop) = self.domain;
        if !(stop > start) {
            return;
        }

        let step = tick_increment(start, stop, 10);
        if step > 0.0 && step.is_finite() {
            self.domain = (
                (start / step).floor() * step,
                (stop / step).ceil() * step,
            );
        }
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new((0.0, 1.0), (0.0, 1.0))
    }
}

/// Tick step for a linear domain: a power of ten scaled by 1, 2 or 5.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if step <= 0.0 || !step.is_finite() {
        return 0.0;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    factor * 10f64.powf(power)
}
