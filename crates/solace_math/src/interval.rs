/// Window of ray parameters `t` that a query accepts.
///
/// Nearest-hit scans lower `max` each time a closer surface turns up;
/// shadow queries stop `max` at the light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Everything in front of the origin.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// `(0, max)`, the segment a shadow ray must cross.
    pub fn up_to(max: f32) -> Self {
        Self::new(0.0, max)
    }

    /// Strict membership; hits exactly at either end are rejected.
    #[inline]
    pub fn surrounds(&self, t: f32) -> bool {
        self.min < t && t < self.max
    }

    /// Clamp `x` into `[min, max]`. Requires `min <= max`.
    #[inline]
    pub fn clamp(&self, x: f32) -> f32 {
        x.max(self.min).min(self.max)
    }

    /// Narrow the far end to `t`. Never widens the window.
    #[inline]
    pub fn with_max(&self, t: f32) -> Interval {
        Interval::new(self.min, self.max.min(t))
    }
}
