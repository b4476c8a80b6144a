//! Linear color scale from a normalized sample to a fill color.

use alloc_heatmap_protocol::Color;

/// Maps `[0, 1]` linearly onto `low..high` in RGB space.
///
/// Inputs outside the domain extrapolate; each channel is rounded half away
/// from zero and clamped to `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    low: Color,
    high: Color,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new(Color::WHITE, Color::GREEN)
    }
}

impl ColorScale {
    pub fn new(low: Color, high: Color) -> Self {
        Self { low, high }
    }

    pub fn map(&self, value: f64) -> Color {
        Color::rgb(
            lerp_channel(self.low.r, self.high.r, value),
            lerp_channel(self.low.g, self.high.g, value),
            lerp_channel(self.low.b, self.high.b, value),
        )
    }
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let v = a + (f64::from(b) - a) * t;
    // NaN saturates to 0 in the cast.
    v.round().clamp(0.0, 255.0) as u8
}
