//! Easing curves
//!
//! Pure interpolation curves in the classic absolute form `ease(t, b, c, d)`:
//! at elapsed time `t` of a total duration `d`, map a value starting at `b`
//! and changing by `c`. Every curve satisfies `ease(0, b, c, d) == b` and
//! `ease(d, b, c, d) == b + c`.

/// Constant-rate interpolation.
pub fn linear(t: f32, b: f32, c: f32, d: f32) -> f32 {
    b + c * (t / d)
}

/// Quadratic ease-in: accelerates from rest.
pub fn ease_in_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let u = t / d;
    b + c * u * u
}

/// Quadratic ease-out: decelerates to rest.
pub fn ease_out_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let u = t / d;
    b - c * u * (u - 2.0)
}

/// Quadratic ease-in-out: accelerates through the first half of the
/// duration, decelerates through the second.
pub fn ease_in_out_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let mut u = t / (d / 2.0);
    if u < 1.0 {
        return c / 2.0 * u * u + b;
    }
    u -= 1.0;
    -c / 2.0 * (u * (u - 2.0) - 1.0) + b
}

/// Easing curve selection for scroll animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Accelerate from rest.
    EaseInQuad,
    /// Decelerate to rest.
    EaseOutQuad,
    /// Accelerate, then decelerate.
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Sample the curve at elapsed time `t` of a total `d`, mapping a value
    /// starting at `b` and changing by `c`.
    pub fn sample(&self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        match self {
            Easing::Linear => linear(t, b, c, d),
            Easing::EaseInQuad => ease_in_quad(t, b, c, d),
            Easing::EaseOutQuad => ease_out_quad(t, b, c, d),
            Easing::EaseInOutQuad => ease_in_out_quad(t, b, c, d),
        }
    }

    /// Apply the curve to a normalized progress in `0.0..=1.0`.
    pub fn apply(&self, progress: f32) -> f32 {
        self.sample(progress.clamp(0.0, 1.0), 0.0, 1.0, 1.0)
    }
}
