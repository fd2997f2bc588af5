//! Animation parameter errors

use thiserror::Error;

/// Rejections for malformed animation parameters.
///
/// A nonpositive duration or step increment would make the frame loop
/// non-terminating, so both are rejected up front instead of being driven.
/// Non-finite values are rejected for the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AnimationError {
    /// The total animation duration must be a positive, finite number.
    #[error("animation duration must be positive, got {0}")]
    NonPositiveDuration(f32),

    /// The per-frame time increment must be a positive, finite number.
    #[error("step increment must be positive, got {0}")]
    NonPositiveStep(f32),
}
