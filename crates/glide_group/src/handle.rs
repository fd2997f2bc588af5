//! Scroll capability handle and per-call options

use std::sync::Arc;

use glide_animation::{CompletionCallback, FrameScheduler};
use glide_core::{AnimationError, ScrollSurface};

/// Default total animation time, in logical time units.
pub const DEFAULT_DURATION: f32 = 500.0;

/// Default logical time advanced per scheduled frame.
pub const DEFAULT_STEP: f32 = 20.0;

/// Options for one scroll-into-view run.
///
/// Timing values are carried as given and validated when the scroll is
/// started; nonpositive values are rejected there with a descriptive error
/// instead of producing a non-terminating animation.
pub struct ScrollRequest {
    duration: f32,
    step: f32,
    on_complete: Option<CompletionCallback>,
}

impl Default for ScrollRequest {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            step: DEFAULT_STEP,
            on_complete: None,
        }
    }
}

impl ScrollRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the animation timing.
    pub fn timing(mut self, duration: f32, step: f32) -> Self {
        self.duration = duration;
        self.step = step;
        self
    }

    /// Invoke `callback` exactly once, after the animation's final offset
    /// write.
    pub fn on_complete(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Total animation time.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Logical time advanced per frame.
    pub fn step(&self) -> f32 {
        self.step
    }

    pub(crate) fn into_parts(self) -> (f32, f32, CompletionCallback) {
        let on_complete = self.on_complete.unwrap_or_else(|| Box::new(|| {}));
        (self.duration, self.step, on_complete)
    }
}

impl std::fmt::Debug for ScrollRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollRequest")
            .field("duration", &self.duration)
            .field("step", &self.step)
            .field("has_on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Capability exposed by a registered item: animate it into view.
///
/// The registry stores these as non-owning `Weak` references; the wrapper
/// that created a handle owns it and unregisters it on teardown.
pub trait ScrollHandle: Send + Sync {
    /// Animate `surface` so this item lands near the top of its viewport.
    ///
    /// The animation starts from the surface's current offset and moves by
    /// `(offset_top - extent) - start`, one eased step per scheduled frame,
    /// until the request's duration is reached. The completion callback
    /// fires exactly once, strictly after the final offset write.
    ///
    /// Overlapping runs against one surface interleave on the shared frame
    /// schedule with last-writer-wins per frame; none are cancelled.
    /// Callers are responsible for not overlapping animations on a surface.
    fn scroll_into_view(
        &self,
        surface: Arc<dyn ScrollSurface>,
        scheduler: Arc<dyn FrameScheduler>,
        request: ScrollRequest,
    ) -> Result<(), AnimationError>;

    /// Human-readable label for diagnostics.
    fn display_name(&self) -> String {
        "Unknown".to_string()
    }
}
