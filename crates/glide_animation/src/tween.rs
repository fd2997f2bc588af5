//! Scroll tweens
//!
//! A [`ScrollTween`] is the state of one scroll-into-view run: the starting
//! offset, the total change, and a logical clock advanced by a fixed step
//! per scheduled frame. Wall-clock time is never measured, so a host that
//! drops frames stretches the animation instead of skipping offsets.

use std::sync::Arc;

use glide_core::{AnimationError, ScrollSurface};

use crate::easing::Easing;
use crate::scheduler::FrameScheduler;

/// Completion callback, invoked exactly once after the final offset write.
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// Per-invocation animation state for one scroll run.
#[derive(Debug, Clone)]
pub struct ScrollTween {
    start: f32,
    change: f32,
    elapsed: f32,
    duration: f32,
    step: f32,
    easing: Easing,
}

impl ScrollTween {
    /// Create a tween from `start` changing by `change` over `duration`,
    /// advancing `step` logical time units per frame.
    ///
    /// Rejects nonpositive (or non-finite) `duration` and `step`: either
    /// would make the frame loop non-terminating.
    pub fn new(
        start: f32,
        change: f32,
        duration: f32,
        step: f32,
        easing: Easing,
    ) -> Result<Self, AnimationError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(AnimationError::NonPositiveDuration(duration));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(AnimationError::NonPositiveStep(step));
        }
        Ok(Self {
            start,
            change,
            elapsed: 0.0,
            duration,
            step,
            easing,
        })
    }

    /// Elapsed logical time.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Total logical duration.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// The offset the final step writes.
    pub fn target(&self) -> f32 {
        self.start + self.change
    }

    /// Number of frames a full run schedules: `ceil(duration / step)`.
    pub fn step_count(&self) -> u32 {
        (self.duration / self.step).ceil() as u32
    }

    /// Whether the tween has reached its duration.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance one step and sample the eased offset at the new time.
    ///
    /// `elapsed` saturates at `duration`, so the final sample is exactly
    /// `start + change` even when `step` does not divide `duration`.
    pub fn advance(&mut self) -> f32 {
        self.elapsed = (self.elapsed + self.step).min(self.duration);
        self.easing
            .sample(self.elapsed, self.start, self.change, self.duration)
    }

    /// Drive the tween to completion on `scheduler`, writing each sampled
    /// offset to `surface` and invoking `on_complete` after the final
    /// write.
    ///
    /// Every step runs on its own scheduled frame; the call returns once
    /// the first step is enqueued. Two concurrent runs against one surface
    /// interleave with last-writer-wins per frame; neither is cancelled.
    pub fn run(
        self,
        scheduler: &Arc<dyn FrameScheduler>,
        surface: Arc<dyn ScrollSurface>,
        on_complete: CompletionCallback,
    ) {
        step(Arc::clone(scheduler), surface, self, on_complete);
    }
}

fn step(
    scheduler: Arc<dyn FrameScheduler>,
    surface: Arc<dyn ScrollSurface>,
    mut tween: ScrollTween,
    on_complete: CompletionCallback,
) {
    let next = Arc::clone(&scheduler);
    scheduler.schedule(Box::new(move || {
        let offset = tween.advance();
        surface.set_scroll_offset(offset);
        if tween.is_finished() {
            tracing::trace!(offset, "scroll tween finished");
            on_complete();
        } else {
            step(next, surface, tween, on_complete);
        }
    }));
}
