//! Glide Animation
//!
//! Easing curves, per-run scroll tweens, and frame scheduling for the Glide
//! scroll-into-view library.
//!
//! # Features
//!
//! - **Easing**: quadratic curves in the classic `(t, b, c, d)` form
//! - **Scroll Tweens**: fixed-step interpolation, one step per frame
//! - **Frame Scheduling**: host-pumped queue with a timer-thread fallback
//!
//! A tween never blocks: [`ScrollTween::run`] enqueues its first step on a
//! [`FrameScheduler`] and returns; each step enqueues the next until the
//! duration is reached.

pub mod easing;
pub mod scheduler;
pub mod tween;

pub use easing::{ease_in_out_quad, ease_in_quad, ease_out_quad, linear, Easing};
pub use scheduler::{
    FrameCallback, FrameQueue, FrameScheduler, TimerScheduler, FALLBACK_FRAME_INTERVAL,
};
pub use tween::{CompletionCallback, ScrollTween};
