//! Frame scheduling
//!
//! Scroll tweens advance one step per scheduled frame. [`FrameScheduler`] is
//! the seam to the host's "run before the next repaint" capability; it is
//! the sole suspension point in the library. Two implementations:
//!
//! - [`FrameQueue`] for hosts that expose a per-repaint hook: the embedding
//!   pumps [`FrameQueue::run_frame`] once per repaint.
//! - [`TimerScheduler`], a background-thread fallback ticking at a fixed
//!   interval for hosts with no repaint hook.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A deferred unit of per-frame work.
pub type FrameCallback = Box<dyn FnOnce() + Send>;

/// Schedules callbacks to run at the next frame opportunity.
pub trait FrameScheduler: Send + Sync {
    /// Enqueue `callback` for the next frame.
    fn schedule(&self, callback: FrameCallback);
}

/// Host-pumped scheduler: the embedding calls [`FrameQueue::run_frame`] once
/// per repaint.
///
/// Callbacks scheduled while a frame is running execute on the next frame,
/// so a callback that reschedules itself advances exactly one step per
/// repaint.
#[derive(Default)]
pub struct FrameQueue {
    pending: Mutex<Vec<FrameCallback>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending_count(&self) -> usize {
        self.pending.lock().map(|pending| pending.len()).unwrap_or(0)
    }

    /// Run every callback that was pending when the frame started, in
    /// scheduling order. Returns how many callbacks ran.
    pub fn run_frame(&self) -> usize {
        let batch = match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => Vec::new(),
        };
        let count = batch.len();
        for callback in batch {
            callback();
        }
        count
    }
}

impl FrameScheduler for FrameQueue {
    fn schedule(&self, callback: FrameCallback) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.push(callback);
        }
    }
}

/// Fallback interval approximating a 60 Hz repaint cadence.
pub const FALLBACK_FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Timer-driven fallback scheduler for hosts without a repaint hook.
///
/// A background thread drains the queue once per interval. Start it
/// explicitly before sharing the scheduler; callbacks scheduled earlier
/// stay queued and run on the first tick. Dropping the scheduler stops the
/// thread.
pub struct TimerScheduler {
    pending: Arc<Mutex<Vec<FrameCallback>>>,
    stop_flag: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
    interval: Duration,
}

impl TimerScheduler {
    /// Create a scheduler ticking at [`FALLBACK_FRAME_INTERVAL`].
    pub fn new() -> Self {
        Self::with_interval(FALLBACK_FRAME_INTERVAL)
    }

    /// Create a scheduler ticking at a custom interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            pending: Arc::new(Mutex::new(Vec::new())),
            stop_flag: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
            interval,
        }
    }

    /// Create a scheduler ticking `fps` times per second.
    pub fn with_fps(fps: u32) -> Self {
        Self::with_interval(Duration::from_micros(1_000_000 / u64::from(fps.max(1))))
    }

    /// Interval between frame ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start the tick thread.
    pub fn start(&mut self) {
        if self.thread_handle.is_some() {
            return; // Already running
        }

        let pending = Arc::clone(&self.pending);
        let stop_flag = Arc::clone(&self.stop_flag);
        let interval = self.interval;

        tracing::debug!("TimerScheduler: starting tick thread at {:?}", interval);
        self.thread_handle = Some(thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                let start = Instant::now();

                let batch = match pending.lock() {
                    Ok(mut pending) => std::mem::take(&mut *pending),
                    Err(_) => Vec::new(),
                };
                for callback in batch {
                    callback();
                }

                // Sleep for remaining frame time
                let elapsed = start.elapsed();
                if elapsed < interval {
                    thread::sleep(interval - elapsed);
                }
            }
        }));
    }

    /// Stop the tick thread and wait for it to exit.
    pub fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
        self.stop_flag.store(false, Ordering::Relaxed);
    }

    /// Check if the tick thread is running.
    pub fn is_running(&self) -> bool {
        self.thread_handle.is_some()
    }
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for TimerScheduler {
    fn schedule(&self, callback: FrameCallback) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.push(callback);
        }
    }
}

impl Drop for TimerScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_frame_queue_runs_in_scheduling_order() {
        let queue = FrameQueue::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let log = Arc::clone(&log);
            queue.schedule(Box::new(move || log.lock().unwrap().push(i)));
        }

        assert_eq!(queue.pending_count(), 3);
        assert_eq!(queue.run_frame(), 3);
        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2]);
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_reschedule_during_frame_defers_to_next_frame() {
        let queue = Arc::new(FrameQueue::new());
        let ran = Arc::new(Mutex::new(0));

        let inner_queue = Arc::clone(&queue);
        let inner_ran = Arc::clone(&ran);
        queue.schedule(Box::new(move || {
            *inner_ran.lock().unwrap() += 1;
            let ran = Arc::clone(&inner_ran);
            inner_queue.schedule(Box::new(move || {
                *ran.lock().unwrap() += 1;
            }));
        }));

        // The rescheduled callback must not run in the same frame.
        assert_eq!(queue.run_frame(), 1);
        assert_eq!(*ran.lock().unwrap(), 1);

        assert_eq!(queue.run_frame(), 1);
        assert_eq!(*ran.lock().unwrap(), 2);
        assert_eq!(queue.run_frame(), 0);
    }

    #[test]
    fn test_timer_scheduler_executes_scheduled_work() {
        let mut scheduler = TimerScheduler::with_interval(Duration::from_millis(1));
        let (tx, rx) = mpsc::channel();

        scheduler.schedule(Box::new(move || {
            tx.send(42).unwrap();
        }));
        scheduler.start();
        assert!(scheduler.is_running());

        assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), 42);

        scheduler.stop();
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_timer_scheduler_interval_configuration() {
        assert_eq!(TimerScheduler::new().interval(), FALLBACK_FRAME_INTERVAL);
        assert_eq!(
            TimerScheduler::with_fps(50).interval(),
            Duration::from_millis(20)
        );
        // ~60 Hz fallback
        assert_eq!(FALLBACK_FRAME_INTERVAL, Duration::from_micros(16_667));
    }
}
