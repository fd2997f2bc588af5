//! Scroll a keyed row into view inside a fake host surface.
//!
//! The host repaint loop is simulated by pumping a `FrameQueue` once per
//! iteration. Run with:
//!
//! ```sh
//! RUST_LOG=trace cargo run -p glide_group --example scroll_demo
//! ```

use std::sync::{Arc, Mutex};

use glide_animation::{Easing, FrameQueue};
use glide_core::{ItemAnchor, ScrollSurface};
use glide_group::{ScrollTarget, ScrollableGroup};

/// Minimal stand-in for a host scrolling region.
struct DemoSurface {
    offset: Mutex<f32>,
}

impl ScrollSurface for DemoSurface {
    fn scroll_offset(&self) -> f32 {
        self.offset.lock().map(|offset| *offset).unwrap_or(0.0)
    }

    fn set_scroll_offset(&self, offset: f32) {
        if let Ok(mut current) = self.offset.lock() {
            *current = offset;
        }
    }
}

/// Fixed geometry for an already-laid-out row.
struct RowAnchor {
    top: f32,
    height: f32,
}

impl ItemAnchor for RowAnchor {
    fn offset_top(&self) -> f32 {
        self.top
    }

    fn extent(&self) -> f32 {
        self.height
    }
}

struct Row {
    label: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let surface = Arc::new(DemoSurface {
        offset: Mutex::new(0.0),
    });
    let scheduler = Arc::new(FrameQueue::new());
    let group = ScrollableGroup::new(surface.clone(), scheduler.clone());

    // Register fifty rows, each 80 units tall.
    let rows: Vec<_> = (0..50)
        .map(|i| {
            let mut target = ScrollTarget::new(
                format!("row-{i}"),
                Row {
                    label: format!("Row {i}"),
                },
            )
            .easing(Easing::EaseInOutQuad);
            target.set_anchor(Arc::new(RowAnchor {
                top: i as f32 * 80.0,
                height: 80.0,
            }));
            target.mount(&group.registrar());
            target
        })
        .collect();

    println!("registered {} rows", group.item_count());
    println!("jumping to {:?} ({})", rows[42].label, rows[42].display_name());

    let started = group.scroll_to_item_then("row-42", || println!("arrived"));
    assert!(started);

    // The host repaint loop: one frame per iteration.
    let mut frame = 0;
    while scheduler.run_frame() > 0 {
        frame += 1;
        println!("frame {frame:>2}: offset = {:.1}", surface.scroll_offset());
    }
}
