//! Glide Scrollable Group
//!
//! A keyed registry container plus a registerable item wrapper: items
//! register themselves under a key inside a [`ScrollableGroup`], and the
//! group animates any of them smoothly into view on demand.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use glide_animation::FrameQueue;
//! use glide_group::prelude::*;
//!
//! let scheduler = Arc::new(FrameQueue::new());
//! let group = ScrollableGroup::new(surface, scheduler.clone());
//!
//! let mut row = ScrollTarget::new("row-42", row_widget);
//! row.set_anchor(anchor);
//! row.mount(&group.registrar());
//!
//! group.scroll_to_item("row-42");
//! while scheduler.run_frame() > 0 {}
//! ```

pub mod display;
pub mod group;
pub mod handle;
pub mod registry;
pub mod target;

pub use display::{resolve_display_name, short_type_name};
pub use group::{Registrar, ScrollableGroup};
pub use handle::{ScrollHandle, ScrollRequest, DEFAULT_DURATION, DEFAULT_STEP};
pub use registry::ScrollRegistry;
pub use target::{ScrollTarget, TargetHandle};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::group::{Registrar, ScrollableGroup};
    pub use crate::handle::{ScrollHandle, ScrollRequest};
    pub use crate::target::ScrollTarget;
    pub use glide_animation::{Easing, FrameQueue, FrameScheduler, TimerScheduler};
    pub use glide_core::{AnimationError, ItemAnchor, ScrollSurface};
}
