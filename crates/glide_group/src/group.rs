//! Scrollable group container

use std::sync::{Arc, Weak};

use glide_animation::FrameScheduler;
use glide_core::{AnimationError, ScrollSurface};

use crate::handle::{ScrollHandle, ScrollRequest};
use crate::registry::ScrollRegistry;

/// Container owning the key→item registry and the scroll-to entry point.
///
/// A group is constructed over the scrollable surface it controls and the
/// frame scheduler that drives its animations; both are handed to a
/// registered item when a scroll is delegated to it. Descendant wrappers
/// receive a [`Registrar`] instead of the registry itself, so registration
/// cannot outlive the group.
pub struct ScrollableGroup {
    registry: Arc<ScrollRegistry>,
    surface: Arc<dyn ScrollSurface>,
    scheduler: Arc<dyn FrameScheduler>,
}

impl std::fmt::Debug for ScrollableGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollableGroup")
            .field("items", &self.registry.len())
            .finish()
    }
}

impl ScrollableGroup {
    /// Create a group over its scrollable surface and frame scheduler.
    pub fn new(surface: Arc<dyn ScrollSurface>, scheduler: Arc<dyn FrameScheduler>) -> Self {
        Self {
            registry: ScrollRegistry::new_shared(),
            surface,
            scheduler,
        }
    }

    /// Registration handle for descendant items.
    pub fn registrar(&self) -> Registrar {
        Registrar {
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// The surface this group scrolls.
    pub fn surface(&self) -> Arc<dyn ScrollSurface> {
        Arc::clone(&self.surface)
    }

    /// Check if an item is currently registered under `key`.
    pub fn contains_item(&self, key: &str) -> bool {
        self.registry.contains(key)
    }

    /// Number of registered items.
    pub fn item_count(&self) -> usize {
        self.registry.len()
    }

    /// Smoothly scroll the item registered under `key` into view.
    ///
    /// Returns `true` when an animation was started. An unknown key (or an
    /// item that is already gone) is not an error: nothing happens and
    /// `false` is returned.
    pub fn scroll_to_item(&self, key: &str) -> bool {
        // Default timing is always valid.
        self.scroll_to_item_with(key, ScrollRequest::default())
            .unwrap_or(false)
    }

    /// Scroll `key` into view and invoke `on_complete` exactly once, after
    /// the animation's final offset write. The callback is dropped unseen
    /// when the key is unknown.
    pub fn scroll_to_item_then(
        &self,
        key: &str,
        on_complete: impl FnOnce() + Send + 'static,
    ) -> bool {
        self.scroll_to_item_with(key, ScrollRequest::default().on_complete(on_complete))
            .unwrap_or(false)
    }

    /// Scroll `key` into view with custom options.
    ///
    /// `Ok(true)` when an animation was started, `Ok(false)` for an unknown
    /// key, `Err` when the request carries nonpositive timing.
    pub fn scroll_to_item_with(
        &self,
        key: &str,
        request: ScrollRequest,
    ) -> Result<bool, AnimationError> {
        let Some(handle) = self.registry.get(key) else {
            tracing::debug!(key, "scroll_to_item: no item registered");
            return Ok(false);
        };
        tracing::debug!(key, item = %handle.display_name(), "scroll_to_item");
        handle.scroll_into_view(
            Arc::clone(&self.surface),
            Arc::clone(&self.scheduler),
            request,
        )?;
        Ok(true)
    }
}

/// Registration channel handed to descendant items.
///
/// Holds only a weak reference to the group's registry: registering through
/// a registrar whose group is gone is a silent no-op, matching the contract
/// for a wrapper used outside any group.
#[derive(Clone)]
pub struct Registrar {
    registry: Weak<ScrollRegistry>,
}

impl Registrar {
    /// Register `handle` under `key` (last registration wins).
    pub fn register(&self, key: impl Into<String>, handle: Weak<dyn ScrollHandle>) {
        if let Some(registry) = self.registry.upgrade() {
            registry.register(key, handle);
        }
    }

    /// Remove the registration for `key` if present.
    pub fn unregister(&self, key: &str) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unregister(key);
        }
    }

    /// Identity-checked removal used by wrapper teardown.
    pub(crate) fn unregister_entry(&self, key: &str, handle: &Arc<dyn ScrollHandle>) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unregister_entry(key, handle);
        }
    }

    /// Whether the owning group is still alive.
    pub fn is_connected(&self) -> bool {
        self.registry.upgrade().is_some()
    }
}

impl std::fmt::Debug for Registrar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registrar")
            .field("connected", &self.is_connected())
            .finish()
    }
}
