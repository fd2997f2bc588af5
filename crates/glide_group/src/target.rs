//! Registerable item wrapper

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex};

use glide_animation::{Easing, FrameScheduler, ScrollTween};
use glide_core::{AnimationError, ItemAnchor, ScrollSurface};

use crate::display::{resolve_display_name, short_type_name};
use crate::group::Registrar;
use crate::handle::{ScrollHandle, ScrollRequest};

/// Shared state behind a target's scroll handle.
struct TargetInner {
    name: String,
    anchor: Option<Arc<dyn ItemAnchor>>,
    easing: Easing,
}

/// The capability object registered for a [`ScrollTarget`].
///
/// Owned by its wrapper; the registry only ever holds a `Weak` reference to
/// it, so a handle can never outlive the item it animates.
pub struct TargetHandle {
    inner: Mutex<TargetInner>,
}

impl TargetHandle {
    fn geometry(&self) -> (f32, f32) {
        // Until layout produces an anchor, geometry is best-effort zero.
        match self.inner.lock() {
            Ok(inner) => inner
                .anchor
                .as_ref()
                .map(|anchor| (anchor.offset_top(), anchor.extent()))
                .unwrap_or((0.0, 0.0)),
            Err(_) => (0.0, 0.0),
        }
    }

    fn easing(&self) -> Easing {
        self.inner
            .lock()
            .map(|inner| inner.easing)
            .unwrap_or_default()
    }
}

impl ScrollHandle for TargetHandle {
    fn scroll_into_view(
        &self,
        surface: Arc<dyn ScrollSurface>,
        scheduler: Arc<dyn FrameScheduler>,
        request: ScrollRequest,
    ) -> Result<(), AnimationError> {
        let (offset_top, extent) = self.geometry();
        let start = surface.scroll_offset();
        let change = (offset_top - extent) - start;
        let (duration, step, on_complete) = request.into_parts();

        let tween = ScrollTween::new(start, change, duration, step, self.easing())?;
        tracing::trace!(
            item = %self.display_name(),
            start,
            change,
            duration,
            "scroll_into_view"
        );
        tween.run(&scheduler, surface, on_complete);
        Ok(())
    }

    fn display_name(&self) -> String {
        self.inner
            .lock()
            .map(|inner| inner.name.clone())
            .unwrap_or_else(|_| "Unknown".to_string())
    }
}

/// Wrapper that makes an arbitrary item scrollable-into-view.
///
/// The wrapper composes over the inner item (the item's own API stays
/// reachable through `Deref`) and owns the registration lifecycle: mounting
/// registers the item's scroll handle under the configured key, unmounting
/// or dropping the wrapper removes it again. While mounted, the owning
/// group can animate the item into view any number of times.
pub struct ScrollTarget<T> {
    key: String,
    inner: T,
    handle: Arc<TargetHandle>,
    mounted_in: Option<Registrar>,
}

impl<T> ScrollTarget<T> {
    /// Wrap `inner`, to be registered under `key`.
    pub fn new(key: impl Into<String>, inner: T) -> Self {
        let name = format!(
            "ScrollTarget({})",
            resolve_display_name(None, short_type_name::<T>())
        );
        Self {
            key: key.into(),
            inner,
            handle: Arc::new(TargetHandle {
                inner: Mutex::new(TargetInner {
                    name,
                    anchor: None,
                    easing: Easing::default(),
                }),
            }),
            mounted_in: None,
        }
    }

    /// Override the easing curve (default quadratic ease-in-out).
    pub fn easing(self, easing: Easing) -> Self {
        if let Ok(mut inner) = self.handle.inner.lock() {
            inner.easing = easing;
        }
        self
    }

    /// Override the diagnostic label. Blank names fall back to the inner
    /// type's name.
    pub fn named(self, name: impl Into<String>) -> Self {
        let name = name.into();
        if let Ok(mut inner) = self.handle.inner.lock() {
            inner.name = format!(
                "ScrollTarget({})",
                resolve_display_name(Some(&name), short_type_name::<T>())
            );
        }
        self
    }

    /// The registration key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Diagnostic label, `ScrollTarget(<inner>)`.
    pub fn display_name(&self) -> String {
        self.handle.display_name()
    }

    /// Provide the item's laid-out geometry.
    ///
    /// Until an anchor is set, scrolls treat the item's offset and extent
    /// as zero.
    pub fn set_anchor(&self, anchor: Arc<dyn ItemAnchor>) {
        if let Ok(mut inner) = self.handle.inner.lock() {
            inner.anchor = Some(anchor);
        }
    }

    /// Register this item in the group behind `registrar`.
    ///
    /// Mounting an already-mounted target is a warned no-op; a target may
    /// be mounted again after [`ScrollTarget::unmount`].
    pub fn mount(&mut self, registrar: &Registrar) {
        if self.mounted_in.is_some() {
            tracing::warn!(key = %self.key, "ScrollTarget already mounted");
            return;
        }
        let handle = Arc::clone(&self.handle) as Arc<dyn ScrollHandle>;
        registrar.register(self.key.clone(), Arc::downgrade(&handle));
        self.mounted_in = Some(registrar.clone());
    }

    /// Remove this item's registration.
    ///
    /// Removal is identity-checked: if another target has since been
    /// registered under the same key, that newer registration stays.
    /// Unmounting an unmounted target is a silent no-op.
    pub fn unmount(&mut self) {
        if let Some(registrar) = self.mounted_in.take() {
            let handle = Arc::clone(&self.handle) as Arc<dyn ScrollHandle>;
            registrar.unregister_entry(&self.key, &handle);
        }
    }

    /// Whether this target currently holds a registration.
    pub fn is_mounted(&self) -> bool {
        self.mounted_in.is_some()
    }

    /// The capability handle registered for this target.
    pub fn handle(&self) -> Arc<dyn ScrollHandle> {
        Arc::clone(&self.handle) as Arc<dyn ScrollHandle>
    }
}

impl<T> Deref for ScrollTarget<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> DerefMut for ScrollTarget<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T> Drop for ScrollTarget<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<T> std::fmt::Debug for ScrollTarget<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollTarget")
            .field("key", &self.key)
            .field("name", &self.display_name())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_animation::FrameQueue;
    use crate::group::ScrollableGroup;
    use std::sync::Mutex;

    struct OffsetSurface {
        offset: Mutex<f32>,
    }

    impl OffsetSurface {
        fn new(offset: f32) -> Arc<Self> {
            Arc::new(Self {
                offset: Mutex::new(offset),
            })
        }
    }

    impl ScrollSurface for OffsetSurface {
        fn scroll_offset(&self) -> f32 {
            *self.offset.lock().unwrap()
        }

        fn set_scroll_offset(&self, offset: f32) {
            *self.offset.lock().unwrap() = offset;
        }
    }

    struct Row {
        title: String,
    }

    #[test]
    fn test_mount_unmount_lifecycle() {
        let surface = OffsetSurface::new(0.0);
        let queue = Arc::new(FrameQueue::new());
        let group = ScrollableGroup::new(surface, queue);

        let mut target = ScrollTarget::new("row-1", ());
        assert!(!target.is_mounted());

        target.mount(&group.registrar());
        assert!(target.is_mounted());
        assert!(group.contains_item("row-1"));

        target.unmount();
        assert!(!target.is_mounted());
        assert!(!group.contains_item("row-1"));

        // Unmounting again is a no-op; remounting registers afresh.
        target.unmount();
        target.mount(&group.registrar());
        assert!(group.contains_item("row-1"));
    }

    #[test]
    fn test_mount_twice_is_a_noop() {
        let surface = OffsetSurface::new(0.0);
        let queue = Arc::new(FrameQueue::new());
        let group = ScrollableGroup::new(surface, queue);

        let mut target = ScrollTarget::new("row-1", ());
        target.mount(&group.registrar());
        target.mount(&group.registrar());
        assert_eq!(group.item_count(), 1);
    }

    #[test]
    fn test_stale_unmount_keeps_newer_registration() {
        let surface = OffsetSurface::new(0.0);
        let queue = Arc::new(FrameQueue::new());
        let group = ScrollableGroup::new(surface, queue);

        let mut first = ScrollTarget::new("row", ());
        first.mount(&group.registrar());

        let mut second = ScrollTarget::new("row", ());
        second.mount(&group.registrar());

        // The replaced wrapper goes away; the newer registration survives.
        drop(first);
        assert!(group.contains_item("row"));

        drop(second);
        assert!(!group.contains_item("row"));
    }

    #[test]
    fn test_display_name_uses_inner_type() {
        let target = ScrollTarget::new(
            "row",
            Row {
                title: "hello".to_string(),
            },
        );
        assert_eq!(target.display_name(), "ScrollTarget(Row)");
    }

    #[test]
    fn test_named_overrides_and_blank_falls_back() {
        let target = ScrollTarget::new("row", ()).named("ChatRow");
        assert_eq!(target.display_name(), "ScrollTarget(ChatRow)");

        // A blank explicit name falls back to the structural name.
        let target = ScrollTarget::new("row", 7_u32).named("  ");
        assert_eq!(target.display_name(), "ScrollTarget(u32)");
    }

    #[test]
    fn test_deref_forwards_to_inner() {
        let mut target = ScrollTarget::new(
            "row",
            Row {
                title: "hello".to_string(),
            },
        );
        assert_eq!(target.title, "hello");
        target.title.push_str(" world");
        assert_eq!(target.title, "hello world");
    }

    #[test]
    fn test_scroll_without_anchor_treats_geometry_as_zero() {
        let surface = OffsetSurface::new(240.0);
        let queue = Arc::new(FrameQueue::new());
        let group = ScrollableGroup::new(surface.clone(), queue.clone());

        let mut target = ScrollTarget::new("row", ());
        target.mount(&group.registrar());

        // change = (0 - 0) - 240, so the animation lands at offset 0.
        assert!(group.scroll_to_item("row"));
        while queue.run_frame() > 0 {}
        assert!((surface.scroll_offset() - 0.0).abs() < 1e-3);
    }
}
