//! Keyed registry of scroll handles

use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

use crate::handle::ScrollHandle;

/// Registry mapping item keys to scroll handles.
///
/// Entries are non-owning: the registry holds `Weak` references and never
/// extends an item's lifetime. Keys are unique within one registry; a
/// duplicate registration replaces the previous entry (last wins). The
/// registry is owned by exactly one group and lives and dies with it.
pub struct ScrollRegistry {
    items: RwLock<HashMap<String, Weak<dyn ScrollHandle>>>,
}

impl std::fmt::Debug for ScrollRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

impl Default for ScrollRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Create a new registry wrapped in Arc for sharing.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a handle under `key`.
    ///
    /// An existing mapping for `key` is replaced (last wins). In debug
    /// builds, a warning is logged for duplicate keys.
    pub fn register(&self, key: impl Into<String>, handle: Weak<dyn ScrollHandle>) {
        let key = key.into();

        #[cfg(debug_assertions)]
        {
            if let Ok(items) = self.items.read() {
                if items.contains_key(&key) {
                    tracing::warn!("Duplicate scroll key registered: {}", key);
                }
            }
        }

        tracing::trace!(key = %key, "register scroll target");
        if let Ok(mut items) = self.items.write() {
            items.insert(key, handle);
        }
    }

    /// Remove the mapping for `key` if present; no-op if absent.
    pub fn unregister(&self, key: &str) {
        if let Ok(mut items) = self.items.write() {
            if items.remove(key).is_some() {
                tracing::trace!(key, "unregister scroll target");
            }
        }
    }

    /// Remove the mapping for `key` only while it still points at `handle`
    /// (or at a handle that is already gone).
    ///
    /// Wrapper teardown uses this so a stale wrapper cannot evict a newer
    /// registration made under the same key.
    pub(crate) fn unregister_entry(&self, key: &str, handle: &Arc<dyn ScrollHandle>) {
        if let Ok(mut items) = self.items.write() {
            let matches = items.get(key).is_some_and(|entry| match entry.upgrade() {
                Some(current) => {
                    Arc::as_ptr(&current) as *const () == Arc::as_ptr(handle) as *const ()
                }
                None => true,
            });
            if matches {
                items.remove(key);
                tracing::trace!(key, "unregister scroll target");
            }
        }
    }

    /// Look up a live handle by key.
    ///
    /// A dead entry (the owning wrapper is gone without unregistering) is
    /// pruned and reported as absent.
    pub fn get(&self, key: &str) -> Option<Arc<dyn ScrollHandle>> {
        let entry = self.items.read().ok()?.get(key)?.clone();
        match entry.upgrade() {
            Some(handle) => Some(handle),
            None => {
                self.prune(key);
                None
            }
        }
    }

    /// Drop `key` if its entry no longer upgrades.
    fn prune(&self, key: &str) {
        if let Ok(mut items) = self.items.write() {
            let dead = items
                .get(key)
                .is_some_and(|entry| entry.upgrade().is_none());
            if dead {
                tracing::trace!(key, "pruned dead scroll target");
                items.remove(key);
            }
        }
    }

    /// Check if a key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.items
            .read()
            .ok()
            .is_some_and(|items| items.contains_key(key))
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All registered keys (for diagnostics).
    pub fn keys(&self) -> Vec<String> {
        self.items
            .read()
            .ok()
            .map(|items| items.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::ScrollRequest;
    use glide_animation::FrameScheduler;
    use glide_core::{AnimationError, ScrollSurface};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandle {
        calls: AtomicUsize,
    }

    impl CountingHandle {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ScrollHandle for CountingHandle {
        fn scroll_into_view(
            &self,
            _surface: Arc<dyn ScrollSurface>,
            _scheduler: Arc<dyn FrameScheduler>,
            _request: ScrollRequest,
        ) -> Result<(), AnimationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn downgrade(handle: &Arc<CountingHandle>) -> Weak<dyn ScrollHandle> {
        let handle = Arc::clone(handle) as Arc<dyn ScrollHandle>;
        Arc::downgrade(&handle)
    }

    #[test]
    fn test_register_and_get() {
        let registry = ScrollRegistry::new();
        let handle = CountingHandle::new();

        registry.register("item-a", downgrade(&handle));

        assert!(registry.get("item-a").is_some());
        assert!(registry.get("missing").is_none());
        assert!(registry.contains("item-a"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_round_trip() {
        let registry = ScrollRegistry::new();
        let handle = CountingHandle::new();

        registry.register("item-a", downgrade(&handle));
        registry.unregister("item-a");

        assert!(registry.get("item-a").is_none());
        assert!(registry.is_empty());

        // Absent key: silent no-op.
        registry.unregister("item-a");
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let registry = ScrollRegistry::new();
        let first = CountingHandle::new();
        let second = CountingHandle::new();

        registry.register("item-a", downgrade(&first));
        registry.register("item-a", downgrade(&second));
        assert_eq!(registry.len(), 1);

        let resolved = registry.get("item-a").unwrap();
        let surface: Arc<dyn ScrollSurface> = Arc::new(NullSurface);
        let scheduler: Arc<dyn FrameScheduler> =
            Arc::new(glide_animation::FrameQueue::new());
        resolved
            .scroll_into_view(surface, scheduler, ScrollRequest::default())
            .unwrap();

        assert_eq!(first.calls(), 0);
        assert_eq!(second.calls(), 1);
    }

    #[test]
    fn test_dead_entry_is_pruned_on_lookup() {
        let registry = ScrollRegistry::new();
        let handle = CountingHandle::new();

        registry.register("item-a", downgrade(&handle));
        drop(handle);

        assert!(registry.get("item-a").is_none());
        assert!(!registry.contains("item-a"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_identity_checked_unregister_keeps_newer_entry() {
        let registry = ScrollRegistry::new();
        let first = CountingHandle::new();
        let second = CountingHandle::new();

        registry.register("item-a", downgrade(&first));
        registry.register("item-a", downgrade(&second));

        // The stale wrapper tears down; the newer registration stays.
        let stale = Arc::clone(&first) as Arc<dyn ScrollHandle>;
        registry.unregister_entry("item-a", &stale);
        assert!(registry.contains("item-a"));

        let current = Arc::clone(&second) as Arc<dyn ScrollHandle>;
        registry.unregister_entry("item-a", &current);
        assert!(!registry.contains("item-a"));
    }

    #[test]
    fn test_keys_lists_registrations() {
        let registry = ScrollRegistry::new();
        let a = CountingHandle::new();
        let b = CountingHandle::new();

        registry.register("item-a", downgrade(&a));
        registry.register("item-b", downgrade(&b));

        let mut keys = registry.keys();
        keys.sort();
        assert_eq!(keys, vec!["item-a".to_string(), "item-b".to_string()]);
    }

    struct NullSurface;

    impl ScrollSurface for NullSurface {
        fn scroll_offset(&self) -> f32 {
            0.0
        }

        fn set_scroll_offset(&self, _offset: f32) {}
    }
}
