//! Scroll surface and item geometry seams
//!
//! The animation engine never touches a concrete rendering tree. It writes
//! scroll offsets through [`ScrollSurface`] and reads item geometry through
//! [`ItemAnchor`]; an embedding implements both over its real surface once
//! layout has run.

/// A scrollable region whose offset can be read and written.
///
/// Offsets are written from scheduled frame callbacks, so implementations
/// use interior mutability and are shared as `Arc<dyn ScrollSurface>`.
pub trait ScrollSurface: Send + Sync {
    /// Current scroll offset of the surface.
    fn scroll_offset(&self) -> f32;

    /// Write a new scroll offset.
    ///
    /// Values are written verbatim; the surface decides how out-of-range
    /// offsets are presented.
    fn set_scroll_offset(&self, offset: f32);
}

/// Geometry of a mounted item, known once the host has laid it out.
pub trait ItemAnchor: Send + Sync {
    /// Distance from the top of the scrollable content to this item.
    fn offset_top(&self) -> f32;

    /// The item's own extent along the scroll axis.
    fn extent(&self) -> f32;
}
