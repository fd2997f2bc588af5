//! Glide Core
//!
//! Foundational seams for the Glide scroll-into-view library:
//!
//! - **Scroll surfaces**: the narrow interface to a scrolling region
//! - **Item anchors**: laid-out item geometry, decoupled from any renderer
//! - **Error taxonomy**: rejections for malformed animation parameters
//!
//! Embedders implement [`ScrollSurface`] and [`ItemAnchor`] over their real
//! rendering tree; everything above this crate only ever talks to those two
//! traits.

pub mod error;
pub mod surface;

pub use error::AnimationError;
pub use surface::{ItemAnchor, ScrollSurface};
