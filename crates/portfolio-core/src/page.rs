//! Pure predicates behind the scroll-linked page effects.

use crate::constants::{
    BACK_TO_TOP_VIEWPORT_FRACTION, HERO_PARALLAX_FACTOR, NAVBAR_ELEVATE_AFTER_PX,
    REVEAL_VIEWPORT_FRACTION,
};

/// Navbar gains its glass shadow once the page scrolls past the header.
pub fn navbar_elevated(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_ELEVATE_AFTER_PX
}

/// Back-to-top button shows after half a viewport of scrolling.
pub fn back_to_top_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height * BACK_TO_TOP_VIEWPORT_FRACTION
}

/// A reveal section plays once its top enters the lower reveal band of the
/// viewport, and reverses when scrolled back above it.
pub fn reveal_triggered(rect_top: f64, viewport_height: f64) -> bool {
    rect_top < viewport_height * REVEAL_VIEWPORT_FRACTION
}

/// Vertical offset (px) for the hero background at a given scroll offset.
pub fn hero_parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * HERO_PARALLAX_FACTOR
}
