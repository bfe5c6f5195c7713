//! Scroll-derived visuals: the reading progress bar and the hero parallax.

/// Fraction of the document scrolled, in `[0, 1]`.
///
/// A page that fits the viewport reports `0`.
pub fn progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Hero translation while the hero is still on screen.
///
/// `None` leaves the last applied transform untouched.
pub fn parallax_offset(scroll_y: f64, hero_height: f64, factor: f64) -> Option<f64> {
    if scroll_y < hero_height {
        Some(scroll_y * factor)
    } else {
        None
    }
}
