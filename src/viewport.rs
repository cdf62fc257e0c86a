// Pure viewport helpers, kept free of web_sys so they can be tested on the host.

/// Backing-store size for a full-viewport overlay from `window.innerWidth/innerHeight`.
/// Non-finite or non-positive dimensions fall back to one pixel.
#[inline]
pub fn backing_size(inner_width: f64, inner_height: f64) -> (u32, u32) {
    (
        to_px(inner_width, crate::constants::FALLBACK_WIDTH),
        to_px(inner_height, crate::constants::FALLBACK_HEIGHT),
    )
}

#[inline]
fn to_px(v: f64, fallback: u32) -> u32 {
    if v.is_finite() && v >= 1.0 {
        v.min(u32::MAX as f64) as u32
    } else {
        fallback
    }
}
