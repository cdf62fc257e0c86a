/// Overlay element and styling for the web front-end.
///
/// The canvas covers the viewport, sits above the host content and never intercepts input.
pub const OVERLAY_ID: &str = "hearts-overlay";
pub const OVERLAY_STYLE: &str = "position:absolute;top:0;left:0;pointer-events:none";

// Fallback backing size when the window reports no usable viewport
pub const FALLBACK_WIDTH: u32 = 1;
pub const FALLBACK_HEIGHT: u32 = 1;
