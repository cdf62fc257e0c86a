/// 8-bit RGB triple.
pub type Rgb = [u8; 3];

/// Fill colour handed to a [`Surface`](crate::raster::Surface): an RGB triple plus a
/// straight (non-premultiplied) alpha in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(rgb: Rgb, alpha: f32) -> Self {
        Self { rgb, alpha }
    }

    /// CSS colour string suitable for a 2D canvas fill style, e.g. `rgba(66,135,245,0.97)`.
    pub fn to_css(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgba({},{},{},{})", r, g, b, self.alpha)
    }
}
