//! Software RGBA8 surface: the headless counterpart of a 2D canvas.

use crate::color::Rgba;
use crate::raster::Surface;
use std::ops::Range;

/// Straight-alpha RGBA8 pixel buffer with source-over blending.
///
/// A rectangle covers every pixel whose centre lies inside it, so a unit rectangle at any
/// fractional position paints exactly one pixel when it is on the surface.
#[derive(Clone, Debug)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        let px = &self.pixels[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixels with non-zero alpha.
    pub fn painted_count(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| px[3] != 0).count()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn for_each_covered(&mut self, x: f32, y: f32, w: f32, h: f32, mut f: impl FnMut(&mut [u8])) {
        let cols = covered(x, w, self.width);
        let rows = covered(y, h, self.height);
        for py in rows {
            for px in cols.clone() {
                let i = self.index(px, py);
                f(&mut self.pixels[i..i + 4]);
            }
        }
    }
}

// Pixels i in 0..limit with start <= i + 0.5 < start + extent.
fn covered(start: f32, extent: f32, limit: u32) -> Range<u32> {
    if !start.is_finite() || !extent.is_finite() || extent <= 0.0 {
        return 0..0;
    }
    let lo = (start - 0.5).ceil().max(0.0);
    let hi = (start + extent - 0.5).ceil().min(limit as f32);
    if hi <= lo {
        return 0..0;
    }
    lo as u32..hi as u32
}

fn blend_over(dst: &mut [u8], color: Rgba) {
    let sa = color.alpha.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for (c, &src) in dst[..3].iter_mut().zip(color.rgb.iter()) {
        let blended = (src as f32 * sa + *c as f32 * da * (1.0 - sa)) / out_a;
        *c = blended.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

impl Surface for PixelSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.for_each_covered(x, y, w, h, |px| px.fill(0));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.for_each_covered(x, y, w, h, |px| blend_over(px, color));
    }

    fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_rect_paints_one_pixel_at_any_fraction() {
        for &(x, y) in &[(3.0, 4.0), (3.49, 4.2), (3.5, 4.5), (2.51, 3.7)] {
            let mut s = PixelSurface::new(8, 8);
            s.fill_rect(x, y, 1.0, 1.0, Rgba::new([10, 20, 30], 1.0));
            assert_eq!(s.painted_count(), 1, "at ({x}, {y})");
            assert_eq!(s.pixel(3, 4), Some([10, 20, 30, 255]), "at ({x}, {y})");
        }
    }

    #[test]
    fn out_of_bounds_is_a_no_op() {
        let mut s = PixelSurface::new(4, 4);
        let c = Rgba::new([255, 0, 0], 1.0);
        s.fill_rect(-10.0, -10.0, 1.0, 1.0, c);
        s.fill_rect(4.0, 0.0, 1.0, 1.0, c);
        s.fill_rect(0.0, 100.0, 1.0, 1.0, c);
        s.fill_rect(f32::NAN, 0.0, 1.0, 1.0, c);
        assert_eq!(s.painted_count(), 0);
    }

    #[test]
    fn translucent_fill_blends_over_existing() {
        let mut s = PixelSurface::new(1, 1);
        s.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba::new([0, 0, 255], 1.0));
        s.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba::new([255, 0, 0], 0.5));
        let [r, g, b, a] = s.pixel(0, 0).unwrap_or_default();
        assert_eq!(a, 255);
        assert_eq!(g, 0);
        assert!((r as i32 - 128).abs() <= 1);
        assert!((b as i32 - 128).abs() <= 1);
    }

    #[test]
    fn translucent_fill_on_empty_keeps_color() {
        let mut s = PixelSurface::new(1, 1);
        s.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba::new([200, 100, 50], 0.5));
        assert_eq!(s.pixel(0, 0), Some([200, 100, 50, 128]));
    }

    #[test]
    fn clear_and_resize_reset_pixels() {
        let mut s = PixelSurface::new(4, 4);
        s.fill_rect(0.0, 0.0, 4.0, 4.0, Rgba::new([1, 2, 3], 1.0));
        assert_eq!(s.painted_count(), 16);
        s.clear_rect(0.0, 0.0, 2.0, 4.0);
        assert_eq!(s.painted_count(), 8);
        s.clear();
        assert_eq!(s.painted_count(), 0);
        s.fill_rect(0.0, 0.0, 1.0, 1.0, Rgba::new([1, 2, 3], 1.0));
        s.resize(10, 2);
        assert_eq!(s.size(), (10, 2));
        assert_eq!(s.pixels().len(), 80);
        assert_eq!(s.painted_count(), 0);
    }
}
