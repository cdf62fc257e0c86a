use crate::color::Rgba;
use crate::particle::Particle;
use crate::sprites::SpriteMask;

/// Drawing primitive the engine paints onto.
///
/// Coordinates are in surface pixels and may be fractional or out of range; anything that
/// falls outside the drawable area is silently ignored by the implementation.
pub trait Surface {
    /// Drawable area in pixels, `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Reset a rectangle to fully transparent.
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);

    /// Change the drawable area. Pixel contents may be discarded.
    fn resize(&mut self, width: u32, height: u32);

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.clear_rect(0.0, 0.0, w as f32, h as f32);
    }
}

/// Stamp `mask` for `particle`: one unit cell per painted mask cell, all cells shifted by
/// the particle's current rotating offset so the glyph moves as a rigid body.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, particle: &Particle, mask: &SpriteMask) {
    let base = particle.origin() + particle.offset();
    let fill = particle.fill();
    for (row, col) in mask.cells() {
        surface.fill_rect(col as f32 + base.x, row as f32 + base.y, 1.0, 1.0, fill);
    }
}
