use crate::color::{Rgb, Rgba};
use crate::constants::{
    ALPHA_DECAY, ALPHA_MIN, ALPHA_START, ANGLE_START, ANGLE_STEP, RADIUS_START, RADIUS_STEP,
};
use crate::sprites::SizeTier;
use glam::Vec2;

/// One heart on its way out: fixed origin, tier and colour, with alpha, radius and angle
/// advanced once per tick by [`ParticleSet::tick`](crate::particles::ParticleSet::tick).
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    origin: Vec2,
    tier: SizeTier,
    color: Rgb,
    alpha: f32,
    radius: f32,
    angle: f32,
}

impl Particle {
    pub fn new(origin: Vec2, tier: SizeTier, color: Rgb) -> Self {
        Self {
            origin,
            tier,
            color,
            alpha: ALPHA_START,
            radius: RADIUS_START,
            angle: ANGLE_START,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }
    #[inline]
    pub fn tier(&self) -> SizeTier {
        self.tier
    }
    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alpha > ALPHA_MIN
    }

    /// Rotating radius vector shared by every cell of the glyph this frame.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        Vec2::from_angle(self.angle) * self.radius
    }

    #[inline]
    pub fn fill(&self) -> Rgba {
        Rgba::new(self.color, self.alpha)
    }

    pub(crate) fn step(&mut self) {
        self.radius += RADIUS_STEP;
        self.angle += ANGLE_STEP;
        self.alpha *= ALPHA_DECAY;
    }
}
