use crate::constants::{LARGE_ABOVE, MEDIUM_BELOW, PALETTE};
use crate::particle::Particle;
use crate::sprites::SizeTier;
use glam::Vec2;
use rand::prelude::*;

/// Maps a uniform sample in \[0, 1) to a size tier: 25% medium, 10% large, 65% small.
#[inline]
pub fn tier_for_sample(r: f64) -> SizeTier {
    if r < MEDIUM_BELOW {
        SizeTier::Medium
    } else if r > LARGE_ABOVE {
        SizeTier::Large
    } else {
        SizeTier::Small
    }
}

/// Builds fresh particles, drawing tier and colour from an injected generator.
pub struct ParticleFactory<R = StdRng> {
    rng: R,
}

impl ParticleFactory<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleFactory<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn create(&mut self, origin: Vec2) -> Particle {
        let tier = tier_for_sample(self.rng.gen::<f64>());
        let color = PALETTE[self.rng.gen_range(0..PALETTE.len())];
        Particle::new(origin, tier, color)
    }
}
