use crate::constants::MAX_PARTICLES;
use crate::particle::Particle;
use std::collections::VecDeque;

/// Live particles in spawn order (head = oldest).
///
/// The set never holds more than its capacity: adding past it evicts from the head, and
/// every [`tick`](Self::tick) prunes dead particles before re-applying the bound.
#[derive(Debug)]
pub struct ParticleSet {
    particles: VecDeque<Particle>,
    capacity: usize,
}

impl Default for ParticleSet {
    fn default() -> Self {
        Self::with_capacity(MAX_PARTICLES)
    }
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: VecDeque::with_capacity(capacity.min(MAX_PARTICLES)),
            capacity,
        }
    }

    pub fn add(&mut self, particle: Particle) {
        self.particles.push_back(particle);
        self.enforce_capacity();
    }

    /// Advance every particle one step, drop the dead ones, then evict the oldest
    /// survivors until the set fits its capacity.
    pub fn tick(&mut self) {
        for p in self.particles.iter_mut() {
            p.step();
        }
        self.particles.retain(Particle::is_alive);
        self.enforce_capacity();
    }

    fn enforce_capacity(&mut self) {
        let excess = self.particles.len().saturating_sub(self.capacity);
        if excess > 0 {
            self.particles.drain(..excess);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Particles to draw this frame, oldest first. Only particles with alpha above the
    /// death threshold are ever retained, so this is exactly the live population.
    pub fn live(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
