//! Frame-driven animation loop: spawn on motion, tick and draw once per frame, and stop
//! requesting frames when there is nothing left to draw.

use crate::constants::{SPAWN_OFFSET, SPAWN_THROTTLE};
use crate::factory::ParticleFactory;
use crate::particles::ParticleSet;
use crate::raster::{self, Surface};
use crate::throttle::Throttle;
use glam::Vec2;
use instant::Instant;

/// Host facility that runs work "before the next repaint".
///
/// Each request fires once. The host answers `request_frame` by calling
/// [`AnimationLoop::frame`] and `request_spawn(at)` by calling
/// [`AnimationLoop::spawn_particles`] with the same point.
pub trait FrameScheduler {
    fn request_frame(&mut self);
    fn request_spawn(&mut self, at: Vec2);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// No frame pending.
    Idle,
    /// A frame callback has been requested and not yet run.
    Running,
}

pub struct AnimationLoop<S, F> {
    surface: Option<S>,
    scheduler: F,
    particles: ParticleSet,
    factory: ParticleFactory,
    throttle: Throttle,
    state: LoopState,
    needs_redraw: bool,
}

impl<S: Surface, F: FrameScheduler> AnimationLoop<S, F> {
    pub fn new(scheduler: F, seed: u64) -> Self {
        Self::with_factory(scheduler, ParticleFactory::seeded(seed))
    }

    pub fn with_factory(scheduler: F, factory: ParticleFactory) -> Self {
        Self {
            surface: None,
            scheduler,
            particles: ParticleSet::new(),
            factory,
            throttle: Throttle::new(SPAWN_THROTTLE),
            state: LoopState::Idle,
            needs_redraw: false,
        }
    }

    /// Mount a surface and kick off a first frame. Any previously attached surface is
    /// returned to the caller.
    pub fn attach(&mut self, surface: S) -> Option<S> {
        let (w, h) = surface.size();
        log::debug!("[hearts] attach {}x{}", w, h);
        let previous = self.surface.replace(surface);
        self.schedule_frame();
        previous
    }

    /// Unmount the surface. No further frames or spawns are requested; live particles stay
    /// in memory and resume drawing on the next attach.
    pub fn detach(&mut self) -> Option<S> {
        let surface = self.surface.take();
        if surface.is_some() {
            log::debug!("[hearts] detach with {} live particles", self.particles.len());
        }
        surface
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Follow a viewport change. Only the drawable area changes; particles are untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
        }
    }

    /// Rate-limited spawn trigger for pointer/cursor motion. Accepted events defer a spawn
    /// at the offset point to the next frame boundary. Returns whether the event was taken.
    pub fn on_motion_event(&mut self, now: Instant, x: f32, y: f32) -> bool {
        if self.surface.is_none() || !self.throttle.try_acquire(now) {
            return false;
        }
        self.scheduler.request_spawn(Vec2::new(x, y) + SPAWN_OFFSET);
        true
    }

    /// Add one particle at `at`, waking the loop if the set was empty.
    pub fn spawn_particles(&mut self, at: Vec2) {
        let was_empty = self.particles.is_empty();
        let particle = self.factory.create(at);
        self.particles.add(particle);
        if was_empty {
            self.schedule_frame();
        }
    }

    /// Per-frame callback: clear, advance, draw, then decide whether to keep running.
    pub fn frame(&mut self) {
        self.state = LoopState::Idle;
        let Some(surface) = self.surface.as_mut() else {
            log::warn!("[hearts] frame fired without a surface; ignoring");
            return;
        };

        if !self.particles.is_empty() {
            surface.clear();
        }
        self.particles.tick();
        for p in self.particles.live() {
            raster::draw(surface, p, p.tier().mask());
        }

        let emptied = self.particles.is_empty();
        if !emptied || self.needs_redraw {
            self.schedule_frame();
        } else {
            log::debug!("[hearts] running -> idle");
        }
        self.needs_redraw = emptied;
    }

    fn schedule_frame(&mut self) {
        if self.state == LoopState::Running || self.surface.is_none() {
            return;
        }
        log::debug!("[hearts] idle -> running");
        self.state = LoopState::Running;
        self.scheduler.request_frame();
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Grace flag, set exactly when the last frame left the set empty. While it is set an
    /// empty frame still requests another one; the host may consult and clear it.
    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn set_needs_redraw(&mut self, needs_redraw: bool) {
        self.needs_redraw = needs_redraw;
    }

    #[inline]
    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}
