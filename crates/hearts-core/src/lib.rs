//! Heart-trail particle engine.
//!
//! Spawns small heart sprites behind a moving point, spirals them outward while they fade,
//! and rasterizes them onto any [`Surface`]. The engine knows nothing about windows or
//! DOM; hosts supply a surface and a [`FrameScheduler`] and forward motion events.

pub mod animation;
pub mod color;
pub mod constants;
pub mod factory;
pub mod particle;
pub mod particles;
pub mod raster;
pub mod sprites;
pub mod surface;
pub mod throttle;

pub use animation::{AnimationLoop, FrameScheduler, LoopState};
pub use color::{Rgb, Rgba};
pub use factory::{tier_for_sample, ParticleFactory};
pub use particle::Particle;
pub use particles::ParticleSet;
pub use raster::{draw, Surface};
pub use sprites::{mask_for, SizeTier, SpriteMask};
pub use surface::PixelSurface;
pub use throttle::Throttle;

pub use glam::Vec2;
