use crate::color::Rgb;
use glam::Vec2;
use std::f32::consts::PI;
use std::time::Duration;

// Simulation tuning shared by every host. Values are fixed design constants.

// Population
pub const MAX_PARTICLES: usize = 500; // oldest particles are evicted beyond this

// Fade: alpha is multiplied by the decay each tick; at or below the floor a particle is dead
pub const ALPHA_START: f32 = 1.0;
pub const ALPHA_DECAY: f32 = 0.97;
pub const ALPHA_MIN: f32 = 0.1;

// Spiral drift: the glyph orbits its origin on a growing radius
pub const RADIUS_START: f32 = 30.0;
pub const RADIUS_STEP: f32 = 0.4;
pub const ANGLE_START: f32 = PI;
pub const ANGLE_STEP: f32 = 0.1; // radians per tick

// Size tier thresholds over a uniform sample in [0, 1)
pub const MEDIUM_BELOW: f64 = 0.25; // 25% medium
pub const LARGE_ABOVE: f64 = 0.9; // 10% large, the rest small

// Spawning
pub const SPAWN_THROTTLE: Duration = Duration::from_millis(25);
pub const SPAWN_OFFSET: Vec2 = Vec2::new(20.0, 50.0); // from the tracked point to the spawn origin

// Heart palette
pub const PALE_PINK: Rgb = [255, 168, 213];
pub const BLUE: Rgb = [66, 135, 245];
pub const GREEN: Rgb = [105, 255, 117];
pub const YELLOW: Rgb = [255, 233, 69];
pub const VIOLET: Rgb = [177, 135, 255];

pub const PALETTE: [Rgb; 5] = [PALE_PINK, BLUE, GREEN, YELLOW, VIOLET];
