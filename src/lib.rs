//! Astro Flip - toroidal-arena space combat
//!
//! Core modules:
//! - `sim`: the simulation engine (entities, wrap policy, collisions, spawner,
//!   game state machine)
//! - `settings`: per-instance configuration passed into `World` construction
//!
//! Rendering, asset loading and raw event plumbing are external collaborators:
//! the host feeds key events and per-frame elapsed time in, and reads a
//! `Snapshot` back out. Nothing in this crate touches a drawing surface.

pub mod settings;
pub mod sim;

pub use settings::Config;
pub use sim::{GamePhase, Key, Snapshot, World};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Elapsed milliseconds per unit of the dimensionless `time` multiplier
    pub const TIME_SCALE_MS: f32 = 50.0;

    /// Player ship
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SHIELD: i32 = 10;
    /// Initial heading magnitude (ship starts drifting along +x)
    pub const PLAYER_START_SPEED: f32 = 4.0;
    /// Multiplicative velocity damping per update (unless constant-speed mode)
    pub const PLAYER_DAMPING: f32 = 0.99;
    /// Rotation rate while a rotate key is held, degrees per time unit
    pub const ROTATE_RATE_DEG: f32 = 15.0;
    /// Thrust scaling per time unit while held
    pub const THRUST_UP_FACTOR: f32 = 1.2;
    pub const THRUST_DOWN_FACTOR: f32 = 0.8;

    /// Asteroid field
    pub const ASTEROID_POPULATION: usize = 20;
    pub const ASTEROID_MIN_RADIUS: f32 = 25.0;
    pub const ASTEROID_MAX_RADIUS: f32 = 125.0;

    /// Saucers
    pub const SAUCER_POPULATION: usize = 2;
    pub const SAUCER_MIN_RADIUS: f32 = 25.0;
    pub const SAUCER_MAX_RADIUS: f32 = 35.0;
    pub const SAUCER_SHIELD: i32 = 10;
    /// Speed applied when a saucer aims at the player
    pub const SAUCER_SPEED: f32 = 5.0;
    /// Updates between retarget rolls
    pub const SAUCER_RETARGET_TICKS: u32 = 100;
    pub const SAUCER_RETARGET_CHANCE: f64 = 0.7;
    /// Real-time cooldown between saucer shots
    pub const SAUCER_FIRE_COOLDOWN_MS: f64 = 2000.0;
    /// Per-update fire chance once the cooldown has elapsed
    pub const SAUCER_FIRE_CHANCE: f64 = 0.01;
    /// Chance a saucer shot deviates to simulate a miss
    pub const SAUCER_MISS_CHANCE: f64 = 0.4;
    /// Maximum aim deviation, degrees either side
    pub const SAUCER_MISS_MAX_DEG: f32 = 45.0;

    /// Projectiles
    /// Fixed speed boost added along the firing heading
    pub const MUZZLE_SPEED: f32 = 10.0;
    /// Radial slack on projectile-vs-player hits
    pub const PLAYER_HIT_MARGIN: f32 = 2.0;

    /// Spawner
    pub const SPAWN_BASE_SPEED: f32 = 1.5;

    /// Scoring
    pub const SCORE_ASTEROID: u64 = 1;
    pub const SCORE_SAUCER: u64 = 100;
}

/// Rotate a vector by an angle in degrees (standard 2D rotation matrix)
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_degrees_quarter_turn() {
        let v = rotate_degrees(Vec2::new(1.0, 0.0), 90.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_degrees_preserves_length() {
        let v = Vec2::new(3.0, -4.0);
        let r = rotate_degrees(v, 37.5);
        assert!((r.length() - v.length()).abs() < 1e-4);
    }
}
