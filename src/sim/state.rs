//! Game state and core entity types
//!
//! The `World` owns every entity collection, the score, the RNG and the input
//! translator; all mutation funnels through `World::advance`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::InputTranslator;
use super::{spawn, tick, wrap};
use crate::consts::*;
use crate::settings::Config;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first fire input; nothing advances
    NotStarted,
    /// Active gameplay
    Playing,
    /// Player died; terminal
    GameOver,
}

/// The player's ship
///
/// Velocity doubles as the heading: its direction is the facing used for
/// rendering and firing, its magnitude is the drift speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Hit points; decremented by saucer fire and rams, death at <= 0
    pub shield: i32,
    /// Latched true once; no gameplay mutation happens afterwards
    pub dead: bool,
}

impl Player {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(width / 2.0, height / 2.0),
            vel: Vec2::new(PLAYER_START_SPEED, 0.0),
            radius: PLAYER_RADIUS,
            shield: PLAYER_SHIELD,
            dead: false,
        }
    }

    /// Kinematic step: integrate, wrap, damp
    pub fn advance(&mut self, time: f32, damping: f32, width: f32, height: f32) {
        self.pos += self.vel * time;
        self.pos = wrap::wrap_position(self.pos, self.radius, width, height);
        self.vel *= damping;
    }
}

/// A drifting rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Randomized at spawn, 25-125
    pub radius: f32,
    /// Set when this asteroid fatally rammed the player (rendering hint)
    pub crashed: bool,
}

impl Asteroid {
    pub fn advance(&mut self, time: f32, width: f32, height: f32) {
        self.pos += self.vel * time;
        self.pos = wrap::wrap_position(self.pos, self.radius, width, height);
    }
}

/// A hostile saucer
///
/// Kinematics match the asteroid; on top of that it re-aims at the player on
/// its own counter and fires on a real-time cooldown (see `tick`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Saucer {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub shield: i32,
    /// Updates since the last retarget roll
    pub retarget_ticks: u32,
    /// World clock value at the last shot, milliseconds
    pub last_shot_ms: f64,
}

impl Saucer {
    pub fn advance(&mut self, time: f32, width: f32, height: f32) {
        self.pos += self.vel * time;
        self.pos = wrap::wrap_position(self.pos, self.radius, width, height);
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// true = player-fired, harms asteroids and saucers;
    /// false = saucer-fired, harms the player. Fixed at construction.
    pub friendly: bool,
}

impl Projectile {
    /// Fire along `heading`: the stored velocity is the heading plus a fixed
    /// muzzle boost along its direction, so a shot always outruns the shooter.
    ///
    /// Callers guarantee a non-zero heading; a zero heading degrades to a
    /// stationary projectile rather than a NaN position.
    pub fn new(pos: Vec2, heading: Vec2, friendly: bool) -> Self {
        Self {
            pos,
            vel: heading + heading.normalize_or_zero() * MUZZLE_SPEED,
            friendly,
        }
    }

    pub fn advance(&mut self, time: f32) {
        self.pos += self.vel * time;
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Arena bounds, fixed at construction
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    /// Monotonic non-decreasing
    pub score: u64,
    /// Accumulated host-reported real time; drives saucer cooldowns
    pub clock_ms: f64,
    /// Updates performed while Playing
    pub time_ticks: u64,
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: Config,
    pub player: Player,
    pub asteroids: Vec<Asteroid>,
    pub saucers: Vec<Saucer>,
    pub projectiles: Vec<Projectile>,
    pub input: InputTranslator,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create a world and spawn the initial asteroid and saucer waves
    pub fn new(width: f32, height: f32, seed: u64, config: Config) -> Self {
        let mut world = Self {
            width,
            height,
            phase: GamePhase::NotStarted,
            score: 0,
            clock_ms: 0.0,
            time_ticks: 0,
            seed,
            player: Player::new(width, height),
            asteroids: Vec::with_capacity(config.asteroid_population),
            saucers: Vec::with_capacity(config.saucer_population),
            projectiles: Vec::new(),
            input: InputTranslator::new(),
            rng: Pcg32::seed_from_u64(seed),
            config,
        };

        while world.asteroids.len() < world.config.asteroid_population {
            let asteroid = spawn::spawn_asteroid(width, height, &mut world.rng);
            world.asteroids.push(asteroid);
        }
        while world.saucers.len() < world.config.saucer_population {
            let saucer = spawn::spawn_saucer(width, height, world.clock_ms, &mut world.rng);
            world.saucers.push(saucer);
        }

        world
    }

    /// Buffer a key-down event for the next update
    pub fn key_down(&mut self, key: super::input::Key) {
        self.input.key_down(key);
    }

    /// Buffer a key-up event for the next update
    pub fn key_up(&mut self, key: super::input::Key) {
        self.input.key_up(key);
    }

    /// Advance one frame given elapsed real milliseconds since the last frame
    ///
    /// The elapsed time is normalized by a fixed constant into the
    /// dimensionless `time` multiplier applied to all velocity integration.
    pub fn advance(&mut self, elapsed_ms: f32) {
        tick::tick(self, elapsed_ms);
    }

    /// Read-only view for a rendering collaborator
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            score: self.score,
            player: &self.player,
            asteroids: &self.asteroids,
            saucers: &self.saucers,
            projectiles: &self.projectiles,
            debug_markers: self.config.debug_markers,
        }
    }
}

/// Everything a renderer needs, nothing it may mutate
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub score: u64,
    pub player: &'a Player,
    pub asteroids: &'a [Asteroid],
    pub saucers: &'a [Saucer],
    pub projectiles: &'a [Projectile],
    pub debug_markers: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_populations() {
        let world = World::new(500.0, 500.0, 7, Config::default());
        assert_eq!(world.asteroids.len(), ASTEROID_POPULATION);
        assert_eq!(world.saucers.len(), SAUCER_POPULATION);
        assert_eq!(world.phase, GamePhase::NotStarted);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_player_starts_alive_at_center() {
        let world = World::new(500.0, 400.0, 7, Config::default());
        assert!(!world.player.dead);
        assert_eq!(world.player.pos, Vec2::new(250.0, 200.0));
        assert!(world.player.vel.length() > 0.0);
    }

    #[test]
    fn test_projectile_muzzle_boost() {
        let heading = Vec2::new(3.0, 4.0); // length 5
        let p = Projectile::new(Vec2::ZERO, heading, true);
        // Boost adds 10 along the heading: total speed 15
        assert!((p.vel.length() - 15.0).abs() < 1e-4);
        assert!((p.vel.normalize() - heading.normalize()).length() < 1e-5);
    }

    #[test]
    fn test_player_damping() {
        let mut player = Player::new(500.0, 500.0);
        let speed = player.vel.length();
        player.advance(1.0, 0.99, 500.0, 500.0);
        assert!((player.vel.length() - speed * 0.99).abs() < 1e-5);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let world = World::new(500.0, 500.0, 7, Config::default());
        let snap = world.snapshot();
        assert_eq!(snap.asteroids.len(), world.asteroids.len());
        assert_eq!(snap.score, 0);
        // Snapshot serializes for external tooling
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"NotStarted\""));
    }
}
