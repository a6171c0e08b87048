//! Population-maintaining spawner
//!
//! New asteroids and saucers always start outside the visible rectangle: a
//! uniform in-arena point pushed past one edge by the full arena dimension.
//! Headings start center-biased (aimed at the arena center, random speed) and
//! are then rotated by a uniform random angle, so incoming traffic is varied
//! without being center-seeking.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, Saucer};
use crate::consts::*;
use crate::rotate_degrees;

/// Uniform in-arena point offset beyond one edge (50/50 axis, 50/50 direction)
fn off_arena_position<R: Rng>(width: f32, height: f32, rng: &mut R) -> Vec2 {
    let mut pos = Vec2::new(
        rng.random_range(0.0..width),
        rng.random_range(0.0..height),
    );
    if rng.random_bool(0.5) {
        pos.x += if rng.random_bool(0.5) { width } else { -width };
    } else {
        pos.y += if rng.random_bool(0.5) { height } else { -height };
    }
    pos
}

/// Center-biased randomized heading for a fresh spawn
fn spawn_heading<R: Rng>(pos: Vec2, width: f32, height: f32, rng: &mut R) -> Vec2 {
    let center = Vec2::new(width / 2.0, height / 2.0);
    let toward_center = (center - pos).normalize_or_zero();
    let speed = SPAWN_BASE_SPEED * rng.random_range(0.0..1.0);
    rotate_degrees(toward_center * speed, rng.random_range(0.0..360.0))
}

pub fn spawn_asteroid<R: Rng>(width: f32, height: f32, rng: &mut R) -> Asteroid {
    let pos = off_arena_position(width, height, rng);
    Asteroid {
        pos,
        vel: spawn_heading(pos, width, height, rng),
        radius: rng.random_range(ASTEROID_MIN_RADIUS..ASTEROID_MAX_RADIUS),
        crashed: false,
    }
}

/// New saucers inherit the current clock so the fire cooldown starts fresh
pub fn spawn_saucer<R: Rng>(width: f32, height: f32, clock_ms: f64, rng: &mut R) -> Saucer {
    let pos = off_arena_position(width, height, rng);
    Saucer {
        pos,
        vel: spawn_heading(pos, width, height, rng),
        radius: rng.random_range(SAUCER_MIN_RADIUS..SAUCER_MAX_RADIUS),
        shield: SAUCER_SHIELD,
        retarget_ticks: 0,
        last_shot_ms: clock_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::wrap::in_arena;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const W: f32 = 500.0;
    const H: f32 = 500.0;

    #[test]
    fn test_spawns_start_off_arena() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let asteroid = spawn_asteroid(W, H, &mut rng);
            assert!(
                !in_arena(asteroid.pos, W, H),
                "asteroid spawned on screen at {:?}",
                asteroid.pos
            );
        }
    }

    #[test]
    fn test_asteroid_radius_range() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let radius = spawn_asteroid(W, H, &mut rng).radius;
            assert!((ASTEROID_MIN_RADIUS..ASTEROID_MAX_RADIUS).contains(&radius));
        }
    }

    #[test]
    fn test_saucer_fields() {
        let mut rng = Pcg32::seed_from_u64(42);
        let saucer = spawn_saucer(W, H, 1234.5, &mut rng);
        assert!((SAUCER_MIN_RADIUS..SAUCER_MAX_RADIUS).contains(&saucer.radius));
        assert_eq!(saucer.shield, SAUCER_SHIELD);
        assert_eq!(saucer.retarget_ticks, 0);
        assert_eq!(saucer.last_shot_ms, 1234.5);
    }

    #[test]
    fn test_heading_speed_bounded() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let asteroid = spawn_asteroid(W, H, &mut rng);
            assert!(asteroid.vel.length() < SPAWN_BASE_SPEED);
        }
    }
}
