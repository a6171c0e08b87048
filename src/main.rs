//! Astro Flip entry point
//!
//! Headless native driver: steps the simulation at a fixed 50 ms cadence with
//! a small autopilot on the stick, logging progress and dumping a final JSON
//! snapshot. Real hosts replace this loop with their own event source and
//! renderer; the sim only ever sees key events and elapsed time.

use std::time::{SystemTime, UNIX_EPOCH};

use astro_flip::consts::TIME_SCALE_MS;
use astro_flip::sim::{GamePhase, Key, World};
use astro_flip::Config;

const ARENA_W: f32 = 500.0;
const ARENA_H: f32 = 500.0;
const MAX_FRAMES: u32 = 20_000;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("failed to load config from {path}: {err}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("starting run with seed {seed}");

    let mut world = World::new(ARENA_W, ARENA_H, seed, config);

    // First fire press starts the game
    world.key_down(Key::Fire);
    world.key_up(Key::Fire);

    let mut frames = 0u32;
    while world.phase != GamePhase::GameOver && frames < MAX_FRAMES {
        autopilot(&mut world, frames);
        world.advance(TIME_SCALE_MS);
        frames += 1;

        if frames % 200 == 0 {
            log::info!(
                "tick {frames}: score {} shield {} projectiles {}",
                world.score,
                world.player.shield,
                world.projectiles.len()
            );
        }
    }

    log::info!("run ended after {frames} frames, final score {}", world.score);
    match serde_json::to_string_pretty(&world.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}

fn load_config(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Steer toward the nearest on-screen asteroid and fire in bursts
fn autopilot(world: &mut World, frame: u32) {
    let player_pos = world.player.pos;
    let heading = world.player.vel;

    let nearest = world
        .asteroids
        .iter()
        .min_by(|a, b| {
            a.pos
                .distance(player_pos)
                .partial_cmp(&b.pos.distance(player_pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|a| a.pos);

    if let Some(target) = nearest {
        // Positive perp-dot means the target sits counter-clockwise of the
        // heading, which is what RotateRight turns toward here
        let steer = heading.perp_dot(target - player_pos);
        if steer > 0.0 {
            world.key_down(Key::RotateRight);
            world.key_up(Key::RotateLeft);
        } else {
            world.key_down(Key::RotateLeft);
            world.key_up(Key::RotateRight);
        }
    }

    if frame % 8 == 0 {
        world.key_down(Key::Fire);
        world.key_up(Key::Fire);
    }
}
