//! Collision detection and resolution
//!
//! Six ordered pairwise passes, run once per update after every entity has
//! moved. Each pass is an O(n*m) distance comparison against a size-derived
//! threshold. Removal while scanning uses swap-remove with an index re-check:
//! the element shifted into a vacated slot is examined on the next step, so
//! multiple hits resolve correctly within a single update.

use super::state::World;
use super::{spawn, wrap};
use crate::consts::*;

/// Run all collision passes in their fixed order
pub fn resolve(world: &mut World) {
    projectiles_vs_asteroids(world);
    hostile_projectiles_vs_player(world);
    friendly_projectiles_vs_saucers(world);
    cull_escaped_projectiles(world);
    player_vs_asteroids(world);
    player_vs_saucers(world);
}

/// Pass 1: any projectile shatters an asteroid; only friendly hits score.
/// The asteroid is replaced immediately, never batched.
fn projectiles_vs_asteroids(world: &mut World) {
    let mut i = 0;
    while i < world.projectiles.len() {
        let mut hit = false;
        let mut j = 0;
        while j < world.asteroids.len() {
            let dist = world.projectiles[i].pos.distance(world.asteroids[j].pos);
            if dist < world.asteroids[j].radius / 2.0 {
                if world.projectiles[i].friendly {
                    world.score += SCORE_ASTEROID;
                }
                world.asteroids.swap_remove(j);
                let replacement = spawn::spawn_asteroid(world.width, world.height, &mut world.rng);
                world.asteroids.push(replacement);
                world.projectiles.swap_remove(i);
                hit = true;
                break;
            }
            j += 1;
        }
        if !hit {
            i += 1;
        }
    }
}

/// Pass 2: saucer fire chips the player's shield
fn hostile_projectiles_vs_player(world: &mut World) {
    let mut i = 0;
    while i < world.projectiles.len() {
        if world.player.dead {
            return;
        }
        let p = &world.projectiles[i];
        if !p.friendly
            && p.pos.distance(world.player.pos) < world.player.radius - PLAYER_HIT_MARGIN
        {
            world.projectiles.swap_remove(i);
            world.player.shield -= 1;
            if world.player.shield <= 0 {
                world.player.dead = true;
            }
            continue;
        }
        i += 1;
    }
}

/// Pass 3: friendly fire chips saucer shields; a kill scores and respawns
fn friendly_projectiles_vs_saucers(world: &mut World) {
    let mut i = 0;
    while i < world.projectiles.len() {
        let mut hit = false;
        if world.projectiles[i].friendly {
            let mut j = 0;
            while j < world.saucers.len() {
                let dist = world.projectiles[i].pos.distance(world.saucers[j].pos);
                if dist < world.saucers[j].radius / 2.0 {
                    world.projectiles.swap_remove(i);
                    world.saucers[j].shield -= 1;
                    if world.saucers[j].shield <= 0 {
                        world.saucers.swap_remove(j);
                        world.score += SCORE_SAUCER;
                        let replacement = spawn::spawn_saucer(
                            world.width,
                            world.height,
                            world.clock_ms,
                            &mut world.rng,
                        );
                        world.saucers.push(replacement);
                    }
                    hit = true;
                    break;
                }
                j += 1;
            }
        }
        if !hit {
            i += 1;
        }
    }
}

/// Pass 4: projectiles die at the un-padded arena edge; they never wrap
fn cull_escaped_projectiles(world: &mut World) {
    let (width, height) = (world.width, world.height);
    world
        .projectiles
        .retain(|p| wrap::in_arena(p.pos, width, height));
}

/// Pass 5: ramming an asteroid is an instant kill, no shield decrement.
/// Asteroids still outside the padded rectangle cannot connect.
fn player_vs_asteroids(world: &mut World) {
    if world.player.dead {
        return;
    }
    for asteroid in &mut world.asteroids {
        if !wrap::in_arena_padded(asteroid.pos, asteroid.radius, world.width, world.height) {
            continue;
        }
        if asteroid.pos.distance(world.player.pos) < asteroid.radius / 2.0 {
            asteroid.crashed = true;
            world.player.dead = true;
            return;
        }
    }
}

/// Pass 6: ramming a saucer grinds both shields down one per update
fn player_vs_saucers(world: &mut World) {
    let mut j = 0;
    while j < world.saucers.len() {
        if world.player.dead {
            return;
        }
        let dist = world.player.pos.distance(world.saucers[j].pos);
        if dist < world.saucers[j].radius / 2.0 {
            world.saucers[j].shield -= 1;
            world.player.shield -= 1;
            if world.saucers[j].shield <= 0 {
                world.saucers.swap_remove(j);
                world.score += SCORE_SAUCER;
                let replacement =
                    spawn::spawn_saucer(world.width, world.height, world.clock_ms, &mut world.rng);
                world.saucers.push(replacement);
                // re-check the swapped-in saucer at this index
                continue;
            } else if world.player.shield <= 0 {
                world.player.dead = true;
            }
        }
        j += 1;
    }
}
