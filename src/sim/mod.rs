//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure and host-independent:
//! - Advanced only through `World::advance` with a host-supplied time delta
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod wrap;

pub use input::{InputTranslator, Intents, Key};
pub use state::{Asteroid, GamePhase, Player, Projectile, Saucer, Snapshot, World};
pub use wrap::{in_arena, in_arena_padded, wrap_position};
