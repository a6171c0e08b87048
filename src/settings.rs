//! Per-instance game configuration
//!
//! Every behavior toggle is explicit construction-time state, never a
//! process-wide flag, so two worlds can run side by side with different
//! behavior and tests stay deterministic.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Behavior configuration passed into `World::new`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // === Flight model ===
    /// Constant-speed mode: no velocity damping, thrust-up becomes an
    /// edge-triggered boost and thrust-down is inert
    pub constant_speed: bool,
    /// Multiplicative velocity damping applied to the player each update
    pub damping: f32,

    // === Population floors ===
    /// Asteroids kept alive at all times
    pub asteroid_population: usize,
    /// Saucers kept alive at all times
    pub saucer_population: usize,

    // === Debug ===
    /// Ask renderers to draw collision-radius markers
    pub debug_markers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            constant_speed: false,
            damping: PLAYER_DAMPING,
            asteroid_population: ASTEROID_POPULATION,
            saucer_population: SAUCER_POPULATION,
            debug_markers: false,
        }
    }
}

impl Config {
    /// Damping factor actually applied per update
    pub fn effective_damping(&self) -> f32 {
        if self.constant_speed { 1.0 } else { self.damping }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_consts() {
        let config = Config::default();
        assert_eq!(config.asteroid_population, ASTEROID_POPULATION);
        assert_eq!(config.saucer_population, SAUCER_POPULATION);
        assert!((config.damping - PLAYER_DAMPING).abs() < f32::EPSILON);
    }

    #[test]
    fn test_constant_speed_disables_damping() {
        let config = Config {
            constant_speed: true,
            ..Default::default()
        };
        assert_eq!(config.effective_damping(), 1.0);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = Config {
            constant_speed: true,
            debug_markers: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert!(back.constant_speed);
        assert!(back.debug_markers);
    }
}
