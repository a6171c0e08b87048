//! Input translation
//!
//! Converts raw host key events into control intents. The host calls
//! `key_down`/`key_up` whenever events arrive between frames; the world calls
//! `poll` exactly once per update. Held keys are level state, fire and boost
//! presses are buffered edges, so nothing lands mid-collision-pass.

use serde::{Deserialize, Serialize};

/// Logical control keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    RotateLeft,
    RotateRight,
    ThrustUp,
    ThrustDown,
    Fire,
}

impl Key {
    const COUNT: usize = 5;

    #[inline]
    fn index(self) -> usize {
        match self {
            Key::RotateLeft => 0,
            Key::RotateRight => 1,
            Key::ThrustUp => 2,
            Key::ThrustDown => 3,
            Key::Fire => 4,
        }
    }

    /// Map a host key code to a logical key; unknown codes are ignored
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "KeyA" | "ArrowLeft" => Some(Key::RotateLeft),
            "KeyD" | "ArrowRight" => Some(Key::RotateRight),
            "KeyW" | "ArrowUp" => Some(Key::ThrustUp),
            "KeyS" | "ArrowDown" => Some(Key::ThrustDown),
            "Space" => Some(Key::Fire),
            _ => None,
        }
    }
}

/// Control intents drained from the translator once per update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intents {
    /// Held rotation direction: -1 left, +1 right, 0 idle or both held
    pub rotate: f32,
    /// Thrust keys currently held (level-triggered in the normal flight model)
    pub thrust_up: bool,
    pub thrust_down: bool,
    /// Fire key-down edges since the last poll
    pub fire_presses: u32,
    /// Thrust-up key-down edges since the last poll (constant-speed boost)
    pub boost_presses: u32,
}

/// Key-state table plus edge buffers
#[derive(Debug, Clone, Default)]
pub struct InputTranslator {
    held: [bool; Key::COUNT],
    fire_presses: u32,
    boost_presses: u32,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event
    ///
    /// A key must be released before it produces another edge, so OS
    /// auto-repeat does not multiply fire presses.
    pub fn key_down(&mut self, key: Key) {
        let idx = key.index();
        if self.held[idx] {
            return;
        }
        self.held[idx] = true;
        match key {
            Key::Fire => self.fire_presses += 1,
            Key::ThrustUp => self.boost_presses += 1,
            _ => {}
        }
    }

    /// Record a key-up event
    pub fn key_up(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    /// Whether a key is currently held
    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Drain buffered intents; called once per update
    pub fn poll(&mut self) -> Intents {
        let mut rotate = 0.0;
        if self.held[Key::RotateLeft.index()] {
            rotate -= 1.0;
        }
        if self.held[Key::RotateRight.index()] {
            rotate += 1.0;
        }

        let intents = Intents {
            rotate,
            thrust_up: self.held[Key::ThrustUp.index()],
            thrust_down: self.held[Key::ThrustDown.index()],
            fire_presses: self.fire_presses,
            boost_presses: self.boost_presses,
        };
        self.fire_presses = 0;
        self.boost_presses = 0;
        intents
    }
}
