//! Arena boundary policy
//!
//! The arena is a torus with a twist: leaving through a vertical edge re-enters
//! at the opposite edge with the y coordinate mirrored, and leaving through a
//! horizontal edge mirrors x. A portal with a flip, not a plain wraparound.
//!
//! An entity only wraps once its position exceeds the bounds by more than its
//! own radius, so sprites drift fully off screen before teleporting.

use glam::Vec2;

/// Remap a position that has left the arena by more than `radius`
///
/// The x axis is checked first; the y check then runs on the possibly-mirrored
/// result, so a corner exit wraps both axes in sequence.
pub fn wrap_position(pos: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    let mut p = pos;

    if p.x < -radius {
        p = Vec2::new(width + radius, height - p.y);
    } else if p.x > width + radius {
        p = Vec2::new(-radius, height - p.y);
    }

    if p.y < -radius {
        p = Vec2::new(width - p.x, height + radius);
    } else if p.y > height + radius {
        p = Vec2::new(width - p.x, -radius);
    }

    p
}

/// Whether a position lies inside the un-padded arena rectangle
///
/// Projectiles live and die by this test; they never wrap.
#[inline]
pub fn in_arena(pos: Vec2, width: f32, height: f32) -> bool {
    pos.x >= 0.0 && pos.x <= width && pos.y >= 0.0 && pos.y <= height
}

/// Whether a position lies inside the rectangle padded by `radius` on all sides
///
/// An asteroid still off screen past this margin cannot collide with the player.
#[inline]
pub fn in_arena_padded(pos: Vec2, radius: f32, width: f32, height: f32) -> bool {
    pos.x >= -radius && pos.x <= width + radius && pos.y >= -radius && pos.y <= height + radius
}
