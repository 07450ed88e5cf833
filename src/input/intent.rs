use bevy::prelude::*;

/// Movement intent for one instant: written by the stick session,
/// consumed by whatever moves the character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveIntent {
    /// World-space direction, unit length or zero.
    pub direction: Vec3,
    /// Intended movement magnitude in [0, 1].
    pub strength: f32,
    /// True iff strength > 0 and direction is non-zero.
    pub moving: bool,
}

impl MoveIntent {
    /// No intent: zero direction, zero strength, not moving.
    pub const IDLE: Self = Self {
        direction: Vec3::ZERO,
        strength: 0.0,
        moving: false,
    };

    /// Build an intent, deriving the `moving` flag from its parts.
    pub fn new(direction: Vec3, strength: f32) -> Self {
        Self {
            direction,
            strength,
            moving: strength > 0.0 && direction != Vec3::ZERO,
        }
    }
}

impl Default for MoveIntent {
    fn default() -> Self {
        Self::IDLE
    }
}
