use bevy::prelude::*;

/// Clamp a drag delta so it never reaches past the stick radius.
pub fn clamp_to_radius(delta: Vec2, radius: f32) -> Vec2 {
    delta.clamp_length_max(radius)
}

/// Normalize a clamped delta against the radius: magnitude lands in [0, 1].
/// Radius must be positive (configuration contract, not re-checked here).
pub fn normalize_delta(delta: Vec2, radius: f32) -> Vec2 {
    clamp_to_radius(delta, radius) / radius
}

/// Remap raw magnitude through the deadzone: zero up to the threshold,
/// then linear up to 1.0 at full extension.
///
/// At `deadzone == 1.0` the first branch always wins (raw is capped at 1),
/// so the stick saturates to always-zero output.
pub fn shaped_strength(raw: f32, deadzone: f32) -> f32 {
    if raw <= deadzone {
        0.0
    } else {
        ((raw - deadzone) / (1.0 - deadzone)).clamp(0.0, 1.0)
    }
}

/// Unit direction of a normalized delta, or zero when there is no
/// meaningful displacement.
pub fn direction2(normalized: Vec2) -> Vec2 {
    let raw = normalized.length();
    if raw <= f32::EPSILON {
        Vec2::ZERO
    } else {
        normalized / raw
    }
}
