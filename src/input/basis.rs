use bevy::prelude::*;

/// Movement basis on the ground plane: the camera's forward and right
/// axes with the vertical component removed, so stick "up" always means
/// "camera forward along the ground" regardless of camera pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl GroundBasis {
    /// Flatten a reference forward vector onto the XZ plane.
    ///
    /// A camera looking straight down (or up) has no ground-plane forward;
    /// fall back to world forward so the basis is never degenerate. Same
    /// for the right axis.
    pub fn from_forward(reference_forward: Vec3) -> Self {
        let flat = Vec3::new(reference_forward.x, 0.0, reference_forward.z);
        let forward = flat.try_normalize().unwrap_or(Vec3::NEG_Z);
        let right = forward.cross(Vec3::Y).try_normalize().unwrap_or(Vec3::X);
        Self { forward, right }
    }

    /// Project a 2D stick direction into world space. Unit length or zero.
    pub fn world_direction(&self, dir: Vec2) -> Vec3 {
        (self.right * dir.x + self.forward * dir.y).normalize_or_zero()
    }
}

impl Default for GroundBasis {
    fn default() -> Self {
        Self::from_forward(Vec3::NEG_Z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_camera_passes_through() {
        let basis = GroundBasis::from_forward(Vec3::NEG_Z);
        assert!((basis.forward - Vec3::NEG_Z).length() < 1e-6);
        assert!((basis.right - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn pitched_camera_flattens_to_unit_forward() {
        // Camera tilted 45° down, looking along -Z.
        let basis = GroundBasis::from_forward(Vec3::new(0.0, -0.707, -0.707));
        assert!((basis.forward - Vec3::NEG_Z).length() < 1e-6);
        assert!((basis.forward.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn straight_down_camera_falls_back_to_world_forward() {
        let basis = GroundBasis::from_forward(Vec3::NEG_Y);
        assert_eq!(basis.forward, Vec3::NEG_Z);
        assert_eq!(basis.right, Vec3::X);
    }

    #[test]
    fn zero_forward_falls_back_to_world_forward() {
        let basis = GroundBasis::from_forward(Vec3::ZERO);
        assert_eq!(basis.forward, Vec3::NEG_Z);
        assert_eq!(basis.right, Vec3::X);
    }

    #[test]
    fn stick_up_maps_to_camera_forward() {
        let basis = GroundBasis::from_forward(Vec3::new(1.0, -1.0, 0.0));
        let world = basis.world_direction(Vec2::Y);
        assert!((world - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn stick_right_maps_to_camera_right() {
        let basis = GroundBasis::from_forward(Vec3::NEG_Z);
        let world = basis.world_direction(Vec2::X);
        assert!((world - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn world_direction_is_unit_or_zero() {
        let basis = GroundBasis::from_forward(Vec3::new(0.3, -0.8, -0.5));
        assert_eq!(basis.world_direction(Vec2::ZERO), Vec3::ZERO);
        let world = basis.world_direction(Vec2::new(0.7, -0.2));
        assert!((world.length() - 1.0).abs() < 1e-6);
        assert!(world.y.abs() < 1e-6);
    }
}
