use bevy::prelude::*;
use touchstick::{MoveIntent, NullView, StickSession, SurfaceMapper};

/// Screen space is already local space for these scenarios.
struct FlatSurface;

impl SurfaceMapper for FlatSurface {
    fn to_local(&self, screen: Vec2) -> Option<Vec2> {
        Some(screen)
    }
}

fn session() -> StickSession {
    // radius 100, deadzone 0.1 throughout
    StickSession::new(100.0, 0.1)
}

const LEVEL_CAM: Vec3 = Vec3::NEG_Z;

#[test]
fn press_drag_release_full_lifecycle() {
    let mut s = session();

    let pressed = s.begin(1, Vec2::new(300.0, 300.0), &FlatSurface, &mut NullView);
    assert_eq!(pressed, Some(MoveIntent::IDLE));

    let dragged = s
        .update(1, Vec2::new(350.0, 300.0), LEVEL_CAM, &FlatSurface, &mut NullView)
        .unwrap();
    assert!((dragged.strength - 0.4 / 0.9).abs() < 1e-5);
    assert!((dragged.direction - Vec3::X).length() < 1e-5);
    assert!(dragged.moving);

    let released = s.end(1, &mut NullView).unwrap();
    assert_eq!(released, MoveIntent::IDLE);
    assert_eq!(s.current(), MoveIntent::IDLE);
}

#[test]
fn deadzone_swallows_small_drags() {
    let mut s = session();
    s.begin(1, Vec2::ZERO, &FlatSurface, &mut NullView);
    let intent = s
        .update(1, Vec2::new(5.0, 0.0), LEVEL_CAM, &FlatSurface, &mut NullView)
        .unwrap();
    assert_eq!(intent.strength, 0.0);
    assert!(!intent.moving);
}

#[test]
fn overdrag_clamps_to_full_strength() {
    let mut s = session();
    s.begin(1, Vec2::ZERO, &FlatSurface, &mut NullView);
    let intent = s
        .update(1, Vec2::new(200.0, 0.0), LEVEL_CAM, &FlatSurface, &mut NullView)
        .unwrap();
    assert!((intent.strength - 1.0).abs() < 1e-5);
    assert!((intent.direction - Vec3::X).length() < 1e-5);
}

#[test]
fn pitched_camera_still_yields_ground_plane_direction() {
    let mut s = session();
    s.begin(1, Vec2::ZERO, &FlatSurface, &mut NullView);
    // Camera tilted 45° down: stick "up" must still mean camera forward
    // projected onto the ground, with no vertical component.
    let cam = Vec3::new(0.0, -0.707, -0.707);
    let intent = s
        .update(1, Vec2::new(0.0, 100.0), cam, &FlatSurface, &mut NullView)
        .unwrap();
    assert!((intent.direction - Vec3::NEG_Z).length() < 1e-5);
    assert!(intent.direction.y.abs() < 1e-6);
    assert!((intent.direction.length() - 1.0).abs() < 1e-6);
}

#[test]
fn rebegin_with_active_id_keeps_original_base() {
    let mut s = session();
    s.begin(1, Vec2::new(100.0, 100.0), &FlatSurface, &mut NullView);
    assert!(s.begin(1, Vec2::new(200.0, 200.0), &FlatSurface, &mut NullView).is_none());

    // Drag 50 from the original base; a rebased session would read zero.
    let intent = s
        .update(1, Vec2::new(150.0, 100.0), LEVEL_CAM, &FlatSurface, &mut NullView)
        .unwrap();
    assert!((intent.strength - 0.4 / 0.9).abs() < 1e-5);
}

#[test]
fn teardown_clears_session_whatever_the_pointer() {
    let mut s = session();
    s.begin(2, Vec2::ZERO, &FlatSurface, &mut NullView);
    s.update(2, Vec2::new(80.0, 0.0), LEVEL_CAM, &FlatSurface, &mut NullView);
    assert!(s.current().moving);

    let intent = s.release_all(&mut NullView).unwrap();
    assert_eq!(intent, MoveIntent::IDLE);
    assert!(!s.is_active());

    // Once idle the teardown is idempotent.
    assert!(s.release_all(&mut NullView).is_none());
    assert_eq!(s.current(), MoveIntent::IDLE);
}

#[test]
fn ghost_pointer_events_are_ignored_end_to_end() {
    let mut s = session();
    s.begin(1, Vec2::ZERO, &FlatSurface, &mut NullView);
    s.update(1, Vec2::new(40.0, 0.0), LEVEL_CAM, &FlatSurface, &mut NullView);
    let before = s.current();

    assert!(s.update(9, Vec2::new(100.0, 0.0), LEVEL_CAM, &FlatSurface, &mut NullView).is_none());
    assert!(s.end(9, &mut NullView).is_none());
    assert_eq!(s.current(), before);

    // The real pointer still works afterwards.
    assert!(s.end(1, &mut NullView).is_some());
}
