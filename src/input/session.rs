use bevy::prelude::*;

use super::basis::GroundBasis;
use super::intent::MoveIntent;
use super::shaping;

/// Platform pointer identifier. Touch ids come straight from the touch
/// layer; the mouse borrows a reserved id so both flow through one session.
pub type PointerId = u64;

/// Reserved pointer id for mouse input.
pub const MOUSE_POINTER: PointerId = u64::MAX;

/// Maps a screen-space position into the stick's local (Y-up) canvas space.
/// Returns `None` when no valid projection context exists; the session
/// treats that as a no-op, never an error.
pub trait SurfaceMapper {
    fn to_local(&self, screen: Vec2) -> Option<Vec2>;
}

/// Cosmetic sink for stick visuals. Purely outbound: the session calls it
/// once per begin/update/end and never depends on what it does.
pub trait StickView {
    fn show(&mut self, base: Vec2);
    fn update_knob(&mut self, base: Vec2, offset: Vec2);
    fn hide(&mut self);
}

/// View that does nothing. A stick with no visuals is a valid setup.
pub struct NullView;

impl StickView for NullView {
    fn show(&mut self, _base: Vec2) {}
    fn update_knob(&mut self, _base: Vec2, _offset: Vec2) {}
    fn hide(&mut self) {}
}

/// Tracks one pointer from press to release and derives the current
/// [`MoveIntent`] from its drag. Single-threaded by construction: all
/// operations run on the thread that delivers pointer events.
///
/// Each operation returns `Some(intent)` when a new value was published
/// and `None` when the event was ignored.
pub struct StickSession {
    radius: f32,
    deadzone: f32,
    active: Option<PointerId>,
    base: Vec2,
    current: MoveIntent,
}

impl StickSession {
    /// `radius` must be positive; `deadzone` is clamped to [0, 1].
    pub fn new(radius: f32, deadzone: f32) -> Self {
        Self {
            radius,
            deadzone: deadzone.clamp(0.0, 1.0),
            active: None,
            base: Vec2::ZERO,
            current: MoveIntent::IDLE,
        }
    }

    /// Last published intent (pull accessor).
    pub fn current(&self) -> MoveIntent {
        self.current
    }

    /// Whether a pointer is currently being tracked.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Apply new tuning values. Takes effect on the next update.
    pub fn retune(&mut self, radius: f32, deadzone: f32) {
        self.radius = radius;
        self.deadzone = deadzone.clamp(0.0, 1.0);
    }

    /// Start tracking a pointer. Ignored while another session is active
    /// (first pointer wins) or when the screen position cannot be mapped.
    /// Publishes a zero-strength intent so subscribers see the drag start.
    pub fn begin(
        &mut self,
        pointer: PointerId,
        screen: Vec2,
        mapper: &dyn SurfaceMapper,
        view: &mut dyn StickView,
    ) -> Option<MoveIntent> {
        if self.active.is_some() {
            return None;
        }
        let base = mapper.to_local(screen)?;
        self.active = Some(pointer);
        self.base = base;
        view.show(base);
        Some(self.publish(MoveIntent::IDLE))
    }

    /// Recompute the intent from the pointer's current position. Ignored
    /// for non-matching pointers; on mapping failure the last intent stands.
    pub fn update(
        &mut self,
        pointer: PointerId,
        screen: Vec2,
        camera_forward: Vec3,
        mapper: &dyn SurfaceMapper,
        view: &mut dyn StickView,
    ) -> Option<MoveIntent> {
        if self.active != Some(pointer) {
            return None;
        }
        let position = mapper.to_local(screen)?;

        let clamped = shaping::clamp_to_radius(position - self.base, self.radius);
        let normalized = clamped / self.radius;
        let strength = shaping::shaped_strength(normalized.length(), self.deadzone);
        let dir2 = shaping::direction2(normalized);
        let direction = GroundBasis::from_forward(camera_forward).world_direction(dir2);

        view.update_knob(self.base, clamped);
        Some(self.publish(MoveIntent::new(direction, strength)))
    }

    /// Stop tracking on release/exit. Ignored for non-matching pointers
    /// and when already idle.
    pub fn end(&mut self, pointer: PointerId, view: &mut dyn StickView) -> Option<MoveIntent> {
        if self.active != Some(pointer) {
            return None;
        }
        Some(self.reset(view))
    }

    /// Unconditional end for disable/teardown: clears any active session
    /// regardless of pointer id. Idempotent once idle.
    pub fn release_all(&mut self, view: &mut dyn StickView) -> Option<MoveIntent> {
        if self.active.is_none() {
            return None;
        }
        Some(self.reset(view))
    }

    fn reset(&mut self, view: &mut dyn StickView) -> MoveIntent {
        self.active = None;
        view.hide();
        self.publish(MoveIntent::IDLE)
    }

    fn publish(&mut self, intent: MoveIntent) -> MoveIntent {
        self.current = intent;
        intent
    }
}
