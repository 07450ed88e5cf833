use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::config::tuning::StickTuning;
use crate::input::intent::MoveIntent;
use crate::input::session::{MOUSE_POINTER, StickSession, StickView, SurfaceMapper};

// ── Resources & messages ────────────────────────────────────────────

/// Latest published intent, for pull-based consumers.
#[derive(Resource, Default)]
pub struct CurrentIntent(pub MoveIntent);

/// Written on every intent change, in the same system invocation that
/// consumed the pointer event. No coalescing: readers see every value.
#[derive(Message, Debug, Clone)]
pub struct IntentChanged(pub MoveIntent);

/// Gate for the whole stick. Flipping to false force-releases any
/// active session the same frame, so no session survives deactivation.
#[derive(Resource)]
pub struct StickEnabled(pub bool);

impl Default for StickEnabled {
    fn default() -> Self {
        Self(true)
    }
}

/// Cosmetic mirror of the session for whatever widget the host renders.
/// `base` is the press anchor in local (Y-up) window coordinates; the
/// knob offset is already clamped to the stick radius.
#[derive(Resource, Default)]
pub struct StickViewState {
    pub base: Option<Vec2>,
    pub knob_offset: Vec2,
}

impl StickView for StickViewState {
    fn show(&mut self, base: Vec2) {
        self.base = Some(base);
        self.knob_offset = Vec2::ZERO;
    }

    fn update_knob(&mut self, base: Vec2, offset: Vec2) {
        self.base = Some(base);
        self.knob_offset = offset;
    }

    fn hide(&mut self) {
        self.base = None;
        self.knob_offset = Vec2::ZERO;
    }
}

/// The pointer session, owned by the input systems.
#[derive(Resource)]
pub struct StickSessionRes(pub StickSession);

impl Default for StickSessionRes {
    fn default() -> Self {
        let tuning = StickTuning::default();
        Self(StickSession::new(tuning.radius, tuning.deadzone))
    }
}

/// Maps window cursor/touch coordinates (origin top-left, Y down) to the
/// stick's Y-up local canvas. Fails when there is no primary window.
struct WindowSurface {
    height: Option<f32>,
}

impl SurfaceMapper for WindowSurface {
    fn to_local(&self, screen: Vec2) -> Option<Vec2> {
        let height = self.height?;
        Some(Vec2::new(screen.x, height - screen.y))
    }
}

// ── Plugin & systems ────────────────────────────────────────────────

pub struct StickPlugin;

impl Plugin for StickPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<IntentChanged>();
        app.init_resource::<StickTuning>();
        app.init_resource::<CurrentIntent>();
        app.init_resource::<StickEnabled>();
        app.init_resource::<StickViewState>();
        app.init_resource::<StickSessionRes>();

        app.add_systems(
            Update,
            (pointer_input.run_if(stick_enabled), force_release_when_disabled).chain(),
        );
        app.add_systems(Update, tuning_reload_input);
    }
}

fn stick_enabled(enabled: Res<StickEnabled>) -> bool {
    enabled.0
}

/// Drives the session from Bevy's pointer resources. Touches keep their
/// platform ids; the mouse borrows the reserved id so both share one
/// session and the first pointer wins.
fn pointer_input(
    tuning: Res<StickTuning>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<&GlobalTransform, With<Camera3d>>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut session: ResMut<StickSessionRes>,
    mut current: ResMut<CurrentIntent>,
    mut view: ResMut<StickViewState>,
    mut changed: MessageWriter<IntentChanged>,
) {
    let session = &mut session.0;
    session.retune(tuning.radius, tuning.deadzone);

    let surface = WindowSurface {
        height: windows.single().ok().map(|w| w.height()),
    };
    let forward = cameras
        .single()
        .map(|tf| *tf.forward())
        .unwrap_or(Vec3::NEG_Z);
    let cursor = windows.single().ok().and_then(|w| w.cursor_position());

    // Presses
    for touch in touches.iter_just_pressed() {
        let published = session.begin(touch.id(), touch.position(), &surface, &mut *view);
        forward_published(published, &mut current, &mut changed);
    }
    if mouse.just_pressed(MouseButton::Left) {
        if let Some(pos) = cursor {
            let published = session.begin(MOUSE_POINTER, pos, &surface, &mut *view);
            forward_published(published, &mut current, &mut changed);
        }
    }

    // Drags
    for touch in touches.iter() {
        let published = session.update(touch.id(), touch.position(), forward, &surface, &mut *view);
        forward_published(published, &mut current, &mut changed);
    }
    if mouse.pressed(MouseButton::Left) {
        if let Some(pos) = cursor {
            let published = session.update(MOUSE_POINTER, pos, forward, &surface, &mut *view);
            forward_published(published, &mut current, &mut changed);
        }
    }

    // Releases
    for touch in touches.iter_just_released() {
        let published = session.end(touch.id(), &mut *view);
        forward_published(published, &mut current, &mut changed);
    }
    for touch in touches.iter_just_canceled() {
        let published = session.end(touch.id(), &mut *view);
        forward_published(published, &mut current, &mut changed);
    }
    if mouse.just_released(MouseButton::Left) {
        let published = session.end(MOUSE_POINTER, &mut *view);
        forward_published(published, &mut current, &mut changed);
    }
}

/// Teardown path: a disabled stick must not keep a session alive.
fn force_release_when_disabled(
    enabled: Res<StickEnabled>,
    mut session: ResMut<StickSessionRes>,
    mut current: ResMut<CurrentIntent>,
    mut view: ResMut<StickViewState>,
    mut changed: MessageWriter<IntentChanged>,
) {
    if enabled.0 {
        return;
    }
    let published = session.0.release_all(&mut *view);
    forward_published(published, &mut current, &mut changed);
}

fn forward_published(
    published: Option<MoveIntent>,
    current: &mut CurrentIntent,
    changed: &mut MessageWriter<IntentChanged>,
) {
    if let Some(intent) = published {
        current.0 = intent;
        changed.write(IntentChanged(intent));
    }
}

fn tuning_reload_input(keyboard: Res<ButtonInput<KeyCode>>, mut tuning: ResMut<StickTuning>) {
    if keyboard.just_pressed(KeyCode::F5) {
        tuning.reload();
    }
}
