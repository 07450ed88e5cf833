use bevy::prelude::*;

use touchstick::{IntentChanged, StickEnabled, StickTuning, TouchstickPlugin};

fn main() {
    let tuning = StickTuning::load_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Touchstick".into(),
                resolution: (900u32, 1200u32).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(tuning)
        .add_plugins(TouchstickPlugin)
        .add_systems(Startup, setup_scene)
        .add_systems(Update, (log_intent_changes, toggle_stick_input))
        .run();
}

/// A pitched-down camera so the demo exercises the ground-plane projection.
fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 8.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn log_intent_changes(mut changed: MessageReader<IntentChanged>) {
    for IntentChanged(intent) in changed.read() {
        info!(
            "[Intent] dir=({:.2}, {:.2}, {:.2})  strength={:.2}  moving={}",
            intent.direction.x, intent.direction.y, intent.direction.z, intent.strength, intent.moving
        );
    }
}

/// Escape toggles the stick, which force-releases any active session.
fn toggle_stick_input(keyboard: Res<ButtonInput<KeyCode>>, mut enabled: ResMut<StickEnabled>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        enabled.0 = !enabled.0;
        info!("Stick {}", if enabled.0 { "enabled" } else { "disabled" });
    }
}
