use bevy::prelude::*;

pub mod config;
pub mod input;
pub mod plugins;

pub use config::tuning::StickTuning;
pub use input::basis::GroundBasis;
pub use input::intent::MoveIntent;
pub use input::session::{MOUSE_POINTER, NullView, PointerId, StickSession, StickView, SurfaceMapper};
pub use plugins::stick_plugin::{
    CurrentIntent, IntentChanged, StickEnabled, StickPlugin, StickViewState,
};

/// Everything the demo binary needs: the stick systems plus tuning setup.
pub struct TouchstickPlugin;

impl Plugin for TouchstickPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(StickPlugin);
    }
}
