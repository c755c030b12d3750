//! Crate-level integration tests driving the full game plugin headlessly.

mod round_flow;
mod screens;

use std::time::Duration;

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

/// Fixed frame length for manual time stepping.
pub const FRAME: Duration = Duration::from_millis(100);

/// Full game on top of `MinimalPlugins`, no window or renderer.
pub fn create_game_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins((StatesPlugin, InputPlugin, TransformPlugin));
    app.init_resource::<Assets<Mesh>>();
    app.init_resource::<Assets<ColorMaterial>>();
    app.add_plugins(smurf_shooter::plugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.finish();
    app
}

/// Runs updates until `seconds` of manual time have passed.
pub fn run_for(app: &mut App, seconds: f32) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let frames = (seconds / FRAME.as_secs_f32()).ceil() as usize;
    for _ in 0..frames {
        app.update();
    }
}

/// Every text string currently in the world.
pub fn texts(app: &mut App) -> Vec<String> {
    let mut query = app.world_mut().query::<&Text>();
    query.iter(app.world()).map(|text| text.0.clone()).collect()
}

pub fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    query.iter(app.world()).count()
}
