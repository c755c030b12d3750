//! Shared helpers for Bevy system tests.

use std::time::Duration;

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::screens::Screen;

/// Fixed frame length used by tests that step time manually.
pub const TEST_FRAME: Duration = Duration::from_millis(100);

/// Minimal app with states and the `Screen` state. No gameplay plugins.
pub fn create_base_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.init_state::<Screen>();
    app
}

/// Transitions to `Screen::Gameplay` and runs the frame that applies it.
pub fn transition_to_gameplay(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<Screen>>()
        .set(Screen::Gameplay);
    app.update();
}

/// Asserts the number of entities matching `F`.
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    let actual = query.iter(app.world()).count();
    assert_eq!(
        actual,
        expected,
        "Expected {expected} entities matching {}, found {actual}",
        std::any::type_name::<F>()
    );
}

/// Sets a timer's elapsed to one nanosecond before its duration so any
/// positive delta finishes it.
pub fn nearly_expire_timer(timer: &mut Timer) {
    let duration = timer.duration();
    timer.set_elapsed(duration.saturating_sub(Duration::from_nanos(1)));
}
