//! The global 2D camera. It renders the play field and all UI, and lives
//! for the whole app so overlays stay visible on every screen.

use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.register_type::<UiCamera>();
    app.add_systems(Startup, spawn_ui_camera);
}

/// Marker for the global camera. Persists across all states.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct UiCamera;

fn spawn_ui_camera(mut commands: Commands) {
    commands.spawn((Name::new("Main Camera"), UiCamera, Camera2d));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::assert_entity_count;

    #[test]
    fn camera_spawned_on_startup() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(plugin);
        app.update();

        assert_entity_count::<With<UiCamera>>(&mut app, 1);
    }
}
