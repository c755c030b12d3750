//! Smurf Shooter: spawn wandering smurfs onto a detected surface and paint
//! them with tomatoes before the round clock or the ammo runs out.

#[cfg(feature = "dev")]
mod dev_tools;
pub mod gameplay;
pub mod menus;
pub mod screens;
#[cfg(test)]
pub(crate) mod testing;
pub mod theme;
pub mod third_party;
mod ui_camera;

use bevy::prelude::*;

/// Pixels per metre. Distances tuned in metres are multiplied by this.
pub const METER: f32 = 64.0;

// === Z-Layers ===

/// Ground support disc, drawn below everything else.
pub const Z_GROUND: f32 = 0.0;
/// Smurf sprites.
pub const Z_SMURF: f32 = 1.0;
/// Tomatoes in flight.
pub const Z_PROJECTILE: f32 = 2.0;

/// Frame-level ordering of gameplay systems in `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Pointer/keyboard reading, surface feed handoff.
    Input,
    /// Round controller: consume notifications, tick timers, emit directives.
    Round,
    /// Collaborators apply the controller's directives.
    Apply,
    /// Character wandering.
    Movement,
    /// Firing, projectile lifetime and impacts.
    Combat,
    /// HUD refresh.
    Ui,
}

/// Run condition: the gameplay screen is active.
pub fn gameplay_running(screen: Option<Res<State<screens::Screen>>>) -> bool {
    screen.is_some_and(|s| *s.get() == screens::Screen::Gameplay)
}

pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Round,
            GameSet::Apply,
            GameSet::Movement,
            GameSet::Combat,
            GameSet::Ui,
        )
            .chain(),
    );

    app.add_plugins((
        third_party::plugin,
        theme::plugin,
        screens::plugin,
        menus::plugin,
        gameplay::plugin,
        ui_camera::plugin,
    ));

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::assertions_on_constants)]
    #[test]
    fn z_layers_are_ordered() {
        assert!(Z_GROUND < Z_SMURF);
        assert!(Z_SMURF < Z_PROJECTILE);
    }

    #[test]
    fn gameplay_not_running_without_screen_state() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        let running = app
            .world_mut()
            .run_system_cached(gameplay_running)
            .unwrap_or(true);
        assert!(!running);
    }
}
