//! Gameplay domain plugins: round flow, surfaces, smurfs, slingshot, tomatoes, HUD.

pub mod config;
pub mod hud;
pub mod projectile;
pub mod round;
pub mod slingshot;
pub mod smurf;
pub mod spawner;
pub mod surface;

use bevy::prelude::*;

pub use config::GameConfig;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        config::plugin,
        surface::plugin,
        round::plugin,
        spawner::plugin,
        smurf::plugin,
        slingshot::plugin,
        projectile::plugin,
        hud::plugin,
    ));
}
