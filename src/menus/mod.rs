//! Overlays the round controller shows and hides on top of the play field.
//!
//! Each overlay owns a marker component. A `Show*` command spawns a fresh
//! overlay (replacing any stale one), the matching `Hide*` despawns it.

mod countdown;
mod endgame;
mod main_menu;
mod round_complete;

use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_plugins((
        main_menu::plugin,
        countdown::plugin,
        round_complete::plugin,
        endgame::plugin,
    ));
}

/// Despawns every overlay root tagged with `M`.
fn despawn_overlay<M: Component>(commands: &mut Commands, overlays: &Query<Entity, With<M>>) {
    for overlay in overlays {
        commands.entity(overlay).despawn();
    }
}
