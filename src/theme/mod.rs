//! Shared UI theme: color palette, interaction feedback, and reusable widget constructors.

pub mod interaction;
pub mod palette;
pub mod widget;

use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(palette::BACKGROUND));
    app.register_type::<widget::ButtonAction>();
    app.add_observer(widget::forward_button_clicks);
    app.add_plugins(interaction::plugin);
}
