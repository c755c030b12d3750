//! Loading screen. Nothing is streamed yet, so it hands over to gameplay
//! on the first frame.

use bevy::prelude::*;

use super::Screen;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Loading), spawn_loading_screen)
        .add_systems(
            Update,
            check_loading_complete.run_if(in_state(Screen::Loading)),
        );
}

fn spawn_loading_screen(mut commands: Commands) {
    commands.spawn((
        crate::theme::widget::ui_root("Loading Screen"),
        DespawnOnExit(Screen::Loading),
        children![crate::theme::widget::header("Loading...")],
    ));
}

fn check_loading_complete(mut next_screen: ResMut<NextState<Screen>>) {
    next_screen.set(Screen::Gameplay);
}
