//! Main menu overlay: title and Play button.

use bevy::prelude::*;

use crate::gameplay::round::{UiAction, UiCommand};
use crate::screens::Screen;
use crate::theme::{palette, widget};
use crate::{GameSet, gameplay_running};

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MainMenuOverlay;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<MainMenuOverlay>();
    app.add_systems(
        Update,
        present_main_menu
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}

fn present_main_menu(
    mut commands: Commands,
    mut ui: MessageReader<UiCommand>,
    overlays: Query<Entity, With<MainMenuOverlay>>,
) {
    let mut visible = None;
    for command in ui.read() {
        match command {
            UiCommand::ShowMainMenu => visible = Some(true),
            UiCommand::HideMainMenu => visible = Some(false),
            _ => {}
        }
    }
    let Some(visible) = visible else {
        return;
    };

    super::despawn_overlay(&mut commands, &overlays);
    if visible {
        spawn_main_menu(&mut commands);
    }
}

fn spawn_main_menu(commands: &mut Commands) {
    commands.spawn((
        widget::ui_root("Main Menu Screen"),
        MainMenuOverlay,
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        GlobalZIndex(1),
        DespawnOnExit(Screen::Gameplay),
        children![(
            widget::panel("Main Menu Panel"),
            children![
                (
                    Text::new("SMURF SHOOTER"),
                    TextFont::from_font_size(palette::FONT_SIZE_TITLE),
                    TextColor(palette::HEADER_TEXT),
                    TextLayout::new_with_justify(Justify::Center),
                ),
                widget::label("Paint every smurf before time runs out"),
                widget::action_button("Play", UiAction::Play),
            ],
        )],
    ));
}
