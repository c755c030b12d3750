//! Countdown card shown between rounds ("3", "2", "1", "GO!").

use bevy::prelude::*;

use crate::gameplay::round::UiCommand;
use crate::screens::Screen;
use crate::theme::{palette, widget};
use crate::{GameSet, gameplay_running};

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct CountdownOverlay;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<CountdownOverlay>();
    app.add_systems(
        Update,
        present_countdown
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}

/// Shows the latest card of the frame; a hide after it wins.
fn present_countdown(
    mut commands: Commands,
    mut ui: MessageReader<UiCommand>,
    overlays: Query<Entity, With<CountdownOverlay>>,
) {
    let mut card: Option<Option<&str>> = None;
    for command in ui.read() {
        match command {
            UiCommand::ShowCountdown(text) => card = Some(Some(text.as_str())),
            UiCommand::HideCountdown => card = Some(None),
            _ => {}
        }
    }
    let Some(card) = card else {
        return;
    };

    super::despawn_overlay(&mut commands, &overlays);
    if let Some(text) = card {
        commands.spawn((
            widget::ui_root("Countdown"),
            CountdownOverlay,
            GlobalZIndex(1),
            DespawnOnExit(Screen::Gameplay),
            children![(
                Text::new(text),
                TextFont::from_font_size(palette::FONT_SIZE_COUNTDOWN),
                TextColor(palette::COUNTDOWN_TEXT),
                TextLayout::new_with_justify(Justify::Center),
            )],
        ));
    }
}
