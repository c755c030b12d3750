//! Between-round banner: "Round d Complete!" and what comes next.

use bevy::prelude::*;

use crate::gameplay::round::UiCommand;
use crate::screens::Screen;
use crate::theme::{palette, widget};
use crate::{GameSet, gameplay_running};

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct RoundCompleteOverlay;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<RoundCompleteOverlay>();
    app.add_systems(
        Update,
        present_round_complete
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}

fn present_round_complete(
    mut commands: Commands,
    mut ui: MessageReader<UiCommand>,
    overlays: Query<Entity, With<RoundCompleteOverlay>>,
) {
    let mut banner = None;
    for command in ui.read() {
        match *command {
            UiCommand::ShowRoundComplete { completed, next } => {
                banner = Some(Some((completed, next)));
            }
            UiCommand::HideRoundComplete => banner = Some(None),
            _ => {}
        }
    }
    let Some(banner) = banner else {
        return;
    };

    super::despawn_overlay(&mut commands, &overlays);
    let Some((completed, next)) = banner else {
        return;
    };

    let mut root = commands.spawn((
        widget::ui_root("Round Complete"),
        RoundCompleteOverlay,
        GlobalZIndex(1),
        DespawnOnExit(Screen::Gameplay),
    ));
    root.with_children(|parent| {
        parent.spawn((
            Text::new(format!("Round {completed} Complete!")),
            TextFont::from_font_size(palette::FONT_SIZE_HEADER),
            TextColor(palette::VICTORY_TEXT),
            TextLayout::new_with_justify(Justify::Center),
        ));
        if let Some(next) = next {
            parent.spawn(widget::label(format!("Starting Round {next}...")));
        }
    });
}
