//! Victory and game-over overlays with bordered panel and clickable buttons.

use bevy::prelude::*;

use crate::gameplay::round::{GameOverReason, UiAction, UiCommand};
use crate::screens::Screen;
use crate::theme::{palette, widget};
use crate::{GameSet, gameplay_running};

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct VictoryOverlay;

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct GameOverOverlay;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<VictoryOverlay>()
        .register_type::<GameOverOverlay>();
    app.add_systems(
        Update,
        present_endgame
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}

fn present_endgame(
    mut commands: Commands,
    mut ui: MessageReader<UiCommand>,
    victories: Query<Entity, With<VictoryOverlay>>,
    game_overs: Query<Entity, With<GameOverOverlay>>,
) {
    let mut victory = None;
    let mut game_over = None;
    for command in ui.read() {
        match *command {
            UiCommand::ShowVictory => victory = Some(true),
            UiCommand::HideVictory => victory = Some(false),
            UiCommand::ShowGameOver { reason, round } => game_over = Some(Some((reason, round))),
            UiCommand::HideGameOver => game_over = Some(None),
            _ => {}
        }
    }

    if let Some(visible) = victory {
        super::despawn_overlay(&mut commands, &victories);
        if visible {
            spawn_victory_screen(&mut commands);
        }
    }
    if let Some(shown) = game_over {
        super::despawn_overlay(&mut commands, &game_overs);
        if let Some((reason, round)) = shown {
            spawn_game_over_screen(&mut commands, reason, round);
        }
    }
}

fn spawn_victory_screen(commands: &mut Commands) {
    let overlay = spawn_endgame_overlay(
        commands,
        "VICTORY!",
        palette::VICTORY_TEXT,
        "Every smurf painted red!".to_string(),
        "Play Again",
    );
    commands.entity(overlay).insert(VictoryOverlay);
}

fn spawn_game_over_screen(commands: &mut Commands, reason: GameOverReason, round: u32) {
    let overlay = spawn_endgame_overlay(
        commands,
        "GAME OVER",
        palette::GAME_OVER_TEXT,
        format!("{}\nYou reached Round {round}", reason.message()),
        "Try Again",
    );
    commands.entity(overlay).insert(GameOverOverlay);
}

/// Shared overlay spawning for both end screens.
fn spawn_endgame_overlay(
    commands: &mut Commands,
    title: &'static str,
    title_color: Color,
    body: String,
    restart_label: &'static str,
) -> Entity {
    commands
        .spawn((
            widget::ui_root("Endgame Screen"),
            BackgroundColor(palette::OVERLAY_BACKGROUND),
            GlobalZIndex(2),
            DespawnOnExit(Screen::Gameplay),
            children![(
                widget::panel("Endgame Panel"),
                children![
                    (
                        Text::new(title),
                        TextFont::from_font_size(palette::FONT_SIZE_HEADER),
                        TextColor(title_color),
                        TextLayout::new_with_justify(Justify::Center),
                    ),
                    widget::label(body),
                    widget::action_button(restart_label, UiAction::Restart),
                    widget::action_button("Main Menu", UiAction::MainMenu),
                ],
            )],
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menus::test_support::{create_presenter_test_app, present, texts};
    use crate::testing::assert_entity_count;
    use pretty_assertions::assert_eq;

    fn button_actions(app: &mut App) -> Vec<UiAction> {
        let mut query = app.world_mut().query::<&widget::ButtonAction>();
        let mut actions: Vec<UiAction> =
            query.iter(app.world()).map(|action| action.0).collect();
        actions.sort_by_key(|action| *action as u8);
        actions
    }

    #[test]
    fn victory_screen_spawns_panel_and_buttons() {
        let mut app = create_presenter_test_app(plugin);

        present(&mut app, UiCommand::ShowVictory);

        assert_entity_count::<With<VictoryOverlay>>(&mut app, 1);
        assert_eq!(
            button_actions(&mut app),
            vec![UiAction::Restart, UiAction::MainMenu]
        );
        let texts = texts(&mut app);
        assert!(texts.contains(&"VICTORY!".to_string()));
        assert!(texts.contains(&"Play Again".to_string()));
        assert!(texts.contains(&"Main Menu".to_string()));
    }

    #[test]
    fn game_over_screen_shows_reason_and_round() {
        let mut app = create_presenter_test_app(plugin);

        present(
            &mut app,
            UiCommand::ShowGameOver {
                reason: GameOverReason::OutOfAmmo,
                round: 2,
            },
        );

        assert_entity_count::<With<GameOverOverlay>>(&mut app, 1);
        let texts = texts(&mut app);
        assert!(texts.contains(&"GAME OVER".to_string()));
        assert!(texts.contains(&"Out of ammo!\nYou reached Round 2".to_string()));
        assert!(texts.contains(&"Try Again".to_string()));
    }

    #[test]
    fn hide_commands_remove_each_screen() {
        let mut app = create_presenter_test_app(plugin);
        present(&mut app, UiCommand::ShowVictory);
        present(
            &mut app,
            UiCommand::ShowGameOver {
                reason: GameOverReason::TimeExpired,
                round: 1,
            },
        );

        present(&mut app, UiCommand::HideVictory);
        assert_entity_count::<With<VictoryOverlay>>(&mut app, 0);
        assert_entity_count::<With<GameOverOverlay>>(&mut app, 1);

        present(&mut app, UiCommand::HideGameOver);
        assert_entity_count::<With<GameOverOverlay>>(&mut app, 0);
        assert_entity_count::<With<Button>>(&mut app, 0);
    }
}
