//! In-round HUD: round, clock, painted smurfs and tomatoes left.

use bevy::prelude::*;

use crate::gameplay::round::{Phase, RoundController, UiCommand};
use crate::gameplay::slingshot::Slingshot;
use crate::screens::Screen;
use crate::theme::palette;
use crate::{GameSet, gameplay_running};

// === Constants ===

/// Seconds left at which the clock turns red.
const CLOCK_DANGER_SECS: f32 = 10.0;

/// Tomatoes left at which the counter turns red.
const AMMO_DANGER: u32 = 3;

/// Tomatoes left at which the counter turns yellow.
const AMMO_CAUTION: u32 = 5;

const HUD_PADDING: f32 = 16.0;

// === Components ===

/// Root of the HUD strip.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Hud;

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct RoundText;

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ClockText;

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct SmurfCountText;

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct AmmoText;

// === Formatting ===

/// `mm:ss`, rounding down. Negative time reads as `00:00`.
#[must_use]
pub fn format_clock(seconds: f32) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_secs = seconds.max(0.0) as u32;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[must_use]
pub fn clock_color(seconds: f32) -> Color {
    if seconds <= CLOCK_DANGER_SECS {
        palette::HUD_DANGER
    } else {
        palette::HUD_NORMAL
    }
}

#[must_use]
pub const fn ammo_color(ammo: u32) -> Color {
    if ammo <= AMMO_DANGER {
        palette::HUD_DANGER
    } else if ammo <= AMMO_CAUTION {
        palette::HUD_CAUTION
    } else {
        palette::HUD_NORMAL
    }
}

// === Systems ===

fn hud_text(marker: impl Component, text: String, font_size: f32) -> impl Bundle {
    (
        marker,
        Text::new(text),
        TextFont::from_font_size(font_size),
        TextColor(palette::HUD_NORMAL),
    )
}

fn spawn_hud(commands: &mut Commands) {
    commands.spawn((
        Name::new("HUD"),
        Hud,
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            padding: UiRect::all(Val::Px(HUD_PADDING)),
            ..default()
        },
        BackgroundColor(palette::HUD_BACKGROUND),
        Pickable::IGNORE,
        DespawnOnExit(Screen::Gameplay),
        children![
            hud_text(RoundText, String::new(), palette::FONT_SIZE_HUD),
            hud_text(ClockText, format_clock(0.0), palette::FONT_SIZE_TIMER),
            (
                Name::new("HUD Counters"),
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::FlexEnd,
                    ..default()
                },
                children![
                    hud_text(SmurfCountText, String::new(), palette::FONT_SIZE_HUD),
                    hud_text(AmmoText, String::new(), palette::FONT_SIZE_HUD),
                ],
            ),
        ],
    ));
}

/// Shows and hides the HUD on the controller's request.
fn present_hud(
    mut commands: Commands,
    mut ui: MessageReader<UiCommand>,
    huds: Query<Entity, With<Hud>>,
) {
    for command in ui.read() {
        match command {
            UiCommand::ShowHud => {
                if huds.is_empty() {
                    spawn_hud(&mut commands);
                }
            }
            UiCommand::HideHud => {
                for hud in &huds {
                    commands.entity(hud).despawn();
                }
            }
            _ => {}
        }
    }
}

/// Refreshes the readouts while a round is being played.
fn update_hud(
    controller: Option<Res<RoundController>>,
    slingshot: Option<Res<Slingshot>>,
    mut round_text: Query<&mut Text, With<RoundText>>,
    mut clock: Query<(&mut Text, &mut TextColor), (With<ClockText>, Without<RoundText>)>,
    mut smurfs: Query<
        &mut Text,
        (With<SmurfCountText>, Without<RoundText>, Without<ClockText>),
    >,
    mut ammo: Query<
        (&mut Text, &mut TextColor),
        (
            With<AmmoText>,
            Without<RoundText>,
            Without<ClockText>,
            Without<SmurfCountText>,
        ),
    >,
) {
    let Some(controller) = controller.filter(|c| c.phase() == Phase::RoundInProgress) else {
        return;
    };
    for mut text in &mut round_text {
        **text = format!(
            "Round {}/{}",
            controller.current_round(),
            controller.total_rounds()
        );
    }
    let remaining = controller.time_remaining();
    for (mut text, mut color) in &mut clock {
        **text = format_clock(remaining);
        color.0 = clock_color(remaining);
    }
    for mut text in &mut smurfs {
        **text = format!("Smurfs: {}/{}", controller.painted(), controller.target());
    }
    if let Some(slingshot) = slingshot {
        for (mut text, mut color) in &mut ammo {
            **text = format!("Tomatoes: {}/{}", slingshot.ammo(), slingshot.max_ammo());
            color.0 = ammo_color(slingshot.ammo());
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Hud>()
        .register_type::<RoundText>()
        .register_type::<ClockText>()
        .register_type::<SmurfCountText>()
        .register_type::<AmmoText>();

    app.add_systems(
        Update,
        (present_hud, update_hud)
            .chain()
            .in_set(GameSet::Ui)
            .run_if(gameplay_running),
    );
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::gameplay::GameConfig;
    use crate::gameplay::config;
    use crate::testing::assert_entity_count;
    use pretty_assertions::assert_eq;

    fn create_hud_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_message::<UiCommand>();
        app.add_systems(Update, (present_hud, update_hud).chain());
        app
    }

    /// Controller sitting in round 1 with the clock running.
    fn running_controller() -> RoundController {
        let mut controller = RoundController::new(&GameConfig {
            fast_start: false,
            ..default()
        });
        controller.on_play_pressed();
        for _ in 0..28 {
            controller.tick(0.125);
        }
        controller.drain_directives();
        controller
    }

    fn text_of<C: Component>(app: &mut App) -> String {
        let mut query = app.world_mut().query_filtered::<&Text, With<C>>();
        query.single(app.world()).unwrap().0.clone()
    }

    #[test]
    fn show_and_hide_hud() {
        let mut app = create_hud_test_app();

        app.world_mut().write_message(UiCommand::ShowHud);
        app.update();
        assert_entity_count::<With<Hud>>(&mut app, 1);

        app.world_mut().write_message(UiCommand::ShowHud);
        app.update();
        assert_entity_count::<With<Hud>>(&mut app, 1);

        app.world_mut().write_message(UiCommand::HideHud);
        app.update();
        assert_entity_count::<With<Hud>>(&mut app, 0);
        assert_entity_count::<With<ClockText>>(&mut app, 0);
    }

    #[test]
    fn hud_shows_round_state() {
        let mut app = create_hud_test_app();
        let controller = running_controller();
        assert_eq!(controller.phase(), Phase::RoundInProgress);
        app.insert_resource(controller);

        let mut slingshot = Slingshot::default();
        slingshot.initialize_ammo(1, &config::AMMO_PER_ROUND);
        app.insert_resource(slingshot);

        app.world_mut().write_message(UiCommand::ShowHud);
        app.update();
        app.update();

        assert_eq!(text_of::<RoundText>(&mut app), "Round 1/3");
        assert_eq!(text_of::<ClockText>(&mut app), "00:40");
        assert_eq!(text_of::<SmurfCountText>(&mut app), "Smurfs: 0/5");
        assert_eq!(text_of::<AmmoText>(&mut app), "Tomatoes: 15/15");
    }

    #[test]
    fn hud_not_refreshed_outside_round() {
        let mut app = create_hud_test_app();
        app.insert_resource(RoundController::new(&GameConfig {
            fast_start: false,
            ..default()
        }));

        app.world_mut().write_message(UiCommand::ShowHud);
        app.update();
        app.update();

        assert_eq!(text_of::<RoundText>(&mut app), "");
    }
}
