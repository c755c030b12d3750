//! Round sequencing: the controller, its message vocabulary, and the
//! systems that feed it notifications and fan its directives out.

mod controller;
pub mod schedule;

use bevy::prelude::*;

pub use controller::{RoundController, Session};

use crate::gameplay::slingshot::{AmmoExhausted, SlingshotCommand};
use crate::gameplay::smurf::SmurfPainted;
use crate::gameplay::spawner::SpawnerCommand;
use crate::gameplay::surface::SurfaceDetected;
use crate::{GameSet, gameplay_running};

// === Types ===

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum Phase {
    #[default]
    MainMenu,
    Countdown,
    RoundInProgress,
    RoundComplete,
    Victory,
    GameOver,
}

impl Phase {
    /// `Victory` and `GameOver` wait for an explicit reset.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::GameOver)
    }
}

/// Why a run ended early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum GameOverReason {
    OutOfAmmo,
    TimeExpired,
}

impl GameOverReason {
    /// Player-facing reason line.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::OutOfAmmo => "Out of ammo!",
            Self::TimeExpired => "Time's up!",
        }
    }
}

/// What the UI presenter should show or hide.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    ShowMainMenu,
    HideMainMenu,
    ShowHud,
    HideHud,
    ShowCountdown(String),
    HideCountdown,
    ShowRoundComplete {
        completed: u32,
        /// `None` after the final round.
        next: Option<u32>,
    },
    HideRoundComplete,
    ShowVictory,
    HideVictory,
    ShowGameOver {
        reason: GameOverReason,
        round: u32,
    },
    HideGameOver,
}

/// Side effects requested by the controller, in the order they must apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Despawn every tracked smurf and the ground support.
    ClearCharacters,
    /// Spawn a fresh batch of smurfs around the spawn anchor.
    Populate { count: u32 },
    /// Reload the slingshot for `round`.
    InitializeAmmo { round: u32 },
    /// Allow or block firing.
    Arm(bool),
    Ui(UiCommand),
}

/// Button presses forwarded from the UI presenter.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum UiAction {
    /// Main menu Play.
    Play,
    /// Play again from a victory or game-over screen.
    Restart,
    /// Back to the main menu from a victory or game-over screen.
    MainMenu,
}

// === Systems ===

/// Feeds this frame's notifications to the controller, then advances its
/// clock. Notifications are consumed in a fixed order: button presses,
/// surfaces, paints, ammo exhaustion.
fn drive_round(
    time: Res<Time>,
    controller: Option<ResMut<RoundController>>,
    mut actions: MessageReader<UiAction>,
    mut surfaces: MessageReader<SurfaceDetected>,
    mut paints: MessageReader<SmurfPainted>,
    mut exhausted: MessageReader<AmmoExhausted>,
) {
    let Some(mut controller) = controller else {
        warn!("No round controller; dropping this frame's round input");
        actions.clear();
        surfaces.clear();
        paints.clear();
        exhausted.clear();
        return;
    };

    for action in actions.read() {
        match action {
            UiAction::Play => controller.on_play_pressed(),
            UiAction::Restart => controller.restart(),
            UiAction::MainMenu => controller.go_to_main_menu(),
        }
    }
    // Only the first surface report matters; the controller drops the rest.
    for _ in surfaces.read() {
        controller.on_surface_detected();
    }
    for _ in paints.read() {
        controller.on_paint();
    }
    for _ in exhausted.read() {
        controller.on_ammo_exhausted();
    }

    controller.tick(time.delta_secs());
}

/// Routes queued directives to the collaborator that owns each concern.
fn dispatch_directives(
    controller: Option<ResMut<RoundController>>,
    mut spawner: MessageWriter<SpawnerCommand>,
    mut slingshot: MessageWriter<SlingshotCommand>,
    mut ui: MessageWriter<UiCommand>,
) {
    let Some(mut controller) = controller else {
        return;
    };
    for directive in controller.drain_directives() {
        match directive {
            Directive::ClearCharacters => {
                spawner.write(SpawnerCommand::Clear);
            }
            Directive::Populate { count } => {
                spawner.write(SpawnerCommand::Populate { count });
            }
            Directive::InitializeAmmo { round } => {
                slingshot.write(SlingshotCommand::InitializeAmmo { round });
            }
            Directive::Arm(armed) => {
                slingshot.write(SlingshotCommand::Arm(armed));
            }
            Directive::Ui(command) => {
                ui.write(command);
            }
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Phase>()
        .register_type::<GameOverReason>()
        .register_type::<UiAction>()
        .add_message::<UiAction>()
        .add_message::<UiCommand>();

    app.add_systems(
        Update,
        (drive_round, dispatch_directives)
            .chain()
            .in_set(GameSet::Round)
            .run_if(gameplay_running),
    );
}
