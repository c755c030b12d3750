//! The round state machine.
//!
//! `RoundController` owns round sequencing, the countdown and
//! round-complete choreography, the round clock, and win/lose evaluation.
//! It never touches the world: every side effect is queued as a
//! [`Directive`] and dispatched by the round plugin to the owning
//! collaborator (spawner, slingshot, UI presenter).

use bevy::prelude::*;

use super::schedule::Schedule;
use super::{Directive, GameOverReason, Phase, UiCommand};
use crate::gameplay::config::GameConfig;

/// Delayed continuations of the round choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    /// Show countdown card `n` (0-based).
    Countdown(usize),
    /// Countdown finished: hide it and let the player shoot.
    BeginPlay,
    /// Round-complete hold finished: start the next round.
    AdvanceRound,
    /// Deferred start from the main menu.
    AutoStart,
}

/// Mutable state of the current game run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct Session {
    /// 1-based; 0 before the first round begins.
    pub round: u32,
    pub time_remaining: f32,
    pub painted: u32,
    pub target: u32,
}

/// The round controller. Inserted when the gameplay screen opens.
#[derive(Resource, Debug)]
pub struct RoundController {
    config: GameConfig,
    phase: Phase,
    session: Session,
    game_over_reason: Option<GameOverReason>,
    surface_seen: bool,
    schedule: Schedule<Cue>,
    directives: Vec<Directive>,
}

impl RoundController {
    /// Opens a session in `MainMenu` and shows the menu.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mut controller = Self {
            config: config.clone(),
            phase: Phase::MainMenu,
            session: Session::default(),
            game_over_reason: None,
            surface_seen: false,
            schedule: Schedule::new(),
            directives: Vec::new(),
        };
        controller.enter_main_menu();
        controller
    }

    // === Getters ===

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn session(&self) -> Session {
        self.session
    }

    #[must_use]
    pub const fn current_round(&self) -> u32 {
        self.session.round
    }

    #[must_use]
    pub const fn total_rounds(&self) -> u32 {
        self.config.total_rounds
    }

    #[must_use]
    pub const fn time_remaining(&self) -> f32 {
        self.session.time_remaining
    }

    #[must_use]
    pub const fn painted(&self) -> u32 {
        self.session.painted
    }

    #[must_use]
    pub const fn target(&self) -> u32 {
        self.session.target
    }

    #[must_use]
    pub const fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    /// Takes every directive queued since the last call.
    pub fn drain_directives(&mut self) -> Vec<Directive> {
        std::mem::take(&mut self.directives)
    }

    // === External signals ===

    /// Play button on the main menu.
    pub fn on_play_pressed(&mut self) {
        if self.phase == Phase::MainMenu {
            self.start_game();
        } else {
            debug!("Play ignored in {:?}", self.phase);
        }
    }

    /// A surface became available. Only the first notification counts; it
    /// starts the game when fast start is on and the menu is still up.
    pub fn on_surface_detected(&mut self) {
        if self.surface_seen {
            return;
        }
        self.surface_seen = true;
        info!("Surface detected");
        if self.config.fast_start && self.phase == Phase::MainMenu {
            self.start_game();
        }
    }

    /// A smurf was painted.
    pub fn on_paint(&mut self) {
        if self.phase != Phase::RoundInProgress {
            debug!("Paint ignored in {:?}", self.phase);
            return;
        }
        self.session.painted = (self.session.painted + 1).min(self.session.target);
        debug!(
            "Smurf painted ({}/{})",
            self.session.painted, self.session.target
        );
        if self.session.painted >= self.session.target {
            self.complete_round();
        }
    }

    /// The slingshot fired its last tomato.
    pub fn on_ammo_exhausted(&mut self) {
        if self.phase == Phase::RoundInProgress && self.session.painted < self.session.target {
            self.game_over(GameOverReason::OutOfAmmo);
        }
    }

    /// Advances the round clock and any pending choreography by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.phase == Phase::RoundInProgress {
            self.session.time_remaining -= dt;
            if self.session.time_remaining <= 0.0 {
                self.game_over(GameOverReason::TimeExpired);
            }
        }

        for cue in self.schedule.tick(dt) {
            self.run_cue(cue);
        }
    }

    /// Play again from round 1. Valid from `Victory` or `GameOver`.
    pub fn restart(&mut self) {
        if !self.phase.is_terminal() {
            debug!("Restart ignored in {:?}", self.phase);
            return;
        }
        info!("Restarting game");
        self.hide_end_screens();
        self.start_game();
    }

    /// Back to the main menu. Valid from `Victory` or `GameOver`.
    pub fn go_to_main_menu(&mut self) {
        if !self.phase.is_terminal() {
            debug!("Main menu ignored in {:?}", self.phase);
            return;
        }
        info!("Returning to main menu");
        self.schedule.cancel_all();
        self.directives.push(Directive::ClearCharacters);
        self.hide_end_screens();
        self.ui(UiCommand::HideHud);
        self.enter_main_menu();
    }

    /// Cancels every pending continuation and disarms the slingshot.
    pub fn shutdown(&mut self) {
        self.schedule.cancel_all();
        self.directives.push(Directive::Arm(false));
        debug!("Round controller shut down");
    }

    // === Transitions ===

    fn enter_main_menu(&mut self) {
        self.phase = Phase::MainMenu;
        self.session = Session::default();
        self.game_over_reason = None;
        self.ui(UiCommand::ShowMainMenu);
        if let Some(delay) = self.config.auto_start_delay {
            self.schedule.after(delay, Cue::AutoStart);
        }
    }

    fn start_game(&mut self) {
        info!("New game");
        self.schedule.cancel_all();
        self.directives.push(Directive::ClearCharacters);
        self.ui(UiCommand::HideMainMenu);
        self.ui(UiCommand::ShowHud);
        self.game_over_reason = None;
        self.session.round = 0;
        self.begin_round(1);
    }

    fn begin_round(&mut self, round: u32) {
        if round > self.config.total_rounds {
            self.victory();
            return;
        }

        let plan = self.config.round_plan(round);
        self.directives.push(Directive::ClearCharacters);
        self.session = Session {
            round,
            time_remaining: plan.duration,
            painted: 0,
            target: plan.target,
        };
        self.directives.push(Directive::Populate { count: plan.target });
        self.directives.push(Directive::InitializeAmmo { round });
        self.directives.push(Directive::Arm(false));
        self.phase = Phase::Countdown;
        info!(
            "Round {round}/{}: paint {} smurfs in {}s",
            self.config.total_rounds, plan.target, plan.duration
        );

        self.schedule_countdown();
    }

    /// Shows the first card now and queues the rest, then `BeginPlay`.
    fn schedule_countdown(&mut self) {
        let mut at = 0.0;
        let holds: Vec<f32> = self.config.countdown_steps.iter().map(|(_, hold)| *hold).collect();
        for (index, hold) in holds.into_iter().enumerate() {
            if index == 0 {
                self.run_cue(Cue::Countdown(0));
            } else {
                self.schedule.after(at, Cue::Countdown(index));
            }
            at += hold;
        }
        self.schedule.after(at, Cue::BeginPlay);
    }

    fn complete_round(&mut self) {
        self.phase = Phase::RoundComplete;
        self.directives.push(Directive::Arm(false));
        let completed = self.session.round;
        let next = (completed < self.config.total_rounds).then_some(completed + 1);
        info!(
            "Round {completed} complete with {:.1}s left",
            self.session.time_remaining
        );
        self.ui(UiCommand::ShowRoundComplete { completed, next });
        self.schedule
            .after(self.config.round_complete_hold, Cue::AdvanceRound);
    }

    fn victory(&mut self) {
        self.schedule.cancel_all();
        self.phase = Phase::Victory;
        self.directives.push(Directive::Arm(false));
        info!("Victory after {} rounds", self.config.total_rounds);
        self.ui(UiCommand::HideHud);
        self.ui(UiCommand::ShowVictory);
    }

    fn game_over(&mut self, reason: GameOverReason) {
        self.schedule.cancel_all();
        self.phase = Phase::GameOver;
        self.session.time_remaining = 0.0;
        self.game_over_reason = Some(reason);
        self.directives.push(Directive::Arm(false));
        info!(
            "Game over ({reason:?}) in round {}, painted {}/{}",
            self.session.round, self.session.painted, self.session.target
        );
        self.ui(UiCommand::HideHud);
        self.ui(UiCommand::ShowGameOver {
            reason,
            round: self.session.round,
        });
    }

    fn run_cue(&mut self, cue: Cue) {
        match cue {
            Cue::Countdown(index) => {
                if self.phase != Phase::Countdown {
                    return;
                }
                if let Some((text, _)) = self.config.countdown_steps.get(index) {
                    let text = text.clone();
                    self.ui(UiCommand::ShowCountdown(text));
                }
            }
            Cue::BeginPlay => {
                if self.phase != Phase::Countdown {
                    return;
                }
                self.ui(UiCommand::HideCountdown);
                self.directives.push(Directive::Arm(true));
                self.phase = Phase::RoundInProgress;
            }
            Cue::AdvanceRound => {
                if self.phase != Phase::RoundComplete {
                    return;
                }
                self.ui(UiCommand::HideRoundComplete);
                self.begin_round(self.session.round + 1);
            }
            Cue::AutoStart => {
                if self.phase == Phase::MainMenu {
                    info!("Auto-starting game");
                    self.start_game();
                }
            }
        }
    }

    fn hide_end_screens(&mut self) {
        self.ui(UiCommand::HideVictory);
        self.ui(UiCommand::HideGameOver);
    }

    fn ui(&mut self, command: UiCommand) {
        self.directives.push(Directive::Ui(command));
    }
}
