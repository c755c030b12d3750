//! Full round flow through the real plugin stack: menu, countdown, painting,
//! round advance, and running out of tomatoes.

use bevy::prelude::*;
use pretty_assertions::assert_eq;
use smurf_shooter::gameplay::GameConfig;
use smurf_shooter::gameplay::round::{GameOverReason, Phase, RoundController, UiAction};
use smurf_shooter::gameplay::slingshot::{FIRE_COOLDOWN, FireRequest, SHOOT_POINT, Slingshot};
use smurf_shooter::gameplay::smurf::{Marked, Smurf, SmurfHit};

use crate::{count, create_game_app, run_for, texts};

/// Countdown length plus a couple of frames of slack.
const COUNTDOWN: f32 = 3.7;

/// Booted app waiting on the main menu; no automatic start.
fn app_on_main_menu() -> App {
    let mut app = create_game_app();
    app.insert_resource(GameConfig {
        fast_start: false,
        ..default()
    });
    for _ in 0..4 {
        app.update();
    }
    app
}

fn phase(app: &App) -> Phase {
    app.world().resource::<RoundController>().phase()
}

fn press(app: &mut App, action: UiAction) {
    app.world_mut().write_message(action);
    app.update();
}

fn played(app: &mut App) {
    press(app, UiAction::Play);
    run_for(app, COUNTDOWN);
    assert_eq!(phase(app), Phase::RoundInProgress);
}

fn paint_all_unmarked(app: &mut App) {
    let mut query = app
        .world_mut()
        .query_filtered::<Entity, (With<Smurf>, Without<Marked>)>();
    let smurfs: Vec<Entity> = query.iter(app.world()).collect();
    for smurf in smurfs {
        app.world_mut().write_message(SmurfHit { smurf });
    }
    app.update();
    app.update();
}

/// Shoots sideways, away from the field, so no tomato can paint anything.
fn fire_wide(app: &mut App) {
    app.world_mut().write_message(FireRequest {
        aim: SHOOT_POINT + Vec2::NEG_X * 100.0,
    });
    app.update();
    run_for(app, FIRE_COOLDOWN + 0.1);
}

#[test]
fn simulated_surface_starts_the_game() {
    let mut app = create_game_app();
    for _ in 0..4 {
        app.update();
    }
    assert_eq!(phase(&app), Phase::MainMenu);

    run_for(&mut app, 2.5);

    assert_eq!(phase(&app), Phase::Countdown);
    assert_eq!(app.world().resource::<RoundController>().current_round(), 1);
}

#[test]
fn play_spawns_round_one_and_arms_after_countdown() {
    let mut app = app_on_main_menu();

    press(&mut app, UiAction::Play);
    app.update();

    assert_eq!(phase(&app), Phase::Countdown);
    assert_eq!(count::<With<Smurf>>(&mut app), 5);
    assert!(!app.world().resource::<Slingshot>().is_armed());
    assert!(!texts(&mut app).contains(&"SMURF SHOOTER".to_string()));

    run_for(&mut app, COUNTDOWN);

    assert_eq!(phase(&app), Phase::RoundInProgress);
    let slingshot = app.world().resource::<Slingshot>();
    assert!(slingshot.is_armed());
    assert_eq!(slingshot.ammo(), 15);
    assert!(texts(&mut app).contains(&"Round 1/3".to_string()));
}

#[test]
fn painting_every_smurf_advances_to_round_two() {
    let mut app = app_on_main_menu();
    played(&mut app);

    paint_all_unmarked(&mut app);

    assert_eq!(phase(&app), Phase::RoundComplete);
    assert!(app.world().resource::<RoundController>().time_remaining() > 0.0);
    assert!(texts(&mut app).contains(&"Round 1 Complete!".to_string()));

    run_for(&mut app, 3.2);

    assert_eq!(phase(&app), Phase::Countdown);
    let controller = app.world().resource::<RoundController>();
    assert_eq!(controller.current_round(), 2);
    assert_eq!(controller.time_remaining(), 35.0);
    assert_eq!(controller.target(), 8);
    assert_eq!(count::<With<Smurf>>(&mut app), 8);
    assert_eq!(count::<With<Marked>>(&mut app), 0);
    assert_eq!(app.world().resource::<Slingshot>().ammo(), 20);
}

#[test]
fn fifteen_misses_end_the_game_out_of_ammo() {
    let mut app = app_on_main_menu();
    played(&mut app);

    for _ in 0..15 {
        fire_wide(&mut app);
    }

    assert_eq!(app.world().resource::<Slingshot>().ammo(), 0);
    assert_eq!(phase(&app), Phase::GameOver);
    let controller = app.world().resource::<RoundController>();
    assert_eq!(controller.game_over_reason(), Some(GameOverReason::OutOfAmmo));
    assert!(
        texts(&mut app).contains(&"Out of ammo!\nYou reached Round 1".to_string())
    );
}

#[test]
fn restart_from_game_over_replays_round_one() {
    let mut app = app_on_main_menu();
    played(&mut app);
    for _ in 0..15 {
        fire_wide(&mut app);
    }
    assert_eq!(phase(&app), Phase::GameOver);

    press(&mut app, UiAction::Restart);
    app.update();

    assert_eq!(phase(&app), Phase::Countdown);
    let controller = app.world().resource::<RoundController>();
    assert_eq!(controller.current_round(), 1);
    assert_eq!(controller.time_remaining(), 40.0);
    assert_eq!(app.world().resource::<Slingshot>().ammo(), 15);
    assert_eq!(count::<With<Smurf>>(&mut app), 5);
    assert!(!texts(&mut app).contains(&"GAME OVER".to_string()));
}

#[test]
fn main_menu_from_game_over_clears_the_field() {
    let mut app = app_on_main_menu();
    played(&mut app);
    for _ in 0..15 {
        fire_wide(&mut app);
    }

    press(&mut app, UiAction::MainMenu);
    app.update();

    assert_eq!(phase(&app), Phase::MainMenu);
    assert_eq!(count::<With<Smurf>>(&mut app), 0);
    assert!(texts(&mut app).contains(&"SMURF SHOOTER".to_string()));
}
