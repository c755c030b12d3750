//! Boot sequence: loading hands over to gameplay, which opens on the menu.

use bevy::prelude::*;
use pretty_assertions::assert_eq;
use smurf_shooter::gameplay::round::{Phase, RoundController};
use smurf_shooter::screens::Screen;

use crate::{create_game_app, texts};

#[test]
fn game_initializes_in_loading_state() {
    let app = create_game_app();
    let state = app.world().resource::<State<Screen>>();
    assert_eq!(*state.get(), Screen::Loading);
}

#[test]
fn loading_hands_over_to_gameplay_main_menu() {
    let mut app = create_game_app();
    for _ in 0..4 {
        app.update();
    }

    let state = app.world().resource::<State<Screen>>();
    assert_eq!(*state.get(), Screen::Gameplay);
    let controller = app.world().resource::<RoundController>();
    assert_eq!(controller.phase(), Phase::MainMenu);
    assert!(texts(&mut app).contains(&"SMURF SHOOTER".to_string()));
    assert!(!texts(&mut app).contains(&"Loading...".to_string()));
}
