//! Gameplay screen: opens a round-controller session on enter and shuts it
//! down on exit.

use bevy::prelude::*;

use super::Screen;
use crate::gameplay::GameConfig;
use crate::gameplay::round::RoundController;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Gameplay), open_session)
        .add_systems(OnExit(Screen::Gameplay), close_session);
}

fn open_session(mut commands: Commands, config: Option<Res<GameConfig>>) {
    let config = config.map(|c| c.clone()).unwrap_or_default();
    info!(
        "Opening session: {} rounds, fast start {}",
        config.total_rounds, config.fast_start
    );
    commands.insert_resource(RoundController::new(&config));
}

fn close_session(mut controller: Option<ResMut<RoundController>>) {
    if let Some(controller) = controller.as_mut() {
        controller.shutdown();
    }
}
