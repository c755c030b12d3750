//! Development tools — only included with `cargo run --features dev`.
//!
//! Space logs the round summary, P paints a random smurf, A refills five
//! tomatoes, T drops a test smurf in front of the slingshot.
//! This module is stripped from release builds.

use bevy::prelude::*;
use rand::seq::IteratorRandom;

use crate::gameplay::round::RoundController;
use crate::gameplay::slingshot::{SHOOT_POINT, Slingshot};
use crate::gameplay::smurf::{self, Marked, Smurf, SmurfAssets, SmurfHit};
use crate::gameplay::spawner::Spawner;
use crate::{GameSet, METER, gameplay_running};

/// Tomatoes added per A key press.
const DEBUG_AMMO: u32 = 5;

/// How far in front of the slingshot the T key drops a smurf.
const TEST_SMURF_OFFSET: f32 = 2.0 * METER;

/// One-line round summary for the log.
fn round_summary(controller: &RoundController) -> String {
    format!(
        "Round {} | Time {:.1}s | Painted {}/{}",
        controller.current_round(),
        controller.time_remaining(),
        controller.painted(),
        controller.target()
    )
}

fn log_round_summary(
    keyboard: Res<ButtonInput<KeyCode>>,
    controller: Option<Res<RoundController>>,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }
    match controller {
        Some(controller) => info!("{}", round_summary(&controller)),
        None => warn!("No round controller"),
    }
}

fn debug_paint_smurf(
    keyboard: Res<ButtonInput<KeyCode>>,
    unmarked: Query<Entity, (With<Smurf>, Without<Marked>)>,
    mut hits: MessageWriter<SmurfHit>,
) {
    if !keyboard.just_pressed(KeyCode::KeyP) {
        return;
    }
    if let Some(smurf) = unmarked.iter().choose(&mut rand::rng()) {
        hits.write(SmurfHit { smurf });
    }
}

fn debug_add_ammo(keyboard: Res<ButtonInput<KeyCode>>, mut slingshot: ResMut<Slingshot>) {
    if keyboard.just_pressed(KeyCode::KeyA) {
        slingshot.add_ammo(DEBUG_AMMO);
        info!("Ammo now {}/{}", slingshot.ammo(), slingshot.max_ammo());
    }
}

fn debug_spawn_smurf(
    keyboard: Res<ButtonInput<KeyCode>>,
    assets: Option<Res<SmurfAssets>>,
    mut spawner: ResMut<Spawner>,
    mut commands: Commands,
) {
    if !keyboard.just_pressed(KeyCode::KeyT) {
        return;
    }
    let Some(assets) = assets else {
        warn!("SmurfAssets missing; cannot spawn a test smurf");
        return;
    };

    let position = SHOOT_POINT + Vec2::Y * TEST_SMURF_OFFSET;
    let heading = smurf::random_heading(&mut rand::rng());
    let entity = smurf::spawn_smurf(&mut commands, &assets, position, heading, position);
    spawner.track(entity);
    info!("Test smurf spawned at {position}");
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            log_round_summary,
            debug_paint_smurf,
            debug_add_ammo,
            debug_spawn_smurf,
        )
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::GameConfig;
    use crate::gameplay::config;
    use crate::testing::assert_entity_count;
    use pretty_assertions::assert_eq;

    fn create_dev_tools_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<ColorMaterial>>();
        app.init_resource::<Spawner>();
        app.add_message::<SmurfHit>();

        let world = app.world_mut();
        let body = world.resource_mut::<Assets<Mesh>>().add(Circle::new(1.0));
        let hat = world.resource_mut::<Assets<Mesh>>().add(Circle::new(0.5));
        let mut materials = world.resource_mut::<Assets<ColorMaterial>>();
        let blue = materials.add(Color::srgb(0.2, 0.4, 1.0));
        let red = materials.add(Color::srgb(1.0, 0.0, 0.0));
        let hat_material = materials.add(Color::WHITE);
        world.insert_resource(SmurfAssets {
            body,
            hat,
            blue,
            red,
            hat_material,
        });

        app.add_systems(
            Update,
            (debug_paint_smurf, debug_add_ammo, debug_spawn_smurf),
        );
        app
    }

    fn press(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        app.update();
    }

    #[test]
    fn summary_line_matches_round_state() {
        let controller = RoundController::new(&GameConfig::default());
        assert_eq!(round_summary(&controller), "Round 0 | Time 0.0s | Painted 0/0");
    }

    #[test]
    fn pressing_t_spawns_tracked_smurf() {
        let mut app = create_dev_tools_test_app();
        app.init_resource::<Slingshot>();

        press(&mut app, KeyCode::KeyT);

        assert_entity_count::<With<Smurf>>(&mut app, 1);
        assert_eq!(app.world().resource::<Spawner>().tracked().len(), 1);
    }

    #[test]
    fn pressing_p_hits_an_unmarked_smurf() {
        let mut app = create_dev_tools_test_app();
        app.init_resource::<Slingshot>();
        let smurf = app.world_mut().spawn(Smurf { anchor: Vec2::ZERO }).id();

        press(&mut app, KeyCode::KeyP);

        let messages = app.world().resource::<Messages<SmurfHit>>();
        let hits: Vec<SmurfHit> = messages.get_cursor().read(messages).copied().collect();
        assert_eq!(hits, vec![SmurfHit { smurf }]);
    }

    #[test]
    fn pressing_a_refills_up_to_max() {
        let mut app = create_dev_tools_test_app();
        let mut slingshot = Slingshot::default();
        slingshot.initialize_ammo(1, &config::AMMO_PER_ROUND);
        slingshot.arm(true);
        for shot in 0..10u8 {
            slingshot.try_fire(f32::from(shot), 0.5);
        }
        app.insert_resource(slingshot);

        press(&mut app, KeyCode::KeyA);
        assert_eq!(app.world().resource::<Slingshot>().ammo(), 10);
    }
}
