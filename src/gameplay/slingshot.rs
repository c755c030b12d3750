//! The slingshot: turns taps into tomatoes and tracks the round's ammo.

use bevy::prelude::*;

use crate::gameplay::GameConfig;
use crate::gameplay::config;
use crate::gameplay::projectile::{self, TomatoAssets};
use crate::{GameSet, METER, gameplay_running};

// === Constants ===

/// Minimum seconds between accepted shots.
pub const FIRE_COOLDOWN: f32 = 0.5;

/// Launch speed of a tomato.
pub const TOMATO_SPEED: f32 = 15.0 * METER;

/// Where tomatoes leave the slingshot, near the bottom of the screen.
pub const SHOOT_POINT: Vec2 = Vec2::new(0.0, -8.0 * METER);

// === Messages ===

/// Requests for the slingshot, written by the round dispatcher.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlingshotCommand {
    /// Reload for the given round from the ammo table.
    InitializeAmmo { round: u32 },
    /// Allow or block firing.
    Arm(bool),
}

/// The player pressed to shoot at `aim` (world position).
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct FireRequest {
    pub aim: Vec2,
}

/// The last tomato of the round left the slingshot.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmmoExhausted;

// === Resources ===

/// Result of a fire attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Disarmed,
    Empty,
    CoolingDown,
    Fired { remaining: u32 },
}

#[derive(Resource, Debug, Clone, PartialEq, Default, Reflect)]
#[reflect(Resource)]
pub struct Slingshot {
    armed: bool,
    ammo: u32,
    max_ammo: u32,
    /// Elapsed seconds of the last accepted shot.
    last_shot: Option<f32>,
}

impl Slingshot {
    pub const fn arm(&mut self, armed: bool) {
        self.armed = armed;
    }

    /// Fills the slingshot with the table entry for `round`.
    pub fn initialize_ammo(&mut self, round: u32, table: &[u32]) {
        self.max_ammo = config::ammo_for_round(table, round);
        self.ammo = self.max_ammo;
        info!("Slingshot loaded with {} tomatoes for round {round}", self.ammo);
    }

    /// Spends one tomato if the slingshot is armed, loaded and cooled down.
    pub fn try_fire(&mut self, now: f32, cooldown: f32) -> FireOutcome {
        if !self.armed {
            return FireOutcome::Disarmed;
        }
        if self.ammo == 0 {
            return FireOutcome::Empty;
        }
        if self.last_shot.is_some_and(|last| now - last < cooldown) {
            return FireOutcome::CoolingDown;
        }
        self.last_shot = Some(now);
        self.ammo -= 1;
        FireOutcome::Fired {
            remaining: self.ammo,
        }
    }

    /// Debug refill, capped at the round's maximum.
    pub fn add_ammo(&mut self, amount: u32) {
        self.ammo = self.ammo.saturating_add(amount).min(self.max_ammo);
    }

    #[must_use]
    pub const fn can_fire(&self) -> bool {
        self.armed && self.ammo > 0
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    #[must_use]
    pub const fn ammo(&self) -> u32 {
        self.ammo
    }

    #[must_use]
    pub const fn max_ammo(&self) -> u32 {
        self.max_ammo
    }
}

// === Systems ===

/// Turns a left click or a new touch into a [`FireRequest`] while the
/// slingshot can fire. Runs in `GameSet::Input`.
fn read_fire_input(
    slingshot: Res<Slingshot>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    window: Single<&Window>,
    camera: Single<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut requests: MessageWriter<FireRequest>,
) {
    if !slingshot.can_fire() {
        return;
    }
    let (camera, camera_global) = *camera;
    let to_world = |screen_pos: Vec2| {
        camera
            .viewport_to_world_2d(camera_global, screen_pos)
            .unwrap_or(SHOOT_POINT + Vec2::Y)
    };

    if mouse.is_some_and(|mouse| mouse.just_pressed(MouseButton::Left)) {
        let aim = window
            .cursor_position()
            .map_or(SHOOT_POINT + Vec2::Y, to_world);
        requests.write(FireRequest { aim });
    }
    if let Some(touches) = touches {
        for touch in touches.iter_just_pressed() {
            requests.write(FireRequest {
                aim: to_world(touch.position()),
            });
        }
    }
}

/// Applies round directives. Runs in `GameSet::Apply`.
fn apply_slingshot_commands(
    mut requests: MessageReader<SlingshotCommand>,
    mut slingshot: ResMut<Slingshot>,
    game_config: Option<Res<GameConfig>>,
) {
    for request in requests.read() {
        match *request {
            SlingshotCommand::InitializeAmmo { round } => {
                let table = game_config
                    .as_deref()
                    .map_or(&config::AMMO_PER_ROUND[..], |game_config| {
                        game_config.ammo_per_round.as_slice()
                    });
                slingshot.initialize_ammo(round, table);
            }
            SlingshotCommand::Arm(armed) => {
                slingshot.arm(armed);
                debug!("Slingshot {}", if armed { "armed" } else { "disarmed" });
            }
        }
    }
}

/// Launches one tomato per accepted request and reports the empty pouch.
/// Runs in `GameSet::Apply`, after the round's commands.
fn fire_slingshot(
    time: Res<Time>,
    mut commands: Commands,
    mut requests: MessageReader<FireRequest>,
    mut slingshot: ResMut<Slingshot>,
    assets: Option<Res<TomatoAssets>>,
    mut exhausted: MessageWriter<AmmoExhausted>,
) {
    let now = time.elapsed_secs();
    for request in requests.read() {
        let Some(assets) = assets.as_deref() else {
            warn!("TomatoAssets missing; shot ignored");
            continue;
        };
        let FireOutcome::Fired { remaining } = slingshot.try_fire(now, FIRE_COOLDOWN) else {
            continue;
        };

        let direction = (request.aim - SHOOT_POINT).normalize_or(Vec2::Y);
        projectile::spawn_tomato(&mut commands, assets, SHOOT_POINT, direction * TOMATO_SPEED);
        debug!("Tomato launched, {remaining} left");

        if remaining == 0 {
            info!("Out of tomatoes");
            exhausted.write(AmmoExhausted);
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Slingshot>()
        .add_message::<SlingshotCommand>()
        .add_message::<FireRequest>()
        .add_message::<AmmoExhausted>()
        .init_resource::<Slingshot>();

    app.add_systems(
        Update,
        (
            read_fire_input.in_set(GameSet::Input),
            (apply_slingshot_commands, fire_slingshot)
                .chain()
                .in_set(GameSet::Apply),
        )
            .run_if(gameplay_running),
    );
}
