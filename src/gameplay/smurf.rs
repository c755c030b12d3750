//! Smurfs: wandering paint targets.
//!
//! A smurf random-walks around its spawn anchor and turns back whenever it
//! strays past its leash. The first tomato that hits it paints it red,
//! freezes it in place, and reports the paint to the round controller.
//! Painted smurfs stay on the field as a running scoreboard.

use avian2d::prelude::*;
use bevy::ecs::entity::hash_set::EntityHashSet;
use bevy::prelude::*;
use rand::Rng;

use crate::screens::Screen;
use crate::theme::palette;
use crate::third_party::CollisionLayer;
use crate::{GameSet, METER, Z_SMURF, gameplay_running};

// === Constants ===

/// Smurf body radius.
pub const SMURF_RADIUS: f32 = 0.25 * METER;

/// Walking speed.
pub const MOVE_SPEED: f32 = 1.5 * METER;

/// How fast a smurf turns to face its heading (slerp factor per second).
const ROTATION_SPEED: f32 = 2.0;

/// Mean seconds between random heading changes.
pub const CHANGE_DIRECTION_TIME: f32 = 3.0;

/// Random variation applied to each direction-change interval (seconds, ±).
pub const DIRECTION_JITTER: f32 = 1.0;

/// How far a smurf may wander from its anchor before turning back.
pub const MAX_DISTANCE_FROM_SPAWN: f32 = 3.0 * METER;

// === Components ===

/// A paintable smurf and the point it wanders around.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Smurf {
    pub anchor: Vec2,
}

/// Random-walk state.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Wander {
    /// Unit vector in the ground plane.
    pub heading: Vec2,
    /// Seconds until the next random heading change.
    pub direction_timer: f32,
    pub speed: f32,
    pub change_interval: f32,
    pub jitter: f32,
    pub leash: f32,
}

impl Wander {
    #[must_use]
    pub fn new(heading: Vec2) -> Self {
        Self {
            heading,
            direction_timer: CHANGE_DIRECTION_TIME,
            speed: MOVE_SPEED,
            change_interval: CHANGE_DIRECTION_TIME,
            jitter: DIRECTION_JITTER,
            leash: MAX_DISTANCE_FROM_SPAWN,
        }
    }
}

/// One-way: set on the first hit, never removed.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Marked;

/// Hat child sprite, drawn on the leading edge so the heading is visible.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct SmurfHat;

// === Messages ===

/// A tomato struck this smurf.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmurfHit {
    pub smurf: Entity,
}

/// A smurf went from unpainted to painted. Written once per smurf.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmurfPainted {
    pub smurf: Entity,
}

// === Resources ===

/// Shared mesh and material handles for smurf rendering.
#[derive(Resource, Debug)]
pub struct SmurfAssets {
    pub body: Handle<Mesh>,
    pub hat: Handle<Mesh>,
    pub blue: Handle<ColorMaterial>,
    pub red: Handle<ColorMaterial>,
    pub hat_material: Handle<ColorMaterial>,
}

// === Pure Functions ===

/// Uniformly random unit heading in the ground plane.
pub fn random_heading(rng: &mut impl Rng) -> Vec2 {
    Vec2::from_angle(rng.random_range(0.0..std::f32::consts::TAU))
}

/// Advances one wander step and returns the heading to walk along.
///
/// The direction timer counts down by `dt`; when it runs out a new random
/// heading is picked and the timer is reset to the interval plus jitter.
/// Past the leash the heading points straight back at `anchor` and the
/// timer resets to the plain interval.
pub fn steer(
    wander: &mut Wander,
    position: Vec2,
    anchor: Vec2,
    dt: f32,
    rng: &mut impl Rng,
) -> Vec2 {
    wander.direction_timer -= dt;
    if wander.direction_timer <= 0.0 {
        wander.heading = random_heading(rng);
        let jitter = if wander.jitter > 0.0 {
            rng.random_range(-wander.jitter..wander.jitter)
        } else {
            0.0
        };
        wander.direction_timer = wander.change_interval + jitter;
    }

    if position.distance(anchor) > wander.leash {
        wander.heading = (anchor - position).normalize_or_zero();
        wander.direction_timer = wander.change_interval;
    }

    wander.heading
}

/// Spawn a smurf. Single source of truth for the smurf archetype.
pub fn spawn_smurf(
    commands: &mut Commands,
    assets: &SmurfAssets,
    position: Vec2,
    heading: Vec2,
    anchor: Vec2,
) -> Entity {
    commands
        .spawn((
            Name::new("Smurf"),
            Smurf { anchor },
            Wander::new(heading),
            Mesh2d(assets.body.clone()),
            MeshMaterial2d(assets.blue.clone()),
            Transform::from_xyz(position.x, position.y, Z_SMURF)
                .with_rotation(facing(heading)),
            DespawnOnExit(Screen::Gameplay),
            children![(
                Name::new("Smurf Hat"),
                SmurfHat,
                Mesh2d(assets.hat.clone()),
                MeshMaterial2d(assets.hat_material.clone()),
                Transform::from_xyz(0.0, SMURF_RADIUS * 0.8, 0.1),
            )],
        ))
        .insert((
            RigidBody::Dynamic,
            LockedAxes::ROTATION_LOCKED,
            Collider::circle(SMURF_RADIUS),
            CollisionLayers::new(CollisionLayer::Hurtbox, CollisionLayer::Hitbox),
            LinearVelocity(heading * MOVE_SPEED),
        ))
        .id()
}

/// Rotation that points the sprite's local +Y along `heading`.
fn facing(heading: Vec2) -> Quat {
    Quat::from_rotation_z(heading.to_angle() - std::f32::consts::FRAC_PI_2)
}

// === Systems ===

fn setup_smurf_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(SmurfAssets {
        body: meshes.add(Circle::new(SMURF_RADIUS)),
        hat: meshes.add(Triangle2d::new(
            Vec2::new(0.0, SMURF_RADIUS * 0.6),
            Vec2::new(-SMURF_RADIUS * 0.5, -SMURF_RADIUS * 0.2),
            Vec2::new(SMURF_RADIUS * 0.5, -SMURF_RADIUS * 0.2),
        )),
        blue: materials.add(palette::SMURF_BLUE),
        red: materials.add(palette::SMURF_RED),
        hat_material: materials.add(Color::WHITE),
    });
}

/// Steers unpainted smurfs and turns them toward where they walk.
/// Runs in `GameSet::Movement`.
fn wander_smurfs(
    time: Res<Time>,
    mut smurfs: Query<(&Smurf, &mut Wander, &mut Transform, &mut LinearVelocity), Without<Marked>>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::rng();
    for (smurf, mut wander, mut transform, mut velocity) in &mut smurfs {
        let position = transform.translation.truncate();
        let heading = steer(&mut wander, position, smurf.anchor, dt, &mut rng);
        velocity.0 = heading * wander.speed;

        if heading != Vec2::ZERO {
            let target = facing(heading);
            transform.rotation = transform
                .rotation
                .slerp(target, (ROTATION_SPEED * dt).min(1.0));
        }
    }
}

/// Paints smurfs on their first hit and reports each paint once.
/// Runs in `GameSet::Combat`, after tomato impacts.
pub fn paint_smurfs(
    mut commands: Commands,
    mut hits: MessageReader<SmurfHit>,
    mut smurfs: Query<
        (&mut LinearVelocity, &mut MeshMaterial2d<ColorMaterial>),
        (With<Smurf>, Without<Marked>),
    >,
    assets: Option<Res<SmurfAssets>>,
    mut painted: MessageWriter<SmurfPainted>,
) {
    let mut painted_now = EntityHashSet::default();
    for hit in hits.read() {
        if !painted_now.insert(hit.smurf) {
            continue;
        }
        let Ok((mut velocity, mut material)) = smurfs.get_mut(hit.smurf) else {
            continue;
        };

        velocity.0 = Vec2::ZERO;
        match assets.as_deref() {
            Some(assets) => material.0 = assets.red.clone(),
            None => warn!("SmurfAssets missing; painted smurf keeps its color"),
        }
        commands.entity(hit.smurf).insert(Marked);
        painted.write(SmurfPainted { smurf: hit.smurf });
        debug!("Smurf {} painted red", hit.smurf);
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Smurf>()
        .register_type::<Wander>()
        .register_type::<Marked>()
        .register_type::<SmurfHat>()
        .add_message::<SmurfHit>()
        .add_message::<SmurfPainted>();

    app.add_systems(OnEnter(Screen::Gameplay), setup_smurf_assets);

    app.add_systems(
        Update,
        (
            wander_smurfs.in_set(GameSet::Movement),
            paint_smurfs.in_set(GameSet::Combat),
        )
            .run_if(gameplay_running),
    );
}
