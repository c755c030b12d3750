//! Character spawner: populates the field with smurfs and keeps track of
//! the ones it owns.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::gameplay::smurf::{self, Smurf, SmurfAssets};
use crate::gameplay::surface::SpawnAnchor;
use crate::screens::Screen;
use crate::theme::palette;
use crate::third_party::CollisionLayer;
use crate::{GameSet, METER, Z_GROUND, gameplay_running};

// === Constants ===

/// Closest a smurf may spawn to the centre.
pub const MIN_SPAWN_DISTANCE: f32 = 2.0 * METER;

/// Farthest a smurf may spawn from the centre.
pub const MAX_SPAWN_DISTANCE: f32 = 4.0 * METER;

/// Radius of the ground support disc placed under each batch.
pub const GROUND_RADIUS: f32 = 5.0 * METER;

// === Messages ===

/// Requests for the spawner, written by the round dispatcher.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnerCommand {
    /// Replace the current batch with `count` fresh smurfs.
    Populate { count: u32 },
    /// Despawn every tracked smurf and the ground.
    Clear,
}

// === Components ===

/// Walkable support under a batch. Tomatoes land when they leave it.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Ground;

// === Resources ===

#[derive(Resource, Debug)]
pub struct GroundAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<ColorMaterial>,
}

/// Smurfs the spawner created, plus the ground it put under them.
#[derive(Resource, Debug, Default)]
pub struct Spawner {
    smurfs: Vec<Entity>,
    ground: Option<Entity>,
}

impl Spawner {
    /// Clears the field, then spawns `count` smurfs at random points of the
    /// annulus around `center` on a fresh ground disc.
    pub fn populate(
        &mut self,
        commands: &mut Commands,
        assets: &SmurfAssets,
        ground: Option<&GroundAssets>,
        center: Vec2,
        count: u32,
        rng: &mut impl Rng,
    ) {
        self.clear(commands);

        self.ground = Some(spawn_ground(commands, ground, center));
        for _ in 0..count {
            let position = annulus_point(center, MIN_SPAWN_DISTANCE, MAX_SPAWN_DISTANCE, rng);
            let heading = smurf::random_heading(rng);
            let entity = smurf::spawn_smurf(commands, assets, position, heading, center);
            self.smurfs.push(entity);
        }
        info!("Spawned {count} smurfs around {center}");
    }

    /// Despawns every tracked entity. Entities already gone are skipped.
    pub fn clear(&mut self, commands: &mut Commands) {
        for entity in self.smurfs.drain(..).chain(self.ground.take()) {
            if let Ok(mut entity) = commands.get_entity(entity) {
                entity.try_despawn();
            }
        }
    }

    /// Forgets tracked smurfs that no longer exist, then counts the rest.
    pub fn active_count(&mut self, alive: &Query<(), With<Smurf>>) -> usize {
        self.smurfs.retain(|&entity| alive.contains(entity));
        self.smurfs.len()
    }

    /// Takes over ownership of a smurf spawned elsewhere.
    pub fn track(&mut self, entity: Entity) {
        if !self.smurfs.contains(&entity) {
            self.smurfs.push(entity);
        }
    }

    /// Stops tracking a smurf without despawning it.
    pub fn untrack(&mut self, entity: Entity) {
        self.smurfs.retain(|&tracked| tracked != entity);
    }

    #[must_use]
    pub fn tracked(&self) -> &[Entity] {
        &self.smurfs
    }

    #[must_use]
    pub const fn ground(&self) -> Option<Entity> {
        self.ground
    }
}

// === Pure Functions ===

/// Uniform random angle, uniform random radius in `[min, max]`.
pub fn annulus_point(center: Vec2, min: f32, max: f32, rng: &mut impl Rng) -> Vec2 {
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let distance = if max > min {
        rng.random_range(min..=max)
    } else {
        min
    };
    center + Vec2::from_angle(angle) * distance
}

fn spawn_ground(commands: &mut Commands, assets: Option<&GroundAssets>, center: Vec2) -> Entity {
    let mut ground = commands.spawn((
        Name::new("Ground"),
        Ground,
        Transform::from_xyz(center.x, center.y, Z_GROUND),
        RigidBody::Static,
        Collider::circle(GROUND_RADIUS),
        Sensor,
        CollisionLayers::new(CollisionLayer::Ground, CollisionLayer::Hitbox),
        DespawnOnExit(Screen::Gameplay),
    ));
    if let Some(assets) = assets {
        ground.insert((
            Mesh2d(assets.mesh.clone()),
            MeshMaterial2d(assets.material.clone()),
        ));
    }
    ground.id()
}

// === Systems ===

fn setup_ground_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(GroundAssets {
        mesh: meshes.add(Circle::new(GROUND_RADIUS)),
        material: materials.add(palette::GROUND),
    });
}

/// Applies spawner commands in arrival order. Runs in `GameSet::Apply`.
fn apply_spawner_commands(
    mut commands: Commands,
    mut requests: MessageReader<SpawnerCommand>,
    mut spawner: ResMut<Spawner>,
    smurf_assets: Option<Res<SmurfAssets>>,
    ground_assets: Option<Res<GroundAssets>>,
    anchor: Res<SpawnAnchor>,
) {
    let mut rng = rand::rng();
    for request in requests.read() {
        match *request {
            SpawnerCommand::Clear => spawner.clear(&mut commands),
            SpawnerCommand::Populate { count } => {
                let Some(assets) = smurf_assets.as_deref() else {
                    warn!("SmurfAssets missing; skipping spawn of {count} smurfs");
                    continue;
                };
                spawner.populate(
                    &mut commands,
                    assets,
                    ground_assets.as_deref(),
                    anchor.0,
                    count,
                    &mut rng,
                );
            }
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Ground>()
        .add_message::<SpawnerCommand>()
        .init_resource::<Spawner>();

    app.add_systems(OnEnter(Screen::Gameplay), setup_ground_assets);
    app.add_systems(OnExit(Screen::Gameplay), forget_field);

    app.add_systems(
        Update,
        apply_spawner_commands
            .in_set(GameSet::Apply)
            .run_if(gameplay_running),
    );
}

/// Scoped despawn already removed the entities; drop the stale handles.
fn forget_field(mut spawner: ResMut<Spawner>) {
    *spawner = Spawner::default();
}
