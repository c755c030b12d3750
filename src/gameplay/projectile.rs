//! Tomatoes in flight: sensor hitboxes that splat on the first hurtbox they
//! touch, land once they leave the ground, or rot after a few seconds.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::gameplay::smurf::{self, Smurf, SmurfHit};
use crate::gameplay::spawner::Ground;
use crate::screens::Screen;
use crate::theme::palette;
use crate::third_party::CollisionLayer;
use crate::{GameSet, METER, Z_PROJECTILE, gameplay_running};

// === Constants ===

/// Tomato radius.
pub const TOMATO_RADIUS: f32 = 0.12 * METER;

/// Seconds before an airborne tomato is removed.
pub const TOMATO_LIFETIME: f32 = 5.0;

// === Components ===

#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Tomato {
    pub lifetime: Timer,
    /// Set the first frame the tomato overlaps the ground.
    pub entered_ground: bool,
}

impl Default for Tomato {
    fn default() -> Self {
        Self {
            lifetime: Timer::from_seconds(TOMATO_LIFETIME, TimerMode::Once),
            entered_ground: false,
        }
    }
}

// === Resources ===

#[derive(Resource, Debug)]
pub struct TomatoAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<ColorMaterial>,
}

/// Spawn a tomato at `origin` moving with `velocity`.
pub fn spawn_tomato(
    commands: &mut Commands,
    assets: &TomatoAssets,
    origin: Vec2,
    velocity: Vec2,
) -> Entity {
    commands
        .spawn((
            Name::new("Tomato"),
            Tomato::default(),
            Mesh2d(assets.mesh.clone()),
            MeshMaterial2d(assets.material.clone()),
            Transform::from_xyz(origin.x, origin.y, Z_PROJECTILE),
            DespawnOnExit(Screen::Gameplay),
            // Physics: sensor hitbox, contacts only
            RigidBody::Kinematic,
            Collider::circle(TOMATO_RADIUS),
            Sensor,
            CollisionLayers::new(
                CollisionLayer::Hitbox,
                [CollisionLayer::Hurtbox, CollisionLayer::Ground],
            ),
            CollisionEventsEnabled,
            CollidingEntities::default(),
            LinearVelocity(velocity),
        ))
        .id()
}

// === Systems ===

fn setup_tomato_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.insert_resource(TomatoAssets {
        mesh: meshes.add(Circle::new(TOMATO_RADIUS)),
        material: materials.add(palette::TOMATO),
    });
}

fn expire_tomatoes(
    time: Res<Time>,
    mut commands: Commands,
    mut tomatoes: Query<(Entity, &mut Tomato)>,
) {
    for (entity, mut tomato) in &mut tomatoes {
        tomato.lifetime.tick(time.delta());
        if tomato.lifetime.just_finished() {
            commands.entity(entity).despawn();
        }
    }
}

/// Resolves this frame's overlaps for every tomato.
///
/// Any hurtbox contact splats the tomato; smurf contacts also report a hit.
/// Ground contact only arms the landing check, and a tomato that was over
/// the ground and no longer is has landed.
fn resolve_tomato_contacts(
    mut commands: Commands,
    mut tomatoes: Query<(Entity, &mut Tomato, &CollidingEntities)>,
    grounds: Query<(), With<Ground>>,
    smurfs: Query<(), With<Smurf>>,
    mut hits: MessageWriter<SmurfHit>,
) {
    for (entity, mut tomato, colliding) in &mut tomatoes {
        let mut over_ground = false;
        let mut impact = None;
        for &other in &colliding.0 {
            if grounds.contains(other) {
                over_ground = true;
            } else if impact.is_none() {
                impact = Some(other);
            }
        }

        if let Some(other) = impact {
            if smurfs.contains(other) {
                hits.write(SmurfHit { smurf: other });
            }
            debug!("Tomato {entity} splatted on {other}");
            commands.entity(entity).try_despawn();
            continue;
        }

        if over_ground {
            tomato.entered_ground = true;
        } else if tomato.entered_ground {
            debug!("Tomato {entity} landed");
            commands.entity(entity).try_despawn();
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Tomato>();

    app.add_systems(OnEnter(Screen::Gameplay), setup_tomato_assets);

    app.add_systems(
        Update,
        (expire_tomatoes, resolve_tomato_contacts)
            .chain_ignore_deferred()
            .before(smurf::paint_smurfs)
            .in_set(GameSet::Combat)
            .run_if(gameplay_running),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_tomato_has_full_lifetime() {
        let tomato = Tomato::default();
        assert_eq!(tomato.lifetime.duration().as_secs_f32(), TOMATO_LIFETIME);
        assert!(!tomato.entered_ground);
    }
}
