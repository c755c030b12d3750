//! Avian2d physics configuration for the top-down play field.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::METER;

// === Collision Layers ===

/// Physics collision layers.
///
/// - **Hurtbox**: Paintable surface (on smurfs).
/// - **Hitbox**: Thrown collider (on tomatoes).
/// - **Ground**: The physical support the smurfs stand on.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum CollisionLayer {
    /// Paintable body. Tomatoes splat against it.
    #[default]
    Hurtbox,
    /// Tomato collider.
    Hitbox,
    /// Ground support: a sensor tomatoes fly over until they land.
    Ground,
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    // Top-down: nothing falls, so gravity is off and "landing" is modelled
    // by tomatoes leaving the ground support.
    app.add_plugins(PhysicsPlugins::default().with_length_unit(METER));
    app.insert_resource(Gravity::ZERO);
}
