//! Surface detection: where smurfs can stand.
//!
//! A tracking backend may run on its own thread; it reports anchors through
//! a [`SurfaceSender`], and [`drain_surface_feed`] hands them to the tick
//! thread as [`SurfaceDetected`] messages. On desktop the
//! [`SimulatedSurface`] stand-in reports the field centre after a short
//! delay.

use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use bevy::prelude::*;

use crate::{GameSet, METER, gameplay_running};

// === Constants ===

/// Seconds the simulated tracker takes to "find" the floor.
pub const SURFACE_DETECTION_DELAY: f32 = 2.0;

/// Default spawn centre, one metre above the middle of the screen.
pub const FIELD_CENTER: Vec2 = Vec2::new(0.0, 1.0 * METER);

// === Messages ===

/// Newly available surfaces. Anchors are world positions.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct SurfaceDetected {
    pub anchors: Vec<Vec2>,
}

// === Resources ===

/// Centre the spawner populates around.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct SpawnAnchor(pub Vec2);

impl Default for SpawnAnchor {
    fn default() -> Self {
        Self(FIELD_CENTER)
    }
}

/// Sending half for a tracking thread.
#[derive(Debug, Clone)]
pub struct SurfaceSender(Sender<Vec<Vec2>>);

impl SurfaceSender {
    /// Reports newly found anchors. Returns `false` once the app has shut
    /// down and nobody is listening.
    pub fn report(&self, anchors: Vec<Vec2>) -> bool {
        self.0.send(anchors).is_ok()
    }
}

/// Receiving half, drained on the tick thread.
#[derive(Resource, Debug)]
pub struct SurfaceFeed(Mutex<Receiver<Vec<Vec2>>>);

impl SurfaceFeed {
    #[must_use]
    pub fn channel() -> (SurfaceSender, Self) {
        let (tx, rx) = mpsc::channel();
        (SurfaceSender(tx), Self(Mutex::new(rx)))
    }
}

/// Desktop stand-in for a plane tracker.
#[derive(Resource, Debug, Reflect)]
#[reflect(Resource)]
pub struct SimulatedSurface {
    pub timer: Timer,
}

impl Default for SimulatedSurface {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(SURFACE_DETECTION_DELAY, TimerMode::Once),
        }
    }
}

// === Systems ===

/// Moves anchors reported by other threads onto the tick thread.
pub fn drain_surface_feed(
    feed: Option<Res<SurfaceFeed>>,
    mut detected: MessageWriter<SurfaceDetected>,
) {
    let Some(feed) = feed else {
        return;
    };
    let Ok(rx) = feed.0.lock() else {
        warn!("Surface feed lock poisoned; dropping tracker input");
        return;
    };
    loop {
        match rx.try_recv() {
            Ok(anchors) if anchors.is_empty() => {}
            Ok(anchors) => {
                detected.write(SurfaceDetected { anchors });
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
        }
    }
}

fn tick_simulated_surface(
    time: Res<Time>,
    simulated: Option<ResMut<SimulatedSurface>>,
    mut detected: MessageWriter<SurfaceDetected>,
) {
    let Some(mut simulated) = simulated else {
        return;
    };
    simulated.timer.tick(time.delta());
    if simulated.timer.just_finished() {
        detected.write(SurfaceDetected {
            anchors: vec![FIELD_CENTER],
        });
    }
}

/// The first anchor ever reported becomes the spawn centre.
fn adopt_first_anchor(
    mut detected: MessageReader<SurfaceDetected>,
    mut anchor: ResMut<SpawnAnchor>,
    mut adopted: Local<bool>,
) {
    for surface in detected.read() {
        if *adopted {
            continue;
        }
        if let Some(&first) = surface.anchors.first() {
            info!("Spawn anchor set to {first}");
            anchor.0 = first;
            *adopted = true;
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<SpawnAnchor>()
        .register_type::<SimulatedSurface>()
        .add_message::<SurfaceDetected>()
        .init_resource::<SpawnAnchor>()
        .init_resource::<SimulatedSurface>();

    app.add_systems(
        Update,
        (
            drain_surface_feed,
            tick_simulated_surface,
            adopt_first_anchor,
        )
            .chain()
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
}
