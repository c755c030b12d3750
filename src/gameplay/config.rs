//! Per-round tuning and session start options.

use bevy::prelude::*;

// === Constants ===

/// Number of rounds in a full game.
pub const TOTAL_ROUNDS: u32 = 3;

/// Round clock per round (seconds).
pub const ROUND_DURATIONS: [f32; 3] = [40.0, 35.0, 30.0];

/// Smurfs to paint per round. One smurf is spawned per required paint.
pub const ROUND_TARGETS: [u32; 3] = [5, 8, 12];

/// Tomatoes per round.
pub const AMMO_PER_ROUND: [u32; 3] = [15, 20, 25];

/// Countdown cards, each shown for the paired number of seconds.
pub const COUNTDOWN_STEPS: [(&str, f32); 4] = [("3", 1.0), ("2", 1.0), ("1", 1.0), ("GO!", 0.5)];

/// How long the round-complete summary stays up before the next round.
pub const ROUND_COMPLETE_HOLD: f32 = 3.0;

// === Types ===

/// Static definition of one round.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct RoundPlan {
    pub duration: f32,
    pub target: u32,
}

/// Game tuning. Immutable once a session starts; the controller copies
/// what it needs when the session opens.
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct GameConfig {
    pub total_rounds: u32,
    pub round_durations: Vec<f32>,
    pub round_targets: Vec<u32>,
    pub ammo_per_round: Vec<u32>,
    /// Start the game on the first detected surface instead of waiting
    /// for the Play button.
    pub fast_start: bool,
    /// Start automatically this many seconds after the menu opens.
    pub auto_start_delay: Option<f32>,
    pub countdown_steps: Vec<(String, f32)>,
    pub round_complete_hold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_rounds: TOTAL_ROUNDS,
            round_durations: ROUND_DURATIONS.to_vec(),
            round_targets: ROUND_TARGETS.to_vec(),
            ammo_per_round: AMMO_PER_ROUND.to_vec(),
            fast_start: true,
            auto_start_delay: None,
            countdown_steps: COUNTDOWN_STEPS
                .iter()
                .map(|&(text, secs)| (text.to_string(), secs))
                .collect(),
            round_complete_hold: ROUND_COMPLETE_HOLD,
        }
    }
}

impl GameConfig {
    /// Round `round` (1-based). Out-of-range rounds use the last configured
    /// entry; an empty table falls back to the built-in defaults.
    #[must_use]
    pub fn round_plan(&self, round: u32) -> RoundPlan {
        RoundPlan {
            duration: clamped(&self.round_durations, round)
                .unwrap_or_else(|| ROUND_DURATIONS[ROUND_DURATIONS.len() - 1]),
            target: clamped(&self.round_targets, round)
                .unwrap_or_else(|| ROUND_TARGETS[ROUND_TARGETS.len() - 1]),
        }
    }

    /// Tomatoes for round `round` (1-based), clamped like `round_plan`.
    #[must_use]
    pub fn ammo_for_round(&self, round: u32) -> u32 {
        ammo_for_round(&self.ammo_per_round, round)
    }
}

/// Tomatoes for round `round` (1-based) from `table`. Rounds past the end
/// use the last entry.
#[must_use]
pub fn ammo_for_round(table: &[u32], round: u32) -> u32 {
    clamped(table, round).unwrap_or_else(|| AMMO_PER_ROUND[AMMO_PER_ROUND.len() - 1])
}

fn clamped<T: Copy>(table: &[T], round: u32) -> Option<T> {
    let index = (round.max(1) - 1) as usize;
    table.get(index).or_else(|| table.last()).copied()
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<GameConfig>()
        .init_resource::<GameConfig>();
}
