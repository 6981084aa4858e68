//! Horse roster and generation.

use crate::core::constants::{
    BASE_SPEED_SHARE, CONDITION_MAX, CONDITION_MIN, CONDITION_SPEED_SHARE, HORSE_COUNT,
    ROSTER_VARIATION_MAX, ROSTER_VARIATION_MIN,
};
use crate::core::names::{horse_color, horse_name};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A horse in the stable.
///
/// `condition` is fixed at generation; `position` and `speed` are mutated by
/// the race engine while a race runs and are meaningless between races.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Horse {
    pub id: u32,
    pub name: String,
    /// Silk color as a `#RRGGBB` hex string.
    pub color: String,
    /// Fitness rating in 1..=100, never changes after generation.
    pub condition: u8,
    /// Meters covered in the current race.
    pub position: f64,
    /// Current effective speed in m/s (live during a race).
    pub speed: f64,
}

/// Generate the full roster of [`HORSE_COUNT`] horses.
///
/// Baseline speed blends a common base with a bounded condition bonus and a
/// random band, so condition alone never decides a race.
pub fn generate_horses(rng: &mut impl Rng) -> Vec<Horse> {
    (1..=HORSE_COUNT as u32)
        .map(|id| {
            let condition = rng.gen_range(CONDITION_MIN..=CONDITION_MAX);
            let base = BASE_SPEED_SHARE + (condition as f64 / 100.0) * CONDITION_SPEED_SHARE;
            let variation = rng.gen_range(ROSTER_VARIATION_MIN..=ROSTER_VARIATION_MAX);
            let speed = base * variation;
            debug_assert!(speed > 0.0, "generated speed must be strictly positive");
            Horse {
                id,
                name: horse_name(id),
                color: horse_color(id, rng),
                condition,
                position: 0.0,
                speed,
            }
        })
        .collect()
}

/// Reset every horse's race position back to the gate.
pub fn reset_positions(horses: &mut [Horse]) {
    for horse in horses {
        horse.position = 0.0;
    }
}
