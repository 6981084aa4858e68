//! Races, results, and tournament schedule generation.

use crate::core::constants::{HORSES_PER_RACE, RACE_DISTANCES, TOTAL_ROUNDS};
use crate::core::horse::Horse;
use crate::core::tournament::CommandError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lifecycle of a single race. Transitions only move forward:
/// Pending -> Running -> Finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceStatus {
    Pending,
    Running,
    Finished,
}

/// One finish record. `position` is the 1-based rank assigned in strict
/// arrival order; `time` is seconds from that horse's own gate exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceResult {
    pub position: u32,
    pub horse_id: u32,
    pub horse_name: String,
    pub time: f64,
}

/// One round of the tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    pub id: u32,
    /// 1-based round number.
    pub round: u32,
    /// Race distance in meters.
    pub distance: u32,
    /// Ids of the horses drawn for this race.
    pub horses: Vec<u32>,
    /// Finish records, filled incrementally while the race runs.
    pub results: Vec<RaceResult>,
    pub status: RaceStatus,
    /// Id of the rank-1 finisher, set once known.
    pub winner: Option<u32>,
    /// True once the first horse has crossed; lets the frontend reveal a
    /// partial leaderboard while the race visually continues.
    pub showing_results: bool,
}

impl Race {
    pub fn is_finished(&self) -> bool {
        self.status == RaceStatus::Finished
    }
}

/// Build the 6-race schedule over the fixed distance ladder, drawing
/// `min(10, pool)` distinct horses per race without replacement.
///
/// Fails with [`CommandError::NoHorses`] on an empty pool.
pub fn generate_schedule(pool: &[Horse], rng: &mut impl Rng) -> Result<Vec<Race>, CommandError> {
    if pool.is_empty() {
        return Err(CommandError::NoHorses);
    }

    let mut races = Vec::with_capacity(TOTAL_ROUNDS);
    for round in 0..TOTAL_ROUNDS {
        let field_size = HORSES_PER_RACE.min(pool.len());
        let drawn: Vec<u32> = pool
            .choose_multiple(rng, field_size)
            .map(|h| h.id)
            .collect();

        races.push(Race {
            id: round as u32 + 1,
            round: round as u32 + 1,
            distance: RACE_DISTANCES[round],
            horses: drawn,
            results: Vec::new(),
            status: RaceStatus::Pending,
            winner: None,
            showing_results: false,
        });
    }

    Ok(races)
}
