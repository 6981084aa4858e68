//! Tournament state machine.
//!
//! Owns the roster, the 6-race schedule, the round pointer, accumulated
//! results, and the active race engine. The presentation layer issues
//! commands and reads the projection methods; it never mutates horses or
//! races directly. State-changed notifications come back as [`RaceEvent`]s
//! from [`Tournament::tick`].

use crate::core::constants::TOTAL_ROUNDS;
use crate::core::engine::{EngineConfig, RaceEngine, RaceEvent};
use crate::core::horse::{generate_horses, reset_positions, Horse};
use crate::core::race::{generate_schedule, Race, RaceResult, RaceStatus};
use log::info;
use rand::Rng;
use std::error::Error;
use std::fmt;

/// Rejected command. Every variant leaves tournament state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Schedule generation requires a non-empty roster.
    NoHorses,
    /// The command needs a generated schedule.
    NoSchedule,
    /// Preconditions not met (already racing, wrong race status, last round).
    NotEligible,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NoHorses => {
                write!(f, "no horses available, generate horses first")
            }
            CommandError::NoSchedule => write!(f, "no race schedule generated"),
            CommandError::NotEligible => write!(f, "command not eligible in current state"),
        }
    }
}

impl Error for CommandError {}

/// The whole six-round tournament, from an empty stable to the final finish.
#[derive(Debug)]
pub struct Tournament {
    horses: Vec<Horse>,
    races: Vec<Race>,
    current_round: usize,
    /// One results list per completed round, in round order.
    all_results: Vec<Vec<RaceResult>>,
    is_racing: bool,
    engine: Option<RaceEngine>,
    engine_config: EngineConfig,
}

impl Tournament {
    pub fn new(engine_config: EngineConfig) -> Self {
        Self {
            horses: Vec::new(),
            races: Vec::new(),
            current_round: 0,
            all_results: Vec::new(),
            is_racing: false,
            engine: None,
            engine_config,
        }
    }

    // ── Commands ────────────────────────────────────────────────────────

    /// Replace the roster. Any schedule built on the old horses is cleared.
    pub fn generate_horses(&mut self, rng: &mut impl Rng) {
        self.horses = generate_horses(rng);
        self.clear_schedule();
        info!("generated {} horses", self.horses.len());
    }

    /// Build a fresh 6-race schedule and reset tournament progress.
    pub fn generate_schedule(&mut self, rng: &mut impl Rng) -> Result<(), CommandError> {
        let races = generate_schedule(&self.horses, rng)?;
        self.races = races;
        self.current_round = 0;
        self.all_results.clear();
        self.is_racing = false;
        self.engine = None;
        info!("generated schedule of {} races", self.races.len());
        Ok(())
    }

    /// Start simulating the current round. Rejected while another race runs
    /// or when the current race is not pending.
    pub fn start_race(&mut self, rng: &mut impl Rng) -> Result<(), CommandError> {
        if self.races.is_empty() {
            return Err(CommandError::NoSchedule);
        }
        if self.is_racing {
            return Err(CommandError::NotEligible);
        }
        let race = &self.races[self.current_round];
        if race.status != RaceStatus::Pending {
            return Err(CommandError::NotEligible);
        }

        reset_positions(&mut self.horses);
        let engine = RaceEngine::new(race, &self.horses, self.engine_config, rng);

        let race = &mut self.races[self.current_round];
        race.status = RaceStatus::Running;
        self.is_racing = true;
        self.engine = Some(engine);
        info!("round {} started over {}m", race.round, race.distance);
        Ok(())
    }

    /// Advance one animation frame of `dt` wall seconds.
    ///
    /// No-op between races. On completion this commits the final results,
    /// transitions the race to finished, and drops the engine.
    pub fn tick(&mut self, dt: f64, rng: &mut impl Rng) -> Vec<RaceEvent> {
        let events = match self.engine.as_mut() {
            Some(engine) => engine.step(dt, &mut self.horses, rng),
            None => return Vec::new(),
        };

        for event in &events {
            match event {
                RaceEvent::HorseFinished {
                    horse_id,
                    position,
                    time,
                } => self.record_finish(*horse_id, *position, *time),
                RaceEvent::FirstHorseFinished => {
                    self.races[self.current_round].showing_results = true;
                }
                RaceEvent::RaceFinished => self.finish_current_race(),
                RaceEvent::CountdownTick { .. } | RaceEvent::RaceStarted => {}
            }
        }
        events
    }

    /// Move the round pointer forward. No-op on the last round.
    pub fn advance_round(&mut self) -> Result<(), CommandError> {
        if self.races.is_empty() {
            return Err(CommandError::NoSchedule);
        }
        if self.current_round + 1 >= self.races.len() {
            return Err(CommandError::NotEligible);
        }
        self.current_round += 1;
        Ok(())
    }

    /// Clear schedule, round pointer, results, and any in-flight race.
    ///
    /// Dropping the engine here is the cancellation mechanism: no later
    /// frame can mutate state once the engine is gone. Idempotent.
    pub fn reset_all(&mut self) {
        self.clear_schedule();
    }

    // ── Projections (read-only, no side effects) ────────────────────────

    pub fn horses(&self) -> &[Horse] {
        &self.horses
    }

    pub fn races(&self) -> &[Race] {
        &self.races
    }

    pub fn current_race(&self) -> Option<&Race> {
        self.races.get(self.current_round)
    }

    /// 1-based round number for display.
    pub fn current_round(&self) -> usize {
        self.current_round + 1
    }

    pub fn total_rounds(&self) -> usize {
        TOTAL_ROUNDS
    }

    pub fn is_racing(&self) -> bool {
        self.is_racing
    }

    pub fn is_schedule_generated(&self) -> bool {
        !self.races.is_empty()
    }

    pub fn can_start_race(&self) -> bool {
        !self.is_racing
            && self
                .current_race()
                .map(|r| r.status == RaceStatus::Pending)
                .unwrap_or(false)
    }

    pub fn can_advance_round(&self) -> bool {
        self.current_round + 1 < self.races.len()
            && self
                .current_race()
                .map(Race::is_finished)
                .unwrap_or(false)
    }

    pub fn is_all_races_finished(&self) -> bool {
        !self.races.is_empty()
            && self.current_round == self.races.len() - 1
            && self.races[self.current_round].is_finished()
    }

    /// Live (possibly partial) result list for the current race.
    pub fn current_race_results(&self) -> &[RaceResult] {
        self.current_race().map(|r| r.results.as_slice()).unwrap_or(&[])
    }

    pub fn is_showing_results(&self) -> bool {
        self.current_race().map(|r| r.showing_results).unwrap_or(false)
    }

    pub fn all_results(&self) -> &[Vec<RaceResult>] {
        &self.all_results
    }

    /// Countdown seconds remaining before the current race's gate opens.
    pub fn countdown_remaining(&self) -> Option<f64> {
        self.engine.as_ref().map(RaceEngine::countdown_remaining)
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn clear_schedule(&mut self) {
        self.races.clear();
        self.current_round = 0;
        self.all_results.clear();
        self.is_racing = false;
        self.engine = None;
    }

    fn record_finish(&mut self, horse_id: u32, position: u32, time: f64) {
        let name = self
            .horses
            .iter()
            .find(|h| h.id == horse_id)
            .map(|h| h.name.clone())
            .unwrap_or_default();

        let race = &mut self.races[self.current_round];
        race.results.push(RaceResult {
            position,
            horse_id,
            horse_name: name,
            time,
        });
        if position == 1 {
            race.winner = Some(horse_id);
        }
    }

    fn finish_current_race(&mut self) {
        let round = self.current_round;
        let race = &mut self.races[round];
        race.status = RaceStatus::Finished;
        race.showing_results = true;

        // Overwrite rather than duplicate if this round slot already exists.
        let results = race.results.clone();
        if round < self.all_results.len() {
            self.all_results[round] = results;
        } else {
            self.all_results.push(results);
        }

        self.is_racing = false;
        self.engine = None;
        info!("round {} finished", round + 1);
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
