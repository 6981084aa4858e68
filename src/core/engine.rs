//! Frame-driven race simulation engine.
//!
//! The engine owns the progression of a single race: it converts frame
//! deltas into horse movement, re-rolls per-horse surge factors on a fixed
//! interval, detects finish-line crossings in arrival order, and reports
//! completion exactly once. It never blocks or sleeps: the host loop calls
//! [`RaceEngine::step`] once per frame and yields in between.

use crate::core::constants::{
    COUNTDOWN_SECS, FINISH_TOLERANCE_FRACTION, MAX_START_DELAY_SECS, PACE_CONDITION_FLOOR,
    PACE_CONDITION_SPAN, RACE_BASE_SECONDS, RACE_SECONDS_PER_KM, SURGE_INTERVAL_SECS, SURGE_MAX,
    SURGE_MIN,
};
use crate::core::horse::Horse;
use crate::core::race::Race;
use log::debug;
use rand::Rng;

/// Engine tuning knobs supplied by the host.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Multiplier applied to frame deltas: the race clock runs this many
    /// times faster than the wall clock. The countdown is not scaled.
    pub time_scale: f64,
    /// Pre-race countdown in wall seconds. Zero skips it entirely.
    pub countdown_secs: f64,
    /// Upper bound on the per-horse gate delay, in race seconds.
    pub max_start_delay_secs: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            countdown_secs: COUNTDOWN_SECS,
            max_start_delay_secs: MAX_START_DELAY_SECS,
        }
    }
}

/// A single event produced by an engine step.
///
/// The tournament maps these onto race state; the frontend maps them onto
/// log lines and panel updates. Neither layer reaches into the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum RaceEvent {
    /// The pre-race countdown ticked over a whole second.
    CountdownTick { remaining: u32 },
    /// The gate opened; horses are on the track.
    RaceStarted,
    /// A horse crossed the line and was assigned the next rank.
    HorseFinished { horse_id: u32, position: u32, time: f64 },
    /// The first horse crossed; partial results may be revealed.
    FirstHorseFinished,
    /// Every horse has crossed. Emitted exactly once per race.
    RaceFinished,
}

/// Per-horse racing plan, fixed at the gate except for the surge factor.
#[derive(Debug, Clone)]
struct HorsePlan {
    horse_id: u32,
    /// Index into the roster slice handed to `step`.
    roster_idx: usize,
    /// Required average speed for this horse, in m/s of race time.
    base_speed: f64,
    /// Seconds of race time between the gun and this horse leaving the gate.
    start_delay: f64,
    /// Current surge/fade multiplier, re-rolled periodically.
    surge: f64,
    /// Race-clock instant of the next surge re-roll.
    next_surge_at: f64,
    finished: bool,
}

/// Drives one race from the gun to the last finisher.
#[derive(Debug)]
pub struct RaceEngine {
    distance: f64,
    finish_threshold: f64,
    config: EngineConfig,
    countdown: f64,
    started: bool,
    /// Race clock in seconds, running only after the countdown.
    clock: f64,
    plans: Vec<HorsePlan>,
    finishers: u32,
    first_finish_emitted: bool,
    finished_emitted: bool,
}

impl RaceEngine {
    /// Build the engine for `race`, planning each participating horse from
    /// the race distance and the horse's condition.
    pub fn new(race: &Race, roster: &[Horse], config: EngineConfig, rng: &mut impl Rng) -> Self {
        let distance = race.distance as f64;

        // Longer races take more time overall but less time per meter.
        let target_duration = RACE_BASE_SECONDS + (distance / 1000.0) * RACE_SECONDS_PER_KM;
        let required_speed = distance / target_duration;

        let plans = race
            .horses
            .iter()
            .filter_map(|&horse_id| {
                let roster_idx = roster.iter().position(|h| h.id == horse_id)?;
                let condition = roster[roster_idx].condition as f64;
                let base_speed =
                    required_speed * (PACE_CONDITION_FLOOR + (condition / 100.0) * PACE_CONDITION_SPAN);
                // Fatal configuration error, not a runtime retry case.
                assert!(base_speed > 0.0, "horse {} planned with non-positive speed", horse_id);
                Some(HorsePlan {
                    horse_id,
                    roster_idx,
                    base_speed,
                    start_delay: rng.gen_range(0.0..=config.max_start_delay_secs),
                    surge: rng.gen_range(SURGE_MIN..=SURGE_MAX),
                    next_surge_at: SURGE_INTERVAL_SECS,
                    finished: false,
                })
            })
            .collect();

        Self {
            distance,
            finish_threshold: distance * (1.0 - FINISH_TOLERANCE_FRACTION),
            config,
            countdown: config.countdown_secs,
            started: false,
            clock: 0.0,
            plans,
            finishers: 0,
            first_finish_emitted: false,
            finished_emitted: false,
        }
    }

    /// True once the completion event has been emitted.
    pub fn is_finished(&self) -> bool {
        self.finished_emitted
    }

    /// Seconds remaining on the pre-race countdown.
    pub fn countdown_remaining(&self) -> f64 {
        self.countdown.max(0.0)
    }

    /// Race clock in seconds (post-countdown).
    pub fn elapsed(&self) -> f64 {
        self.clock
    }

    /// Advance the race by one frame of `dt` wall seconds, mutating the
    /// positions and live speeds of the participating horses in `roster`.
    ///
    /// Work per step is bounded by the field size; yielding between frames
    /// is the caller's responsibility.
    pub fn step(&mut self, dt: f64, roster: &mut [Horse], rng: &mut impl Rng) -> Vec<RaceEvent> {
        let mut events = Vec::new();
        if self.finished_emitted {
            return events;
        }

        // An empty field resolves immediately rather than stalling forever.
        if self.plans.is_empty() {
            self.started = true;
            self.finished_emitted = true;
            events.push(RaceEvent::RaceFinished);
            return events;
        }

        if !self.started {
            let before = self.countdown.ceil();
            self.countdown -= dt;
            if self.countdown > 0.0 {
                if self.countdown.ceil() < before {
                    events.push(RaceEvent::CountdownTick {
                        remaining: self.countdown.ceil() as u32,
                    });
                }
                return events;
            }
            self.started = true;
            events.push(RaceEvent::RaceStarted);
            // The transition consumes the rest of this frame.
            return events;
        }

        let dt = dt * self.config.time_scale;
        self.clock += dt;

        let mut all_finished = true;
        for plan in &mut self.plans {
            if plan.finished {
                continue;
            }
            // Still in the gate this frame.
            if self.clock < plan.start_delay {
                all_finished = false;
                continue;
            }

            while self.clock >= plan.next_surge_at {
                plan.surge = rng.gen_range(SURGE_MIN..=SURGE_MAX);
                plan.next_surge_at += SURGE_INTERVAL_SECS;
            }

            let horse = &mut roster[plan.roster_idx];
            let effective_speed = plan.base_speed * plan.surge;
            horse.speed = effective_speed;

            // Only the post-delay portion of the frame counts as movement.
            let move_dt = (self.clock - plan.start_delay).min(dt);
            let advanced = (horse.position + effective_speed * move_dt).min(self.distance);
            // Never go backwards, whatever the frame timing did.
            horse.position = horse.position.max(advanced);

            if horse.position >= self.finish_threshold {
                horse.position = self.distance;
                plan.finished = true;
                self.finishers += 1;
                let time = self.clock - plan.start_delay;
                debug!(
                    "horse {} finished rank {} in {:.2}s",
                    plan.horse_id, self.finishers, time
                );
                events.push(RaceEvent::HorseFinished {
                    horse_id: plan.horse_id,
                    position: self.finishers,
                    time,
                });
                if !self.first_finish_emitted {
                    self.first_finish_emitted = true;
                    events.push(RaceEvent::FirstHorseFinished);
                }
            } else {
                all_finished = false;
            }
        }

        if all_finished {
            self.finished_emitted = true;
            events.push(RaceEvent::RaceFinished);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::horse::generate_horses;
    use crate::core::race::generate_schedule;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn no_countdown() -> EngineConfig {
        EngineConfig {
            countdown_secs: 0.0,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn empty_field_resolves_on_first_step() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut horses = generate_horses(&mut rng);
        let mut races = generate_schedule(&horses, &mut rng).unwrap();
        races[0].horses.clear();

        let mut engine = RaceEngine::new(&races[0], &horses, no_countdown(), &mut rng);
        let events = engine.step(0.016, &mut horses, &mut rng);
        assert_eq!(events, vec![RaceEvent::RaceFinished]);
        assert!(engine.is_finished());

        // Further steps are inert.
        assert!(engine.step(0.016, &mut horses, &mut rng).is_empty());
    }

    #[test]
    fn countdown_ticks_then_gate_opens() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut horses = generate_horses(&mut rng);
        let races = generate_schedule(&horses, &mut rng).unwrap();

        let config = EngineConfig {
            countdown_secs: 2.0,
            ..EngineConfig::default()
        };
        let mut engine = RaceEngine::new(&races[0], &horses, config, &mut rng);

        let events = engine.step(1.0, &mut horses, &mut rng);
        assert_eq!(events, vec![RaceEvent::CountdownTick { remaining: 1 }]);
        assert!(horses.iter().all(|h| h.position == 0.0));

        let events = engine.step(1.5, &mut horses, &mut rng);
        assert_eq!(events, vec![RaceEvent::RaceStarted]);
    }

    #[test]
    fn positions_never_decrease_between_frames() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut horses = generate_horses(&mut rng);
        let races = generate_schedule(&horses, &mut rng).unwrap();

        let mut engine = RaceEngine::new(&races[0], &horses, no_countdown(), &mut rng);
        let mut last: Vec<f64> = horses.iter().map(|h| h.position).collect();

        for _ in 0..20_000 {
            engine.step(0.016, &mut horses, &mut rng);
            for (horse, prev) in horses.iter().zip(&mut last) {
                assert!(horse.position >= *prev, "position went backwards");
                *prev = horse.position;
            }
            if engine.is_finished() {
                break;
            }
        }
        assert!(engine.is_finished(), "race never terminated");
    }
}
