// Roster generation
pub const HORSE_COUNT: usize = 20;
pub const CONDITION_MIN: u8 = 1;
pub const CONDITION_MAX: u8 = 100;

// Baseline speed blend: every horse shares a common base capability,
// condition adds a bounded bonus, and a random band keeps outcomes from
// being condition-sorted.
pub const BASE_SPEED_SHARE: f64 = 0.8;
pub const CONDITION_SPEED_SHARE: f64 = 0.2;
pub const ROSTER_VARIATION_MIN: f64 = 0.9;
pub const ROSTER_VARIATION_MAX: f64 = 1.1;

// Tournament schedule
pub const TOTAL_ROUNDS: usize = 6;
pub const HORSES_PER_RACE: usize = 10;
pub const RACE_DISTANCES: [u32; TOTAL_ROUNDS] = [1200, 1400, 1600, 1800, 2000, 2200];

// Race pacing: an average horse finishes a 1 km race in ~60 s and a 2 km
// race in ~90 s, so longer races cost less time per meter.
pub const RACE_BASE_SECONDS: f64 = 30.0;
pub const RACE_SECONDS_PER_KM: f64 = 30.0;

// Condition scaling on the required average speed. The max/min ratio of
// expected speeds is (0.8 + 0.4) / (0.8 + 0.004) = ~1.49, so condition
// influences but never fully determines the outcome.
pub const PACE_CONDITION_FLOOR: f64 = 0.8;
pub const PACE_CONDITION_SPAN: f64 = 0.4;

// Gate behavior: each horse leaves up to this many seconds after the gun.
pub const MAX_START_DELAY_SECS: f64 = 0.3;

// Mid-race surges and fades: the per-horse speed multiplier is re-rolled
// in this band every interval of race time. This is the primary source of
// race-outcome unpredictability.
pub const SURGE_MIN: f64 = 0.95;
pub const SURGE_MAX: f64 = 1.05;
pub const SURGE_INTERVAL_SECS: f64 = 2.0;

// Finish threshold tolerance as a fraction of race distance. Zero means a
// horse finishes exactly when its clamped position reaches the distance.
pub const FINISH_TOLERANCE_FRACTION: f64 = 0.0;

// Pre-race countdown (cancellable by reset)
pub const COUNTDOWN_SECS: f64 = 3.0;

// Frontend frame rate (~60 FPS while a race animates)
pub const RACE_FRAME_MS: u64 = 16;
pub const IDLE_POLL_MS: u64 = 50;

// Real races run 30-90 s; the frontend compresses them by this factor.
pub const DEFAULT_TIME_SCALE: f64 = 8.0;
