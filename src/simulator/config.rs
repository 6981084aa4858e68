//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of full tournaments to play
    pub num_tournaments: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frame delta fed to the engine, in milliseconds of wall time
    pub tick_ms: u64,

    /// Race-clock compression factor
    pub time_scale: f64,

    /// Safety cap on ticks per race before the run is abandoned
    pub max_ticks_per_race: u64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-tournament)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_tournaments: 1000,
            seed: None,
            tick_ms: 16,
            time_scale: 50.0,
            max_ticks_per_race: 1_000_000,
            verbosity: 1,
        }
    }
}
