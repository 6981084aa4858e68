//! Derby - Terminal Horse-Racing Tournament Library
//!
//! This module exposes the roster generator, race simulation engine, and
//! tournament state machine for testing and external use. The terminal
//! frontend (main.rs) and the headless balance simulator both drive the
//! same core.

pub mod core;
pub mod simulator;
pub mod ui;

pub use crate::core::constants::{HORSE_COUNT, HORSES_PER_RACE, RACE_DISTANCES, TOTAL_ROUNDS};
pub use crate::core::engine::{EngineConfig, RaceEngine, RaceEvent};
pub use crate::core::horse::Horse;
pub use crate::core::race::{Race, RaceResult, RaceStatus};
pub use crate::core::tournament::{CommandError, Tournament};
