//! Headless tournament simulator for balance analysis.
//!
//! Drives full tournaments at a fixed tick rate with no terminal attached
//! and aggregates outcome statistics: how often condition wins out, how
//! long each round takes, and how spread the finishes are.

pub mod config;
pub mod report;
pub mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
