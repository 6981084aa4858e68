//! Core tournament logic: entity generation, race simulation, state machine.

pub mod constants;
pub mod engine;
pub mod horse;
pub mod names;
pub mod race;
pub mod tournament;
