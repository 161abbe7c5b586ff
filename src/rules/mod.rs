//! Round rules for the dice game.
//!
//! `RoundEngine` applies roll, selection, reroll and scoring actions to
//! `GameState` snapshots. `resolution` decides wins and tie-breakers
//! once a round has been scored.

pub mod engine;
pub mod resolution;

pub use engine::RoundEngine;
pub use resolution::{resolve_tie_break, resolve_totals, Resolution};
