//! Core types: dice, players, state, actions, RNG, configuration, errors.
//!
//! Everything here is plain data. The rules that move a `GameState` from
//! one snapshot to the next live in `rules`.

pub mod die;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use die::{Die, Dice, DICE_PER_HAND, FACE_MAX, FACE_MIN};
pub use player::{PlayerState, Side, Winner, MAX_REROLLS};
pub use rng::{DiceSource, GameRng, GameRngState, ScriptedDice};
pub use config::{GameConfig, DEFAULT_TARGET_SCORE};
pub use action::Action;
pub use state::{GameState, RoundRecord, MAX_TOTAL_SCORE};
pub use error::{EngineError, Result};
