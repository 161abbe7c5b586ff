//! # roll-master
//!
//! Round engine for a two-player (human vs. computer) five-dice scoring game.
//!
//! Each round both players throw five dice. The human may mark dice and
//! reroll them up to twice; the computer gets two coin-flip reroll
//! opportunities. Face sums are added to running totals and the first
//! total to reach the target wins. Level totals at the target go to a
//! sudden-death tie-breaker.
//!
//! ## Design Principles
//!
//! 1. **Snapshots In, Snapshots Out**: Every operation takes a `GameState`
//!    and returns a new one. There is no other state to save or restore.
//!
//! 2. **Tolerant Actions**: An action whose preconditions fail is a no-op.
//!    Only bad configuration and bad die indices are errors.
//!
//! 3. **Injected Randomness**: All dice and coins come from a `DiceSource`,
//!    so games can be seeded or scripted exactly.
//!
//! ## Example
//!
//! ```
//! use roll_master::{RoundEngine, Action};
//!
//! let mut engine = RoundEngine::with_seed(7);
//! let state = engine.start_round(101, None).unwrap();
//! let state = engine.apply(&state, Action::Roll).unwrap();
//! let state = engine.apply(&state, Action::Toggle(0)).unwrap();
//! let state = engine.apply(&state, Action::Reroll).unwrap();
//! let state = engine.computer_reroll(&state);
//! let state = engine.score(&state);
//!
//! assert_eq!(state.attempt_count, 2);
//! ```
//!
//! ## Modules
//!
//! - `core`: Dice, players, state, actions, RNG, configuration, errors
//! - `rules`: The round engine and win/tie resolution
//! - `strategy`: Computer reroll policies
//! - `snapshot`: Binary encoding of state for hosts

pub mod core;
pub mod rules;
pub mod strategy;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    Die, Dice, DICE_PER_HAND,
    Side, Winner, PlayerState, MAX_REROLLS,
    DiceSource, GameRng, GameRngState, ScriptedDice,
    GameConfig, DEFAULT_TARGET_SCORE,
    Action,
    GameState, RoundRecord, MAX_TOTAL_SCORE,
    EngineError, Result,
};

pub use crate::rules::{RoundEngine, Resolution, resolve_totals, resolve_tie_break};

pub use crate::strategy::{computer_strategy, CoinFlipPolicy, RerollPolicy};
