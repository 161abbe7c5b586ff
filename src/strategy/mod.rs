//! Computer reroll policies.
//!
//! The computer plays with a coin-flip heuristic: each reroll opportunity
//! is taken with probability 1/2, and when taken each die is rerolled
//! with probability 1/2. Policies are trait-based so a host can swap in
//! a different opponent without touching the round engine.

pub mod computer;

pub use computer::{computer_strategy, CoinFlipPolicy, RerollPolicy};
