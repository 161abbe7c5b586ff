//! Dice randomness: the `DiceSource` seam plus seeded and scripted sources.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Serializable**: O(1) state capture and restore for host persistence
//! - **Scriptable**: `ScriptedDice` replays exact coin/face sequences
//!
//! ## Usage
//!
//! ```
//! use roll_master::core::{DiceSource, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.roll_die();
//! assert!((1..=6).contains(&face));
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll_die(), face);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::die::{FACE_MAX, FACE_MIN};

/// Source of the two random primitives the game needs.
///
/// Every roll and every computer decision goes through this trait, so a
/// caller can swap the process-wide generator for a seeded or scripted one.
pub trait DiceSource {
    /// Flip an unbiased coin. `true` is heads.
    fn flip_coin(&mut self) -> bool;

    /// Roll one die, uniform in `[1, 6]`.
    fn roll_die(&mut self) -> u8;
}

impl<S: DiceSource + ?Sized> DiceSource for &mut S {
    fn flip_coin(&mut self) -> bool {
        (**self).flip_coin()
    }

    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }
}

/// Seeded dice generator.
///
/// Uses ChaCha8 for speed while keeping a restorable stream position.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GameRng {
    fn flip_coin(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(FACE_MIN..=FACE_MAX)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Dice source that replays pre-recorded outcomes.
///
/// Coins and faces are kept in separate queues so a scenario can be
/// written as "heads, then heads/tails/heads per die" independently of
/// which faces come up.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    coins: VecDeque<bool>,
    faces: VecDeque<u8>,
}

impl ScriptedDice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue coin outcomes (`true` = heads).
    #[must_use]
    pub fn with_coins(mut self, coins: &[bool]) -> Self {
        self.coins.extend(coins.iter().copied());
        self
    }

    /// Queue die faces. Each must be in `[1, 6]`.
    #[must_use]
    pub fn with_faces(mut self, faces: &[u8]) -> Self {
        for &face in faces {
            assert!(
                (FACE_MIN..=FACE_MAX).contains(&face),
                "scripted face {face} outside 1..=6"
            );
            self.faces.push_back(face);
        }
        self
    }

    /// Coins not yet consumed.
    #[must_use]
    pub fn remaining_coins(&self) -> usize {
        self.coins.len()
    }

    /// Faces not yet consumed.
    #[must_use]
    pub fn remaining_faces(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    fn flip_coin(&mut self) -> bool {
        self.coins.pop_front().expect("ScriptedDice ran out of coin flips")
    }

    fn roll_die(&mut self) -> u8 {
        self.faces.pop_front().expect("ScriptedDice ran out of die faces")
    }
}
