//! Game state snapshot.
//!
//! ## GameState
//!
//! The complete, authoritative state of one game plus the session's win
//! counters. Every engine operation takes a snapshot and returns a new one;
//! nothing else is hidden anywhere. Hosts persist it with serde.
//!
//! ## RoundRecord
//!
//! One entry per scored round or tie-breaker roll, kept in an `im::Vector`
//! so cloning a snapshot stays O(1) as the game goes on.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::die::{DICE_PER_HAND, FACE_MAX};
use super::error::{EngineError, Result};
use super::player::{PlayerState, Side, Winner, MAX_REROLLS};

/// Largest total a snapshot may carry: one more round must still fit in a `u32`.
pub const MAX_TOTAL_SCORE: u32 = u32::MAX - (DICE_PER_HAND as u32) * (FACE_MAX as u32);

/// Face sums of one completed round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Attempt number the round was played as.
    pub attempt: u32,

    /// Human's face sum for the round.
    pub human_sum: u32,

    /// Computer's face sum for the round.
    pub computer_sum: u32,

    /// Whether this was a sudden-death tie-breaker roll.
    pub tie_breaker: bool,
}

impl RoundRecord {
    #[must_use]
    pub fn new(attempt: u32, human_sum: u32, computer_sum: u32, tie_breaker: bool) -> Self {
        Self {
            attempt,
            human_sum,
            computer_sum,
            tie_breaker,
        }
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub human: PlayerState,
    pub computer: PlayerState,

    /// Total needed to win.
    pub target_score: u32,

    /// Round number, starting at 1.
    pub attempt_count: u32,

    pub game_ended: bool,
    pub winner: Winner,

    /// Set while the game is in sudden-death after tied totals.
    pub is_tie_breaker: bool,

    // === Session ===
    pub human_wins: u32,
    pub computer_wins: u32,

    /// Completed rounds, oldest first.
    pub history: Vector<RoundRecord>,
}

impl GameState {
    /// Fresh game with zeroed players and the given session counters.
    ///
    /// Does not check `target_score`; use `RoundEngine::start_round` for that.
    #[must_use]
    pub fn new(target_score: u32, human_wins: u32, computer_wins: u32) -> Self {
        Self {
            human: PlayerState::new(),
            computer: PlayerState::new(),
            target_score,
            attempt_count: 1,
            game_ended: false,
            winner: Winner::None,
            is_tie_breaker: false,
            human_wins,
            computer_wins,
            history: Vector::new(),
        }
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }

    /// Accumulated score.
    #[must_use]
    pub fn total(&self, side: Side) -> u32 {
        self.player(side).total_score
    }

    /// Face sum of the dice currently showing.
    #[must_use]
    pub fn current_sum(&self, side: Side) -> u32 {
        self.player(side).current_sum()
    }

    /// Side with the higher total, `None` when level.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.human.total_score.cmp(&self.computer.total_score) {
            std::cmp::Ordering::Greater => Some(Side::Human),
            std::cmp::Ordering::Less => Some(Side::Computer),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Session wins for a side.
    #[must_use]
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human_wins,
            Side::Computer => self.computer_wins,
        }
    }

    // === Action gating ===

    /// Throw is available (also the tie-breaker roll).
    #[must_use]
    pub fn can_roll(&self) -> bool {
        !self.game_ended && !self.human.has_rolled()
    }

    /// Dice may be tapped to toggle selection.
    #[must_use]
    pub fn can_select(&self) -> bool {
        !self.game_ended && self.human.has_rolled() && self.human.reroll_count < MAX_REROLLS
    }

    /// Reroll is available.
    #[must_use]
    pub fn can_reroll(&self) -> bool {
        self.can_select()
    }

    /// The computer still has a reroll opportunity this round.
    #[must_use]
    pub fn can_computer_reroll(&self) -> bool {
        !self.game_ended && self.computer.has_rolled() && self.computer.reroll_count < MAX_REROLLS
    }

    /// Score is available.
    #[must_use]
    pub fn can_score(&self) -> bool {
        !self.game_ended && self.human.has_rolled()
    }

    // === Validation ===

    /// Check structural invariants of a snapshot that came from outside.
    pub fn validate(&self) -> Result<()> {
        if self.target_score == 0 {
            return Err(EngineError::Snapshot("target score is zero".into()));
        }
        if self.attempt_count == 0 || self.attempt_count == u32::MAX {
            return Err(EngineError::Snapshot(format!(
                "attempt count {} out of range",
                self.attempt_count
            )));
        }
        if self.human_wins == u32::MAX || self.computer_wins == u32::MAX {
            return Err(EngineError::Snapshot("session win counter saturated".into()));
        }
        for side in Side::ALL {
            let player = self.player(side);
            if !player.dice.is_valid() {
                return Err(EngineError::Snapshot(format!(
                    "{side} dice {:?} outside 1..=6 (expected {DICE_PER_HAND} faces)",
                    player.dice.values()
                )));
            }
            if player.roll_count > 1 {
                return Err(EngineError::Snapshot(format!(
                    "{side} roll count {} exceeds 1",
                    player.roll_count
                )));
            }
            if player.reroll_count > MAX_REROLLS {
                return Err(EngineError::Snapshot(format!(
                    "{side} reroll count {} exceeds {MAX_REROLLS}",
                    player.reroll_count
                )));
            }
            if player.reroll_count > 0 && !player.has_rolled() {
                return Err(EngineError::Snapshot(format!(
                    "{side} rerolled {} times without an initial roll",
                    player.reroll_count
                )));
            }
            if player.total_score > MAX_TOTAL_SCORE {
                return Err(EngineError::Snapshot(format!(
                    "{side} total {} exceeds {MAX_TOTAL_SCORE}",
                    player.total_score
                )));
            }
        }
        if self.game_ended != self.winner.is_decided() {
            return Err(EngineError::Snapshot(format!(
                "game_ended = {} but winner = {:?}",
                self.game_ended, self.winner
            )));
        }
        if self.is_tie_breaker && self.game_ended {
            return Err(EngineError::Snapshot(
                "tie-breaker pending after the game ended".into(),
            ));
        }
        if self.is_tie_breaker && (self.human.has_rolled() || self.computer.has_rolled()) {
            return Err(EngineError::Snapshot(
                "tie-breaker pending but a roll is already recorded".into(),
            ));
        }
        Ok(())
    }
}
