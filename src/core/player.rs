//! Players: which side is which, the winner marker, and per-player state.

use serde::{Deserialize, Serialize};

use super::die::Dice;

/// Maximum rerolls per round for either player.
pub const MAX_REROLLS: u8 = 2;

/// The two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::Human, Side::Computer];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// Outcome marker for a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    #[default]
    None,
    Human,
    Computer,
}

impl Winner {
    /// The winning side, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Winner::None => None,
            Winner::Human => Some(Side::Human),
            Winner::Computer => Some(Side::Computer),
        }
    }

    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Winner::None)
    }
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Winner::Human,
            Side::Computer => Winner::Computer,
        }
    }
}

/// One player's dice and counters.
///
/// `roll_count` is 1 once this round's initial roll has happened.
/// `reroll_count` counts rerolls used this round, at most [`MAX_REROLLS`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    pub dice: Dice,
    pub total_score: u32,
    pub roll_count: u8,
    pub reroll_count: u8,
}

impl PlayerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the initial roll of this round has happened.
    #[must_use]
    pub fn has_rolled(&self) -> bool {
        self.roll_count > 0
    }

    /// Rerolls still available this round.
    #[must_use]
    pub fn rerolls_left(&self) -> u8 {
        MAX_REROLLS.saturating_sub(self.reroll_count)
    }

    /// Current face sum.
    #[must_use]
    pub fn current_sum(&self) -> u32 {
        self.dice.sum()
    }

    /// Reset per-round counters, keeping dice and total.
    pub fn reset_round(&mut self) {
        self.roll_count = 0;
        self.reroll_count = 0;
        self.dice.clear_selection();
    }
}
