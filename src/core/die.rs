//! Dice and the fixed five-die hand.

use serde::{Deserialize, Serialize};

use super::rng::DiceSource;

/// Number of dice each player rolls.
pub const DICE_PER_HAND: usize = 5;

/// Lowest face value.
pub const FACE_MIN: u8 = 1;

/// Highest face value.
pub const FACE_MAX: u8 = 6;

/// A single die: its face and whether the human has marked it for reroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    pub value: u8,
    pub selected: bool,
}

impl Default for Die {
    fn default() -> Self {
        Self::new(FACE_MIN)
    }
}

impl Die {
    /// Create an unselected die showing `value`.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self {
            value,
            selected: false,
        }
    }

    /// Create an unselected die with a fresh random face.
    pub fn rolled(rng: &mut impl DiceSource) -> Self {
        Self::new(rng.roll_die())
    }

    /// Whether the face is a legal die value.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (FACE_MIN..=FACE_MAX).contains(&self.value)
    }
}

/// One player's five dice.
///
/// Positions are stable so selection can be addressed by index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice([Die; DICE_PER_HAND]);

impl Dice {
    /// Dice showing the given faces, none selected.
    #[must_use]
    pub fn from_values(values: [u8; DICE_PER_HAND]) -> Self {
        Self(values.map(Die::new))
    }

    /// Five freshly rolled dice, none selected.
    pub fn roll(rng: &mut impl DiceSource) -> Self {
        Self(std::array::from_fn(|_| Die::rolled(rng)))
    }

    /// Sum of the faces.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|d| u32::from(d.value)).sum()
    }

    /// Face values in position order.
    #[must_use]
    pub fn values(&self) -> [u8; DICE_PER_HAND] {
        self.0.map(|d| d.value)
    }

    /// Whether any die is marked for reroll.
    #[must_use]
    pub fn any_selected(&self) -> bool {
        self.0.iter().any(|d| d.selected)
    }

    /// Indices of dice marked for reroll.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, d)| d.selected)
            .map(|(i, _)| i)
    }

    /// Clear every selection mark.
    pub fn clear_selection(&mut self) {
        for die in &mut self.0 {
            die.selected = false;
        }
    }

    /// Get a die by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Die> {
        self.0.get(index)
    }

    /// Get a mutable die by position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Die> {
        self.0.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Die> {
        self.0.iter_mut()
    }

    /// Whether every face is in `[1, 6]`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(Die::is_valid)
    }
}

impl std::ops::Index<usize> for Dice {
    type Output = Die;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, die) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if die.selected {
                write!(f, "[{}]", die.value)?;
            } else {
                write!(f, " {} ", die.value)?;
            }
        }
        Ok(())
    }
}
