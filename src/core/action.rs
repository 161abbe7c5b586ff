//! Player actions as discrete values.
//!
//! Hosts translate button presses into `Action`s and hand them to
//! `RoundEngine::apply`. `RoundEngine::legal_actions` reports which of
//! them are currently enabled.

use serde::{Deserialize, Serialize};

/// A single user (or scheduled computer) action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Initial throw of the round, or the tie-breaker roll.
    Roll,
    /// Flip the reroll mark on one human die.
    Toggle(usize),
    /// Reroll the marked human dice.
    Reroll,
    /// One computer reroll opportunity.
    ComputerReroll,
    /// Bank both sums and resolve the round.
    Score,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Roll => write!(f, "roll"),
            Action::Toggle(index) => write!(f, "toggle {index}"),
            Action::Reroll => write!(f, "reroll"),
            Action::ComputerReroll => write!(f, "computer reroll"),
            Action::Score => write!(f, "score"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Action::Toggle(3).to_string(), "toggle 3");
        assert_eq!(Action::ComputerReroll.to_string(), "computer reroll");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Toggle(2);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}
