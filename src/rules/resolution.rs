//! Win and tie-breaker resolution.
//!
//! Normal rounds compare accumulated totals against the target. A tie at
//! or over the target starts sudden-death, where single-roll sums are
//! compared until they differ.

use crate::core::{GameState, Side, Winner};

/// What a round's outcome means for the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Nobody has reached the target yet.
    Continue,
    /// Level at or over the target (or level in sudden-death).
    TieBreaker,
    /// The game is over.
    Won(Side),
}

fn higher(human: u32, computer: u32) -> Side {
    if human > computer {
        Side::Human
    } else {
        Side::Computer
    }
}

/// Resolve accumulated totals after a scored round.
///
/// Reaching the target exactly is enough; overshooting is allowed.
#[must_use]
pub fn resolve_totals(human_total: u32, computer_total: u32, target: u32) -> Resolution {
    if human_total < target && computer_total < target {
        Resolution::Continue
    } else if human_total == computer_total {
        Resolution::TieBreaker
    } else {
        Resolution::Won(higher(human_total, computer_total))
    }
}

/// Resolve one sudden-death roll.
#[must_use]
pub fn resolve_tie_break(human_sum: u32, computer_sum: u32) -> Resolution {
    if human_sum == computer_sum {
        Resolution::TieBreaker
    } else {
        Resolution::Won(higher(human_sum, computer_sum))
    }
}

/// Write a resolution into the state.
///
/// A win ends the game and bumps the winner's session counter once.
pub(crate) fn apply(state: &mut GameState, resolution: Resolution) {
    match resolution {
        Resolution::Continue => {}
        Resolution::TieBreaker => {
            if !state.is_tie_breaker {
                tracing::info!(
                    attempt = state.attempt_count,
                    total = state.human.total_score,
                    "totals tied at target, entering tie-breaker"
                );
            }
            state.is_tie_breaker = true;
        }
        Resolution::Won(side) => {
            state.game_ended = true;
            state.winner = Winner::from(side);
            state.is_tie_breaker = false;
            match side {
                Side::Human => state.human_wins += 1,
                Side::Computer => state.computer_wins += 1,
            }
            tracing::info!(
                winner = %side,
                attempt = state.attempt_count,
                human_total = state.human.total_score,
                computer_total = state.computer.total_score,
                human_wins = state.human_wins,
                computer_wins = state.computer_wins,
                "game over"
            );
        }
    }
}
