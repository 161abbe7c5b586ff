//! The computer's coin-flip reroll heuristic.

use crate::core::{Dice, DiceSource, DICE_PER_HAND};

/// Policy for one computer reroll opportunity.
pub trait RerollPolicy {
    /// Return the dice after this opportunity. Pure apart from `rng`.
    fn reroll<R: DiceSource>(&self, dice: &Dice, rng: &mut R) -> Dice;
}

/// Coin-flip policy.
///
/// One coin decides whether to reroll at all; if heads, one coin per die
/// decides which dice are rerolled. Over two opportunities the computer
/// rerolls 0, 1 or 2 times with probability 1/4, 1/2, 1/4.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoinFlipPolicy;

impl CoinFlipPolicy {
    /// Draw the reroll mask for one opportunity.
    ///
    /// `None` means the computer declined. Consumes one coin, plus one per
    /// die when the first coin is heads. No faces are consumed.
    pub fn plan<R: DiceSource>(&self, rng: &mut R) -> Option<[bool; DICE_PER_HAND]> {
        if !rng.flip_coin() {
            return None;
        }
        Some(std::array::from_fn(|_| rng.flip_coin()))
    }
}

impl RerollPolicy for CoinFlipPolicy {
    fn reroll<R: DiceSource>(&self, dice: &Dice, rng: &mut R) -> Dice {
        let Some(mask) = self.plan(rng) else {
            return *dice;
        };

        let mut next = *dice;
        for (die, reroll) in next.iter_mut().zip(mask) {
            if reroll {
                die.value = rng.roll_die();
            }
        }
        next
    }
}

/// Apply one coin-flip reroll step to the computer's dice.
pub fn computer_strategy<R: DiceSource>(dice: &Dice, rng: &mut R) -> Dice {
    CoinFlipPolicy.reroll(dice, rng)
}
