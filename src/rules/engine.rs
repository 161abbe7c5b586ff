//! The round engine.
//!
//! `RoundEngine` moves a `GameState` snapshot through a round:
//! initial roll, up to two human rerolls, up to two computer reroll
//! opportunities, then scoring and win/tie resolution.
//!
//! ## Implementation Notes
//!
//! - Every operation takes `&GameState` and returns a new `GameState`.
//! - Actions whose preconditions fail return an unchanged clone. Only a
//!   bad die index or bad target is an error.
//! - The engine owns its dice source and nothing else. It has no notion
//!   of time; hosts schedule computer rerolls and animations themselves.

use crate::core::{
    Action, Dice, DiceSource, EngineError, GameConfig, GameRng, GameState, Result, RoundRecord,
    Side, DICE_PER_HAND,
};
use crate::strategy::{CoinFlipPolicy, RerollPolicy};

use super::resolution::{self, resolve_tie_break, resolve_totals};

/// State-transition engine for the dice game.
#[derive(Clone, Debug)]
pub struct RoundEngine<R = GameRng, P = CoinFlipPolicy> {
    rng: R,
    policy: P,
}

impl RoundEngine<GameRng, CoinFlipPolicy> {
    /// Engine with a seeded generator and the coin-flip computer.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Engine with an OS-seeded generator and the coin-flip computer.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl<R: DiceSource> RoundEngine<R, CoinFlipPolicy> {
    /// Engine drawing from `rng` with the coin-flip computer.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self::with_policy(rng, CoinFlipPolicy)
    }
}

impl<R: DiceSource, P: RerollPolicy> RoundEngine<R, P> {
    /// Engine with a custom computer policy.
    #[must_use]
    pub fn with_policy(rng: R, policy: P) -> Self {
        Self { rng, policy }
    }

    /// The dice source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Mutable access to the dice source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consume the engine, returning its dice source.
    #[must_use]
    pub fn into_rng(self) -> R {
        self.rng
    }

    // === Game lifecycle ===

    /// Start a fresh game.
    ///
    /// Session win counters carry over from `prior` (zero on first launch).
    /// Callers reading free text should go through
    /// [`GameConfig::parse_target`] first so bad input becomes 101.
    pub fn start_round(&self, target: i64, prior: Option<&GameState>) -> Result<GameState> {
        let target = GameConfig::check_target(target)?;
        let (human_wins, computer_wins) =
            prior.map_or((0, 0), |p| (p.human_wins, p.computer_wins));

        tracing::debug!(target, human_wins, computer_wins, "game started");
        Ok(GameState::new(target, human_wins, computer_wins))
    }

    /// Start a fresh game from a config.
    pub fn start_with_config(
        &self,
        config: &GameConfig,
        prior: Option<&GameState>,
    ) -> Result<GameState> {
        config.validate()?;
        self.start_round(i64::from(config.target_score), prior)
    }

    /// Start another game with the same target, keeping the session counters.
    #[must_use]
    pub fn new_game(&self, state: &GameState) -> GameState {
        tracing::debug!(
            target = state.target_score,
            human_wins = state.human_wins,
            computer_wins = state.computer_wins,
            "new game"
        );
        GameState::new(state.target_score, state.human_wins, state.computer_wins)
    }

    // === Round operations ===

    /// Throw all ten dice for the round.
    ///
    /// During a tie-breaker this is the sudden-death roll instead.
    #[must_use]
    pub fn initial_roll(&mut self, state: &GameState) -> GameState {
        if !state.can_roll() {
            tracing::trace!("initial roll ignored");
            return state.clone();
        }
        if state.is_tie_breaker {
            return self.tie_break_roll(state);
        }

        let mut next = state.clone();
        for side in Side::ALL {
            let player = next.player_mut(side);
            player.dice = Dice::roll(&mut self.rng);
            player.roll_count = 1;
        }

        tracing::debug!(
            attempt = next.attempt_count,
            human = ?next.human.dice.values(),
            computer = ?next.computer.dice.values(),
            "initial roll"
        );
        next
    }

    /// Flip the reroll mark on the human die at `index`.
    pub fn toggle_select(&self, state: &GameState, index: usize) -> Result<GameState> {
        if index >= DICE_PER_HAND {
            return Err(EngineError::IndexOutOfRange { index });
        }
        if !state.can_select() {
            tracing::trace!(index, "toggle ignored");
            return Ok(state.clone());
        }

        let mut next = state.clone();
        let die = next
            .human
            .dice
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfRange { index })?;
        die.selected = !die.selected;

        tracing::debug!(index, selected = die.selected, "die toggled");
        Ok(next)
    }

    /// Reroll the human dice marked for reroll.
    ///
    /// Unmarked dice are kept even when nothing is marked. The reroll is
    /// still counted.
    #[must_use]
    pub fn human_reroll(&mut self, state: &GameState) -> GameState {
        if !state.can_reroll() {
            tracing::trace!("human reroll ignored");
            return state.clone();
        }

        let mut next = state.clone();
        for die in next.human.dice.iter_mut().filter(|d| d.selected) {
            die.value = self.rng.roll_die();
            die.selected = false;
        }
        next.human.reroll_count += 1;

        tracing::debug!(
            reroll = next.human.reroll_count,
            dice = ?next.human.dice.values(),
            "human reroll"
        );
        next
    }

    /// Apply one computer reroll opportunity.
    ///
    /// The opportunity is used up whether or not the policy rerolls.
    #[must_use]
    pub fn computer_reroll(&mut self, state: &GameState) -> GameState {
        if !state.can_computer_reroll() {
            tracing::trace!("computer reroll ignored");
            return state.clone();
        }

        let mut next = state.clone();
        next.computer.dice = self.computer_strategy(&state.computer.dice);
        next.computer.reroll_count += 1;

        tracing::debug!(
            reroll = next.computer.reroll_count,
            dice = ?next.computer.dice.values(),
            "computer reroll"
        );
        next
    }

    /// One step of the computer policy on bare dice.
    pub fn computer_strategy(&mut self, dice: &Dice) -> Dice {
        self.policy.reroll(dice, &mut self.rng)
    }

    /// Bank both face sums and resolve the round.
    #[must_use]
    pub fn score(&self, state: &GameState) -> GameState {
        if !state.can_score() {
            tracing::trace!("score ignored");
            return state.clone();
        }

        let mut next = state.clone();
        let human_sum = next.human.current_sum();
        let computer_sum = next.computer.current_sum();

        next.human.total_score += human_sum;
        next.computer.total_score += computer_sum;
        next.history
            .push_back(RoundRecord::new(next.attempt_count, human_sum, computer_sum, false));
        next.attempt_count += 1;

        tracing::debug!(
            attempt = state.attempt_count,
            human_sum,
            computer_sum,
            human_total = next.human.total_score,
            computer_total = next.computer.total_score,
            "round scored"
        );

        let outcome = resolve_totals(
            next.human.total_score,
            next.computer.total_score,
            next.target_score,
        );
        resolution::apply(&mut next, outcome);

        next.human.reset_round();
        next.computer.reset_round();
        next
    }

    /// Sudden-death roll: fresh dice for both, compare the raw sums.
    fn tie_break_roll(&mut self, state: &GameState) -> GameState {
        let mut next = state.clone();
        next.human.dice = Dice::roll(&mut self.rng);
        next.computer.dice = Dice::roll(&mut self.rng);

        let human_sum = next.human.current_sum();
        let computer_sum = next.computer.current_sum();
        next.history
            .push_back(RoundRecord::new(next.attempt_count, human_sum, computer_sum, true));
        next.attempt_count += 1;

        tracing::debug!(human_sum, computer_sum, "tie-breaker roll");

        let outcome = resolve_tie_break(human_sum, computer_sum);
        resolution::apply(&mut next, outcome);

        if next.game_ended {
            next.human.roll_count = 1;
            next.computer.roll_count = 1;
        }
        next
    }

    // === Actions ===

    /// Actions currently enabled, in button order.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let mut actions = Vec::new();

        if state.can_roll() {
            actions.push(Action::Roll);
        }
        if state.can_select() {
            actions.extend((0..DICE_PER_HAND).map(Action::Toggle));
            actions.push(Action::Reroll);
        }
        if state.can_computer_reroll() {
            actions.push(Action::ComputerReroll);
        }
        if state.can_score() {
            actions.push(Action::Score);
        }

        actions
    }

    /// Apply an action to a snapshot.
    pub fn apply(&mut self, state: &GameState, action: Action) -> Result<GameState> {
        match action {
            Action::Roll => Ok(self.initial_roll(state)),
            Action::Toggle(index) => self.toggle_select(state, index),
            Action::Reroll => Ok(self.human_reroll(state)),
            Action::ComputerReroll => Ok(self.computer_reroll(state)),
            Action::Score => Ok(self.score(state)),
        }
    }
}
