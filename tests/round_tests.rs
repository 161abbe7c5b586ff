//! Round flow tests: rolling, selection, rerolls, scoring and game end.

use roll_master::{
    Action, Dice, EngineError, GameConfig, GameState, RoundEngine, ScriptedDice, Side, Winner,
};

fn engine_with(faces: &[u8]) -> RoundEngine<ScriptedDice> {
    RoundEngine::new(ScriptedDice::new().with_faces(faces))
}

/// A rolled state with the given running totals.
fn rolled_with_totals(
    engine: &mut RoundEngine<ScriptedDice>,
    target: i64,
    human_total: u32,
    computer_total: u32,
) -> GameState {
    let mut state = engine.start_round(target, None).unwrap();
    state.human.total_score = human_total;
    state.computer.total_score = computer_total;
    engine.initial_roll(&state)
}

// =============================================================================
// Selection and Rerolls
// =============================================================================

#[test]
fn test_toggle_flips_exactly_one_die() {
    let mut engine = engine_with(&[1, 2, 3, 4, 5, 6, 6, 6, 6, 6]);
    let state = rolled_with_totals(&mut engine, 101, 0, 0);

    for index in 0..5 {
        let next = engine.toggle_select(&state, index).unwrap();
        for other in 0..5 {
            assert_eq!(next.human.dice[other].value, state.human.dice[other].value);
            assert_eq!(
                next.human.dice[other].selected,
                (other == index) != state.human.dice[other].selected
            );
        }
        assert_eq!(next.computer, state.computer);
    }
}

#[test]
fn test_toggle_index_checked_even_when_disabled() {
    let engine = RoundEngine::with_seed(3);
    let state = engine.start_round(101, None).unwrap();

    assert_eq!(
        engine.toggle_select(&state, 42),
        Err(EngineError::IndexOutOfRange { index: 42 })
    );
}

#[test]
fn test_two_rerolls_then_locked() {
    let mut engine = engine_with(&[1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 6, 5]);
    let state = rolled_with_totals(&mut engine, 101, 0, 0);

    let state = engine.toggle_select(&state, 0).unwrap();
    let state = engine.human_reroll(&state);
    assert_eq!(state.human.dice.values(), [6, 1, 1, 1, 1]);

    let state = engine.toggle_select(&state, 4).unwrap();
    let state = engine.human_reroll(&state);
    assert_eq!(state.human.dice.values(), [6, 1, 1, 1, 5]);
    assert_eq!(state.human.reroll_count, 2);

    // Selection and reroll are now disabled.
    let toggled = engine.toggle_select(&state, 1).unwrap();
    assert_eq!(toggled, state);
    assert_eq!(engine.human_reroll(&state), state);
    assert_eq!(engine.legal_actions(&state), vec![Action::ComputerReroll, Action::Score]);
}

#[test]
fn test_reroll_before_roll_is_noop() {
    let mut engine = RoundEngine::with_seed(5);
    let state = engine.start_round(101, None).unwrap();

    assert_eq!(engine.human_reroll(&state), state);
    assert_eq!(engine.computer_reroll(&state), state);
}

// =============================================================================
// Scoring and Game End
// =============================================================================

#[test]
fn test_human_reaches_target_exactly() {
    // Human rolls 21 onto 80, computer rolls 20 onto 75: 101 vs 95.
    let mut engine = engine_with(&[5, 4, 4, 4, 4, 4, 4, 4, 4, 4]);
    let state = rolled_with_totals(&mut engine, 101, 80, 75);

    let scored = engine.score(&state);

    assert_eq!(scored.human.total_score, 101);
    assert_eq!(scored.computer.total_score, 95);
    assert!(scored.game_ended);
    assert_eq!(scored.winner, Winner::Human);
    assert_eq!(scored.human_wins, 1);
    assert_eq!(scored.computer_wins, 0);
}

#[test]
fn test_computer_overshoots_and_wins() {
    let mut engine = engine_with(&[1, 1, 1, 1, 1, 6, 6, 6, 6, 6]);
    let state = rolled_with_totals(&mut engine, 50, 40, 45);

    let scored = engine.score(&state);

    assert_eq!(scored.computer.total_score, 75);
    assert_eq!(scored.winner, Winner::Computer);
    assert_eq!(scored.computer_wins, 1);
}

#[test]
fn test_both_over_target_higher_wins() {
    let mut engine = engine_with(&[6, 6, 6, 6, 6, 5, 5, 5, 5, 5]);
    let state = rolled_with_totals(&mut engine, 101, 90, 92);

    let scored = engine.score(&state);

    assert_eq!(scored.human.total_score, 120);
    assert_eq!(scored.computer.total_score, 117);
    assert_eq!(scored.winner, Winner::Human);
}

#[test]
fn test_actions_after_game_end_are_noops() {
    let mut engine = engine_with(&[6, 6, 6, 6, 6, 1, 1, 1, 1, 1]);
    let state = rolled_with_totals(&mut engine, 20, 0, 0);
    let ended = engine.score(&state);
    assert!(ended.game_ended);

    assert_eq!(engine.initial_roll(&ended), ended);
    assert_eq!(engine.toggle_select(&ended, 0).unwrap(), ended);
    assert_eq!(engine.human_reroll(&ended), ended);
    assert_eq!(engine.computer_reroll(&ended), ended);
    assert_eq!(engine.score(&ended), ended);
}

#[test]
fn test_computer_rerolls_before_scoring() {
    let mut engine = RoundEngine::new(
        ScriptedDice::new()
            .with_faces(&[3, 3, 3, 3, 3, 1, 1, 1, 1, 1, 6, 6])
            .with_coins(&[true, true, true, false, false, false, false]),
    );
    let state = rolled_with_totals(&mut engine, 101, 0, 0);

    let state = engine.computer_reroll(&state);
    let state = engine.computer_reroll(&state);
    assert_eq!(state.computer.dice.values(), [6, 6, 1, 1, 1]);

    let scored = engine.score(&state);
    assert_eq!(scored.computer.total_score, 15);
    assert_eq!(scored.computer.reroll_count, 0);
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn test_wins_carry_across_games() {
    let mut engine = engine_with(&[6, 6, 6, 6, 6, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 6, 6, 6, 6, 6]);

    let state = rolled_with_totals(&mut engine, 25, 0, 0);
    let first = engine.score(&state);
    assert_eq!((first.human_wins, first.computer_wins), (1, 0));

    let second = engine.new_game(&first);
    assert_eq!(second.target_score, 25);
    assert_eq!(second.attempt_count, 1);
    assert!(!second.game_ended);

    let second = engine.initial_roll(&second);
    let second = engine.score(&second);
    assert_eq!((second.human_wins, second.computer_wins), (1, 1));

    let third = engine.start_round(40, Some(&second)).unwrap();
    assert_eq!((third.human_wins, third.computer_wins), (1, 1));
}

#[test]
fn test_seeded_game_runs_to_completion() {
    let mut engine = RoundEngine::with_seed(2024);
    let mut state = engine
        .start_with_config(&GameConfig::default(), None)
        .unwrap();

    let mut rounds = 0;
    while !state.game_ended {
        state = engine.initial_roll(&state);
        if state.is_tie_breaker {
            continue;
        }
        state = engine.toggle_select(&state, 0).unwrap();
        state = engine.human_reroll(&state);
        state = engine.computer_reroll(&state);
        state = engine.computer_reroll(&state);
        state = engine.score(&state);
        rounds += 1;
        assert!(rounds < 100, "game did not finish");
    }

    assert_ne!(state.winner, Winner::None);
    assert_eq!(state.human_wins + state.computer_wins, 1);
    assert_eq!(state.history.len() as u32, state.attempt_count - 1);
    let winner = state.winner.side().unwrap();
    assert!(state.total(winner) >= state.total(winner.opponent()));
}

#[test]
fn test_seeded_games_are_reproducible() {
    fn play(seed: u64) -> GameState {
        let mut engine = RoundEngine::with_seed(seed);
        let mut state = engine.start_round(60, None).unwrap();
        while !state.game_ended {
            state = engine.initial_roll(&state);
            state = engine.computer_reroll(&state);
            state = engine.score(&state);
        }
        state
    }

    assert_eq!(play(11), play(11));
}

#[test]
fn test_invalid_target_text_defaults() {
    let engine = RoundEngine::with_seed(1);
    let target = GameConfig::parse_target("lots");
    let state = engine.start_round(i64::from(target), None).unwrap();

    assert_eq!(state.target_score, 101);
}

#[test]
fn test_current_sums_follow_dice() {
    let mut engine = engine_with(&[2, 2, 2, 2, 2, 3, 3, 3, 3, 3]);
    let state = rolled_with_totals(&mut engine, 101, 0, 0);

    assert_eq!(state.current_sum(Side::Human), 10);
    assert_eq!(state.current_sum(Side::Computer), 15);
    assert_eq!(state.human.dice, Dice::from_values([2, 2, 2, 2, 2]));
}
