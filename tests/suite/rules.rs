//! Round rules through the public API.

use primegame_core::{GameState, RoundPhase};
use primegame_types::{GameSettings, GuessOutcome, RangeMax, is_prime};

use crate::common::scripted_game;

#[test]
fn primality_matches_trial_division_examples() {
    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(is_prime(2));
    assert!(!is_prime(9));
    assert!(is_prime(17));
}

#[test]
fn correct_guess_on_seven() {
    let mut game = scripted_game(&[7]);
    assert!(game.check_prime());

    assert_eq!(game.evaluate_guess(true), GuessOutcome::Correct);
    assert_eq!(game.score(), 7);
    assert_eq!(game.level(), 1);
    assert_eq!(game.range_max(), 100);
}

#[test]
fn incorrect_guess_on_seven() {
    let mut game = scripted_game(&[7]);

    assert_eq!(game.evaluate_guess(false), GuessOutcome::Incorrect);
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 0);
    assert_eq!(game.range_max(), 10);
}

#[test]
fn forced_four_answered_no() {
    let mut game = scripted_game(&[4]);
    assert_eq!(game.range_max(), 10);
    assert!(!game.check_prime());

    assert!(game.evaluate_guess(false).is_correct());
    assert_eq!(game.score(), 4);
    assert_eq!(game.level(), 1);
    assert_eq!(game.range_max(), 100);
    assert_eq!(game.phase(), RoundPhase::Evaluated);

    game.advance_turn();
    assert_eq!(game.turns(), 1);
    assert_eq!(game.phase(), RoundPhase::AwaitingGuess);
}

// A factor of 1 keeps the range small so trial division stays fast.
fn flat_game(range_max: u64) -> GameState {
    GameState::new(GameSettings::new(RangeMax::new(range_max), 1))
}

#[test]
fn advance_turn_counts_one_per_call_with_real_rng() {
    let mut game = flat_game(1_000);
    for round in 1..=50 {
        let guess = round % 2 == 0;
        game.evaluate_guess(guess);
        game.advance_turn();
        assert_eq!(game.turns(), round);
        assert!(game.current() <= 1_000);
        assert_eq!(game.range_max(), 1_000);
        assert_eq!(game.check_prime(), is_prime(game.current()));
    }
}

#[test]
fn level_never_decreases() {
    let mut game = flat_game(1_000);
    let mut last_level = 0;
    let mut last_score = 0;
    for _ in 0..100 {
        game.evaluate_guess(false);
        game.advance_turn();
        assert!(game.level() >= last_level);
        assert!(game.score() >= last_score);
        last_level = game.level();
        last_score = game.score();
    }
}
