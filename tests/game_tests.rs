//! Game scoring and lifecycle tests through the public API

mod common;

use common::{roll_many, roll_spare, roll_strike};
use tenpin::core::{Game, GameError};

#[test]
fn test_all_gutters() {
    let mut game = Game::new();
    roll_many(&mut game, 20, 0);
    assert_eq!(game.score(), Ok(0));
}

#[test]
fn test_all_ones() {
    let mut game = Game::new();
    roll_many(&mut game, 20, 1);
    assert_eq!(game.score(), Ok(20));
}

#[test]
fn test_one_spare() {
    let mut game = Game::new();
    roll_spare(&mut game);
    game.roll(3).unwrap();
    roll_many(&mut game, 17, 0);
    assert_eq!(game.score(), Ok(16));
}

#[test]
fn test_one_strike() {
    let mut game = Game::new();
    roll_strike(&mut game);
    game.roll(3).unwrap();
    game.roll(4).unwrap();
    roll_many(&mut game, 16, 0);
    assert_eq!(game.score(), Ok(24));
}

#[test]
fn test_perfect_game() {
    let mut game = Game::new();
    roll_many(&mut game, 12, 10);
    assert_eq!(game.score(), Ok(300));
}

#[test]
fn test_tenth_frame_spare_bonus() {
    let mut game = Game::new();
    roll_many(&mut game, 18, 0);
    roll_spare(&mut game);
    assert!(!game.is_finished(), "spare in the tenth earns a bonus roll");
    game.roll(7).unwrap();
    assert_eq!(game.score(), Ok(17));
}

#[test]
fn test_tenth_frame_strike_bonus() {
    let mut game = Game::new();
    roll_many(&mut game, 18, 0);
    roll_strike(&mut game);
    game.roll(7).unwrap();
    assert!(!game.is_finished(), "strike in the tenth earns two bonus rolls");
    game.roll(2).unwrap();
    assert_eq!(game.score(), Ok(19));
}

#[test]
fn test_no_roll_after_game_finished() {
    let mut game = Game::new();
    roll_many(&mut game, 12, 10);
    assert_eq!(game.roll(10), Err(GameError::GameAlreadyFinished));
    assert_eq!(game.roll(0), Err(GameError::GameAlreadyFinished));
    assert_eq!(game.roll_count(), 12);
}

#[test]
fn test_no_roll_after_open_tenth() {
    let mut game = Game::new();
    roll_many(&mut game, 20, 4);
    assert!(game.is_finished());
    assert_eq!(game.roll(4), Err(GameError::GameAlreadyFinished));
}

#[test]
fn test_invalid_roll_negative() {
    let mut game = Game::new();
    assert_eq!(game.roll(-1), Err(GameError::InvalidPinCount { pins: -1 }));
    assert!(game.rolls().is_empty());
}

#[test]
fn test_invalid_roll_too_many_pins() {
    let mut game = Game::new();
    assert_eq!(game.roll(11), Err(GameError::InvalidPinCount { pins: 11 }));
    assert!(game.rolls().is_empty());
}

#[test]
fn test_score_before_finished_is_incomplete() {
    let mut game = Game::new();
    assert_eq!(game.score(), Err(GameError::IncompleteGame));

    roll_many(&mut game, 18, 0);
    roll_strike(&mut game);
    game.roll(7).unwrap();
    assert_eq!(game.score(), Err(GameError::IncompleteGame));
}

#[test]
fn test_queries_are_idempotent() {
    let mut game = Game::new();
    roll_strike(&mut game);
    roll_spare(&mut game);

    let finished = game.is_finished();
    let score = game.score();
    for _ in 0..3 {
        assert_eq!(game.is_finished(), finished);
        assert_eq!(game.score(), score);
    }

    // Eight open frames of 2 + 2 finish the game.
    roll_many(&mut game, 16, 2);
    let score = game.score();
    assert_eq!(score, Ok(20 + 12 + 8 * 4));
    assert_eq!(game.score(), score);
}

#[test]
fn test_finished_is_terminal() {
    let mut game = Game::new();
    roll_many(&mut game, 18, 0);
    roll_spare(&mut game);
    game.roll(10).unwrap();
    assert!(game.is_finished());

    for pins in 0..=10 {
        assert_eq!(game.roll(pins), Err(GameError::GameAlreadyFinished));
        assert!(game.is_finished());
    }
    assert_eq!(game.score(), Ok(20));
}

#[test]
fn test_finished_exactly_when_scoreable() {
    let rolls = [10, 9, 1, 5, 5, 7, 2, 10, 10, 10, 9, 0, 8, 2, 9, 1, 10];
    let mut game = Game::new();
    for &pins in &rolls {
        assert_eq!(game.is_finished(), game.score().is_ok());
        game.roll(pins).unwrap();
    }
    assert!(game.is_finished());
    assert_eq!(game.score(), Ok(187));
}
