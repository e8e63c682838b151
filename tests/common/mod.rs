//! Roll-pattern helpers shared by the integration tests.

#![allow(dead_code)]

use tenpin::core::Game;

/// Roll the same pin count `times` times
pub fn roll_many(game: &mut Game, times: usize, pins: i32) {
    for _ in 0..times {
        game.roll(pins).unwrap();
    }
}

/// Roll a 5 + 5 spare
pub fn roll_spare(game: &mut Game) {
    game.roll(5).unwrap();
    game.roll(5).unwrap();
}

pub fn roll_strike(game: &mut Game) {
    game.roll(10).unwrap();
}
