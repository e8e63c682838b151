use thiserror::Error;

/// Errors reported by [`Game`](crate::Game) operations.
///
/// Every error is local to the call that produced it; a rejected roll leaves
/// the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("pins must be between 0 and 10, got {pins}")]
    InvalidPinCount { pins: i32 },
    #[error("game already finished")]
    GameAlreadyFinished,
    #[error("game is incomplete: not enough rolls to score all ten frames")]
    IncompleteGame,
}

impl GameError {
    pub fn code(self) -> &'static str {
        match self {
            GameError::InvalidPinCount { .. } => "invalid_pin_count",
            GameError::GameAlreadyFinished => "game_already_finished",
            GameError::IncompleteGame => "incomplete_game",
        }
    }
}
