//! Game module - owns the roll sequence of a single ten-pin game
//!
//! The roll sequence is the only stored state. Completion, frames and score are
//! recomputed from it on every query, so there is no cached state that could
//! drift from the rolls.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::error::GameError;
use crate::frame::{self, FrameSummary};
use crate::scoring;
use crate::snapshot::GameSnapshot;
use crate::types::{FRAME_COUNT, MAX_ROLLS, PIN_COUNT};

/// A single ten-pin bowling game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    rolls: ArrayVec<u8, MAX_ROLLS>,
}

impl Game {
    /// Create an empty game
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a roll.
    ///
    /// The pin count is validated first, then the game must not be finished.
    /// A rejected roll leaves the sequence unchanged.
    pub fn roll(&mut self, pins: i32) -> Result<(), GameError> {
        let pins = match u8::try_from(pins) {
            Ok(p) if p <= PIN_COUNT => p,
            _ => return self.reject(GameError::InvalidPinCount { pins }),
        };
        if self.is_finished() {
            return self.reject(GameError::GameAlreadyFinished);
        }
        if self.rolls.try_push(pins).is_err() {
            return self.reject(GameError::GameAlreadyFinished);
        }

        let finished = self.is_finished();
        debug!(pins, roll = self.rolls.len(), finished, "roll recorded");
        if finished {
            info!(rolls = self.rolls.len(), score = ?self.score().ok(), "game finished");
        }
        Ok(())
    }

    fn reject(&self, err: GameError) -> Result<(), GameError> {
        debug!(code = err.code(), rolls = self.rolls.len(), "roll rejected: {err}");
        Err(err)
    }

    /// Whether all ten frames (and any tenth-frame bonus rolls) are complete
    pub fn is_finished(&self) -> bool {
        scoring::is_finished(&self.rolls)
    }

    /// Total score for the game.
    ///
    /// Fails with [`GameError::IncompleteGame`] while any frame is still missing
    /// a roll or a bonus roll it needs.
    pub fn score(&self) -> Result<u32, GameError> {
        scoring::total_score(&self.rolls).ok_or(GameError::IncompleteGame)
    }

    /// Rolls in the order they were recorded
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    /// Frame the next roll belongs to (1-based), `None` once finished
    pub fn current_frame(&self) -> Option<usize> {
        scoring::current_frame(&self.rolls)
    }

    /// Scoresheet frames for every frame that has been started
    pub fn frames(&self) -> ArrayVec<FrameSummary, FRAME_COUNT> {
        frame::frames(&self.rolls)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rolls: self.rolls.to_vec(),
            frames: self.frames().iter().map(Into::into).collect(),
            finished: self.is_finished(),
            score: self.score().ok(),
            current_frame: self.current_frame(),
        }
    }
}
