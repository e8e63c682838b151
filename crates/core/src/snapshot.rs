use serde::Serialize;

use crate::frame::FrameSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSnapshot {
    pub frame: u8,
    pub kind: &'static str,
    pub rolls: Vec<u8>,
    /// Scoresheet symbols, one character per roll.
    pub marks: String,
    pub score: Option<u32>,
    pub cumulative: Option<u32>,
}

impl From<&FrameSummary> for FrameSnapshot {
    fn from(value: &FrameSummary) -> Self {
        Self {
            frame: value.number,
            kind: value.kind.as_str(),
            rolls: value.rolls.to_vec(),
            marks: value.marks().iter().map(|m| m.as_char()).collect(),
            score: value.score,
            cumulative: value.cumulative,
        }
    }
}

/// Point-in-time view of a game, derived entirely from its rolls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub rolls: Vec<u8>,
    pub frames: Vec<FrameSnapshot>,
    pub finished: bool,
    /// Total score; `None` until every frame can be scored.
    pub score: Option<u32>,
    pub current_frame: Option<usize>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.finished
    }
}
