//! Frame breakdown - derives scoresheet frames from the raw roll sequence
//!
//! Frames are never stored; they are recomputed from the rolls on demand,
//! walking the same cursor the scoring functions use.

use arrayvec::ArrayVec;

use crate::scoring::{frame_score, is_spare, is_strike, spare_bonus, strike_bonus};
use crate::types::{FrameKind, Mark, FRAME_COUNT, PIN_COUNT, TENTH_FRAME_MARK_ROLLS};

/// One frame of the scoresheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSummary {
    /// 1-based frame number.
    pub number: u8,
    pub kind: FrameKind,
    /// Rolls belonging to this frame. The tenth frame includes its bonus rolls.
    pub rolls: ArrayVec<u8, TENTH_FRAME_MARK_ROLLS>,
    /// Frame score, once every bonus roll it depends on has been recorded.
    pub score: Option<u32>,
    /// Running total through this frame; `None` if any frame so far is unscored.
    pub cumulative: Option<u32>,
}

impl FrameSummary {
    /// Scoresheet marks for the rolls of this frame
    pub fn marks(&self) -> ArrayVec<Mark, TENTH_FRAME_MARK_ROLLS> {
        let mut marks = ArrayVec::new();
        let mut standing = PIN_COUNT;
        let mut fresh_rack = true;

        for &pins in &self.rolls {
            let mark = if fresh_rack && pins == PIN_COUNT {
                Mark::Strike
            } else if !fresh_rack && pins == standing {
                Mark::Spare
            } else {
                Mark::Pins(pins)
            };
            marks.push(mark);

            if fresh_rack && pins < PIN_COUNT {
                standing = PIN_COUNT - pins;
                fresh_rack = false;
            } else {
                standing = PIN_COUNT;
                fresh_rack = true;
            }
        }
        marks
    }
}

/// Break a roll sequence into frames.
///
/// Only frames with at least one recorded roll are returned.
pub fn frames(rolls: &[u8]) -> ArrayVec<FrameSummary, FRAME_COUNT> {
    let mut out = ArrayVec::new();
    let mut cursor = 0usize;
    let mut running = Some(0u32);

    for number in 1..=FRAME_COUNT {
        if cursor >= rolls.len() {
            break;
        }

        let (kind, width) = if is_strike(rolls, cursor) {
            (FrameKind::Strike, 1)
        } else if cursor + 1 >= rolls.len() {
            (FrameKind::Pending, 1)
        } else if is_spare(rolls, cursor) {
            (FrameKind::Spare, 2)
        } else {
            (FrameKind::Open, 2)
        };

        let ten = u32::from(PIN_COUNT);
        let score = match kind {
            FrameKind::Strike => strike_bonus(rolls, cursor).map(|bonus| ten + bonus),
            FrameKind::Spare => spare_bonus(rolls, cursor).map(|bonus| ten + bonus),
            FrameKind::Open => frame_score(rolls, cursor),
            FrameKind::Pending => None,
        };

        let frame_rolls = if number == FRAME_COUNT {
            rolls[cursor..]
                .iter()
                .copied()
                .take(TENTH_FRAME_MARK_ROLLS)
                .collect()
        } else {
            rolls[cursor..cursor + width].iter().copied().collect()
        };

        running = running.zip(score).map(|(total, frame)| total + frame);
        out.push(FrameSummary {
            number: number as u8,
            kind,
            rolls: frame_rolls,
            score,
            cumulative: running,
        });

        cursor += width;
    }

    out
}
