//! Scoring module - ten-pin scoring rules over a raw roll sequence
//!
//! Every function here is a pure query over `&[u8]` indexed by a roll cursor.
//! Lookahead is always checked: when a bonus roll has not been recorded yet the
//! functions return `None` instead of reading past the end of the sequence.

use crate::types::{FRAME_COUNT, PIN_COUNT, TENTH_FRAME_MARK_ROLLS};

/// Roll at `index` knocked down all ten pins
pub fn is_strike(rolls: &[u8], index: usize) -> bool {
    rolls.get(index) == Some(&PIN_COUNT)
}

/// Rolls at `index` and `index + 1` together knocked down all ten pins
///
/// Callers check [`is_strike`] first; a strike followed by a gutter ball
/// also sums to ten.
pub fn is_spare(rolls: &[u8], index: usize) -> bool {
    match (rolls.get(index), rolls.get(index + 1)) {
        (Some(&first), Some(&second)) => first + second == PIN_COUNT,
        _ => false,
    }
}

/// Bonus for a strike at `index`: the next two rolls
pub fn strike_bonus(rolls: &[u8], index: usize) -> Option<u32> {
    let first = rolls.get(index + 1)?;
    let second = rolls.get(index + 2)?;
    Some(u32::from(*first) + u32::from(*second))
}

/// Bonus for a spare starting at `index`: the roll after the frame
pub fn spare_bonus(rolls: &[u8], index: usize) -> Option<u32> {
    rolls.get(index + 2).map(|&pins| u32::from(pins))
}

/// Pin total of an open frame starting at `index`
pub fn frame_score(rolls: &[u8], index: usize) -> Option<u32> {
    let first = rolls.get(index)?;
    let second = rolls.get(index + 1)?;
    Some(u32::from(*first) + u32::from(*second))
}

/// Total score across all ten frames.
///
/// Returns `None` when any frame still needs a roll (or a bonus roll) that has
/// not been recorded.
pub fn total_score(rolls: &[u8]) -> Option<u32> {
    let mut total = 0u32;
    let mut cursor = 0usize;

    for _ in 0..FRAME_COUNT {
        if is_strike(rolls, cursor) {
            total += u32::from(PIN_COUNT) + strike_bonus(rolls, cursor)?;
            cursor += 1;
        } else if is_spare(rolls, cursor) {
            total += u32::from(PIN_COUNT) + spare_bonus(rolls, cursor)?;
            cursor += 2;
        } else {
            total += frame_score(rolls, cursor)?;
            cursor += 2;
        }
    }

    Some(total)
}

/// Whether all ten frames are complete, bonus rolls included.
///
/// Frames 1-9 consume one roll for a strike and two otherwise. The tenth frame
/// takes three rolls after a strike or spare and two when left open.
pub fn is_finished(rolls: &[u8]) -> bool {
    let mut cursor = 0usize;

    for _ in 0..FRAME_COUNT - 1 {
        if cursor >= rolls.len() {
            return false;
        }
        cursor += if is_strike(rolls, cursor) { 1 } else { 2 };
    }

    let Some(&first) = rolls.get(cursor) else {
        return false;
    };
    let recorded = rolls.len() - cursor;

    if first == PIN_COUNT || is_spare(rolls, cursor) {
        return recorded >= TENTH_FRAME_MARK_ROLLS;
    }
    recorded >= 2
}

/// 1-based number of the frame the next roll belongs to.
///
/// `None` once the game is finished.
pub fn current_frame(rolls: &[u8]) -> Option<usize> {
    if is_finished(rolls) {
        return None;
    }

    let mut cursor = 0usize;
    for number in 1..FRAME_COUNT {
        if cursor >= rolls.len() {
            return Some(number);
        }
        if is_strike(rolls, cursor) {
            cursor += 1;
        } else if cursor + 1 >= rolls.len() {
            // First ball of the frame is down, second is still to come.
            return Some(number);
        } else {
            cursor += 2;
        }
    }
    Some(FRAME_COUNT)
}
