//! Core types module - shared constants and plain data types
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no dependencies, so they can be used from the
//! scoring core, the demo binary and tests alike.
//!
//! # Rules Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIN_COUNT` | 10 | Pins standing at the start of a frame |
//! | `FRAME_COUNT` | 10 | Frames in one game |
//! | `MAX_ROLLS` | 21 | Longest possible roll sequence (9 open frames + 3 in the tenth) |
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{FrameKind, Mark, FRAME_COUNT, MAX_ROLLS, PIN_COUNT};
//!
//! let kind = FrameKind::from_str("strike").unwrap();
//! assert_eq!(kind, FrameKind::Strike);
//! assert!(kind.is_mark());
//!
//! assert_eq!(Mark::Strike.as_char(), 'X');
//! assert_eq!(Mark::Pins(0).as_char(), '-');
//!
//! assert_eq!(PIN_COUNT, 10);
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(MAX_ROLLS, 21);
//! ```

/// Pins standing at the start of every frame
pub const PIN_COUNT: u8 = 10;

/// Frames in a single game
pub const FRAME_COUNT: usize = 10;

/// Maximum number of rolls in one game.
///
/// Nine open frames take two rolls each, and the tenth can take three.
pub const MAX_ROLLS: usize = 21;

/// Number of rolls the tenth frame takes after a strike or spare
pub const TENTH_FRAME_MARK_ROLLS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_pin_rules_constants() {
        assert_eq!(PIN_COUNT, 10);
        assert_eq!(FRAME_COUNT, 10);
        assert_eq!(TENTH_FRAME_MARK_ROLLS, 3);
        // 9 open frames, then a marked tenth with both bonus rolls.
        assert_eq!(MAX_ROLLS, (FRAME_COUNT - 1) * 2 + TENTH_FRAME_MARK_ROLLS);
    }

    #[test]
    fn frame_kind_str_round_trip() {
        for kind in [
            FrameKind::Strike,
            FrameKind::Spare,
            FrameKind::Open,
            FrameKind::Pending,
        ] {
            assert_eq!(FrameKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(FrameKind::from_str("SPARE"), Some(FrameKind::Spare));
        assert_eq!(FrameKind::from_str("gutter"), None);
    }

    #[test]
    fn mark_chars() {
        assert_eq!(Mark::Strike.as_char(), 'X');
        assert_eq!(Mark::Spare.as_char(), '/');
        assert_eq!(Mark::Pins(0).as_char(), '-');
        assert_eq!(Mark::Pins(7).as_char(), '7');
    }
}

/// How a frame was (or is being) completed
///
/// - **Strike**: first roll knocked down all ten pins
/// - **Spare**: two rolls together knocked down all ten pins
/// - **Open**: two rolls left at least one pin standing
/// - **Pending**: the frame has started but its kind is not known yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
    Pending,
}

impl FrameKind {
    /// Parse frame kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::FrameKind;
    ///
    /// assert_eq!(FrameKind::from_str("strike"), Some(FrameKind::Strike));
    /// assert_eq!(FrameKind::from_str("Open"), Some(FrameKind::Open));
    /// assert_eq!(FrameKind::from_str("turkey"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strike" => Some(FrameKind::Strike),
            "spare" => Some(FrameKind::Spare),
            "open" => Some(FrameKind::Open),
            "pending" => Some(FrameKind::Pending),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKind::Strike => "strike",
            FrameKind::Spare => "spare",
            FrameKind::Open => "open",
            FrameKind::Pending => "pending",
        }
    }

    /// Strikes and spares earn bonus pins from later rolls
    pub fn is_mark(&self) -> bool {
        matches!(self, FrameKind::Strike | FrameKind::Spare)
    }
}

/// Scoresheet symbol for a single roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Strike,
    Spare,
    /// Pin count for an ordinary roll (0 is drawn as a dash).
    Pins(u8),
}

impl Mark {
    /// Character used on a printed scoresheet
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::Mark;
    ///
    /// assert_eq!(Mark::Spare.as_char(), '/');
    /// assert_eq!(Mark::Pins(9).as_char(), '9');
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            Mark::Strike => 'X',
            Mark::Spare => '/',
            Mark::Pins(0) => '-',
            Mark::Pins(n) => char::from_digit(u32::from(*n), 10).unwrap_or('?'),
        }
    }
}
