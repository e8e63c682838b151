//! Core game logic - pure, deterministic ten-pin bowling scoring
//!
//! This crate tracks the rolls of a single game and derives everything else
//! from them. It has no dependencies on I/O, terminals or networking.
//!
//! # Module Structure
//!
//! - [`game`]: the [`Game`] value holding the roll sequence
//! - [`scoring`]: pure scoring and completion rules over a roll slice
//! - [`frame`]: per-frame scoresheet breakdown with running totals
//! - [`snapshot`]: serialisable point-in-time view of a game
//! - [`error`]: errors reported by game operations
//!
//! # Example
//!
//! ```
//! use tenpin_core::{Game, GameError};
//!
//! let mut game = Game::new();
//! for _ in 0..12 {
//!     game.roll(10).unwrap();
//! }
//!
//! assert!(game.is_finished());
//! assert_eq!(game.score(), Ok(300));
//! assert_eq!(game.roll(10), Err(GameError::GameAlreadyFinished));
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod scoring;
pub mod snapshot;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use error::GameError;
pub use frame::FrameSummary;
pub use game::Game;
pub use snapshot::{FrameSnapshot, GameSnapshot};
