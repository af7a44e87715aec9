//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the shape
//! catalog, the fit analyzer, the bag randomizer, the board and lock engine
//! and the line-clear evaluator. It has no dependency on terminals, audio or
//! wall-clock time:
//!
//! - **Deterministic**: the same seed and the same inputs produce the same game
//! - **Testable**: every rule can be exercised by ticking a session by hand
//! - **Portable**: the host decides how to draw snapshots and play cues
//!
//! # Module Structure
//!
//! - [`shapes`]: piece families and their rotation grids
//! - [`fit`]: overlaying a shape onto a board (fit, slots, contact sides)
//! - [`bag`]: shuffled bag randomizer with a carried-over tail
//! - [`board`]: the grid of placed blocks
//! - [`piece`]: the falling piece and its spawn position
//! - [`line_clear`]: finding, grouping, scoring and removing completed rows
//! - [`session`]: one game, advanced tick by tick
//! - [`events`]: effects the session reports to the host
//! - [`snapshot`]: render-facing copy of the session state
//!
//! # Rules
//!
//! - Pieces spawn centered, fully above the board, and fall into view
//! - Moves and rotations are buffered and validated one by one each tick
//! - A piece touching something below locks after a delay (40 ticks)
//! - Consecutive completed rows score as single/double/triple/tetris
//!   (40/100/300/1200), up to four rows per group
//! - A piece that collides while still at or above the top ends the game
//!
//! # Example
//!
//! ```
//! use tetrafall_core::{NullSink, Session, SessionConfig};
//! use tetrafall_core::types::Move;
//!
//! let mut session = Session::start(SessionConfig::default().with_seed(7)).unwrap();
//! session.push_input(Move::Left);
//! session.tick(&mut NullSink).unwrap();
//!
//! assert!(session.is_running());
//! assert_eq!(session.ticks(), 1);
//! ```
//!
//! # Timing
//!
//! The host calls [`Session::tick`] at a fixed rate (about 60 per second).
//! Gravity adds the current speed each tick (1/9 at the start, times 10 while
//! soft drop is held) and the piece falls a row whenever it reaches 1.0.

pub mod bag;
pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod fit;
pub mod line_clear;
pub mod piece;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use tetrafall_types as types;

// Re-export commonly used types for convenience
pub use bag::{Bag, SimpleRng};
pub use board::Board;
pub use config::SessionConfig;
pub use error::{ConfigError, EngineError, ShapeError};
pub use events::{EventSink, GameEvent, NullSink};
pub use fit::{analyze, FitResult, OccupancyGrid, TouchFlags};
pub use line_clear::{ClearEvent, SmashResult};
pub use piece::ActivePiece;
pub use session::{Session, SessionStatus, TickOutcome};
pub use shapes::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
