//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, making them usable in any context
//! (core engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Standard playfield: 10 columns, 20 visible rows. Sessions may use up to
//! 22 rows; nothing larger is supported.
//!
//! # Game Timing Constants
//!
//! The engine is tick based (one tick per host refresh). Timing is expressed
//! in ticks, never in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `STARTING_SPEED` | 1/9 | Gravity accumulated per tick (a row every 9 ticks) |
//! | `SOFT_DROP_MULTIPLIER` | 10 | Gravity multiplier while soft drop is held |
//! | `PIECE_LOCK_DELAY` | 40 | Ticks of ground contact before a piece locks |
//!
//! # Examples
//!
//! ```
//! use tetrafall_types::{Color, Move, PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.color(), Color::Teal);
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//!
//! assert_eq!(Move::RotateUp.as_str(), "rotateUp");
//!
//! assert_eq!(BOARD_COLS, 10);
//! assert_eq!(BOARD_ROWS, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_COLS: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_ROWS: u8 = 20;

/// Smallest supported board height
pub const MIN_BOARD_ROWS: u8 = 20;

/// Largest supported board height
pub const MAX_BOARD_ROWS: u8 = 22;

/// Gravity accumulated per tick at the start of a session.
pub const STARTING_SPEED: f64 = 1.0 / 9.0;

/// Gravity multiplier applied while soft drop is held.
pub const SOFT_DROP_MULTIPLIER: u32 = 10;

/// Ticks a grounded piece waits before locking.
pub const PIECE_LOCK_DELAY: u32 = 40;

/// Largest side of any shape grid.
pub const MAX_SHAPE_SIDE: usize = 4;

/// Number of bag entries kept across a refill.
pub const BAG_CARRY_OVER: usize = 2;

/// Largest number of rows a single clear group may hold.
pub const MAX_CLEAR_GROUP: usize = 4;

/// Host refresh interval in milliseconds (~60 ticks per second)
pub const TICK_MS: u32 = 16;

/// Line clear points indexed by group size (flat, no level multiplier)
pub const LINE_POINTS: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven piece families
///
/// Each family has a fixed color tag:
/// - **I**: red, straight bar
/// - **J**: blue
/// - **L**: orange
/// - **O**: yellow, 2x2 square (single orientation)
/// - **S**: purple
/// - **T**: teal
/// - **Z**: green
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every family, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use tetrafall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Color tag used for every block of this family.
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Red,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Purple,
            PieceKind::T => Color::Teal,
            PieceKind::Z => Color::Green,
        }
    }
}

/// Color tag carried by placed blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Orange,
    Yellow,
    Purple,
    Teal,
    Green,
}

/// Cell on the board (None = empty, Some = placed block with its color)
pub type Cell = Option<Color>;

/// Logical moves accepted by the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Left,
    Right,
    /// Step back one rotation variant.
    RotateUp,
    /// Step forward one rotation variant.
    RotateDown,
    SoftDropStart,
    SoftDropStop,
}

impl Move {
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Left => "left",
            Move::Right => "right",
            Move::RotateUp => "rotateUp",
            Move::RotateDown => "rotateDown",
            Move::SoftDropStart => "softDropStart",
            Move::SoftDropStop => "softDropStop",
        }
    }
}

/// Score tier of one group of cleared rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClearTier {
    Single,
    Double,
    Triple,
    Tetris,
}

impl ClearTier {
    /// Tier for a group of `rows` cleared rows (1..=4).
    pub fn from_rows(rows: usize) -> Option<Self> {
        match rows {
            1 => Some(ClearTier::Single),
            2 => Some(ClearTier::Double),
            3 => Some(ClearTier::Triple),
            4 => Some(ClearTier::Tetris),
            _ => None,
        }
    }

    pub fn rows(&self) -> usize {
        match self {
            ClearTier::Single => 1,
            ClearTier::Double => 2,
            ClearTier::Triple => 3,
            ClearTier::Tetris => 4,
        }
    }

    pub fn points(&self) -> u32 {
        LINE_POINTS[self.rows()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClearTier::Single => "single",
            ClearTier::Double => "double",
            ClearTier::Triple => "triple",
            ClearTier::Tetris => "tetris",
        }
    }
}
