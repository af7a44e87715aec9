//! Render-facing view of a session.
//!
//! Snapshots are plain data: a renderer can draw one without touching the
//! engine. `Session::snapshot_into` reuses the cell buffer between frames.

use crate::piece::ActivePiece;
use crate::session::SessionStatus;
use crate::shapes::Shape;
use crate::types::{Cell, Color, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub row: i32,
    pub col: i32,
    pub color: Color,
    pub shape: Shape,
}

impl ActiveSnapshot {
    pub fn new(piece: &ActivePiece, shape: Shape) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
            row: piece.row,
            col: piece.col,
            color: piece.color(),
            shape,
        }
    }

    /// Bounding box on the board as `(row, col, rows, cols)`.
    pub fn bounds(&self) -> (i32, i32, u8, u8) {
        (self.row, self.col, self.shape.rows(), self.shape.cols())
    }

    /// Board cells covered by the piece, including ones above the board.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(r, c)| (self.row + r as i32, self.col + c as i32))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub cols: u8,
    pub rows: u8,
    /// Row-major placed blocks.
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub preview: Option<Shape>,
    pub points: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub ticks: u64,
    pub soft_drop: bool,
    pub status: SessionStatus,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows as usize || col >= self.cols as usize {
            return None;
        }
        self.cells[row * self.cols as usize + col]
    }

    /// Placed block or active piece color at a board cell.
    pub fn merged_cell(&self, row: usize, col: usize) -> Cell {
        if let Some(active) = &self.active {
            let hit = active
                .cells()
                .any(|(r, c)| r == row as i32 && c == col as i32);
            if hit && self.cell(row, col).is_none() {
                return Some(active.color);
            }
        }
        self.cell(row, col)
    }

    pub fn running(&self) -> bool {
        self.status == SessionStatus::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cols: 0,
            rows: 0,
            cells: Vec::new(),
            active: None,
            preview: None,
            points: 0,
            lines: 0,
            pieces_locked: 0,
            ticks: 0,
            soft_drop: false,
            status: SessionStatus::Running,
        }
    }
}
