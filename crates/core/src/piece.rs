//! Active piece - the falling piece and where it sits on the board

use crate::board::Board;
use crate::error::ShapeError;
use crate::fit::{analyze, FitResult};
use crate::shapes::{self, Shape};
use crate::types::{Color, PieceKind};

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// 1-based rotation variant.
    pub rotation: u8,
    /// Board row of the shape grid's top edge; negative while emerging.
    pub row: i32,
    /// Board column of the shape grid's left edge.
    pub col: i32,
    /// Ticks spent touching something below.
    pub lock_delay: u32,
}

impl ActivePiece {
    /// Spawn centered horizontally, fully above the visible board.
    pub fn spawn(kind: PieceKind, board_cols: u8) -> Result<Self, ShapeError> {
        let shape = shapes::lookup(kind, 1)?;
        Ok(Self {
            kind,
            rotation: 1,
            row: -(shape.rows() as i32),
            col: (board_cols as i32 - shape.cols() as i32).div_euclid(2),
            lock_delay: 0,
        })
    }

    pub fn shape(&self) -> Result<Shape, ShapeError> {
        shapes::lookup(self.kind, self.rotation)
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Analyze the piece at its current position.
    pub fn fit(&self, board: &Board) -> Result<FitResult, ShapeError> {
        Ok(analyze(&self.shape()?, board, self.row, self.col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_centered_above_board() {
        let i = ActivePiece::spawn(PieceKind::I, 10).unwrap();
        assert_eq!((i.row, i.col), (-4, 3));

        let t = ActivePiece::spawn(PieceKind::T, 10).unwrap();
        assert_eq!((t.row, t.col), (-3, 3));

        let o = ActivePiece::spawn(PieceKind::O, 10).unwrap();
        assert_eq!((o.row, o.col), (-2, 4));
        assert_eq!(o.rotation, 1);
        assert_eq!(o.lock_delay, 0);
    }

    #[test]
    fn fresh_spawn_does_not_fit_yet() {
        let board = Board::new();
        let piece = ActivePiece::spawn(PieceKind::T, board.cols()).unwrap();
        let fit = piece.fit(&board).unwrap();
        assert!(!fit.fits);
        assert!(fit.touch.above);
        assert!(!fit.touch.below);
        assert_eq!(fit.blocked, 0);
    }
}
