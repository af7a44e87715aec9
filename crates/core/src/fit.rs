//! Fit analyzer - collision and contact detection between a shape and a grid
//!
//! `analyze` overlays a shape grid onto a board grid at a row/column offset
//! and reports:
//!
//! - whether every occupied shape cell lands on a free, in-bounds board cell
//! - the destination cells ("slots") that would be written on lock
//! - which sides of the piece touch the board edge or placed blocks
//!
//! Contact is never reported between two cells of the same piece.
//! Off-grid cells are left out of the slots, so a piece that sticks out of
//! the board never fits; it only records the side it sticks out of.

use arrayvec::ArrayVec;

use crate::types::MAX_SHAPE_SIDE;

/// Largest number of occupied cells any shape can have.
pub const MAX_SLOTS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// Anything that can be read as a rectangular grid of occupied/free cells.
pub trait OccupancyGrid {
    fn grid_rows(&self) -> usize;
    fn grid_cols(&self) -> usize;
    /// `row` and `col` are always within `grid_rows()` x `grid_cols()`.
    fn is_occupied_at(&self, row: usize, col: usize) -> bool;
}

/// Sides on which a piece touches an obstruction or the board boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TouchFlags {
    pub above: bool,
    pub below: bool,
    pub left: bool,
    pub right: bool,
}

impl TouchFlags {
    pub fn any(&self) -> bool {
        self.above || self.below || self.left || self.right
    }
}

/// Result of overlaying a shape on a board at an offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitResult {
    pub fits: bool,
    /// Occupied cells in the shape.
    pub size: usize,
    /// Free in-bounds destination cells as `(row, col)`.
    pub slots: ArrayVec<(usize, usize), MAX_SLOTS>,
    /// Destinations that landed on an already occupied board cell.
    pub blocked: usize,
    pub touch: TouchFlags,
}

/// Overlay `shape` on `board` with its top-left corner at `(row_offset, col_offset)`.
pub fn analyze<S, B>(shape: &S, board: &B, row_offset: i32, col_offset: i32) -> FitResult
where
    S: OccupancyGrid + ?Sized,
    B: OccupancyGrid + ?Sized,
{
    let shape_rows = shape.grid_rows();
    let shape_cols = shape.grid_cols();
    let board_rows = board.grid_rows();
    let board_cols = board.grid_cols();

    let mut res = FitResult {
        fits: false,
        size: 0,
        slots: ArrayVec::new(),
        blocked: 0,
        touch: TouchFlags::default(),
    };

    for r in 0..shape_rows {
        for c in 0..shape_cols {
            if !shape.is_occupied_at(r, c) {
                continue;
            }
            res.size += 1;

            let row = row_offset + r as i32;
            let col = col_offset + c as i32;

            if row < 0 {
                res.touch.above = true;
                continue;
            }
            if row >= board_rows as i32 {
                res.touch.below = true;
                continue;
            }
            if col < 0 {
                res.touch.left = true;
                continue;
            }
            if col >= board_cols as i32 {
                res.touch.right = true;
                continue;
            }
            let (row, col) = (row as usize, col as usize);

            let self_above = r > 0 && shape.is_occupied_at(r - 1, c);
            let self_below = r + 1 < shape_rows && shape.is_occupied_at(r + 1, c);
            let self_left = c > 0 && shape.is_occupied_at(r, c - 1);
            let self_right = c + 1 < shape_cols && shape.is_occupied_at(r, c + 1);

            let taken_above = row == 0 || board.is_occupied_at(row - 1, col);
            let taken_below = row + 1 == board_rows || board.is_occupied_at(row + 1, col);
            let taken_left = col == 0 || board.is_occupied_at(row, col - 1);
            let taken_right = col + 1 == board_cols || board.is_occupied_at(row, col + 1);

            if !self_above && taken_above {
                res.touch.above = true;
            }
            if !self_below && taken_below {
                res.touch.below = true;
            }
            if !self_left && taken_left {
                res.touch.left = true;
            }
            if !self_right && taken_right {
                res.touch.right = true;
            }

            if board.is_occupied_at(row, col) {
                res.blocked += 1;
                continue;
            }
            res.slots.push((row, col));
        }
    }

    res.fits = res.size == res.slots.len();
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rows(&'static [&'static str]);

    impl OccupancyGrid for Rows {
        fn grid_rows(&self) -> usize {
            self.0.len()
        }

        fn grid_cols(&self) -> usize {
            self.0[0].len()
        }

        fn is_occupied_at(&self, row: usize, col: usize) -> bool {
            self.0[row].as_bytes()[col] == b'#'
        }
    }

    #[test]
    fn single_cell_in_open_space_touches_nothing() {
        let shape = Rows(&["#"]);
        let board = Rows(&["...", "...", "..."]);
        let res = analyze(&shape, &board, 1, 1);
        assert!(res.fits);
        assert!(!res.touch.any());
        assert_eq!(res.slots.as_slice(), &[(1, 1)]);
    }

    #[test]
    fn corner_cell_touches_two_edges() {
        let shape = Rows(&["#"]);
        let board = Rows(&["...", "...", "..."]);
        let res = analyze(&shape, &board, 2, 2);
        assert!(res.fits);
        assert!(res.touch.below && res.touch.right);
        assert!(!res.touch.above && !res.touch.left);
    }

    #[test]
    fn overlap_is_blocked_but_still_counted() {
        let shape = Rows(&["##"]);
        let board = Rows(&["...", ".#.", "..."]);
        let res = analyze(&shape, &board, 1, 0);
        assert!(!res.fits);
        assert_eq!(res.size, 2);
        assert_eq!(res.blocked, 1);
        assert_eq!(res.slots.as_slice(), &[(1, 0)]);
    }

    #[test]
    fn off_grid_cells_do_not_fit() {
        let shape = Rows(&["##"]);
        let board = Rows(&["...", "...", "..."]);

        let res = analyze(&shape, &board, -1, 0);
        assert!(!res.fits && res.touch.above);
        assert_eq!(res.blocked, 0);

        let res = analyze(&shape, &board, 3, 0);
        assert!(!res.fits && res.touch.below);

        let res = analyze(&shape, &board, 0, -1);
        assert!(!res.fits && res.touch.left);

        let res = analyze(&shape, &board, 0, 2);
        assert!(!res.fits && res.touch.right);
    }
}
