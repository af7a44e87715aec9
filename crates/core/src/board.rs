//! Board module - manages the game grid
//!
//! The board is a `cols x rows` grid where each cell is empty or holds a
//! placed block with its color tag. Standard size is 10x20 (up to 22 rows).
//! Uses a flat row-major vector; dimensions never change after construction.
//! Coordinates are `(row, col)`: row 0 is the top, col 0 is the left edge.

use crate::error::ConfigError;
use crate::fit::OccupancyGrid;
use crate::types::{Cell, Color, PieceKind, BOARD_COLS, BOARD_ROWS};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the standard 10x20 size
    pub fn new() -> Self {
        Self::blank(BOARD_COLS, BOARD_ROWS)
    }

    /// Create an empty board of the given size.
    pub fn with_size(cols: u8, rows: u8) -> Result<Self, ConfigError> {
        if cols == 0 || rows == 0 {
            return Err(ConfigError::BoardSize { cols, rows });
        }
        Ok(Self::blank(cols, rows))
    }

    fn blank(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    /// Build a board from row strings.
    ///
    /// `.` is an empty cell, a piece letter (`I J L O S T Z`, any case) is a
    /// block with that family's color and `#` is a red block. Anything else
    /// is rejected.
    pub fn from_rows(rows: &[&str]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if height == 0 || width == 0 || height > u8::MAX as usize || width > u8::MAX as usize {
            return Err(ConfigError::BoardSize {
                cols: width.min(u8::MAX as usize) as u8,
                rows: height.min(u8::MAX as usize) as u8,
            });
        }

        let mut board = Self::blank(width as u8, height as u8);
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(ConfigError::BoardSize {
                    cols: width as u8,
                    rows: height as u8,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    '#' => Some(Color::Red),
                    other => match PieceKind::from_str(&other.to_string()) {
                        Some(kind) => Some(kind.color()),
                        None => return Err(ConfigError::BoardCell { ch, row: r, col: c }),
                    },
                };
                board.cells[r * width + c] = cell;
            }
        }
        Ok(board)
    }

    /// Render the board as row strings (`#` occupied, `.` empty).
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows as usize)
            .map(|r| {
                self.row(r)
                    .iter()
                    .map(|cell| if cell.is_some() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Get cell at `(row, col)`
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// One row of cells, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Check if a row is completely filled
    pub fn is_row_complete(&self, row: usize) -> bool {
        row < self.rows as usize && self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Remove a row and insert an empty row at the top.
    ///
    /// Rows above `row` move down by one; rows below it are untouched, so
    /// removing several rows in ascending order keeps later indices valid.
    pub fn remove_row(&mut self, row: usize) {
        if row >= self.rows as usize {
            return;
        }
        let width = self.cols as usize;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(None);
    }

    /// Write a color into every `(row, col)` slot.
    pub fn place(&mut self, slots: &[(usize, usize)], color: Color) {
        for &(row, col) in slots {
            self.set(row as i32, col as i32, Some(color));
        }
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl OccupancyGrid for Board {
    fn grid_rows(&self) -> usize {
        self.rows as usize
    }

    fn grid_cols(&self) -> usize {
        self.cols as usize
    }

    fn is_occupied_at(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols as usize + col].is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(19, 9), Some(199));
        assert_eq!(board.index(0, -1), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(20, 0), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(Color::Red));
        board.set(10, 5, Some(Color::Teal));

        assert_eq!(board.get(0, 0), Some(Some(Color::Red)));
        assert_eq!(board.get(10, 5), Some(Some(Color::Teal)));

        assert_eq!(board.cells[0], Some(Color::Red));
        assert_eq!(board.cells[10 * 10 + 5], Some(Color::Teal));
    }

    #[test]
    fn test_with_size_rejects_empty() {
        assert!(Board::with_size(0, 20).is_err());
        assert!(Board::with_size(10, 0).is_err());
        let board = Board::with_size(10, 22).unwrap();
        assert_eq!(board.cells().len(), 220);
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let rows = ["..#.", "t...", "....", "zzzz"];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.cols(), 4);
        assert_eq!(board.rows(), 4);
        assert_eq!(board.get(1, 0), Some(Some(Color::Teal)));
        assert_eq!(board.get(3, 2), Some(Some(Color::Green)));
        assert_eq!(board.to_rows(), vec!["..#.", "#...", "....", "####"]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(Board::from_rows(&["...", ".."]).is_err());
        assert!(Board::from_rows(&[]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_unknown_cell() {
        let err = Board::from_rows(&["..", ".x"]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::BoardCell {
                ch: 'x',
                row: 1,
                col: 1
            }
        );
    }

    #[test]
    fn test_remove_row_shifts_rows_above() {
        let mut board = Board::from_rows(&["#..", ".#.", "###", "..#"]).unwrap();
        board.remove_row(2);
        assert_eq!(board.to_rows(), vec!["...", "#..", ".#.", "..#"]);
        assert_eq!(board.rows(), 4);
    }

    #[test]
    fn test_remove_top_row() {
        let mut board = Board::from_rows(&["###", ".#."]).unwrap();
        board.remove_row(0);
        assert_eq!(board.to_rows(), vec!["...", ".#."]);
    }
}
