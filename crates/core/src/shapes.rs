//! Shape catalog - every piece family and its rotation variants
//!
//! Shapes are immutable values built from constant row data. Rotation indices
//! are 1-based and wrap around the family's variant count.
//!
//! Grids are written as row strings where `#` marks an occupied cell.

use crate::error::ShapeError;
use crate::fit::OccupancyGrid;
use crate::types::{Color, PieceKind, MAX_SHAPE_SIDE};

type Grid = &'static [&'static str];

const I_GRIDS: [Grid; 4] = [
    &["....", "####", "....", "...."],
    &["..#.", "..#.", "..#.", "..#."],
    &["....", "....", "####", "...."],
    &[".#..", ".#..", ".#..", ".#.."],
];

const J_GRIDS: [Grid; 4] = [
    &["#..", "###", "..."],
    &[".##", ".#.", ".#."],
    &["...", "###", "..#"],
    &[".#.", ".#.", "##."],
];

const L_GRIDS: [Grid; 4] = [
    &["..#", "###", "..."],
    &[".#.", ".#.", ".##"],
    &["...", "###", "#.."],
    &["##.", ".#.", ".#."],
];

const O_GRIDS: [Grid; 1] = [&["##", "##"]];

const S_GRIDS: [Grid; 4] = [
    &[".##", "##.", "..."],
    &[".#.", ".##", "..#"],
    &["...", ".##", "##."],
    &["#..", "##.", ".#."],
];

const T_GRIDS: [Grid; 4] = [
    &[".#.", "###", "..."],
    &[".#.", ".##", ".#."],
    &["...", "###", ".#."],
    &[".#.", "##.", ".#."],
];

const Z_GRIDS: [Grid; 4] = [
    &["##.", ".##", "..."],
    &["..#", ".##", ".#."],
    &["...", "##.", ".##"],
    &[".#.", "##.", "#.."],
];

fn grids(kind: PieceKind) -> &'static [Grid] {
    match kind {
        PieceKind::I => &I_GRIDS,
        PieceKind::J => &J_GRIDS,
        PieceKind::L => &L_GRIDS,
        PieceKind::O => &O_GRIDS,
        PieceKind::S => &S_GRIDS,
        PieceKind::T => &T_GRIDS,
        PieceKind::Z => &Z_GRIDS,
    }
}

/// Number of rotation variants declared for a family.
pub fn rotation_count(kind: PieceKind) -> u8 {
    grids(kind).len() as u8
}

/// Wrap a (possibly out of range) rotation index into `1..=count`.
///
/// Only one step past either end is expected, matching single key presses:
/// anything below 1 becomes `count`, anything above `count` becomes 1.
pub fn wrap_rotation(kind: PieceKind, rotation: i32) -> u8 {
    let count = rotation_count(kind) as i32;
    if rotation < 1 {
        count as u8
    } else if rotation > count {
        1
    } else {
        rotation as u8
    }
}

/// Look up the shape for a family and 1-based rotation index.
pub fn lookup(kind: PieceKind, rotation: u8) -> Result<Shape, ShapeError> {
    let variants = grids(kind);
    if rotation == 0 || rotation as usize > variants.len() {
        return Err(ShapeError::UnknownShape { kind, rotation });
    }
    Shape::from_rows(kind, rotation, variants[rotation as usize - 1])
}

/// An immutable piece shape: a validated occupancy grid of at most 4x4 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: PieceKind,
    rotation: u8,
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a shape from row strings (`#` occupied, `.` empty).
    pub fn from_rows(kind: PieceKind, rotation: u8, rows: &[&str]) -> Result<Self, ShapeError> {
        if rows.is_empty() || rows.len() > MAX_SHAPE_SIDE {
            return Err(ShapeError::InvalidGrid("row count out of range"));
        }
        let cols = rows[0].len();
        if cols == 0 || cols > MAX_SHAPE_SIDE {
            return Err(ShapeError::InvalidGrid("column count out of range"));
        }

        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut occupied = 0usize;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ShapeError::InvalidGrid("grid is not rectangular"));
            }
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    '#' => {
                        cells[r][c] = true;
                        occupied += 1;
                    }
                    '.' => {}
                    _ => return Err(ShapeError::InvalidGrid("unexpected grid character")),
                }
            }
        }
        if occupied == 0 {
            return Err(ShapeError::InvalidGrid("grid has no occupied cells"));
        }

        Ok(Self {
            kind,
            rotation,
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        })
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Whether the cell at `(row, col)` is part of the piece.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied cells as `(row, col)` pairs, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r, c))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// Leftmost and rightmost occupied columns.
    pub fn occupied_cols(&self) -> (usize, usize) {
        let mut min = usize::MAX;
        let mut max = 0;
        for (_, c) in self.occupied() {
            min = min.min(c);
            max = max.max(c);
        }
        (min, max)
    }
}

impl OccupancyGrid for Shape {
    fn grid_rows(&self) -> usize {
        self.rows as usize
    }

    fn grid_cols(&self) -> usize {
        self.cols as usize
    }

    fn is_occupied_at(&self, row: usize, col: usize) -> bool {
        self.is_set(row, col)
    }
}
