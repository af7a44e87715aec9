//! Line clear module - finds, groups, scores and removes completed rows
//!
//! Completed rows are grouped into runs of consecutive indices, at most four
//! rows per group; a fifth consecutive row opens a new group. Every group is
//! scored on its own from a flat table (no level multiplier):
//!
//! | rows | tier   | points |
//! |------|--------|--------|
//! | 1    | single | 40     |
//! | 2    | double | 100    |
//! | 3    | triple | 300    |
//! | 4    | tetris | 1200   |

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{ClearTier, MAX_CLEAR_GROUP};

/// One group of consecutive completed rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClearEvent {
    pub tier: ClearTier,
    /// Row indices, ascending.
    pub rows: ArrayVec<usize, MAX_CLEAR_GROUP>,
}

/// Everything a lock cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmashResult {
    pub events: Vec<ClearEvent>,
    pub points: u32,
}

impl SmashResult {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of rows cleared.
    pub fn lines(&self) -> u32 {
        self.events.iter().map(|e| e.rows.len() as u32).sum()
    }
}

/// Indices of every completed row, top to bottom.
pub fn complete_rows(board: &Board) -> Vec<usize> {
    (0..board.rows() as usize)
        .filter(|&row| board.is_row_complete(row))
        .collect()
}

/// Split ascending row indices into runs of consecutive rows, at most four each.
pub fn group_rows(rows: &[usize]) -> Vec<ArrayVec<usize, MAX_CLEAR_GROUP>> {
    let mut groups: Vec<ArrayVec<usize, MAX_CLEAR_GROUP>> = Vec::new();
    for &row in rows {
        match groups.last_mut() {
            Some(group) if !group.is_full() && group.last().map(|&l| l + 1) == Some(row) => {
                group.push(row);
            }
            _ => {
                let mut group = ArrayVec::new();
                group.push(row);
                groups.push(group);
            }
        }
    }
    groups
}

/// Find and score completed rows without touching the board.
pub fn find_clears(board: &Board) -> SmashResult {
    let rows = complete_rows(board);
    if rows.is_empty() {
        return SmashResult::default();
    }

    let mut result = SmashResult::default();
    for group in group_rows(&rows) {
        // Groups hold 1..=4 rows.
        let Some(tier) = ClearTier::from_rows(group.len()) else {
            continue;
        };
        result.points += tier.points();
        result.events.push(ClearEvent { tier, rows: group });
    }
    log::debug!("smashing lines {:?} for {} points", rows, result.points);
    result
}

/// Remove every row named in `result`, inserting empty rows at the top.
pub fn clear_lines(board: &mut Board, result: &SmashResult) {
    for event in &result.events {
        for &row in &event.rows {
            board.remove_row(row);
        }
    }
}

/// Find, score and clear completed rows in one step.
pub fn evaluate(board: &mut Board) -> SmashResult {
    let result = find_clears(board);
    clear_lines(board, &result);
    result
}
