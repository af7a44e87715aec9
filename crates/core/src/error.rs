use thiserror::Error;

use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("unknown shape: {kind:?} has no rotation {rotation}")]
    UnknownShape { kind: PieceKind, rotation: u8 },
    #[error("invalid shape grid: {0}")]
    InvalidGrid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unsupported board size {cols}x{rows}")]
    BoardSize { cols: u8, rows: u8 },
    #[error("unknown board cell {ch:?} at row {row}, col {col}")]
    BoardCell { ch: char, row: usize, col: usize },
    #[error("starting speed must be a positive finite number, got {0}")]
    Speed(f64),
    #[error("soft drop multiplier must be at least 1")]
    SoftDropMultiplier,
    #[error("forced shape list is empty")]
    EmptyForcedShapes,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
