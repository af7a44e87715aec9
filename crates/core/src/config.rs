//! Session configuration
//!
//! Every field has a default, so a config file only needs the options it
//! changes. `validate` rejects anything outside the standard game setup.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::{
    PieceKind, BOARD_COLS, BOARD_ROWS, MAX_BOARD_ROWS, MIN_BOARD_ROWS, PIECE_LOCK_DELAY,
    SOFT_DROP_MULTIPLIER, STARTING_SPEED,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cols: u8,
    pub rows: u8,
    /// Gravity accumulated per tick; a row falls each time it reaches 1.0.
    pub starting_speed: f64,
    /// Restrict the bag to these pieces (deterministic testing).
    pub forced_shapes: Option<Vec<PieceKind>>,
    /// Ticks of ground contact before a piece locks.
    pub lock_delay_ticks: u32,
    pub soft_drop_multiplier: u32,
    pub seed: u32,
    /// Stop the session after this many ticks.
    pub max_runtime_ticks: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cols: BOARD_COLS,
            rows: BOARD_ROWS,
            starting_speed: STARTING_SPEED,
            forced_shapes: None,
            lock_delay_ticks: PIECE_LOCK_DELAY,
            soft_drop_multiplier: SOFT_DROP_MULTIPLIER,
            seed: 1,
            max_runtime_ticks: None,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols != BOARD_COLS || !(MIN_BOARD_ROWS..=MAX_BOARD_ROWS).contains(&self.rows) {
            return Err(ConfigError::BoardSize {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if !self.starting_speed.is_finite() || self.starting_speed <= 0.0 {
            return Err(ConfigError::Speed(self.starting_speed));
        }
        if self.soft_drop_multiplier == 0 {
            return Err(ConfigError::SoftDropMultiplier);
        }
        if matches!(&self.forced_shapes, Some(shapes) if shapes.is_empty()) {
            return Err(ConfigError::EmptyForcedShapes);
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rows(mut self, rows: u8) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.starting_speed = speed;
        self
    }

    pub fn with_lock_delay(mut self, ticks: u32) -> Self {
        self.lock_delay_ticks = ticks;
        self
    }

    pub fn with_forced_shapes(mut self, shapes: Vec<PieceKind>) -> Self {
        self.forced_shapes = Some(shapes);
        self
    }

    pub fn with_max_runtime(mut self, ticks: u64) -> Self {
        self.max_runtime_ticks = Some(ticks);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lock_delay_ticks, 40);
        assert_eq!(config.cols, 10);
    }

    #[test]
    fn rejects_nonstandard_boards() {
        assert!(SessionConfig::default().with_rows(19).validate().is_err());
        assert!(SessionConfig::default().with_rows(22).validate().is_ok());
        let wide = SessionConfig {
            cols: 12,
            ..SessionConfig::default()
        };
        assert_eq!(
            wide.validate(),
            Err(ConfigError::BoardSize { cols: 12, rows: 20 })
        );
    }

    #[test]
    fn rejects_bad_speed_and_shapes() {
        assert!(SessionConfig::default().with_speed(0.0).validate().is_err());
        assert!(SessionConfig::default()
            .with_speed(f64::NAN)
            .validate()
            .is_err());
        assert_eq!(
            SessionConfig::default()
                .with_forced_shapes(vec![])
                .validate(),
            Err(ConfigError::EmptyForcedShapes)
        );
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"rows": 22, "forced_shapes": ["I", "O"]}"#).unwrap();
        assert_eq!(config.rows, 22);
        assert_eq!(config.cols, 10);
        assert_eq!(config.forced_shapes, Some(vec![PieceKind::I, PieceKind::O]));
        assert_eq!(config.lock_delay_ticks, 40);
    }
}
