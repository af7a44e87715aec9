//! Soft-drop latch for terminal environments.
//!
//! Most terminals never report key release. Holding the soft-drop key shows up
//! as a stream of press/repeat events instead, so the latch treats the key as
//! released once no press arrived for a short timeout and emits the
//! `SoftDropStop` move the session needs.

use std::time::{Duration, Instant};

use crate::types::Move;

// Longer than a typical keyboard auto-repeat delay, so holding the key does not
// flicker between start and stop before repeats kick in.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 400;

#[derive(Debug, Clone)]
pub struct SoftDropLatch {
    held: bool,
    last_key_time: Instant,
    key_release_timeout: Duration,
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self {
            held: false,
            last_key_time: Instant::now(),
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Soft-drop key pressed (or auto-repeated).
    ///
    /// Returns `SoftDropStart` only on the first press of a hold.
    pub fn press(&mut self) -> Option<Move> {
        self.last_key_time = Instant::now();
        if self.held {
            None
        } else {
            self.held = true;
            Some(Move::SoftDropStart)
        }
    }

    /// Soft-drop key released, for terminals that do report it.
    pub fn release(&mut self) -> Option<Move> {
        if self.held {
            self.held = false;
            Some(Move::SoftDropStop)
        } else {
            None
        }
    }

    /// Call once per tick; synthesizes the release after the timeout.
    pub fn update(&mut self) -> Option<Move> {
        if self.held && self.last_key_time.elapsed() > self.key_release_timeout {
            return self.release();
        }
        None
    }

    pub fn reset(&mut self) {
        self.held = false;
        self.last_key_time = Instant::now();
    }
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}
