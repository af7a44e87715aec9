//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::Move`] values for the session input buffer and
//! provides a soft-drop latch suitable for terminals without key-release
//! events.

pub mod latch;
pub mod map;

pub use tetrafall_types as types;

pub use latch::SoftDropLatch;
pub use map::{handle_key_event, host_command, should_quit, HostCommand};
