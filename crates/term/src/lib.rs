//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! session snapshot into a plain framebuffer that is then flushed to the
//! terminal, with no widget or layout library in between.
//!
//! - Keep `core` deterministic and free of I/O
//! - Control the aspect ratio exactly (2 chars wide per board cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetrafall_core as core;
pub use tetrafall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
