//! Game events - effects emitted by the engine for outside collaborators
//!
//! The engine knows nothing about sound formats or mixing. It emits named
//! events into an [`EventSink`]; a host maps [`GameEvent::cue`] names onto
//! whatever playback it has (or ignores them).

use arrayvec::ArrayVec;

use crate::types::{ClearTier, Move, PieceKind, MAX_CLEAR_GROUP};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A buffered move was replayed; `accepted` is false when it did not fit.
    Input { mv: Move, accepted: bool },
    /// The active piece was written into the board.
    Locked { kind: PieceKind },
    /// One group of completed rows was removed.
    Cleared {
        tier: ClearTier,
        rows: ArrayVec<usize, MAX_CLEAR_GROUP>,
    },
    GameOver,
    /// The session stopped ticking; anything still playing should be released.
    SessionStopped,
}

impl GameEvent {
    /// Sound cue name for this event.
    pub fn cue(&self) -> Option<&'static str> {
        match self {
            GameEvent::Input { mv, .. } => match mv {
                Move::Left => Some("click1"),
                Move::RotateUp => Some("click2"),
                Move::Right => Some("click3"),
                Move::RotateDown => Some("click4"),
                Move::SoftDropStart | Move::SoftDropStop => None,
            },
            GameEvent::Locked { .. } => Some("lock"),
            GameEvent::Cleared { tier, .. } => Some(tier.name()),
            GameEvent::GameOver => Some("gameover"),
            GameEvent::SessionStopped => Some("stop"),
        }
    }
}

/// Receiver of engine events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_events_use_tier_names() {
        let mut rows = ArrayVec::new();
        rows.push(3);
        let ev = GameEvent::Cleared {
            tier: ClearTier::Double,
            rows,
        };
        assert_eq!(ev.cue(), Some("double"));
    }

    #[test]
    fn soft_drop_has_no_click() {
        let ev = GameEvent::Input {
            mv: Move::SoftDropStart,
            accepted: true,
        };
        assert_eq!(ev.cue(), None);
        assert_eq!(GameEvent::GameOver.cue(), Some("gameover"));
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<GameEvent> = Vec::new();
        sink.emit(GameEvent::Locked { kind: PieceKind::T });
        sink.emit(GameEvent::GameOver);
        assert_eq!(
            sink,
            vec![GameEvent::Locked { kind: PieceKind::T }, GameEvent::GameOver]
        );
    }
}
