//! End-to-end session tests driven tick by tick.

use tetrafall::core::{
    GameEvent, NullSink, Session, SessionConfig, SessionStatus, TickOutcome,
};
use tetrafall::types::{Color, Move, PieceKind};

fn fast(config: SessionConfig) -> SessionConfig {
    config.with_speed(1.0)
}

#[test]
fn pieces_fall_lock_and_draw_from_the_bag() {
    let config = fast(SessionConfig::default().with_seed(42).with_lock_delay(3));
    let mut session = Session::start(config).unwrap();
    let mut events = Vec::new();
    let mut locks = 0;

    for _ in 0..2000 {
        let before = session.fit().unwrap();
        let color = session.active().color();
        let cursor = session.bag().cursor();
        let refills = session.bag().refills();
        let expected_next = session.preview();

        if let TickOutcome::Locked { points, .. } = session.tick(&mut events).unwrap() {
            locks += 1;
            assert_eq!(points, 0);
            for &(r, c) in &before.slots {
                assert_eq!(session.board().get(r as i32, c as i32), Some(Some(color)));
            }
            assert_eq!(session.active().kind, expected_next);
            assert_eq!(session.active().lock_delay, 0);
            assert!(session.active().row < 0);
            if session.bag().refills() > refills {
                assert_eq!(session.bag().cursor(), 1);
            } else {
                assert_eq!(session.bag().cursor(), cursor + 1);
            }
            if locks == 6 {
                break;
            }
        }
    }

    assert_eq!(locks, 6);
    assert_eq!(session.pieces_locked(), 6);
    assert!(session.bag().refills() >= 1);
    assert_eq!(session.board().filled(), 24);
    assert!(session.is_running());
    let lock_events = events
        .iter()
        .filter(|e| matches!(e, GameEvent::Locked { .. }))
        .count();
    assert_eq!(lock_events, 6);
}

#[test]
fn stacked_squares_top_out() {
    let config = fast(
        SessionConfig::default()
            .with_forced_shapes(vec![PieceKind::O])
            .with_lock_delay(0),
    );
    let mut session = Session::start(config).unwrap();
    let mut events = Vec::new();

    for _ in 0..1000 {
        if session.tick(&mut events).unwrap() == TickOutcome::GameOver {
            break;
        }
    }

    assert_eq!(session.status(), SessionStatus::GameOver);
    assert!(events.contains(&GameEvent::GameOver));
    for row in 0..20 {
        assert_eq!(session.board().get(row, 4), Some(Some(Color::Yellow)));
        assert_eq!(session.board().get(row, 5), Some(Some(Color::Yellow)));
    }
    assert_eq!(session.snapshot().status, SessionStatus::GameOver);
}

#[test]
fn each_buffered_move_is_judged_on_its_own() {
    let config = fast(SessionConfig::default().with_forced_shapes(vec![PieceKind::O]));
    let mut session = Session::start(config).unwrap();
    while session.active().row < 0 {
        session.tick(&mut NullSink).unwrap();
    }

    for mv in [Move::Left, Move::Left, Move::Left, Move::Left, Move::Left, Move::Right] {
        session.push_input(mv);
    }
    assert_eq!(session.pending_inputs().len(), 6);

    let mut events = Vec::new();
    session.tick(&mut events).unwrap();

    let verdicts: Vec<bool> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Input { accepted, .. } => Some(*accepted),
            _ => None,
        })
        .collect();
    assert_eq!(verdicts, vec![true, true, true, true, false, true]);
    assert_eq!(session.active().col, 1);
    assert!(session.pending_inputs().is_empty());
}

#[test]
fn input_events_carry_click_cues() {
    let config = fast(SessionConfig::default().with_forced_shapes(vec![PieceKind::T]));
    let mut session = Session::start(config).unwrap();
    while session.active().row < 0 {
        session.tick(&mut NullSink).unwrap();
    }

    session.push_input(Move::Left);
    session.push_input(Move::RotateUp);
    session.push_input(Move::Right);
    session.push_input(Move::RotateDown);
    let mut events = Vec::new();
    session.tick(&mut events).unwrap();

    let cues: Vec<&str> = events.iter().filter_map(|e| e.cue()).collect();
    assert_eq!(cues, vec!["click1", "click2", "click3", "click4"]);
}

#[test]
fn stop_restart_and_runtime_limit() {
    let mut session = Session::start(SessionConfig::default().with_max_runtime(3)).unwrap();
    let mut events = Vec::new();
    for _ in 0..5 {
        session.tick(&mut events).unwrap();
    }
    assert_eq!(session.status(), SessionStatus::Stopped);
    assert_eq!(session.ticks(), 3);
    assert_eq!(events, vec![GameEvent::SessionStopped]);

    session.restart(&mut events).unwrap();
    assert!(session.is_running());
    assert_eq!(session.ticks(), 0);
    // Already stopped: restart does not stop twice.
    assert_eq!(events.len(), 1);
}

#[test]
fn snapshot_into_reuses_buffer() {
    let mut session = Session::start(SessionConfig::default().with_rows(22)).unwrap();
    let mut snap = session.snapshot();
    assert_eq!(snap.cells.len(), 220);

    session.tick(&mut NullSink).unwrap();
    session.snapshot_into(&mut snap);
    assert_eq!(snap.rows, 22);
    assert_eq!(snap.cells.len(), 220);
    assert_eq!(snap.ticks, 1);
    assert_eq!(snap.preview.map(|s| s.kind()), Some(session.preview()));
}
