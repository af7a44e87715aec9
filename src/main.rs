//! Terminal runner (default binary).
//!
//! Drives a session at a fixed tick rate, maps crossterm keys onto session
//! moves and draws snapshots through the framebuffer renderer.
//!
//! Usage: `tetrafall [config.json]`. `TETRAFALL_SEED` overrides the seed and
//! `RUST_LOG` enables logging on stderr.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tetrafall::core::{EventSink, GameEvent, GameSnapshot, Session, SessionConfig};
use tetrafall::input::{handle_key_event, host_command, should_quit, HostCommand, SoftDropLatch};
use tetrafall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetrafall::types::{Move, TICK_MS};

/// Stands in for an audio player: every cue goes to the log.
struct CueLog;

impl EventSink for CueLog {
    fn emit(&mut self, event: GameEvent) {
        match (&event, event.cue()) {
            (GameEvent::SessionStopped, _) => log::debug!("releasing playing sounds"),
            (_, Some(cue)) => log::debug!("cue {}", cue),
            (_, None) => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config(std::env::args().nth(1).as_deref());
    let mut session = Session::start(config).context("invalid session config")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!(
        "final: {} points, {} lines, {} pieces",
        session.points(),
        session.lines(),
        session.pieces_locked()
    );
    result
}

/// Config file (if any), then the seed override. A config that cannot be
/// read falls back to defaults.
fn load_config(path: Option<&str>) -> SessionConfig {
    let mut config = match path {
        Some(path) => match read_config(Path::new(path)) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{:#}; using defaults", err);
                SessionConfig::default().with_seed(clock_seed())
            }
        },
        None => SessionConfig::default().with_seed(clock_seed()),
    };

    if let Ok(seed) = std::env::var("TETRAFALL_SEED") {
        match seed.parse() {
            Ok(seed) => config.seed = seed,
            Err(_) => log::warn!("ignoring TETRAFALL_SEED={:?}", seed),
        }
    }
    config
}

fn read_config(path: &Path) -> Result<SessionConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("cannot parse config {}", path.display()))?;
    Ok(config)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut cues = CueLog;
    let mut latch = SoftDropLatch::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            session.stop(&mut cues);
                            return Ok(());
                        }

                        if let Some(cmd) = host_command(key) {
                            match cmd {
                                HostCommand::Stop => session.stop(&mut cues),
                                HostCommand::Restart => {
                                    latch.reset();
                                    session.restart(&mut cues)?;
                                }
                            }
                        } else if let Some(mv) = handle_key_event(key) {
                            let mv = match mv {
                                Move::SoftDropStart => latch.press(),
                                other => Some(other),
                            };
                            if let Some(mv) = mv {
                                session.push_input(mv);
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Only a held soft drop cares about repeats.
                        if handle_key_event(key) == Some(Move::SoftDropStart) {
                            latch.press();
                        }
                    }
                    KeyEventKind::Release => {
                        if handle_key_event(key) == Some(Move::SoftDropStart) {
                            if let Some(mv) = latch.release() {
                                session.push_input(mv);
                            }
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if let Some(mv) = latch.update() {
                session.push_input(mv);
            }
            session.tick(&mut cues)?;
        }
    }
}
