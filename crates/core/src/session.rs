//! Session module - one game from start to game over
//!
//! A session owns the board, the bag and the active piece. The host calls
//! [`Session::tick`] once per refresh; each tick runs to completion:
//!
//! 1. gravity accumulates (faster while soft drop is held)
//! 2. buffered moves are replayed in arrival order, each validated on its own
//! 3. the piece is analyzed at its position
//! 4. topped out: game over
//! 5. touching below: count lock delay, then lock, draw the next piece and
//!    clear lines
//! 6. otherwise fall one row on a gravity step
//!
//! Effects are reported to an [`EventSink`].

use crate::bag::Bag;
use crate::board::Board;
use crate::config::SessionConfig;
use crate::error::{EngineError, ShapeError};
use crate::events::{EventSink, GameEvent};
use crate::fit::{analyze, FitResult};
use crate::line_clear;
use crate::piece::ActivePiece;
use crate::shapes;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Move, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Running,
    /// Stopped by the host (or the runtime limit).
    Stopped,
    /// The stack reached the top of the board.
    GameOver,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session is not running; nothing happened.
    Halted,
    /// No gravity step this tick and nothing below.
    Waiting,
    Fell,
    /// Touching below, lock delay counting.
    Grounded { lock_delay: u32 },
    Locked { points: u32, lines: u32 },
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    bag: Bag,
    active: ActivePiece,
    /// Moves queued since the last tick.
    inputs: Vec<Move>,
    /// Gravity accumulated towards the next row.
    gravity: f64,
    speed: f64,
    soft_drop: bool,
    points: u32,
    lines: u32,
    pieces_locked: u32,
    ticks: u64,
    status: SessionStatus,
}

impl Session {
    /// Start a new session: fresh board, fresh bag, first piece spawned.
    pub fn start(config: SessionConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let board = Board::with_size(config.cols, config.rows)?;
        let mut bag = match &config.forced_shapes {
            Some(set) => Bag::with_set(config.seed, set.clone()),
            None => Bag::new(config.seed),
        };
        let active = ActivePiece::spawn(bag.next(), board.cols())?;

        log::info!(
            "session started: {}x{} board, speed {:.3}, seed {}",
            board.cols(),
            board.rows(),
            config.starting_speed,
            config.seed
        );

        Ok(Self {
            speed: config.starting_speed,
            config,
            board,
            bag,
            active,
            inputs: Vec::with_capacity(16),
            gravity: 0.0,
            soft_drop: false,
            points: 0,
            lines: 0,
            pieces_locked: 0,
            ticks: 0,
            status: SessionStatus::Running,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// The piece that spawns after the active one.
    pub fn preview(&self) -> PieceKind {
        self.bag.peek()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    pub fn pending_inputs(&self) -> &[Move] {
        &self.inputs
    }

    /// Analyze the active piece where it currently is.
    pub fn fit(&self) -> Result<FitResult, ShapeError> {
        self.active.fit(&self.board)
    }

    /// Queue a move for the next tick. Ignored once the session has ended.
    pub fn push_input(&mut self, mv: Move) {
        if self.is_running() {
            self.inputs.push(mv);
        }
    }

    /// Advance the session by one tick.
    pub fn tick(&mut self, sink: &mut impl EventSink) -> Result<TickOutcome, ShapeError> {
        if !self.is_running() {
            self.inputs.clear();
            return Ok(TickOutcome::Halted);
        }
        self.ticks += 1;

        let gravity_step = self.accumulate_gravity();
        self.apply_inputs(sink);

        let fit = self.active.fit(&self.board)?;
        let row = self.active.row;

        let outcome = if !fit.fits && row <= 0 && (fit.touch.below || fit.blocked > 0) {
            log::info!(
                "topped out: {} points, {} lines, {} pieces",
                self.points,
                self.lines,
                self.pieces_locked
            );
            self.finish(SessionStatus::GameOver, sink);
            TickOutcome::GameOver
        } else if fit.touch.below {
            self.active.lock_delay += 1;
            if self.active.lock_delay > self.config.lock_delay_ticks && fit.fits {
                self.lock(&fit, sink)?
            } else {
                TickOutcome::Grounded {
                    lock_delay: self.active.lock_delay,
                }
            }
        } else if (row < 0 || fit.fits) && gravity_step {
            self.active.row += 1;
            TickOutcome::Fell
        } else {
            TickOutcome::Waiting
        };

        if let Some(limit) = self.config.max_runtime_ticks {
            if self.is_running() && self.ticks >= limit {
                log::info!("runtime limit of {} ticks reached", limit);
                self.stop(sink);
            }
        }

        Ok(outcome)
    }

    /// Stop ticking. Has no effect once the session already ended.
    pub fn stop(&mut self, sink: &mut impl EventSink) {
        if self.is_running() {
            self.finish(SessionStatus::Stopped, sink);
        }
    }

    /// Stop this session and replace it with a fresh one.
    ///
    /// The new bag continues from the current RNG state, so a restart does not
    /// replay the same sequence.
    pub fn restart(&mut self, sink: &mut impl EventSink) -> Result<(), EngineError> {
        self.stop(sink);
        let config = self.config.clone().with_seed(self.bag.seed());
        *self = Session::start(config)?;
        Ok(())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Fill `out`, reusing its cell buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cols = self.board.cols();
        out.rows = self.board.rows();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.active = self
            .active
            .shape()
            .ok()
            .map(|shape| ActiveSnapshot::new(&self.active, shape));
        out.preview = shapes::lookup(self.preview(), 1).ok();
        out.points = self.points;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
        out.ticks = self.ticks;
        out.soft_drop = self.soft_drop;
        out.status = self.status;
    }

    fn accumulate_gravity(&mut self) -> bool {
        let step = if self.soft_drop {
            self.speed * self.config.soft_drop_multiplier as f64
        } else {
            self.speed
        };
        self.gravity += step;
        if self.gravity >= 1.0 {
            self.gravity = 0.0;
            true
        } else {
            false
        }
    }

    /// Replay buffered moves in order. A move that does not fit at the current
    /// row is dropped on its own; earlier accepted moves stand.
    fn apply_inputs(&mut self, sink: &mut impl EventSink) {
        let mut inputs = std::mem::take(&mut self.inputs);
        let kind = self.active.kind;
        let mut rotation = self.active.rotation;
        let mut col = self.active.col;

        for mv in inputs.drain(..) {
            let (cand_rotation, cand_col) = match mv {
                Move::SoftDropStart => {
                    self.soft_drop = true;
                    continue;
                }
                Move::SoftDropStop => {
                    self.soft_drop = false;
                    continue;
                }
                Move::Left => (rotation, col - 1),
                Move::Right => (rotation, col + 1),
                Move::RotateUp => (shapes::wrap_rotation(kind, rotation as i32 - 1), col),
                Move::RotateDown => (shapes::wrap_rotation(kind, rotation as i32 + 1), col),
            };

            let shape = match shapes::lookup(kind, cand_rotation) {
                Ok(shape) => shape,
                Err(err) => {
                    log::error!("{}", err);
                    sink.emit(GameEvent::Input { mv, accepted: false });
                    continue;
                }
            };
            let cand_col = if cand_rotation != rotation {
                self.clamp_col(&shape, cand_col)
            } else {
                cand_col
            };

            let accepted = analyze(&shape, &self.board, self.active.row, cand_col).fits;
            if accepted {
                rotation = cand_rotation;
                col = cand_col;
            } else {
                log::trace!("rejected {} at row {}", mv.as_str(), self.active.row);
            }
            sink.emit(GameEvent::Input { mv, accepted });
        }

        self.active.rotation = rotation;
        self.active.col = col;
        self.inputs = inputs;
    }

    /// Keep the occupied columns of `shape` on the board.
    fn clamp_col(&self, shape: &shapes::Shape, col: i32) -> i32 {
        let (first, last) = shape.occupied_cols();
        let min = -(first as i32);
        let max = self.board.cols() as i32 - 1 - last as i32;
        col.clamp(min, max)
    }

    fn lock(
        &mut self,
        fit: &FitResult,
        sink: &mut impl EventSink,
    ) -> Result<TickOutcome, ShapeError> {
        let kind = self.active.kind;
        self.board.place(&fit.slots, kind.color());
        self.pieces_locked += 1;
        log::debug!(
            "locked {} at row {} col {}",
            kind.as_str(),
            self.active.row,
            self.active.col
        );
        sink.emit(GameEvent::Locked { kind });

        self.active = ActivePiece::spawn(self.bag.next(), self.board.cols())?;

        let result = line_clear::evaluate(&mut self.board);
        let lines = result.lines();
        self.points += result.points;
        self.lines += lines;
        for event in result.events {
            sink.emit(GameEvent::Cleared {
                tier: event.tier,
                rows: event.rows,
            });
        }

        Ok(TickOutcome::Locked {
            points: result.points,
            lines,
        })
    }

    fn finish(&mut self, status: SessionStatus, sink: &mut impl EventSink) {
        self.status = status;
        self.inputs.clear();
        self.soft_drop = false;
        sink.emit(GameEvent::SessionStopped);
        if status == SessionStatus::GameOver {
            sink.emit(GameEvent::GameOver);
        }
        log::info!("session ended ({:?}) after {} ticks", status, self.ticks);
    }
}
