//! Game session - the state a game loop owns between calls into the rules
//!
//! Ties the rules together: the grid, the active piece, the look-ahead piece
//! and the random source live in one value. Every mutation goes through
//! `&mut self`, so timer ticks and key presses are serialized by construction.
//!
//! # Landing
//!
//! A rejected move down is a landing. A piece with cells above the grid ends
//! the game; otherwise it is merged, and if rows are full the session enters a
//! clearing window (no active piece, moves ignored) until the caller finishes
//! the clear with [`GameSession::finish_clear`]. This lets a front-end show
//! the full rows before they disappear.

use rand::Rng;

use crate::error::RulesError;
use crate::factory::spawn;
use crate::grid::Grid;
use crate::landing::merge;
use crate::line_clear::{clear_full_rows, full_rows, ClearedRows};
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::transform::{attempt_rotate, attempt_shift, Placement};
use crate::types::{Command, Direction, BOARD_HEIGHT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Full rows are merged and waiting to be removed.
    Clearing(ClearedRows),
    GameOver,
}

/// Result of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not applied: paused, clearing, game over, or nothing to move.
    Ignored,
    Moved,
    /// Left/right/rotate was illegal; nothing changed.
    Rejected(RulesError),
    /// The piece merged into the grid. Non-empty rows mean a clear is pending.
    Landed { cleared_rows: ClearedRows },
    GameOver,
    PauseToggled { paused: bool },
    Restarted,
}

/// Landing events kept for observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Landed { cleared_rows: ClearedRows },
    GameOver,
}

#[derive(Debug, Clone)]
pub struct GameSession<R: Rng = SimpleRng> {
    grid: Grid,
    active: Option<Piece>,
    next: Piece,
    rng: R,
    phase: Phase,
    paused: bool,
    lines: u32,
    /// Pieces that entered play this game (including the active one).
    pieces: u32,
    last_event: Option<SessionEvent>,
}

impl GameSession<SimpleRng> {
    /// Seeded session; the same seed replays the same piece sequence.
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Empty grid, a freshly spawned active piece and a look-ahead piece.
    pub fn new(mut rng: R) -> Self {
        let next = spawn(&mut rng);
        let mut session = Self {
            grid: Grid::new(),
            active: None,
            next,
            rng,
            phase: Phase::Playing,
            paused: false,
            lines: 0,
            pieces: 0,
            last_event: None,
        };
        session.spawn_next();
        session
    }

    /// Session over an existing grid. The active piece's visible cells are
    /// painted into the grid.
    pub fn from_parts(grid: Grid, active: Piece, next: Piece, rng: R) -> Self {
        let grid = grid.repainted(&[], active.cells(), active.color());
        Self {
            grid,
            active: Some(active),
            next,
            rng,
            phase: Phase::Playing,
            paused: false,
            lines: 0,
            pieces: 1,
            last_event: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_clearing(&self) -> bool {
        matches!(self.phase, Phase::Clearing(_))
    }

    /// Rows marked for removal while a clear is pending.
    pub fn clearing_rows(&self) -> &[usize] {
        match &self.phase {
            Phase::Clearing(rows) => rows.as_slice(),
            _ => &[],
        }
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<SessionEvent> {
        self.last_event.take()
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::MoveLeft => self.shift(Direction::Left),
            Command::MoveRight => self.shift(Direction::Right),
            Command::MoveDown => self.step_down(),
            Command::Rotate => self.rotate(),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.restart(),
        }
    }

    /// Timer-driven gravity step; identical to a move down.
    pub fn tick(&mut self) -> Outcome {
        self.step_down()
    }

    /// Shift the active piece. A rejected move down lands it.
    pub fn shift(&mut self, direction: Direction) -> Outcome {
        if direction == Direction::Down {
            return self.step_down();
        }
        let Some(active) = self.playable_piece() else {
            return Outcome::Ignored;
        };
        let result = attempt_shift(&self.grid, active, direction);
        self.commit(result)
    }

    pub fn rotate(&mut self) -> Outcome {
        let Some(active) = self.playable_piece() else {
            return Outcome::Ignored;
        };
        let result = attempt_rotate(&self.grid, active);
        self.commit(result)
    }

    pub fn step_down(&mut self) -> Outcome {
        let Some(active) = self.playable_piece() else {
            return Outcome::Ignored;
        };
        match attempt_shift(&self.grid, active, Direction::Down) {
            Err(RulesError::MoveRejected { .. }) => self.land(),
            result => self.commit(result),
        }
    }

    /// Remove the rows marked by the last landing and bring in the next
    /// piece. Returns the removed rows, or `None` when no clear is pending.
    pub fn finish_clear(&mut self) -> Option<ClearedRows> {
        if !self.is_clearing() {
            return None;
        }
        let clear = clear_full_rows(&self.grid);
        self.grid = clear.grid;
        self.lines += clear.cleared_rows.len() as u32;
        self.phase = Phase::Playing;
        self.spawn_next();
        Some(clear.cleared_rows)
    }

    pub fn toggle_pause(&mut self) -> Outcome {
        if self.game_over() {
            return Outcome::Ignored;
        }
        self.paused = !self.paused;
        Outcome::PauseToggled {
            paused: self.paused,
        }
    }

    /// Start over on an empty grid, keeping the random source.
    pub fn restart(&mut self) -> Outcome {
        self.grid = Grid::new();
        self.active = None;
        self.next = spawn(&mut self.rng);
        self.phase = Phase::Playing;
        self.paused = false;
        self.lines = 0;
        self.pieces = 0;
        self.last_event = None;
        self.spawn_next();
        Outcome::Restarted
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot (no allocation).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (r, row) in self.grid.rows().enumerate() {
            out.board[r].copy_from_slice(row);
        }
        out.clearing = [false; BOARD_HEIGHT as usize];
        for &row in self.clearing_rows() {
            out.clearing[row] = true;
        }
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.next = NextSnapshot::from(&self.next);
        out.paused = self.paused;
        out.game_over = self.game_over();
        out.lines = self.lines;
        out.pieces = self.pieces;
    }

    fn playable_piece(&self) -> Option<&Piece> {
        if self.paused || self.phase != Phase::Playing {
            return None;
        }
        self.active.as_ref()
    }

    fn commit(&mut self, result: Result<Placement, RulesError>) -> Outcome {
        match result {
            Ok(Placement { grid, piece }) => {
                self.grid = grid;
                self.active = Some(piece);
                Outcome::Moved
            }
            Err(err) => Outcome::Rejected(err),
        }
    }

    fn land(&mut self) -> Outcome {
        let Some(piece) = self.active.take() else {
            return Outcome::Ignored;
        };

        let Some(merged) = merge(&self.grid, &piece) else {
            return self.end_game();
        };
        self.grid = merged;

        let cleared_rows = full_rows(&self.grid);
        self.last_event = Some(SessionEvent::Landed {
            cleared_rows: cleared_rows.clone(),
        });

        if cleared_rows.is_empty() {
            if !self.spawn_next() {
                return Outcome::GameOver;
            }
        } else {
            self.phase = Phase::Clearing(cleared_rows.clone());
        }
        Outcome::Landed { cleared_rows }
    }

    /// Promote the look-ahead piece and draw a new one. A new piece that
    /// overlaps filled cells ends the game.
    fn spawn_next(&mut self) -> bool {
        let incoming = std::mem::replace(&mut self.next, spawn(&mut self.rng));
        if incoming.cells().iter().any(|&cell| self.grid.is_occupied(cell)) {
            self.end_game();
            return false;
        }
        self.grid = self.grid.repainted(&[], incoming.cells(), incoming.color());
        self.active = Some(incoming);
        self.pieces += 1;
        true
    }

    fn end_game(&mut self) -> Outcome {
        self.active = None;
        self.phase = Phase::GameOver;
        self.last_event = Some(SessionEvent::GameOver);
        Outcome::GameOver
    }
}

impl Default for GameSession<SimpleRng> {
    fn default() -> Self {
        Self::seeded(1)
    }
}
