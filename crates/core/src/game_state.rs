//! Game state module - the tick-driven state machine
//!
//! Ties the board, the piece catalog, collision and the randomizer together.
//! Every tick runs the same fixed pipeline:
//!
//! 1. apply the decoded command (if any)
//! 2. gravity, once every `gravity_delay + 1` ticks
//! 3. lock the piece if it cannot descend further
//! 4. clear completed lines and add them to the score
//! 5. hand back a snapshot for rendering

use tracing::{debug, info, trace};

use crate::board::{Board, ClearedRows};
use crate::collision::{fits_horizontally, lock_into, piece_cells, would_collide_below};
use crate::pieces::{get_shape, Shape};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece in spawn orientation with its origin at (x, y)
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Shape for the current rotation
    pub fn shape(&self) -> Shape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board cells covered by the piece
    pub fn cells(&self) -> [(i8, i8); PIECE_CELLS] {
        piece_cells(self)
    }

    /// Whether the origin is still above the visible board
    pub fn is_entering(&self) -> bool {
        self.y < 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Record of the most recent lock (or top-out), consumed by observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    /// The piece as it was when it stopped
    pub piece: ActivePiece,
    /// Rows removed by the clearing pass that followed
    pub cleared_rows: ClearedRows,
    /// Score after the clear
    pub score: u32,
    /// The piece stopped before fully entering the board
    pub topped_out: bool,
}

/// Complete game state for one play session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    score: u32,
    phase: Phase,
    gravity_counter: u32,
    gravity_delay: u32,
    rng: SimpleRng,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Start a session: empty board, random first piece at `(0, -1)`
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let kind = rng.next_kind();
        debug!(seed, kind = kind.as_str(), "new session");

        Self {
            board: Board::new(),
            active: ActivePiece::new(kind, SPAWN_X, FIRST_SPAWN_Y),
            score: 0,
            phase: Phase::Playing,
            gravity_counter: 0,
            gravity_delay: GRAVITY_DELAY,
            rng,
            last_event: None,
        }
    }

    /// Use a different number of ticks between automatic descents
    pub fn with_gravity_delay(mut self, delay: u32) -> Self {
        self.gravity_delay = delay;
        self
    }

    /// Start from a prepared board
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the active piece, e.g. to set up a practice position
    pub fn with_active(mut self, piece: ActivePiece) -> Self {
        self.active = piece;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn gravity_delay(&self) -> u32 {
        self.gravity_delay
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance one tick with at most one command and return the new snapshot.
    pub fn tick(&mut self, command: Option<Command>) -> GameSnapshot {
        if let Some(command) = command {
            self.apply_command(command);
        }

        if self.phase == Phase::Playing {
            self.apply_gravity();

            let locked = if would_collide_below(&self.board, &self.active) {
                Some(self.lock_active())
            } else {
                None
            };

            let cleared = self.board.clear_completed_rows();
            if !cleared.is_empty() {
                self.score += cleared.len() as u32;
                debug!(rows = ?cleared.as_slice(), score = self.score, "lines cleared");
            }

            if let Some(piece) = locked {
                self.last_event = Some(LockEvent {
                    piece,
                    cleared_rows: cleared,
                    score: self.score,
                    topped_out: self.game_over(),
                });
            }
        }

        self.snapshot()
    }

    /// Apply a single command. Returns true if the state changed.
    ///
    /// While playing, `Restart` is ignored; after game over only `Restart`
    /// does anything. `Quit` belongs to the driver loop and is always ignored.
    pub fn apply_command(&mut self, command: Command) -> bool {
        let changed = match (self.phase, command) {
            (Phase::GameOver, Command::Restart) => {
                self.restart();
                true
            }
            (Phase::GameOver, _) => false,
            (Phase::Playing, Command::Rotate) => {
                // No overlap check and no kicks: rotation always succeeds.
                self.active.rotation = self.active.rotation.rotate_cw();
                true
            }
            (Phase::Playing, Command::MoveLeft) => self.try_shift(-1),
            (Phase::Playing, Command::MoveRight) => self.try_shift(1),
            (Phase::Playing, Command::SoftDrop) => self.try_descend(),
            (Phase::Playing, Command::Restart | Command::Quit) => false,
        };
        trace!(command = command.as_str(), changed, "command applied");
        changed
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if !fits_horizontally(&self.active, dx) {
            return false;
        }
        self.active.x += dx;
        true
    }

    fn try_descend(&mut self) -> bool {
        if would_collide_below(&self.board, &self.active) {
            return false;
        }
        self.active.y += 1;
        true
    }

    fn apply_gravity(&mut self) {
        if self.gravity_counter >= self.gravity_delay {
            self.gravity_counter = 0;
            self.try_descend();
        } else {
            self.gravity_counter += 1;
        }
    }

    /// Lock the active piece. Returns the piece as it stopped.
    fn lock_active(&mut self) -> ActivePiece {
        let piece = self.active;

        if piece.is_entering() {
            self.phase = Phase::GameOver;
            info!(score = self.score, kind = piece.kind.as_str(), "game over");
            return piece;
        }

        lock_into(&mut self.board, &piece);
        debug!(kind = piece.kind.as_str(), x = piece.x, y = piece.y, "piece locked");
        self.spawn(SPAWN_Y);
        piece
    }

    fn spawn(&mut self, y: i8) {
        let kind = self.rng.next_kind();
        self.active = ActivePiece::new(kind, SPAWN_X, y);
        debug!(kind = kind.as_str(), "spawned piece");
    }

    fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.gravity_counter = 0;
        self.last_event = None;
        self.phase = Phase::Playing;
        self.spawn(SPAWN_Y);
        info!("session restarted");
    }

    /// Board cells OR active piece cells, written into an existing snapshot
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.grid);
        for (x, y) in self.active.cells() {
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                out.grid[y as usize][x as usize] = true;
            }
        }
        out.score = self.score;
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.active.x, SPAWN_X);
        assert_eq!(state.active.y, FIRST_SPAWN_Y);
        assert_eq!(state.active.rotation, Rotation::North);
        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(state.gravity_delay, GRAVITY_DELAY);
    }

    #[test]
    fn test_gravity_fires_after_delay() {
        let mut state = GameState::new(1).with_gravity_delay(3);
        let y0 = state.active.y;

        // Counter climbs 0 -> 3 over three ticks, the fourth tick descends.
        for _ in 0..3 {
            state.tick(None);
            assert_eq!(state.active.y, y0);
        }
        state.tick(None);
        assert_eq!(state.active.y, y0 + 1);
        assert_eq!(state.gravity_counter, 0);
    }

    #[test]
    fn test_spawn_after_lock_uses_lower_origin() {
        let mut state =
            GameState::new(3).with_active(ActivePiece::new(PieceKind::O, 4, 7));
        // O occupies rows 7-8; floor is below row 9, so one soft drop lands it.
        state.tick(Some(Command::SoftDrop));
        assert_eq!(state.board.filled_count(), 4);
        assert_eq!(state.active.y, SPAWN_Y);
        assert_eq!(state.active.x, SPAWN_X);
        assert_eq!(state.active.rotation, Rotation::North);

        let event = state.take_last_event().unwrap();
        assert_eq!(event.piece.y, 8);
        assert!(!event.topped_out);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(5).with_gravity_delay(0);
        state.score = 7;
        state.phase = Phase::GameOver;
        state.board.set(3, 3, true);
        state.gravity_counter = 4;

        state.tick(Some(Command::Restart));
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.board.filled_count(), 0);
        // Restart spawns at -2 and the same tick's gravity pulls it to -1.
        assert_eq!(state.active.y, SPAWN_Y + 1);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::new(5);
        state.score = 3;
        assert!(!state.apply_command(Command::Restart));
        assert!(!state.apply_command(Command::Quit));
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_soft_drop_blocked_on_floor() {
        let mut state =
            GameState::new(9).with_active(ActivePiece::new(PieceKind::I, 0, 9));
        assert!(!state.apply_command(Command::SoftDrop));
        assert_eq!(state.active.y, 9);
    }

    #[test]
    fn test_rotation_is_never_rejected() {
        let board = Board::from_rows(&["##########", "##########", "##########"]);
        let mut state = GameState::new(2)
            .with_board(board)
            .with_active(ActivePiece::new(PieceKind::I, 0, 6));
        assert!(state.apply_command(Command::Rotate));
        // Upright I now overlaps rows 7-9; no kick, no rejection.
        assert_eq!(state.active.rotation, Rotation::East);
        assert_eq!(state.active.y, 6);
    }

    #[test]
    fn test_overhanging_piece_can_move_left() {
        let mut upright = ActivePiece::new(PieceKind::I, 9, 2);
        upright.rotation = Rotation::East;
        let mut state = GameState::new(2).with_active(upright);

        // Lying flat at x = 9 the box hangs three columns past the wall.
        assert!(state.apply_command(Command::Rotate));
        assert_eq!(state.active.rotation, Rotation::South);
        assert!(!state.apply_command(Command::MoveRight));
        assert!(state.apply_command(Command::MoveLeft));
        assert_eq!(state.active.x, 8);
    }

    #[test]
    fn test_snapshot_paints_active_piece() {
        let state = GameState::new(4).with_active(ActivePiece::new(PieceKind::O, 2, 0));
        let snap = state.snapshot();
        assert!(snap.grid[0][2] && snap.grid[0][3] && snap.grid[1][2] && snap.grid[1][3]);
        assert_eq!(snap.filled_count(), 4);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_snapshot_skips_cells_above_board() {
        let state = GameState::new(4).with_active(ActivePiece::new(PieceKind::O, 2, -1));
        let snap = state.snapshot();
        assert_eq!(snap.filled_count(), 2);
        assert!(snap.grid[0][2] && snap.grid[0][3]);
    }
}
