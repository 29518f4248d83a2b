//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and the tick-driven state machine.
//! It has **no dependencies** on terminals or timing, so it can be driven by
//! the terminal loop, by tests, or by benchmarks alike.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shapes and the clockwise rotation transform
//! - [`board`]: 10x10 occupancy grid with line clearing
//! - [`collision`]: absolute piece cells, the downward collision test, locking
//! - [`game_state`]: active piece, score, game-over phase and the tick pipeline
//! - [`rng`]: seeded piece randomizer
//! - [`snapshot`]: the read-only view handed to renderers
//!
//! # Game Rules
//!
//! - **Gravity**: the piece descends one row every `GRAVITY_DELAY + 1` ticks
//! - **No lock delay**: a piece locks on the tick it can no longer descend
//! - **No wall kicks**: rotation is applied unconditionally
//! - **Scoring**: one point per cleared line
//! - **Top-out**: a piece that locks before its origin reaches row 0 ends the game
//!
//! # Example
//!
//! ```
//! use tty_tetris_core::{ActivePiece, GameState};
//! use tty_tetris_types::{Command, PieceKind};
//!
//! let mut game = GameState::new(12345)
//!     .with_active(ActivePiece::new(PieceKind::O, 0, 0));
//!
//! game.tick(Some(Command::MoveRight));
//! assert_eq!(game.active().x, 1);
//!
//! let snapshot = game.tick(None);
//! assert!(!snapshot.game_over);
//! assert_eq!(snapshot.score, 0);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tty_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use collision::{piece_cells, would_collide_below};
pub use game_state::{ActivePiece, GameState, LockEvent, Phase};
pub use pieces::{get_shape, rotate, shape, Shape};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, Grid};
