//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so the game core,
//! the input adapter and the renderer can share them freely.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 10 rows (indexed 0-9)
//! - **Spawn position**: (0, -2), except the very first piece of a session
//!   which enters at (0, -1)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed tick period driven by the terminal loop |
//! | `GRAVITY_DELAY` | 10 | Ticks counted before each automatic descent |
//!
//! # Examples
//!
//! ```
//! use tty_tetris_types::{Command, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Catalog order is fixed: index 0 is the I piece.
//! assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
//! assert_eq!(PieceKind::Z.index(), 6);
//!
//! // Four clockwise quarter turns return to spawn orientation.
//! let r = Rotation::North.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
//! assert_eq!(r, Rotation::North);
//!
//! assert_eq!(Command::MoveLeft.as_str(), "moveLeft");
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 10));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (10 rows)
pub const BOARD_HEIGHT: u8 = 10;

/// Fixed tick period in milliseconds
pub const TICK_MS: u32 = 100;

/// Default number of ticks between automatic one-row descents
pub const GRAVITY_DELAY: u32 = 10;

/// Column every piece spawns in
pub const SPAWN_X: i8 = 0;

/// Row of the origin for pieces spawned after a lock or a restart
pub const SPAWN_Y: i8 = -2;

/// Row of the origin for the first piece of a session.
///
/// One row lower than [`SPAWN_Y`]; the asymmetry is part of the game's feel.
pub const FIRST_SPAWN_Y: i8 = -1;

/// Number of occupied cells in every piece
pub const PIECE_CELLS: usize = 4;

/// The seven piece kinds, in catalog order
///
/// The discriminant is the catalog index used by the randomizer:
/// - **I** (0): 4x1 bar
/// - **J** (1): corner on the left
/// - **L** (2): corner on the right
/// - **O** (3): 2x2 square
/// - **S** (4)
/// - **T** (5): stem pointing down at spawn
/// - **Z** (6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, indexed by catalog index
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Look up a kind by catalog index (0..=6)
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Catalog index of this kind
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Orientation of the active piece as a count of clockwise quarter turns
///
/// - **North**: spawn orientation
/// - **East**: one quarter turn clockwise
/// - **South**: two quarter turns
/// - **West**: three quarter turns
///
/// Only clockwise rotation exists in this game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use tty_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Number of clockwise quarter turns from spawn orientation (0..=3)
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build a rotation from any number of quarter turns (taken mod 4)
    pub fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// A decoded player command
///
/// The terminal adapter delivers at most one of these per tick; `None` at the
/// call site (`Option<Command>`) means no input arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Rotate the piece 90° clockwise (never rejected)
    Rotate,
    /// Move the piece one column left
    MoveLeft,
    /// Move the piece one column right
    MoveRight,
    /// Move the piece one row down
    SoftDrop,
    /// Start a new session after game over
    Restart,
    /// Leave the game loop
    Quit,
}

impl Command {
    /// camelCase name, used as the `command` field in trace logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Rotate => "rotate",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Restart => "restart",
            Command::Quit => "quit",
        }
    }
}
