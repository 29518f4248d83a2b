//! Snapshot module - the per-tick view handed to renderers

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Row-major occupancy grid, `grid[y][x]`
pub type Grid = [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Read-only view handed to the renderer once per tick.
///
/// `grid` is the locked board with the in-range cells of the active piece
/// painted on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn filled_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&filled| filled).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            score: 0,
            game_over: false,
        }
    }
}
