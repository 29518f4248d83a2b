//! Board module - the fixed occupancy grid
//!
//! The board is a 10x10 grid of booleans stored as a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges 0..9
//! (top to bottom). Rows above the board (negative y) are open sky; the floor
//! and both side walls read as occupied.

use arrayvec::ArrayVec;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by a single clearing pass, in visit order (top to bottom)
pub type ClearedRows = ArrayVec<u8, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 10 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y), or None when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) blocks a piece.
    ///
    /// Anything below the last row or outside `[0, WIDTH)` counts as occupied.
    /// Rows above the board are free.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.get(x, y).unwrap_or(true)
    }

    /// Mark every in-range cell occupied; cells off the board are dropped.
    pub fn merge(&mut self, cells: &[(i8, i8)]) {
        for &(x, y) in cells {
            self.set(x, y, true);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize]
            .iter()
            .all(|&filled| filled)
    }

    /// Zero row `y` and shift every row above it down by one.
    ///
    /// Row 0 ends up empty. Returns false if `y` is out of range.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }

        let width = BOARD_WIDTH as usize;
        // copy_within handles the overlap; walking upward keeps each source intact
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            self.cells.copy_within(src..src + width, row * width);
        }
        self.cells[..width].fill(false);

        true
    }

    /// Clear every full row in one top-to-bottom pass.
    ///
    /// Rows are visited by fixed index 0..HEIGHT and each is tested against the
    /// live grid at the moment it is visited; a full row is removed on the spot.
    /// Returns the cleared row indices.
    pub fn clear_completed_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared.push(y as u8);
            }
        }
        cleared
    }

    /// Clear every full row and return how many were removed
    pub fn clear_completed_lines(&mut self) -> usize {
        self.clear_completed_rows().len()
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array
    pub fn write_grid(&self, out: &mut [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (row, chunk) in out
            .iter_mut()
            .zip(self.cells.chunks_exact(BOARD_WIDTH as usize))
        {
            row.copy_from_slice(chunk);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Build a board from an ASCII picture, one string per row, `#` = occupied.
    ///
    /// Missing rows at the top and missing columns on the right are empty, so a
    /// picture of the bottom few rows is enough.
    ///
    /// ```
    /// use tty_tetris_core::Board;
    ///
    /// let board = Board::from_rows(&["##########", "#.........", "..#......."]);
    /// assert!(board.is_row_full(7));
    /// assert_eq!(board.get(2, 9), Some(true));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = (BOARD_HEIGHT as usize).saturating_sub(rows.len());
        for (dy, line) in rows.iter().take(BOARD_HEIGHT as usize).enumerate() {
            for (x, ch) in line.chars().take(BOARD_WIDTH as usize).enumerate() {
                board.set(x as i8, (offset + dy) as i8, ch == '#');
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
