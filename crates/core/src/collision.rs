//! Collision and placement.
//!
//! Absolute cells are derived from flat board indices: a local cell at
//! `(col, row)` of a piece with origin `(x, y)` sits at index
//! `(row + y) * BOARD_WIDTH + (col + x)`. The index is always formed with the
//! board width, never the shape width, so a bounding box hanging past the right
//! wall folds into the next row instead of leaving the board.

use crate::board::Board;
use crate::game_state::ActivePiece;
use crate::types::{BOARD_WIDTH, PIECE_CELLS};

/// Absolute board cells `(x, y)` covered by a piece.
///
/// `y` is negative for cells still above the board.
pub fn piece_cells(piece: &ActivePiece) -> [(i8, i8); PIECE_CELLS] {
    let width = BOARD_WIDTH as i16;
    piece.shape().cells_xy().map(|(col, row)| {
        let index = (row as i16 + piece.y as i16) * width + (col as i16 + piece.x as i16);
        (index.rem_euclid(width) as i8, index.div_euclid(width) as i8)
    })
}

/// Whether the piece would hit the floor or a filled cell one row further down.
///
/// Gravity and soft drop only advance a piece while this is false; once it is
/// true at the end of an update the piece locks.
pub fn would_collide_below(board: &Board, piece: &ActivePiece) -> bool {
    piece_cells(piece)
        .iter()
        .any(|&(x, y)| board.is_occupied(x, y + 1))
}

/// Whether a shift of `dx` columns keeps the bounding box off the wall it
/// moves toward.
///
/// Only the leading edge is checked: a box already hanging past the right
/// wall after a rotation can still move left. With `dx == 0` both edges must
/// be inside.
pub fn fits_horizontally(piece: &ActivePiece, dx: i8) -> bool {
    let left = piece.x as i16 + dx as i16;
    let right = left + piece.shape().width as i16;
    match dx.signum() {
        -1 => left >= 0,
        1 => right <= BOARD_WIDTH as i16,
        _ => left >= 0 && right <= BOARD_WIDTH as i16,
    }
}

/// Merge a landed piece into the board
pub fn lock_into(board: &mut Board, piece: &ActivePiece) {
    board.merge(&piece_cells(piece));
}
