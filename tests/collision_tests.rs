//! Collision and placement tests

use tty_tetris::core::collision::{fits_horizontally, lock_into, piece_cells, would_collide_below};
use tty_tetris::core::{ActivePiece, Board};
use tty_tetris::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn every_orientation() -> impl Iterator<Item = (PieceKind, Rotation)> {
    PieceKind::ALL
        .into_iter()
        .flat_map(|k| (0..4).map(move |t| (k, Rotation::from_quarter_turns(t))))
}

fn piece(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> ActivePiece {
    ActivePiece {
        kind,
        rotation,
        x,
        y,
    }
}

#[test]
fn test_floor_collision_for_every_orientation() {
    let board = Board::new();
    for (kind, rotation) in every_orientation() {
        let s = piece(kind, rotation, 0, 0).shape();
        for x in 0..=(BOARD_WIDTH - s.width) as i8 {
            for y in -4..BOARD_HEIGHT as i8 {
                let p = piece(kind, rotation, x, y);
                let bottom = y + s.height as i8 - 1;
                assert_eq!(
                    would_collide_below(&board, &p),
                    bottom + 1 >= BOARD_HEIGHT as i8,
                    "{:?} {:?} at ({}, {})",
                    kind,
                    rotation,
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn test_collision_with_full_bottom_row() {
    let board = Board::from_rows(&["##########"]);
    for (kind, rotation) in every_orientation() {
        let s = piece(kind, rotation, 0, 0).shape();
        // Resting with its lowest row on row 8.
        let p = piece(kind, rotation, 0, 9 - s.height as i8);
        assert!(would_collide_below(&board, &p), "{:?} {:?}", kind, rotation);
        // One row higher it can still fall.
        let higher = piece(kind, rotation, 0, 8 - s.height as i8);
        assert!(!would_collide_below(&board, &higher), "{:?} {:?}", kind, rotation);
    }
}

#[test]
fn test_overhang_catches_on_stack() {
    // T stem hangs below the bar; only the stem column is supported.
    let board = Board::from_rows(&[".#........", ".#........"]);
    let t = piece(PieceKind::T, Rotation::North, 0, 5);
    assert!(!would_collide_below(&board, &t));
    let t = piece(PieceKind::T, Rotation::North, 0, 6);
    // Stem at (1, 7) sits on (1, 8).
    assert!(would_collide_below(&board, &t));
}

#[test]
fn test_piece_cells_match_shape_offsets() {
    for (kind, rotation) in every_orientation() {
        let p = piece(kind, rotation, 2, 3);
        let local = p.shape().cells_xy();
        let cells = piece_cells(&p);
        for (i, &(col, row)) in local.iter().enumerate() {
            assert_eq!(cells[i], (2 + col as i8, 3 + row as i8));
        }
    }
}

#[test]
fn test_piece_cells_use_board_width_for_overhang() {
    // Horizontal I with its origin on the last column.
    let p = piece(PieceKind::I, Rotation::North, 9, 0);
    assert_eq!(piece_cells(&p), [(9, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_horizontal_fit_uses_bounding_box() {
    let o = piece(PieceKind::O, Rotation::North, 8, 0);
    assert!(!fits_horizontally(&o, 1));
    assert!(fits_horizontally(&o, -8));
    assert!(!fits_horizontally(&o, -9));

    let upright_i = piece(PieceKind::I, Rotation::East, 9, 0);
    assert!(fits_horizontally(&upright_i, 0));
    assert!(!fits_horizontally(&upright_i, 1));
}

#[test]
fn test_lock_into_marks_cells() {
    let mut board = Board::new();
    lock_into(&mut board, &piece(PieceKind::S, Rotation::North, 3, 8));
    assert_eq!(board, Board::from_rows(&["....##....", "...##....."]));
}

#[test]
fn test_lock_into_drops_cells_above_board() {
    let mut board = Board::new();
    lock_into(&mut board, &piece(PieceKind::O, Rotation::North, 0, -1));
    assert_eq!(board.filled_count(), 2);
    assert_eq!(board.get(0, 0), Some(true));
    assert_eq!(board.get(1, 0), Some(true));
}
