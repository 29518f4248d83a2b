//! Pieces module - the fixed catalog of seven shapes and the rotation transform
//!
//! A shape is stored the compact way: the size of its bounding box plus the
//! row-major indices of its four occupied cells inside that box. Rotation never
//! mutates a shape; it builds the next one.

use crate::types::{PieceKind, Rotation, PIECE_CELLS};

/// A piece template: bounding box plus four occupied local cells
///
/// `cells` holds row-major indices (`row * width + col`) in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub width: u8,
    pub height: u8,
    pub cells: [u8; PIECE_CELLS],
}

impl Shape {
    const fn new(width: u8, height: u8, cells: [u8; PIECE_CELLS]) -> Self {
        Self {
            width,
            height,
            cells,
        }
    }

    /// Local `(col, row)` coordinates of the four cells
    pub fn cells_xy(&self) -> [(u8, u8); PIECE_CELLS] {
        self.cells.map(|i| (i % self.width, i / self.width))
    }

    /// Whether the local cell `(col, row)` is part of the shape
    pub fn contains(&self, col: u8, row: u8) -> bool {
        col < self.width && row < self.height && self.cells.contains(&(row * self.width + col))
    }
}

/// Spawn-orientation shapes, indexed by [`PieceKind::index`]
const CATALOG: [Shape; 7] = [
    // I: ####
    Shape::new(4, 1, [0, 1, 2, 3]),
    // J: #.. / ###
    Shape::new(3, 2, [0, 3, 4, 5]),
    // L: ..# / ###
    Shape::new(3, 2, [2, 3, 4, 5]),
    // O: ## / ##
    Shape::new(2, 2, [0, 1, 2, 3]),
    // S: .## / ##.
    Shape::new(3, 2, [1, 2, 3, 4]),
    // T: ### / .#.
    Shape::new(3, 2, [0, 1, 2, 4]),
    // Z: ##. / .##
    Shape::new(3, 2, [0, 1, 4, 5]),
];

/// Spawn-orientation shape of a piece kind
pub fn shape(kind: PieceKind) -> Shape {
    CATALOG[kind.index() as usize]
}

/// Rotate a shape 90° clockwise.
///
/// Local `(col, row)` in a `w x h` box lands on `(h - 1 - row, col)` in the
/// `h x w` box. Cells are renumbered row-major, so four applications give back
/// an identical `Shape`.
pub fn rotate(shape: Shape) -> Shape {
    let new_width = shape.height;
    let mut cells = shape.cells_xy().map(|(col, row)| {
        let new_col = shape.height - 1 - row;
        let new_row = col;
        new_row * new_width + new_col
    });
    cells.sort_unstable();

    Shape {
        width: shape.height,
        height: shape.width,
        cells,
    }
}

/// Shape of a piece kind after `rotation` clockwise quarter turns
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> Shape {
    (0..rotation.quarter_turns()).fold(shape(kind), |s, _| rotate(s))
}
