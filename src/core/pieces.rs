//! Pieces module - tetromino shape definitions and rotation
//!
//! Shapes are square 0/1 matrices describing occupied cells relative to the
//! piece's bounding box: 4x4 for I, 3x3 for T/S/Z/J/L, 2x2 for O. Rotation
//! is a single clockwise transform; collision handling after a rotation
//! (reject or kick) is the caller's policy, not this module's.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, BOARD_WIDTH};

/// Square 0/1 shape matrix, at most 4x4
pub type Shape = ArrayVec<ArrayVec<u8, 4>, 4>;

fn shape_from_rows<const N: usize>(rows: [[u8; N]; N]) -> Shape {
    rows.iter().map(|row| row.iter().copied().collect()).collect()
}

/// Canonical (spawn-orientation) shape matrix for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => shape_from_rows([
            [0, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]),
        PieceKind::O => shape_from_rows([[1, 1], [1, 1]]),
        PieceKind::T => shape_from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        PieceKind::S => shape_from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        PieceKind::Z => shape_from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        PieceKind::J => shape_from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        PieceKind::L => shape_from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
    }
}

/// Rotate a shape 90 degrees clockwise.
/// Returns a fresh matrix via the index mapping `new[c][n-1-r] = old[r][c]`;
/// the input is left untouched. The O piece is a fixed point of this
/// transform.
pub fn rotate_shape(shape: &Shape) -> Shape {
    let n = shape.len();
    let mut rotated: Shape = (0..n)
        .map(|_| (0..n).map(|_| 0u8).collect::<ArrayVec<u8, 4>>())
        .collect();

    for (r, row) in shape.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            rotated[c][n - 1 - r] = cell;
        }
    }

    rotated
}

/// Active falling piece: kind, current shape matrix, and board offset of the
/// shape's top-left corner. Coordinates may legally sit outside the board;
/// the board operations handle that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a piece in spawn orientation, horizontally centered at the top
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_shape(kind);
        let x = (BOARD_WIDTH as i8 - shape.len() as i8) / 2;
        Self { kind, shape, x, y: 0 }
    }

    /// Display color for this piece
    pub fn color(&self) -> &'static str {
        self.kind.color()
    }

    /// Shape after one clockwise rotation; position and kind are unaffected
    pub fn rotated(&self) -> Shape {
        rotate_shape(&self.shape)
    }

    /// New piece translated by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            kind: self.kind,
            shape: self.shape.clone(),
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// New piece with the given shape at the same position
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self {
            kind: self.kind,
            shape,
            x: self.x,
            y: self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_sizes() {
        assert_eq!(spawn_shape(PieceKind::I).len(), 4);
        assert_eq!(spawn_shape(PieceKind::O).len(), 2);
        for kind in [
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ] {
            assert_eq!(spawn_shape(kind).len(), 3);
        }
    }

    #[test]
    fn test_shapes_are_square_with_four_cells() {
        for kind in PieceKind::ALL {
            let shape = spawn_shape(kind);
            let n = shape.len();
            assert!(shape.iter().all(|row| row.len() == n));

            let occupied: u32 = shape
                .iter()
                .flat_map(|row| row.iter())
                .map(|&c| c as u32)
                .sum();
            assert_eq!(occupied, 4, "{:?} must occupy 4 cells", kind);
        }
    }

    #[test]
    fn test_rotate_i_piece_clockwise() {
        let shape = spawn_shape(PieceKind::I);
        let rotated = rotate_shape(&shape);

        // Horizontal bar on row 1 becomes a vertical bar on column 2
        for r in 0..4 {
            assert_eq!(rotated[r][2], 1);
        }
        let occupied: u32 = rotated
            .iter()
            .flat_map(|row| row.iter())
            .map(|&c| c as u32)
            .sum();
        assert_eq!(occupied, 4);
    }

    #[test]
    fn test_rotate_does_not_mutate_input() {
        let shape = spawn_shape(PieceKind::T);
        let before = shape.clone();

        let _ = rotate_shape(&shape);

        assert_eq!(shape, before);
    }

    #[test]
    fn test_rotate_o_piece_is_noop() {
        let shape = spawn_shape(PieceKind::O);
        assert_eq!(rotate_shape(&shape), shape);
    }

    #[test]
    fn test_four_rotations_return_to_start() {
        for kind in PieceKind::ALL {
            let start = spawn_shape(kind);
            let mut shape = start.clone();
            for _ in 0..4 {
                shape = rotate_shape(&shape);
            }
            assert_eq!(shape, start, "{:?} should cycle in 4 rotations", kind);
        }
    }

    #[test]
    fn test_spawn_position_centered() {
        let i = Tetromino::spawn(PieceKind::I);
        assert_eq!((i.x, i.y), (3, 0));

        let o = Tetromino::spawn(PieceKind::O);
        assert_eq!((o.x, o.y), (4, 0));

        let t = Tetromino::spawn(PieceKind::T);
        assert_eq!((t.x, t.y), (3, 0));
    }

    #[test]
    fn test_shifted_returns_new_value() {
        let piece = Tetromino::spawn(PieceKind::J);
        let moved = piece.shifted(-1, 2);

        assert_eq!(moved.x, piece.x - 1);
        assert_eq!(moved.y, piece.y + 2);
        assert_eq!(moved.shape, piece.shape);
        assert_eq!(piece.y, 0);
    }
}
