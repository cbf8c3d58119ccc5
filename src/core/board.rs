//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or filled with a piece
//! kind. Uses a flat array for cache locality. Coordinates: (x, y) with x
//! ranging 0..9 (left to right) and y ranging 0..19 (top to bottom).
//!
//! The board is a plain value: every state-changing operation returns a new
//! `Board` and leaves the receiver untouched, so callers can keep old grids
//! around (preview, undo, rendering) without aliasing surprises.

use crate::core::pieces::Tetromino;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// Result of sweeping the board for completed rows
#[derive(Debug, Clone, PartialEq)]
pub struct LineClearResult {
    pub board: Board,
    pub lines_cleared: u32,
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Test whether a piece, offset by (dx, dy), would collide.
    ///
    /// A collision is any occupied shape cell landing outside the side
    /// walls, below the floor, or on a filled grid cell. Cells with y < 0
    /// are above the visible board and only the wall checks apply, so
    /// pieces may spawn partially above row 0. Pure predicate, never
    /// panics.
    pub fn check_collision(&self, piece: &Tetromino, dx: i8, dy: i8) -> bool {
        for (sy, row) in piece.shape.iter().enumerate() {
            for (sx, &cell) in row.iter().enumerate() {
                if cell == 0 {
                    continue;
                }

                let x = piece.x + sx as i8 + dx;
                let y = piece.y + sy as i8 + dy;

                if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                    return true;
                }
                if y >= 0 && self.is_occupied(x, y) {
                    return true;
                }
            }
        }

        false
    }

    /// Return a new board with the piece's occupied cells committed.
    ///
    /// Cells landing outside the board are silently skipped; the receiver
    /// is left unmodified.
    pub fn merge_tetromino(&self, piece: &Tetromino) -> Board {
        let mut board = self.clone();

        for (sy, row) in piece.shape.iter().enumerate() {
            for (sx, &cell) in row.iter().enumerate() {
                if cell == 0 {
                    continue;
                }
                let x = piece.x + sx as i8;
                let y = piece.y + sy as i8;
                // set() rejects out-of-bounds writes on its own
                board.set(x, y, Some(piece.kind));
            }
        }

        board
    }

    /// Remove every full row, collapsing survivors downward and padding the
    /// top with empty rows so the height never changes.
    ///
    /// Returns the new board and the number of rows removed. Uses a
    /// bottom-up two-pointer sweep over the flat array, so surviving rows
    /// keep their relative order.
    pub fn clear_lines(&self) -> LineClearResult {
        let width = BOARD_WIDTH as usize;
        let mut board = self.clone();
        let mut lines_cleared: u32 = 0;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                lines_cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    board
                        .cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Pad the top with empty rows, one per cleared line
        for cell in &mut board.cells[..write_y * width] {
            *cell = None;
        }

        LineClearResult {
            board,
            lines_cleared,
        }
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
