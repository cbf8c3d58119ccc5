//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Line clear scoring: base points indexed by simultaneous clear count,
/// multiplied by the current level. More than 4 simultaneous clears is
/// unreachable with 4-cell pieces and scores 0.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Level increases every this many total cleared lines
pub const LINES_PER_LEVEL: u32 = 10;

/// Gravity timing (milliseconds per automatic downward step)
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_SPEEDUP_PER_LEVEL_MS: u32 = 100;
pub const DROP_SPEED_FLOOR_MS: u32 = 100;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Display color for this kind
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::I => "cyan",
            PieceKind::O => "yellow",
            PieceKind::T => "purple",
            PieceKind::S => "green",
            PieceKind::Z => "red",
            PieceKind::J => "blue",
            PieceKind::L => "orange",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Game actions forwarded by the host input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Restart,
}
