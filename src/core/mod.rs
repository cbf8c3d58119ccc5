//! Core module - pure game rules with no I/O
//!
//! Board, pieces, random selection, and progression math are pure value
//! operations; `GameState` layers the caller policies (tick, input, lock
//! lifecycle, game over) on top of them.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::{Board, LineClearResult};
pub use game_state::GameState;
pub use pieces::{rotate_shape, spawn_shape, Shape, Tetromino};
pub use rng::{random_tetromino, PieceRng};
pub use scoring::{calculate_level, calculate_score, drop_speed_ms};
