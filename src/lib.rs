//! Blockfall - falling-block puzzle rules engine.
//!
//! This crate owns the grid, the active piece, collision detection, line
//! clearing, and scoring/leveling progression. Rendering and input handling
//! live in the host application: it reads the board/piece values produced
//! here and forwards move/rotate/drop calls back into the core.

pub mod core;
pub mod types;
