//! RNG module - uniform random piece selection
//!
//! Each draw picks one of the seven kinds independently and uniformly.
//! There is deliberately no 7-bag randomizer: the rules only require
//! statistical fairness across draws, not bag-style no-repeat guarantees.

use crate::core::pieces::Tetromino;
use crate::types::PieceKind;

/// Owned piece generator. `with_seed` gives reproducible sequences for
/// tests and replays; `new` seeds from entropy.
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: fastrand::Rng,
}

impl PieceRng {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Draw a piece kind, uniform over the seven kinds
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.usize(..PieceKind::ALL.len())]
    }

    /// Draw a new piece at spawn position
    pub fn next_tetromino(&mut self) -> Tetromino {
        Tetromino::spawn(self.next_kind())
    }
}

impl Default for PieceRng {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw a random piece at spawn position from the global generator
pub fn random_tetromino() -> Tetromino {
    Tetromino::spawn(PieceKind::ALL[fastrand::usize(..PieceKind::ALL.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sequences_repeat() {
        let mut a = PieceRng::with_seed(12345);
        let mut b = PieceRng::with_seed(12345);

        for _ in 0..100 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_draws_cover_multiple_kinds() {
        let mut rng = PieceRng::with_seed(7);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..50 {
            seen.insert(rng.next_kind());
        }

        assert!(seen.len() >= 3, "expected variety, saw {:?}", seen);
    }

    #[test]
    fn test_next_tetromino_spawns_at_top() {
        let mut rng = PieceRng::with_seed(42);

        for _ in 0..20 {
            let piece = rng.next_tetromino();
            assert_eq!(piece.y, 0);
            assert!(piece.x >= 0);
            assert!(piece.x < crate::types::BOARD_WIDTH as i8);
        }
    }
}
