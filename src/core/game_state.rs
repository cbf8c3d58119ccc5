//! Game state module - the caller-policy layer around the pure core
//!
//! Owns the board, the active piece, and the progression counters, and
//! sequences every transition through the pure operations in `board`,
//! `pieces`, `scoring`, and `rng`. Hosts that only want the raw rules can
//! ignore this type and drive those functions directly.
//!
//! Single-threaded by design: hosts running a render loop and an input
//! handler on separate threads must serialize calls into one `GameState`.

use crate::core::board::Board;
use crate::core::pieces::Tetromino;
use crate::core::rng::PieceRng;
use crate::core::scoring::{calculate_level, calculate_score, drop_speed_ms};
use crate::types::GameAction;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    rng: PieceRng,
    score: u32,
    level: u32,
    lines: u32,
    drop_timer_ms: u32,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with an entropy-seeded piece generator
    pub fn new() -> Self {
        Self::with_rng(PieceRng::new())
    }

    /// Create a new game with a deterministic piece sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(PieceRng::with_seed(seed))
    }

    fn with_rng(rng: PieceRng) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng,
            score: 0,
            level: 1,
            lines: 0,
            drop_timer_ms: 0,
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Tetromino> {
        self.active.as_ref()
    }

    /// Replace the grid wholesale (restoring a saved game, test setups).
    /// The board is a value; the previous grid is simply dropped.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Current gravity interval based on level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_speed_ms(self.level)
    }

    /// Spawn a new random piece. A spawn that immediately collides means
    /// the stack has reached the top: the game is over.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = self.rng.next_tetromino();

        if self.board.check_collision(&piece, 0, 0) {
            tracing::info!(score = self.score, lines = self.lines, "game over");
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        self.drop_timer_ms = 0;
        true
    }

    /// Try to move the active piece by (dx, dy)
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(active) = &self.active else {
            return false;
        };

        if self.board.check_collision(active, dx, dy) {
            return false;
        }

        self.active = Some(active.shifted(dx, dy));
        true
    }

    /// Try to rotate the active piece clockwise.
    /// A rotation whose shape would collide is rejected outright; there are
    /// no wall kicks.
    pub fn try_rotate(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(active) = &self.active else {
            return false;
        };

        let candidate = active.with_shape(active.rotated());
        if self.board.check_collision(&candidate, 0, 0) {
            return false;
        }

        self.active = Some(candidate);
        true
    }

    /// Move the active piece down one row, locking it if it cannot fall
    pub fn soft_drop(&mut self) -> bool {
        if self.try_move(0, 1) {
            return true;
        }
        if self.active.is_some() && !self.paused && !self.game_over {
            self.lock_active();
        }
        false
    }

    /// Drop the active piece straight to the bottom and lock it.
    /// Returns the number of rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        if self.paused || self.game_over {
            return 0;
        }
        let Some(active) = &self.active else {
            return 0;
        };

        let mut distance: i8 = 0;
        while !self.board.check_collision(active, 0, distance + 1) {
            distance += 1;
        }

        if distance > 0 {
            self.active = Some(active.shifted(0, distance));
        }
        self.lock_active();

        distance as u32
    }

    /// Commit the active piece into the board, clear any completed rows,
    /// update the progression counters, and spawn the next piece.
    pub fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board = self.board.merge_tetromino(&active);

        let result = self.board.clear_lines();
        self.board = result.board;

        if result.lines_cleared > 0 {
            self.lines += result.lines_cleared;
            let new_level = calculate_level(self.lines);
            if new_level > self.level {
                tracing::info!(level = new_level, "level up");
            }
            self.level = new_level;
            self.score += calculate_score(result.lines_cleared, self.level);

            tracing::debug!(
                cleared = result.lines_cleared,
                lines = self.lines,
                score = self.score,
                "lines cleared"
            );
        } else {
            tracing::debug!(kind = ?active.kind, x = active.x, y = active.y, "piece locked");
        }

        self.spawn_piece();
    }

    /// Main game tick: advance the gravity timer by `elapsed_ms` and step
    /// the piece down (or lock it) when the interval expires. Returns true
    /// if gravity advanced the game.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.game_over || !self.started {
            return false;
        }
        if self.active.is_none() {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < self.drop_interval_ms() {
            return false;
        }
        self.drop_timer_ms = 0;

        if !self.try_move(0, 1) {
            self.lock_active();
        }
        true
    }

    /// Apply a host input event
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                let had_piece = self.active.is_some() && !self.paused && !self.game_over;
                self.hard_drop();
                had_piece
            }
            GameAction::Rotate => self.try_rotate(),
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                let rng = self.rng.clone();
                *self = Self::with_rng(rng);
                self.start();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
