//! Decision engine: terminal evaluation and exhaustive minimax search
//!
//! The human always plays [`HUMAN`] (X) and the engine [`ENGINE`] (O). Scores are
//! from the engine's point of view: [`WIN_SCORE`] when O holds a line,
//! [`LOSS_SCORE`] when X does, [`DRAW_SCORE`] otherwise.

pub mod evaluator;
pub mod search;

use crate::tictactoe::Player;

/// Mark played by the human
pub const HUMAN: Player = Player::X;

/// Mark played by the engine
pub const ENGINE: Player = Player::O;

/// Score of a board where the engine holds a line
pub const WIN_SCORE: i32 = 10;

/// Score of a board where the human holds a line
pub const LOSS_SCORE: i32 = -10;

/// Score of a board without a completed line
pub const DRAW_SCORE: i32 = 0;

pub use evaluator::{evaluate, is_board_full, is_game_over};
pub use search::{SearchResult, SearchStats, best_move, search};
