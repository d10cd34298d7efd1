//! Full-depth minimax without pruning
//!
//! The search mutates the caller's board in place as scratch space. Every
//! speculative mark goes through [`Placement`], which clears the cell again when it
//! is dropped, so the board is back to its input state whenever a search call
//! returns, whichever branch it returns from.

use std::ops::{Deref, DerefMut};

use serde::Serialize;
use tracing::{debug, trace};

use super::{DRAW_SCORE, ENGINE, HUMAN, evaluate, is_board_full};
use crate::tictactoe::{Board, Cell, Move, Player};

/// Counters collected while searching
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    /// Deepest ply reached, counting the engine's candidate move as ply 1
    pub max_depth: usize,
}

/// Outcome of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Chosen cell, `None` when the board has no empty cell
    pub best: Option<Move>,
    /// Minimax value of the chosen cell
    pub score: Option<i32>,
    pub stats: SearchStats,
}

/// A speculative mark, cleared again on drop
struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, index: usize, player: Player) -> Self {
        debug_assert!(board.is_empty(index), "speculative mark on occupied cell");
        board.cells[index] = player.to_cell();
        Placement { board, index }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Cell::Empty;
    }
}

#[derive(Debug, Default)]
struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    /// Value of `board` for the engine with `maximizing` telling whose turn it is.
    ///
    /// `depth` feeds [`SearchStats`] only; scores are never discounted by it, so
    /// among equally valued lines a quick win is not preferred over a slow one.
    fn minimax(&mut self, board: &mut Board, depth: usize, maximizing: bool) -> i32 {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let score = evaluate(board);
        if score != DRAW_SCORE {
            return score;
        }
        if is_board_full(board) {
            return DRAW_SCORE;
        }

        let (player, mut best) = if maximizing {
            (ENGINE, i32::MIN)
        } else {
            (HUMAN, i32::MAX)
        };

        for index in board.empty_positions() {
            let mut placed = Placement::new(board, index, player);
            let score = self.minimax(&mut placed, depth + 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

/// Search every empty cell for the engine and report the best one.
///
/// Ties go to the first cell in row-major order. The board is used as scratch
/// space and is unchanged when this returns.
pub fn search(board: &mut Board) -> SearchResult {
    let mut searcher = Searcher::default();
    let mut best: Option<(Move, i32)> = None;

    for index in board.empty_positions() {
        let score = {
            let mut placed = Placement::new(board, index, ENGINE);
            searcher.minimax(&mut placed, 1, false)
        };
        let candidate = Move::from_index(index);
        trace!(%candidate, score, "root candidate");

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    let result = SearchResult {
        best: best.map(|(mv, _)| mv),
        score: best.map(|(_, score)| score),
        stats: searcher.stats,
    };
    debug!(
        best = ?result.best,
        score = ?result.score,
        nodes = result.stats.nodes,
        max_depth = result.stats.max_depth,
        "search finished"
    );
    result
}

/// The engine's optimal cell, or `None` if the board is full
pub fn best_move(board: &mut Board) -> Option<Move> {
    search(board).best
}
