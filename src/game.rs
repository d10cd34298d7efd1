//! Game flow on top of the engine
//!
//! The three free functions are the whole surface a front end needs: commit a
//! human move, let the engine reply, and ask how things stand. [`Game`] bundles
//! them into the usual human-then-engine round and keeps the move list of the
//! current game.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    engine::{self, ENGINE, HUMAN, LOSS_SCORE, SearchStats, WIN_SCORE},
    tictactoe::{Board, Move, Player},
};

/// State of a game as seen by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The engine (O) completed a line
    EngineWin,
    /// The human (X) completed a line
    PlayerWin,
    Draw,
    Ongoing,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// Status line shown to the human
    pub fn message(self) -> &'static str {
        match self {
            Outcome::EngineWin => "AI wins!",
            Outcome::PlayerWin => "Player wins!",
            Outcome::Draw => "It's a draw!",
            Outcome::Ongoing => "Your turn",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Commit the human's mark at (`row`, `col`).
///
/// # Errors
///
/// [`Error::GameOver`] if the board is already terminal, [`Error::InvalidMove`] if
/// the cell is taken and [`Error::OutOfBounds`] for coordinates off the board. The
/// board is unchanged on error.
pub fn apply_player_move(board: &mut Board, row: usize, col: usize) -> Result<()> {
    if engine::is_game_over(board) {
        return Err(Error::GameOver);
    }
    let mv = Move::new(row, col);
    board.place(mv, HUMAN)?;
    debug!(%mv, player = %HUMAN, "move committed");
    Ok(())
}

/// Let the engine pick its best cell and commit it.
///
/// # Errors
///
/// [`Error::GameOver`] if the board is already terminal.
pub fn apply_ai_move(board: &mut Board) -> Result<Move> {
    apply_ai_move_with_stats(board).map(|reply| reply.mv)
}

/// The engine's committed reply together with what the search found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineReply {
    pub mv: Move,
    /// Minimax value of `mv`: +10 forced win, 0 draw, -10 forced loss
    pub score: i32,
    pub stats: SearchStats,
}

impl EngineReply {
    /// Human-readable verdict on the position after the reply
    pub fn verdict(&self) -> &'static str {
        match self.score {
            WIN_SCORE => "engine has a forced win",
            LOSS_SCORE => "engine is lost against best play",
            _ => "draw with best play",
        }
    }
}

/// Same as [`apply_ai_move`], also reporting the search result.
///
/// # Errors
///
/// [`Error::GameOver`] if the board is already terminal.
pub fn apply_ai_move_with_stats(board: &mut Board) -> Result<EngineReply> {
    if engine::is_game_over(board) {
        return Err(Error::GameOver);
    }
    let result = engine::search(board);
    let (mv, score) = result.best.zip(result.score).ok_or(Error::GameOver)?;
    board.place(mv, ENGINE)?;
    debug!(%mv, player = %ENGINE, score, "move committed");
    Ok(EngineReply {
        mv,
        score,
        stats: result.stats,
    })
}

/// Classify a board
pub fn query_outcome(board: &Board) -> Outcome {
    match engine::evaluate(board) {
        WIN_SCORE => Outcome::EngineWin,
        LOSS_SCORE => Outcome::PlayerWin,
        _ if engine::is_board_full(board) => Outcome::Draw,
        _ => Outcome::Ongoing,
    }
}

/// Result of one human-then-engine round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    pub human: Move,
    /// Engine reply, absent when the human's move ended the game
    pub engine: Option<EngineReply>,
    pub outcome: Outcome,
}

/// One game: a board owned by the caller plus the moves played on it so far
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    moves: Vec<(Player, Move)>,
}

impl Game {
    /// Start from the empty board with the human to move
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves in play order
    pub fn moves(&self) -> &[(Player, Move)] {
        &self.moves
    }

    pub fn outcome(&self) -> Outcome {
        query_outcome(&self.board)
    }

    /// Play the human's move and, unless that ends the game, the engine's reply.
    ///
    /// # Errors
    ///
    /// Rejected human moves leave the game untouched; see [`apply_player_move`].
    pub fn play_round(&mut self, row: usize, col: usize) -> Result<Round> {
        apply_player_move(&mut self.board, row, col)?;
        let human = Move::new(row, col);
        self.moves.push((HUMAN, human));

        if self.outcome().is_terminal() {
            return Ok(Round {
                human,
                engine: None,
                outcome: self.outcome(),
            });
        }

        let reply = apply_ai_move_with_stats(&mut self.board)?;
        self.moves.push((ENGINE, reply.mv));

        Ok(Round {
            human,
            engine: Some(reply),
            outcome: self.outcome(),
        })
    }
}
