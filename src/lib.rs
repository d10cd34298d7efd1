//! Tic-Tac-Toe against an exhaustive minimax opponent
//!
//! This crate provides:
//! - Board representation and winning-line analysis
//! - A decision engine that searches the full game tree and never loses
//! - A small game API for front ends (commit moves, query the outcome)
//! - A terminal front end and position analysis for the `noughts` binary

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod tictactoe;

pub use engine::{
    ENGINE, HUMAN, SearchResult, SearchStats, best_move, evaluate, is_board_full, is_game_over,
};
pub use error::{Error, Result};
pub use game::{
    EngineReply, Game, Outcome, Round, apply_ai_move, apply_ai_move_with_stats, apply_player_move,
    query_outcome,
};
pub use tictactoe::{Board, Cell, Move, Player};
