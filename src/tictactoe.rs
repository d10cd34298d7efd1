//! Tic-Tac-Toe board representation

pub mod board;
pub mod lines;

pub use board::{Board, Cell, Move, Player};
pub use lines::{LineAnalyzer, WINNING_LINES};
