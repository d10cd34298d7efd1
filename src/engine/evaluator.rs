//! Terminal-state evaluation

use super::{DRAW_SCORE, ENGINE, LOSS_SCORE, WIN_SCORE};
use crate::tictactoe::{Board, Cell, LineAnalyzer};

/// Score a board: `+10` if the engine holds a line, `-10` if the human does, `0` otherwise.
///
/// Lines are scanned rows first, then columns, then the main and anti diagonal;
/// the first complete line decides.
pub fn evaluate(board: &Board) -> i32 {
    match LineAnalyzer::winner(&board.cells) {
        Some(player) if player == ENGINE => WIN_SCORE,
        Some(_) => LOSS_SCORE,
        None => DRAW_SCORE,
    }
}

/// True iff no empty cells remain
pub fn is_board_full(board: &Board) -> bool {
    !board.cells.contains(&Cell::Empty)
}

/// True iff a line is complete or the board is full
pub fn is_game_over(board: &Board) -> bool {
    evaluate(board) != DRAW_SCORE || is_board_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn test_engine_line_scores_positive() {
        assert_eq!(evaluate(&board("XX.OOOX..")), WIN_SCORE);
        assert_eq!(evaluate(&board("O.XOX.O.X")), WIN_SCORE);
    }

    #[test]
    fn test_human_line_scores_negative() {
        assert_eq!(evaluate(&board("XXXOO....")), LOSS_SCORE);
        assert_eq!(evaluate(&board("XO.OX...X")), LOSS_SCORE);
    }

    #[test]
    fn test_no_line_scores_zero() {
        assert_eq!(evaluate(&Board::new()), DRAW_SCORE);
        assert_eq!(evaluate(&board("XO.......")), DRAW_SCORE);
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X
        // X O O
        // O X X
        let drawn = board("XOXXOOOXX");
        assert!(is_board_full(&drawn));
        assert_eq!(evaluate(&drawn), DRAW_SCORE);
        assert!(is_game_over(&drawn));
    }

    #[test]
    fn test_game_over_on_line_with_empty_cells() {
        let won = board("XXXOO....");
        assert!(!is_board_full(&won));
        assert!(is_game_over(&won));
        assert!(!is_game_over(&board("X...O....")));
    }
}
