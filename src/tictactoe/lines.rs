//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line (in [`WINNING_LINES`] order) held entirely by one player.
    ///
    /// Boards with two completed lines cannot arise from alternating play; the
    /// fixed scan order still makes the answer deterministic for them.
    pub fn first_complete_line(cells: &[Cell; 9]) -> Option<(Player, [usize; 3])> {
        WINNING_LINES.iter().find_map(|&line| {
            let owner = cells[line[0]].to_player()?;
            line.iter()
                .all(|&idx| cells[idx] == cells[line[0]])
                .then_some((owner, line))
        })
    }

    /// The player holding the first completed line, if any
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        Self::first_complete_line(cells).map(|(player, _)| player)
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Positions that would immediately complete a line for the player, row-major
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_from(s: &str) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for (i, c) in s.chars().enumerate() {
            cells[i] = Cell::from_char(c).unwrap();
        }
        cells
    }

    #[test]
    fn test_has_won_horizontal() {
        let cells = cells_from("XXX......");
        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X));
    }

    #[test]
    fn test_has_won_vertical() {
        let cells = cells_from("O..O..O..");
        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert_eq!(
            LineAnalyzer::first_complete_line(&cells),
            Some((Player::O, [0, 3, 6]))
        );
    }

    #[test]
    fn test_anti_diagonal() {
        let cells = cells_from("..X.X.X..");
        assert_eq!(
            LineAnalyzer::first_complete_line(&cells),
            Some((Player::X, [2, 4, 6]))
        );
    }

    #[test]
    fn test_empty_line_is_not_complete() {
        assert_eq!(LineAnalyzer::first_complete_line(&[Cell::Empty; 9]), None);
        assert_eq!(LineAnalyzer::winner(&cells_from("XOXOXOOXO")), None);
    }

    #[test]
    fn test_scan_order_rows_before_columns() {
        // Malformed board with three complete X lines; row 2 is scanned first
        // O X X
        // O X X
        // X X X
        let cells = cells_from("OXXOXXXXX");
        assert_eq!(
            LineAnalyzer::first_complete_line(&cells),
            Some((Player::X, [6, 7, 8]))
        );

        // Column 0 (O) beats main diagonal (X)
        // O . X
        // O X .
        // O . X
        let cells = cells_from("O.XOX.O.X");
        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_winning_moves() {
        let cells = cells_from("X.X......");
        assert_eq!(LineAnalyzer::winning_moves(&cells, Player::X), vec![1]);
        assert!(LineAnalyzer::winning_moves(&cells, Player::O).is_empty());
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX.
        // X..
        // ...
        let cells = cells_from("XX.X.....");
        assert_eq!(LineAnalyzer::winning_moves(&cells, Player::X), vec![2, 6]);
    }

    #[test]
    fn test_blocked_line_has_no_winning_move() {
        let cells = cells_from("XXO......");
        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
    }
}
