//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the board
pub const SIZE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A (row, col) coordinate on the board, both in 0..3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Build a move from a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Self {
        Move {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    /// Row-major cell index, or `None` if either coordinate is off the board
    pub fn index(self) -> Option<usize> {
        (self.row < SIZE && self.col < SIZE).then_some(self.row * SIZE + self.col)
    }

    pub fn is_corner(self) -> bool {
        matches!((self.row, self.col), (0 | 2, 0 | 2))
    }

    pub fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

/// A 3x3 grid of cells, stored row-major.
///
/// The board carries no turn marker: alternation is kept by whoever drives the game.
/// It is `Copy` (9 bytes), so callers that want a snapshot can simply copy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from a string representation.
    ///
    /// Line breaks and `|` separators are ignored; the remaining characters must be
    /// exactly nine cells (`.`, `_` = empty, `X`, `O`), read row by row. Spaces count
    /// as empty cells only when the string is exactly nine characters long, otherwise
    /// they are treated as separators.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not nine, a character is not a valid cell,
    /// or the piece counts could not arise from X-first alternating play.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let mut chars: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r' | '|'))
            .collect();
        // Nine characters including spaces means the spaces are empty cells
        if chars.len() != CELL_COUNT {
            chars.retain(|c| !c.is_whitespace());
        }

        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        board.to_move()?;
        Ok(board)
    }

    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Infer whose turn it is from the piece counts (X opens).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] when the counts are unreachable.
    pub fn to_move(&self) -> Result<Player, crate::Error> {
        let count = self.count_pieces();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Get cell at a coordinate
    ///
    /// # Panics
    ///
    /// Panics if the move is off the board.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row * SIZE + mv.col]
    }

    /// Check if a row-major index is empty
    pub fn is_empty(&self, index: usize) -> bool {
        self.cells[index] == Cell::Empty
    }

    /// Get all empty cells in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Place a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is off the board or the cell is taken;
    /// the board is left unchanged in both cases.
    pub fn place(&mut self, mv: Move, player: Player) -> Result<(), crate::Error> {
        let index = mv.index().ok_or(crate::Error::OutOfBounds {
            row: mv.row,
            col: mv.col,
        })?;

        if !self.is_empty(index) {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        self.cells[index] = player.to_cell();
        Ok(())
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(SIZE)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(SIZE) && i < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.empty_positions().len(), 9);
        assert_eq!(board.to_move().unwrap(), Player::X);
    }

    #[test]
    fn test_move_index_round_trip() {
        let mv = Move::new(2, 1);
        assert_eq!(mv.index(), Some(7));
        assert_eq!(Move::from_index(7), mv);
        assert_eq!(Move::new(3, 0).index(), None);
        assert_eq!(Move::new(0, 3).index(), None);
    }

    #[test]
    fn test_corner_and_center() {
        assert!(Move::new(0, 0).is_corner());
        assert!(Move::new(2, 2).is_corner());
        assert!(!Move::new(1, 0).is_corner());
        assert!(Move::new(1, 1).is_center());
        assert!(!Move::new(1, 1).is_corner());
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();
        board.place(Move::new(1, 1), Player::X).unwrap();
        assert_eq!(board.cells[4], Cell::X);
        assert_eq!(board.to_move().unwrap(), Player::O);

        let before = board;
        let err = board.place(Move::new(1, 1), Player::O).unwrap_err();
        assert!(err.to_string().contains("occupied"));
        assert_eq!(board, before);

        let err = board.place(Move::new(5, 0), Player::O).unwrap_err();
        assert!(matches!(err, crate::Error::OutOfBounds { row: 5, col: 0 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XO. .X. ..O").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[4], Cell::X);
        assert_eq!(board.cells[8], Cell::O);
        assert_eq!(board.to_move().unwrap(), Player::X);

        let rows = Board::from_string("X..\n.X.\n..O").unwrap();
        assert_eq!(rows.cells[8], Cell::O);

        let piped = Board::from_string("X|.|.").map(|_| ());
        assert!(piped.is_err());
    }

    #[test]
    fn test_from_string_spaces_as_cells() {
        // Nine characters exactly: spaces are empty cells
        let board = Board::from_string("X   O    ").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[4], Cell::O);
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_from_string_errors() {
        assert!(matches!(
            Board::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XOZ......"),
            Err(crate::Error::InvalidCellCharacter {
                character: 'Z',
                position: 2,
                ..
            })
        ));
        assert!(matches!(
            Board::from_string("XX......."),
            Err(crate::Error::InvalidPieceCounts {
                x_count: 2,
                o_count: 0
            })
        ));
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("X.O......").unwrap();
        assert_eq!(board.to_string(), "X.O\n...\n...");
    }

    #[test]
    fn test_rows() {
        let board = Board::from_string("X.O.X....").unwrap();
        let rows: Vec<_> = board.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], &[Cell::Empty, Cell::X, Cell::Empty]);
    }
}
