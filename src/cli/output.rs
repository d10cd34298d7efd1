//! Output formatting for the CLI

use crate::{engine::SearchStats, tictactoe::Board};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Render the board as a grid with 1-based row and column labels
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    1   2   3\n");
    for (r, row) in board.rows().enumerate() {
        if r > 0 {
            out.push_str("   ---+---+---\n");
        }
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell.to_player() {
                Some(player) => player.to_string(),
                None => " ".to_string(),
            })
            .collect();
        out.push_str(&format!("{}   {}\n", r + 1, cells.join(" | ")));
    }
    out
}

/// One-line summary of search statistics
pub fn format_stats(stats: &SearchStats) -> String {
    format!(
        "searched {} positions, depth {}",
        format_number(stats.nodes),
        stats.max_depth
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(55_504), "55,504");
        assert_eq!(format_number(549_945), "549,945");
    }

    #[test]
    fn test_render_board() {
        let board = Board::from_string("X.O.X....").unwrap();
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "    1   2   3");
        assert_eq!(lines[1], "1   X |   | O");
        assert_eq!(lines[2], "   ---+---+---");
        assert_eq!(lines[3], "2     | X |  ");
        assert_eq!(lines.len(), 6);
    }
}
