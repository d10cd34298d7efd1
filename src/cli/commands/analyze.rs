//! Analyze command - Evaluate a board and show the engine's choice

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{format_stats, print_kv, print_section, render_board},
    engine::{self, SearchStats},
    game::{Outcome, query_outcome},
    tictactoe::{Board, LineAnalyzer, Move, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a board position")]
pub struct AnalyzeArgs {
    /// Board as nine cells, row by row (`.` empty, `X`, `O`), e.g. "X...X...O"
    pub board: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Immediate winning cells for each side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Threats {
    pub x: Vec<Move>,
    pub o: Vec<Move>,
}

/// Everything the analyze command reports about one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub board: String,
    pub to_move: Player,
    pub outcome: Outcome,
    /// Static evaluation: +10 engine line, -10 human line, 0 otherwise
    pub evaluation: i32,
    pub threats: Threats,
    /// Engine's choice as if it were O's turn; absent on terminal boards
    pub best_move: Option<Move>,
    pub score: Option<i32>,
    pub stats: SearchStats,
}

/// Build the report for a board
pub fn analyze_board(board: &Board) -> Result<AnalysisReport> {
    let to_move = board.to_move()?;
    let outcome = query_outcome(board);

    let threats = Threats {
        x: LineAnalyzer::winning_moves(&board.cells, Player::X)
            .into_iter()
            .map(Move::from_index)
            .collect(),
        o: LineAnalyzer::winning_moves(&board.cells, Player::O)
            .into_iter()
            .map(Move::from_index)
            .collect(),
    };

    let mut scratch = *board;
    let result = if outcome.is_terminal() {
        engine::SearchResult {
            best: None,
            score: None,
            stats: SearchStats::default(),
        }
    } else {
        engine::search(&mut scratch)
    };

    Ok(AnalysisReport {
        board: board.cells.iter().map(|cell| cell.to_char()).collect(),
        to_move,
        outcome,
        evaluation: engine::evaluate(board),
        threats,
        best_move: result.best,
        score: result.score,
        stats: result.stats,
    })
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("parsing board '{}'", args.board))?;
    let report = analyze_board(&board)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    print!("{}", render_board(&board));
    print_kv("To move", &report.to_move.to_string());
    print_kv("Outcome", &format!("{:?}", report.outcome));
    print_kv("Evaluation", &report.evaluation.to_string());
    print_kv("X threats", &format_moves(&report.threats.x));
    print_kv("O threats", &format_moves(&report.threats.o));

    if let Some(mv) = report.best_move {
        print_section("Engine (O)");
        if report.to_move != Player::O {
            println!("  note: it is X's turn; showing O's reply as if it were O to move");
        }
        print_kv("Best move", &format!("{} {} (row col)", mv.row + 1, mv.col + 1));
        if let Some(score) = report.score {
            print_kv("Score", &score.to_string());
        }
        print_kv("Search", &format_stats(&report.stats));
    }

    Ok(())
}

fn format_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "none".to_string();
    }
    moves
        .iter()
        .map(|mv| format!("{} {}", mv.row + 1, mv.col + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_engine_turn() {
        let board = Board::from_string("XX..O....").unwrap();
        let report = analyze_board(&board).unwrap();
        assert_eq!(report.to_move, Player::O);
        assert_eq!(report.outcome, Outcome::Ongoing);
        assert_eq!(report.threats.x, vec![Move::new(0, 2)]);
        assert!(report.threats.o.is_empty());
        assert_eq!(report.best_move, Some(Move::new(0, 2)));
        assert_eq!(report.score, Some(0));
        assert!(report.stats.nodes > 0);
    }

    #[test]
    fn test_report_for_terminal_board() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        let report = analyze_board(&board).unwrap();
        assert_eq!(report.outcome, Outcome::Draw);
        assert_eq!(report.best_move, None);
        assert_eq!(report.stats.nodes, 0);
        assert_eq!(report.board, "XOXXOOOXX");
    }

    #[test]
    fn test_report_serializes() {
        let board = Board::from_string("....X....").unwrap();
        let json = serde_json::to_value(analyze_board(&board).unwrap()).unwrap();
        assert_eq!(json["outcome"], "Ongoing");
        assert_eq!(json["best_move"]["row"], 0);
        assert_eq!(json["best_move"]["col"], 0);
        assert_eq!(json["stats"]["nodes"], 55_504);
    }

    #[test]
    fn test_format_moves() {
        assert_eq!(format_moves(&[]), "none");
        assert_eq!(
            format_moves(&[Move::new(0, 2), Move::new(2, 0)]),
            "1 3, 3 1"
        );
    }
}
