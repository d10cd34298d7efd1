//! Play command - Interactive game against the engine

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    thread,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::output::{format_stats, render_board},
    config::PlayConfig,
    game::{Game, Outcome},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the engine (you are X and move first)")]
pub struct PlayArgs {
    /// JSON configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Pause after the game ends, in milliseconds
    #[arg(long)]
    pub exit_delay_ms: Option<u64>,

    /// Print search statistics after each engine move
    #[arg(long)]
    pub stats: bool,
}

impl PlayArgs {
    /// Resolve the effective configuration: file first, then flags
    pub fn resolve_config(&self) -> Result<PlayConfig> {
        let mut config = match &self.config {
            Some(path) => PlayConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => PlayConfig::default(),
        };
        if let Some(millis) = self.exit_delay_ms {
            config = config.with_exit_delay_ms(millis);
        }
        if self.stats {
            config = config.with_show_stats(true);
        }
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.resolve_config()?;
    debug!(?config, "starting interactive game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run_session(stdin.lock(), stdout.lock(), &config)?;
    info!(%outcome, "session finished");

    if outcome.is_terminal() {
        thread::sleep(config.exit_delay());
    }
    Ok(())
}

/// Parse `row col` (1-based, separated by spaces or a comma) into 0-based coordinates
pub fn parse_coordinates(input: &str) -> std::result::Result<(usize, usize), String> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(format!("Expected 'row col', got '{input}'"));
    };

    let parse = |token: &str| match token.parse::<usize>() {
        Ok(value @ 1..=3) => Ok(value - 1),
        _ => Err(format!("'{token}' is not a number from 1 to 3")),
    };

    Ok((parse(*row)?, parse(*col)?))
}

/// Run one game over arbitrary input and output streams.
///
/// Returns the outcome when the game ends, or the current (ongoing) outcome if the
/// input runs dry or the human types `quit`.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    config: &PlayConfig,
) -> Result<Outcome> {
    let mut game = Game::new();

    write!(out, "{}", render_board(game.board()))?;
    writeln!(out, "{}", game.outcome())?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line.context("reading move")?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            prompt(&mut out)?;
            continue;
        }
        if matches!(trimmed, "q" | "quit" | "exit") {
            writeln!(out, "Bye.")?;
            return Ok(game.outcome());
        }

        let (row, col) = match parse_coordinates(trimmed) {
            Ok(coordinates) => coordinates,
            Err(message) => {
                writeln!(out, "{message}")?;
                prompt(&mut out)?;
                continue;
            }
        };

        let round = match game.play_round(row, col) {
            Ok(round) => round,
            Err(err) if err.is_invalid_move() => {
                debug!(%err, "move rejected");
                writeln!(out, "Cell {} {} is taken, try another.", row + 1, col + 1)?;
                prompt(&mut out)?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if let Some(reply) = round.engine {
            writeln!(out, "AI plays {} {}", reply.mv.row + 1, reply.mv.col + 1)?;
            if config.show_stats {
                writeln!(
                    out,
                    "  ({}; {})",
                    format_stats(&reply.stats),
                    reply.verdict()
                )?;
            }
        }
        write!(out, "{}", render_board(game.board()))?;

        if round.outcome.is_terminal() {
            writeln!(out, "{}", round.outcome)?;
            out.flush()?;
            return Ok(round.outcome);
        }
        prompt(&mut out)?;
    }

    Ok(game.outcome())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Your move (row col): ")?;
    out.flush()
}
