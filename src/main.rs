//! Rubik's Cube stepper
//!
//! Applies one of a few built-in scrambles to a solved 3x3x3 cube and steps
//! through its solution (the scramble reversed, each move inverted), either
//! as text frames in the terminal or in an interactive viewer.

mod visualization;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stepcube::layout::TextPresenter;
use stepcube::{Color, Direction, Presenter, Session};

/// Steps through scripted Rubik's Cube scrambles and their solutions.
#[derive(Parser)]
#[command(name = "stepcube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in scrambles.
    List,
    /// Print every step from the scrambled state to solved.
    Trace {
        /// Scramble name (case-insensitive) or zero-based catalog index.
        scramble: String,
    },
    /// Check that every scramble's solution returns the cube to solved.
    Verify,
    /// Open the interactive viewer.
    Display,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::List) => run_list(),
        Some(Command::Trace { scramble }) => run_trace(&scramble)?,
        Some(Command::Verify) => run_verify()?,
        Some(Command::Display) | None => {
            println!("Controls: Up/Down pick scramble, Left/Right step, R reset");
            visualization::display(Session::new());
        }
    }

    Ok(())
}

/// Prints the catalog, one scramble per line.
fn run_list() {
    let session = Session::new();
    for (i, scramble) in session.catalog().iter().enumerate() {
        println!("{}. {}", i, scramble);
    }
}

/// Prints the full trace of one scramble as text frames.
fn run_trace(key: &str) -> Result<()> {
    let mut session = Session::new();
    let index = session.find_scramble(key)?;
    session.select_scramble(index)?;

    let mut presenter = TextPresenter::new();
    presenter.render(&session);
    while session.can_step_forward() {
        session.step(Direction::Forward);
        presenter.render(&session);
    }
    print!("{}", presenter.into_output());

    Ok(())
}

/// Plays every scramble to the end and checks the solved and color-count
/// properties of each trace.
fn run_verify() -> Result<()> {
    let mut session = Session::new();
    let mut failures = 0;

    for (index, scramble) in session.catalog().iter().enumerate() {
        session.select_scramble(index)?;
        while session.can_step_forward() {
            session.step(Direction::Forward);
        }

        let conserved = session.trace().unwrap_or_default().iter().all(|state| {
            let counts = state.color_counts();
            Color::ALL.iter().all(|color| counts.get(color) == Some(&9))
        });
        let solved = session.cube().state().is_solved();

        if solved && conserved {
            info!(scramble = scramble.name, moves = scramble.moves.len(), "ok");
        } else {
            warn!(scramble = scramble.name, solved, conserved, "failed");
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} scramble(s) failed verification", failures);
    }
    println!("All {} scrambles verified", session.catalog().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_passes_for_catalog() {
        assert!(run_verify().is_ok());
    }

    #[test]
    fn test_trace_rejects_unknown_scramble() {
        let err = run_trace("expert").unwrap_err();
        assert_eq!(err.to_string(), "no scramble named \"expert\" in the catalog");
    }
}
