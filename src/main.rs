use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;
use rand::thread_rng;
use tracing_subscriber::EnvFilter;

use eight_puzzle::render::{play_back, render_board};
use eight_puzzle::{
    count_inversions, generate_solvable_puzzle, is_solvable, seeded_rng, solve_with_stats, Board,
    HeuristicKind,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicOpt {
    Manhattan,
    Misplaced,
    LinearConflict,
}

impl From<HeuristicOpt> for HeuristicKind {
    fn from(opt: HeuristicOpt) -> Self {
        match opt {
            HeuristicOpt::Manhattan => HeuristicKind::Manhattan,
            HeuristicOpt::Misplaced => HeuristicKind::MisplacedTiles,
            HeuristicOpt::LinearConflict => HeuristicKind::LinearConflict,
        }
    }
}

/// Solve the 8-puzzle with A* and play the solution back in the terminal.
#[derive(Debug, Parser)]
#[command(name = "eight-puzzle", version, about)]
struct Args {
    /// Start board, row-major with 0 for the blank (e.g. "1,2,3,4,5,6,0,7,8").
    /// A random solvable board is used when omitted.
    #[arg(long)]
    state: Option<Board>,

    /// Seed for the random board (ignored with --state).
    #[arg(long)]
    seed: Option<u64>,

    /// Remaining-cost estimate used by the search.
    #[arg(long, value_enum, default_value_t = HeuristicOpt::Manhattan)]
    heuristic: HeuristicOpt,

    /// Solve with every heuristic and print how much work each one did.
    #[arg(long)]
    compare: bool,

    /// Pause between playback steps, in milliseconds.
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Print the move list instead of animating it.
    #[arg(long)]
    no_playback: bool,
}

fn compare(start: &Board) {
    println!("{:<16} {:>6} {:>10} {:>10}", "heuristic", "moves", "expanded", "generated");
    for kind in HeuristicKind::ALL {
        let outcome = solve_with_stats(start, &kind);
        let moves = outcome
            .moves
            .map(|m| m.len().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<16} {:>6} {:>10} {:>10}",
            kind.to_string(),
            moves,
            outcome.stats.expanded,
            outcome.stats.generated
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let start = match (args.state, args.seed) {
        (Some(board), _) => board,
        (None, Some(seed)) => generate_solvable_puzzle(&mut seeded_rng(seed)),
        (None, None) => generate_solvable_puzzle(&mut thread_rng()),
    };

    let mut stdout = io::stdout();
    writeln!(stdout, "Start:")?;
    render_board(&mut stdout, &start)?;
    writeln!(stdout)?;

    if !is_solvable(&start) {
        bail!(
            "board has {} inversions (odd), it can never reach the goal",
            count_inversions(&start)
        );
    }

    if args.compare {
        compare(&start);
        return Ok(());
    }

    let heuristic = HeuristicKind::from(args.heuristic);
    let started = Instant::now();
    let outcome = solve_with_stats(&start, &heuristic);
    tracing::info!(
        heuristic = %heuristic,
        expanded = outcome.stats.expanded,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "search finished"
    );

    let Some(moves) = outcome.moves else {
        bail!("no solution found");
    };
    writeln!(stdout, "Found optimal solution with {} moves", moves.len())?;

    if args.no_playback {
        let listed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        writeln!(stdout, "{}", listed.join(" "))?;
    } else {
        let clear = stdout.is_tty();
        play_back(
            &mut stdout,
            &start,
            &moves,
            Duration::from_millis(args.delay_ms),
            clear,
        )?;
        writeln!(stdout, "Solved in {} moves", moves.len())?;
    }

    Ok(())
}
