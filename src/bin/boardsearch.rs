//! Board search CLI - sliding-block puzzles and connect-k games
//!
//! This CLI provides a unified interface for:
//! - Printing boards and their successors
//! - Solving sliding-block puzzles with BFS or A*
//! - Playing connect-k games between random and search-based players
//!
//! Set `RUST_LOG=boardsearch=debug` to see search statistics on stderr.

use anyhow::Result;
use boardsearch::cli::commands::{connect, puzzle};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "boardsearch")]
#[command(version, about = "Search over sliding-block puzzles and connect-k games", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sliding-block puzzle: print, done, next, bfs, astar
    Puzzle(puzzle::PuzzleArgs),

    /// Connect-k game: print, next, random, minimax, alphabeta
    Connect(connect::ConnectArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Puzzle(args) => puzzle::execute(args),
        Commands::Connect(args) => connect::execute(args),
    }
}
