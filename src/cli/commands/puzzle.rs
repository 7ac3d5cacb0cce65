//! Puzzle command - inspect and solve sliding-block boards

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    cli::output::{create_spinner, print_kv, print_section, render_puzzle_boards},
    config::SearchLimits,
    report::{Algorithm, SolveReport},
    search::{Solution, a_star, breadth_first},
    sliding::{CLASSIC_START, SlidingBoard},
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleAction {
    /// Print the board
    Print,
    /// Report whether the board is solved
    Done,
    /// Print every successor board
    Next,
    /// Solve with breadth-first search
    Bfs,
    /// Solve with A*
    Astar,
}

#[derive(Parser, Debug)]
#[command(about = "Inspect or solve a sliding-block puzzle")]
pub struct PuzzleArgs {
    /// What to do with the board
    #[arg(value_enum)]
    pub action: PuzzleAction,

    /// Board in compact form, rows separated by '|'
    #[arg(default_value = CLASSIC_START)]
    pub board: String,

    /// Stop a search after expanding this many boards
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Write the solution as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: PuzzleArgs) -> Result<()> {
    let board = SlidingBoard::parse(&args.board).context("could not read the puzzle board")?;

    match args.action {
        PuzzleAction::Print => println!("{}", render_puzzle_boards(&[board])),
        PuzzleAction::Done => println!("{}", board.is_goal()),
        PuzzleAction::Next => println!("{}", render_puzzle_boards(&board.successors())),
        PuzzleAction::Bfs => solve(&board, Algorithm::Bfs, &args)?,
        PuzzleAction::Astar => solve(&board, Algorithm::Astar, &args)?,
    }

    Ok(())
}

fn solve(board: &SlidingBoard, algorithm: Algorithm, args: &PuzzleArgs) -> Result<()> {
    let limits = match args.max_expansions {
        Some(max) => SearchLimits::unlimited().with_max_expansions(max),
        None => SearchLimits::unlimited(),
    };

    let spinner = create_spinner(&format!("Searching with {algorithm}..."));
    let result: crate::Result<Solution<SlidingBoard>> = match algorithm {
        Algorithm::Bfs => breadth_first(board, limits),
        Algorithm::Astar => a_star(board, limits),
    };
    spinner.finish_and_clear();
    let solution = result.with_context(|| format!("{algorithm} found no solution"))?;

    println!("{}", render_puzzle_boards(&solution.path));
    print_section("Search summary");
    print_kv("Algorithm", &algorithm.to_string());
    print_kv("Moves", &solution.moves().to_string());
    print_kv("Boards expanded", &solution.expanded.to_string());

    if let Some(path) = &args.export {
        SolveReport::new(algorithm, &solution)
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nSolution exported to: {}", path.display());
    }

    Ok(())
}
