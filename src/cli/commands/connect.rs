//! Connect command - inspect connect-k boards and play games

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    cli::output::{print_kv, print_section, render_connect_boards},
    connect::{ConnectBoard, Player},
    pipeline::{AlphaBetaPlayer, Match, MinimaxPlayer, RandomPlayer, Strategy},
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectAction {
    /// Print the board
    Print,
    /// Print every board O can reach with one drop
    Next,
    /// Random X against random O
    Random,
    /// Random X against minimax O
    Minimax,
    /// Random X against alpha-beta O
    Alphabeta,
}

#[derive(Parser, Debug)]
#[command(about = "Inspect a connect-k board or play a game")]
pub struct ConnectArgs {
    /// What to do with the board
    #[arg(value_enum)]
    pub action: ConnectAction,

    /// Board in compact form, columns bottom-up separated by '|'
    pub board: Option<String>,

    /// Seed for the random players
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: ConnectArgs) -> Result<()> {
    let board = match &args.board {
        Some(text) => ConnectBoard::parse(text).context("could not read the connect board")?,
        None => ConnectBoard::new(),
    };

    let random = |label: Player, offset: u64| -> Box<dyn Strategy> {
        match args.seed {
            Some(seed) => Box::new(RandomPlayer::with_seed(label, seed.wrapping_add(offset))),
            None => Box::new(RandomPlayer::new(label)),
        }
    };

    let opponent: Box<dyn Strategy> = match args.action {
        ConnectAction::Print => {
            println!("{}", render_connect_boards(&[board]));
            return Ok(());
        }
        ConnectAction::Next => {
            println!("{}", render_connect_boards(&board.successors(Player::O)));
            return Ok(());
        }
        ConnectAction::Random => random(Player::O, 1),
        ConnectAction::Minimax => Box::new(MinimaxPlayer::new(Player::O)),
        ConnectAction::Alphabeta => Box::new(AlphaBetaPlayer::new(Player::O)),
    };
    let timed = args.action != ConnectAction::Random;
    let opponent_name = opponent.name().to_string();

    let mut game = Match::new(random(Player::X, 0), opponent)?;
    let record = game.play(&board)?;

    println!("{}", render_connect_boards(&record.boards));
    println!("Result = {}", record.outcome);

    if timed {
        print_section(&format!("Time by the {opponent_name} player"));
        for (i, mv) in record
            .moves
            .iter()
            .filter(|m| m.player == Player::O)
            .enumerate()
        {
            print_kv(
                &format!("Move {} (column {})", i + 1, mv.column),
                &format!("{:.3}s", mv.seconds),
            );
        }
        print_kv("Total", &format!("{:.3}s", record.seconds_for(Player::O)));
    }

    Ok(())
}
