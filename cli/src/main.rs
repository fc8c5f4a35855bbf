// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aadu Puli CLI - Play Tiger and Goat in the terminal
//!
//! Headless front-end for the game engine: renders the board as ASCII,
//! reads vertex tokens from stdin for the human side, and lets an AI
//! strategy play the other side. `--watch` runs AI against AI instead.

mod render;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use aadupuli_ai::{AlphaBeta, RandomAi};
use aadupuli_core::engine::{BoardNavigator, DepthLimiter, GameAi};
use aadupuli_core::{outcome_event, Board, Navigator, Piece, Pos, Rules, Topology};

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "aadupuli", about = "Tiger and Goat board game", version)]
struct Args {
    /// Side controlled by the human player
    #[clap(short = 's', long, value_enum, default_value_t = Side::Goat)]
    human: Side,

    /// Search depth for the alpha-beta opponent
    #[clap(short, long, default_value_t = DepthLimiter::DEFAULT_MAX_DEPTH)]
    depth: u32,

    /// Seed the AI's randomness for reproducible games
    #[clap(long)]
    seed: Option<u64>,

    /// Opponent strategy
    #[clap(short, long, value_enum, default_value_t = Opponent::AlphaBeta)]
    opponent: Opponent,

    /// Watch the chosen strategy (tigers) play a random goat instead of
    /// playing interactively
    #[clap(long)]
    watch: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    Tiger,
    Goat,
}

impl From<Side> for Piece {
    fn from(side: Side) -> Piece {
        match side {
            Side::Tiger => Piece::Tiger,
            Side::Goat => Piece::Goat,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Opponent {
    AlphaBeta,
    Random,
}

fn build_ai(opponent: Opponent, depth: u32, seed: Option<u64>) -> Box<dyn GameAi<Navigator>> {
    match (opponent, seed) {
        (Opponent::AlphaBeta, Some(seed)) => Box::new(AlphaBeta::seeded(depth, seed)),
        (Opponent::AlphaBeta, None) => Box::new(AlphaBeta::with_depth(depth)),
        (Opponent::Random, Some(seed)) => Box::new(RandomAi::seeded(seed)),
        (Opponent::Random, None) => Box::new(RandomAi::from_entropy()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let topology = Arc::new(Topology::standard().context("board topology failed its self-check")?);
    let rules = Rules::new(topology.clone());
    let navigator = Navigator::new(topology);
    let ai = build_ai(args.opponent, args.depth, args.seed);

    if args.watch {
        watch(&navigator, ai, args.seed)
    } else {
        interactive(&rules, &navigator, ai, args.human.into())
    }
}

/// Interactive game: the human enters vertex tokens like `3C`; selecting
/// an empty vertex twice places a goat during the placement phase.
fn interactive(
    rules: &Rules,
    navigator: &Navigator,
    mut ai: Box<dyn GameAi<Navigator>>,
    human: Piece,
) -> Result<()> {
    let stdin = io::stdin();
    let mut board = Board::new(human);

    loop {
        println!("{}", render::render_board(&board));

        if let Some(winner) = board.winner() {
            println!("Game over: {winner} wins.");
            return Ok(());
        }

        let prev = board.clone();
        if board.turn() == human {
            print!("{} to move (vertex, or 'quit'): ", board.turn());
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(());
            }
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            if token.eq_ignore_ascii_case("quit") || token.eq_ignore_ascii_case("exit") {
                return Ok(());
            }

            let pos: Pos = match token.to_uppercase().parse() {
                Ok(pos) => pos,
                Err(_) => {
                    println!("'{token}' is not a board vertex (try e.g. 3C)");
                    continue;
                }
            };

            board = rules.select(&board, pos);
        } else {
            let (mut next, mv) = ai.next_move(&board, navigator);
            match mv {
                Some(mv) => {
                    tracing::info!(%mv, player = %board.turn(), "AI move");
                    if next.winner().is_none() {
                        next.set_winner(navigator.winner(&next));
                    }
                    board = next;
                }
                None => {
                    // no successors: the side to move is out of options
                    board.set_winner(navigator.end_state(&board, 0));
                }
            }
        }

        if let Some(event) = outcome_event(&prev, &board) {
            tracing::info!(?event, "recording game outcome");
        }
    }
}

/// AI-vs-AI game: the chosen strategy plays the tigers against a random
/// goat. Useful for smoke-testing the engine.
fn watch(navigator: &Navigator, mut tiger: Box<dyn GameAi<Navigator>>, seed: Option<u64>) -> Result<()> {
    const PLY_CAP: u32 = 500;

    let mut goat: Box<dyn GameAi<Navigator>> = match seed {
        Some(seed) => Box::new(RandomAi::seeded(seed.wrapping_add(1))),
        None => Box::new(RandomAi::from_entropy()),
    };

    let mut board = Board::new(Piece::Goat);
    for ply in 0..PLY_CAP {
        if let Some(winner) = board.winner() {
            println!("{}", render::render_board(&board));
            println!("Game over after {ply} plies: {winner} wins.");
            return Ok(());
        }

        let prev = board.clone();
        let (mut next, mv) = match board.turn() {
            Piece::Tiger => tiger.next_move(&board, navigator),
            Piece::Goat => goat.next_move(&board, navigator),
        };

        match mv {
            Some(mv) => {
                tracing::info!(%mv, player = %board.turn(), "move");
                if next.winner().is_none() {
                    next.set_winner(navigator.winner(&next));
                }
                board = next;
            }
            None => {
                board.set_winner(navigator.end_state(&board, 0));
            }
        }

        if let Some(event) = outcome_event(&prev, &board) {
            tracing::info!(?event, "recording game outcome");
        }
    }

    println!("{}", render::render_board(&board));
    println!("No winner after {PLY_CAP} plies.");
    Ok(())
}
