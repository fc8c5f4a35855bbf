// SPDX-License-Identifier: MIT OR Apache-2.0

//! Self-play: invariants over reachable states and terminal handling

use std::sync::Arc;

use aadupuli_ai::{AlphaBeta, RandomAi};
use aadupuli_core::engine::{BoardNavigator, GameAi};
use aadupuli_core::{
    outcome_event, Board, GameEvent, Navigator, Piece, Topology, CAPTURES_TO_WIN, MAX_GOATS,
    MAX_TIGERS,
};

const PLY_CAP: u32 = 300;

fn navigator() -> Navigator {
    Navigator::new(Arc::new(Topology::standard().unwrap()))
}

fn assert_invariants(board: &Board) {
    assert_eq!(board.count(Piece::Tiger), MAX_TIGERS as usize);
    assert!(board.goats_placed() <= MAX_GOATS);
    assert!(board.goats_captured() <= CAPTURES_TO_WIN);
    assert!(board.count(Piece::Goat) as u8 + board.goats_captured() <= board.goats_placed());
}

/// Drive a game between two strategies, checking invariants on every
/// reachable state. Returns the winner if the game finished under the cap.
fn play<T, G>(mut tiger: T, mut goat: G) -> Option<Piece>
where
    T: GameAi<Navigator>,
    G: GameAi<Navigator>,
{
    let navigator = navigator();
    let mut board = Board::new(Piece::Goat);

    for _ in 0..PLY_CAP {
        assert_invariants(&board);

        if let Some(winner) = navigator.winner(&board) {
            return Some(winner);
        }

        let (next, mv) = match board.turn() {
            Piece::Tiger => tiger.next_move(&board, &navigator),
            Piece::Goat => goat.next_move(&board, &navigator),
        };

        if mv.is_none() {
            // no successors at the root: the terminal condition, not a failure
            assert_eq!(navigator.end_state(&board, 0), Some(Piece::Goat));
            return Some(Piece::Goat);
        }

        board = next;
    }

    None
}

#[test]
fn random_self_play_preserves_invariants() {
    for seed in 0..5 {
        play(RandomAi::seeded(seed), RandomAi::seeded(seed + 100));
    }
}

#[test]
fn searching_tiger_decides_a_game_against_a_random_goat() {
    let winner = play(AlphaBeta::seeded(4, 7), RandomAi::seeded(13));
    assert!(winner.is_some(), "game should be decided under the ply cap");
}

#[test]
fn capture_count_never_decreases_during_play() {
    let navigator = navigator();
    let mut tiger = AlphaBeta::seeded(2, 3);
    let mut goat = RandomAi::seeded(29);
    let mut board = Board::new(Piece::Goat);
    let mut captured = 0;

    for _ in 0..PLY_CAP {
        if navigator.winner(&board).is_some() {
            break;
        }

        let (next, mv) = match board.turn() {
            Piece::Tiger => tiger.next_move(&board, &navigator),
            Piece::Goat => goat.next_move(&board, &navigator),
        };
        if mv.is_none() {
            break;
        }

        assert!(next.goats_captured() >= captured);
        captured = next.goats_captured();
        board = next;
    }
}

#[test]
fn outcome_event_fires_once_at_the_transition() {
    // tiger one capture away from winning; the searcher will take it
    let navigator = navigator();
    let mut board = Board::new(Piece::Goat);
    board.set_turn(Piece::Tiger);
    board.set_goats_placed(MAX_GOATS);
    board.set_goats_captured(CAPTURES_TO_WIN - 1);
    assert!(board.place("2B".parse().unwrap(), Piece::Goat));

    let mut search = AlphaBeta::seeded(2, 0);
    let (mut next, mv) = search.next_move(&board, &navigator);
    assert!(mv.is_some());

    // the live loop caches the winner after every AI move
    if next.winner().is_none() {
        next.set_winner(navigator.winner(&next));
    }

    match outcome_event(&board, &next) {
        Some(GameEvent::GameEnded { winner, human }) => {
            assert_eq!(winner, Piece::Tiger);
            assert_eq!(human, Piece::Goat);
        }
        None => panic!("expected the outcome event at the transition"),
    }
    assert_eq!(outcome_event(&next, &next), None);
}
