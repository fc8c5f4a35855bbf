// SPDX-License-Identifier: MIT OR Apache-2.0

//! Successor generation and heuristic evaluation
//!
//! The navigator implements the [`BoardNavigator`] contract for Tiger and
//! Goat, so the generic search in the AI crate can drive it unmodified.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use crate::engine::{BoardNavigator, HeuristicValue};
use crate::{Board, GameMove, Piece, Pos, Topology, CAPTURES_TO_WIN, MAX_TIGERS};

/// Sentinel depth for the min/max heuristic bounds, far beyond any real
/// search depth so the shallower-line tie-break never prefers a sentinel.
const SENTINEL_DEPTH: u32 = 10_000;

/// Multi-field position value, ordered from the tiger's (maximizing)
/// perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heuristic {
    /// Goats removed by capture
    pub goats_captured: u8,
    /// Tigers with no step or capture available
    pub tigers_stuck: u8,
    /// Distinct goats that could be captured next tiger move
    pub goats_threatened: u8,
    /// Search-tree depth of the evaluated state
    pub depth: u32,
    /// Total step and capture options across all tigers
    pub tiger_options: u8,
}

impl Heuristic {
    /// Tail comparison once stuck-tiger counts no longer decide: captured
    /// goats, then threatened goats, then tiger mobility.
    fn compare_goat_stats(&self, other: &Self) -> Ordering {
        self.goats_captured
            .cmp(&other.goats_captured)
            .then(self.goats_threatened.cmp(&other.goats_threatened))
            .then(self.tiger_options.cmp(&other.tiger_options))
    }
}

impl HeuristicValue for Heuristic {
    /// The comparator is deliberately tiered rather than a scalar sum:
    /// losing a tiger to total immobilization must dominate every other
    /// factor, and near the losing threshold remaining mobility decides.
    /// The thresholds are empirically tuned; treat them as fixed behavior.
    fn compare(&self, other: &Self) -> Ordering {
        if self.tigers_stuck == other.tigers_stuck {
            if self.tigers_stuck + 1 >= MAX_TIGERS
                && (self.tiger_options <= 2 || other.tiger_options <= 2)
            {
                let by_options = self.tiger_options.cmp(&other.tiger_options);
                if by_options != Ordering::Equal {
                    return by_options;
                }
            }

            self.compare_goat_stats(other)
        } else if self.tigers_stuck > 1 || other.tigers_stuck > 1 {
            // fewer stuck tigers is strictly better
            other.tigers_stuck.cmp(&self.tigers_stuck)
        } else {
            self.compare_goat_stats(other)
        }
    }

    fn depth(&self) -> u32 {
        self.depth
    }
}

/// Implements the navigator contract for Tiger and Goat.
#[derive(Debug, Clone)]
pub struct Navigator {
    topology: Arc<Topology>,
}

impl Navigator {
    /// Navigator over the given board connectivity
    pub fn new(topology: Arc<Topology>) -> Self {
        Self { topology }
    }

    /// Winner of a state: tigers once enough goats are captured, goats
    /// once it is the tigers' move and no tiger can move or capture.
    pub fn winner(&self, board: &Board) -> Option<Piece> {
        if board.goats_captured() >= CAPTURES_TO_WIN {
            Some(Piece::Tiger)
        } else if board.turn() == Piece::Tiger && self.tiger_successors(board).is_empty() {
            Some(Piece::Goat)
        } else {
            None
        }
    }

    fn goat_successors(&self, board: &Board) -> Vec<(Board, Option<GameMove>)> {
        let mut successors = Vec::new();

        if board.in_placement_phase() {
            // one successor per empty vertex
            for &at in self.topology.positions() {
                if board.is_empty(at) {
                    let mut next = board.clone_for_search();
                    next.pieces.insert(at, Piece::Goat);
                    next.goats_placed += 1;
                    next.turn = Piece::Tiger;
                    successors.push((next, Some(GameMove::Place { at })));
                }
            }
        } else {
            for (from, piece) in board.pieces() {
                if piece != Piece::Goat {
                    continue;
                }
                for &to in self.topology.neighbors(from) {
                    if board.is_empty(to) {
                        let mut next = board.clone_for_search();
                        next.pieces.remove(&from);
                        next.pieces.insert(to, Piece::Goat);
                        next.turn = Piece::Tiger;
                        successors.push((next, Some(GameMove::Step { from, to })));
                    }
                }
            }
        }

        successors
    }

    fn tiger_successors(&self, board: &Board) -> Vec<(Board, Option<GameMove>)> {
        let mut successors = Vec::new();

        for (from, piece) in board.pieces() {
            if piece != Piece::Tiger {
                continue;
            }

            for &to in self.topology.neighbors(from) {
                if board.is_empty(to) {
                    let mut next = board.clone_for_search();
                    next.pieces.remove(&from);
                    next.pieces.insert(to, Piece::Tiger);
                    next.turn = Piece::Goat;
                    successors.push((next, Some(GameMove::Step { from, to })));
                }
            }

            for &to in self.topology.jumps(from) {
                if !board.is_empty(to) {
                    continue;
                }

                let Some(taken) = self.topology.middle(from, to) else {
                    continue;
                };
                if board.piece_at(taken) == Some(Piece::Goat) {
                    let mut next = board.clone_for_search();
                    next.pieces.remove(&from);
                    next.pieces.remove(&taken);
                    next.pieces.insert(to, Piece::Tiger);
                    next.goats_captured += 1;
                    next.turn = Piece::Goat;
                    successors.push((next, Some(GameMove::Capture { from, to, taken })));
                }
            }
        }

        successors
    }
}

impl BoardNavigator for Navigator {
    type State = Board;
    type Move = Option<GameMove>;
    type Heuristic = Heuristic;
    type Player = Piece;

    fn successors(&self, board: &Board) -> Vec<(Board, Option<GameMove>)> {
        match board.turn() {
            Piece::Tiger => self.tiger_successors(board),
            Piece::Goat => self.goat_successors(board),
        }
    }

    fn evaluate(&self, board: &Board) -> Heuristic {
        let mut value = Heuristic {
            goats_captured: board.goats_captured(),
            tigers_stuck: 0,
            goats_threatened: 0,
            depth: board.depth(),
            tiger_options: 0,
        };

        // dedupe threatened goats reachable by two different jump geometries
        let mut threatened: HashSet<Pos> = HashSet::new();

        for (from, piece) in board.pieces() {
            if piece != Piece::Tiger {
                continue;
            }

            let mut stuck = true;
            for &to in self.topology.neighbors(from) {
                if board.is_empty(to) {
                    stuck = false;
                    value.tiger_options += 1;
                }
            }

            for &to in self.topology.jumps(from) {
                let Some(middle) = self.topology.middle(from, to) else {
                    continue;
                };
                if board.piece_at(middle) == Some(Piece::Goat) && board.is_empty(to) {
                    stuck = false;
                    value.tiger_options += 1;
                    if threatened.insert(middle) {
                        value.goats_threatened += 1;
                    }
                }
            }

            if stuck {
                value.tigers_stuck += 1;
            }
        }

        value
    }

    fn end_state(&self, board: &Board, successor_count: usize) -> Option<Piece> {
        if board.goats_captured() >= CAPTURES_TO_WIN {
            Some(Piece::Tiger)
        } else if successor_count == 0 {
            Some(Piece::Goat)
        } else {
            None
        }
    }

    fn is_maximizing(&self, board: &Board) -> bool {
        board.turn() == Piece::Tiger
    }

    fn empty_move(&self) -> Option<GameMove> {
        None
    }

    fn max_heuristic(&self) -> Heuristic {
        Heuristic {
            goats_captured: CAPTURES_TO_WIN,
            tigers_stuck: 0,
            goats_threatened: 6,
            depth: SENTINEL_DEPTH,
            tiger_options: 0,
        }
    }

    fn min_heuristic(&self) -> Heuristic {
        Heuristic {
            goats_captured: 0,
            tigers_stuck: MAX_TIGERS,
            goats_threatened: 0,
            depth: SENTINEL_DEPTH,
            tiger_options: 0,
        }
    }
}
