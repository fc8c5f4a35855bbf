// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game engine interfaces: the contract between a game and an AI backend
//!
//! Any game that implements [`BoardNavigator`] can reuse a [`GameAi`]
//! implementation unmodified; the search never inspects concrete board or
//! move types.

use std::cmp::Ordering;

/// Position value with a total order, used by minimax-style searches.
pub trait HeuristicValue {
    /// Total-order comparison from the maximizing player's perspective.
    /// Must be antisymmetric and return `Equal` for identical values.
    fn compare(&self, other: &Self) -> Ordering;

    /// Search-tree depth at which this value was produced; used to prefer
    /// shallower lines among exact ties.
    fn depth(&self) -> u32;
}

/// Navigation over a game's state space: successor generation, evaluation,
/// and terminal detection.
pub trait BoardNavigator {
    /// Board state; cloned defensively, never mutated in place
    type State: Clone;
    /// Move descriptor paired with each successor
    type Move: Clone;
    /// Heuristic value type
    type Heuristic: HeuristicValue + Clone;
    /// Player/side identifier
    type Player;

    /// All legal successor states for the side to move, each paired with
    /// the move that produced it.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Move)>;

    /// Heuristic value of a state
    fn evaluate(&self, state: &Self::State) -> Self::Heuristic;

    /// Terminal check given the number of successors available from this
    /// state; returns the winner for terminal states.
    fn end_state(&self, state: &Self::State, successor_count: usize) -> Option<Self::Player>;

    /// True if the side to move tries to maximize the heuristic
    fn is_maximizing(&self, state: &Self::State) -> bool;

    /// Saturating upper sentinel used to seed minimax bounds
    fn max_heuristic(&self) -> Self::Heuristic;

    /// Saturating lower sentinel used to seed minimax bounds
    fn min_heuristic(&self) -> Self::Heuristic;

    /// The null move returned when a search cannot advance
    fn empty_move(&self) -> Self::Move;
}

/// A game-playing strategy: picks the next state from the current one.
pub trait GameAi<N: BoardNavigator> {
    /// Returns the chosen successor state and the move that produced it.
    /// When there are no successors, returns the starting state and the
    /// null move; callers treat that as the terminal condition.
    fn next_move(&mut self, state: &N::State, navigator: &N) -> (N::State, N::Move);
}

/// Bounds how deep a tree search may recurse. The limiter is the sole
/// termination control; a wall-clock limiter is a drop-in alternative.
pub trait SearchLimiter {
    /// True once the search should stop descending
    fn should_stop(&self) -> bool;

    /// The limiter for one ply deeper
    fn deeper(&self) -> Self;
}

/// Limits the search to a fixed ply count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimiter {
    depth: u32,
    max_depth: u32,
}

impl DepthLimiter {
    /// Standard search depth used for production play.
    pub const DEFAULT_MAX_DEPTH: u32 = 6;

    /// Limiter starting at `depth` and stopping at `max_depth` plies.
    pub fn new(depth: u32, max_depth: u32) -> Self {
        Self { depth, max_depth }
    }

    /// Limiter for a fresh search of at most `max_depth` plies.
    pub fn with_max(max_depth: u32) -> Self {
        Self::new(1, max_depth)
    }
}

impl Default for DepthLimiter {
    fn default() -> Self {
        Self::with_max(Self::DEFAULT_MAX_DEPTH)
    }
}

impl SearchLimiter for DepthLimiter {
    fn should_stop(&self) -> bool {
        self.depth >= self.max_depth
    }

    fn deeper(&self) -> Self {
        Self::new(self.depth + 1, self.max_depth)
    }
}
