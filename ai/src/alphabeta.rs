// SPDX-License-Identifier: MIT OR Apache-2.0

//! Alpha-beta pruned minimax
//! <https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning>

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use aadupuli_core::engine::{
    BoardNavigator, DepthLimiter, GameAi, HeuristicValue, SearchLimiter,
};

/// Alpha-beta minimax search, generic over any [`BoardNavigator`].
///
/// Successors are shuffled before exploration so that equally-valued
/// branches are chosen uniformly at random; with a seeded rng the chosen
/// move is stable. Pruning never changes the root value versus an
/// unpruned minimax over the same heuristic and depth limit, only the
/// number of nodes visited.
pub struct AlphaBeta<L, R> {
    limiter: L,
    rng: R,
}

impl<L, R> AlphaBeta<L, R>
where
    L: SearchLimiter + Clone,
    R: Rng,
{
    /// Search bounded by `limiter`, shuffling with `rng`
    pub fn new(limiter: L, rng: R) -> Self {
        Self { limiter, rng }
    }

    /// Like [`GameAi::next_move`], additionally returning the root
    /// heuristic value the search settled on.
    pub fn next_move_with_value<N>(
        &mut self,
        state: &N::State,
        navigator: &N,
    ) -> ((N::State, N::Move), N::Heuristic)
    where
        N: BoardNavigator,
    {
        let alpha = navigator.min_heuristic();
        let beta = navigator.max_heuristic();
        let limiter = self.limiter.clone();
        let result = self.search(navigator, state, &limiter, alpha, beta);
        tracing::debug!(value_depth = result.1.depth(), "search settled");
        result
    }

    fn search<N>(
        &mut self,
        navigator: &N,
        state: &N::State,
        limiter: &L,
        mut alpha: N::Heuristic,
        mut beta: N::Heuristic,
    ) -> ((N::State, N::Move), N::Heuristic)
    where
        N: BoardNavigator,
    {
        let mut best = (
            (state.clone(), navigator.empty_move()),
            navigator.evaluate(state),
        );
        if limiter.should_stop() {
            return best;
        }

        let mut children = navigator.successors(state);
        if children.is_empty() {
            return best;
        }

        // uniform random order among equally-valued branches
        children.shuffle(&mut self.rng);

        let maximizing = navigator.is_maximizing(state);
        let mut value = if maximizing {
            navigator.min_heuristic()
        } else {
            navigator.max_heuristic()
        };

        for (child_state, child_move) in children {
            let (_, child_value) =
                self.search(navigator, &child_state, &limiter.deeper(), alpha.clone(), beta.clone());

            let comparison = child_value.compare(&value);
            let better = if maximizing {
                comparison == Ordering::Greater
            } else {
                comparison == Ordering::Less
            };

            // on exact ties prefer the shallower line
            if better || (comparison == Ordering::Equal && child_value.depth() < value.depth()) {
                value = child_value.clone();
                best = ((child_state, child_move), child_value);
            }

            if maximizing {
                if value.compare(&alpha) == Ordering::Greater {
                    alpha = value.clone();
                }
            } else if value.compare(&beta) == Ordering::Less {
                beta = value.clone();
            }

            if beta.compare(&alpha) != Ordering::Greater {
                break;
            }
        }

        best
    }
}

impl AlphaBeta<DepthLimiter, StdRng> {
    /// Production search: default depth, entropy-seeded rng
    pub fn standard() -> Self {
        Self::new(DepthLimiter::default(), StdRng::from_entropy())
    }

    /// Entropy-seeded search with a custom depth
    pub fn with_depth(max_depth: u32) -> Self {
        Self::new(DepthLimiter::with_max(max_depth), StdRng::from_entropy())
    }

    /// Deterministic search for reproducible play and tests
    pub fn seeded(max_depth: u32, seed: u64) -> Self {
        Self::new(DepthLimiter::with_max(max_depth), StdRng::seed_from_u64(seed))
    }
}

impl<N, L, R> GameAi<N> for AlphaBeta<L, R>
where
    N: BoardNavigator,
    L: SearchLimiter + Clone,
    R: Rng,
{
    fn next_move(&mut self, state: &N::State, navigator: &N) -> (N::State, N::Move) {
        self.next_move_with_value(state, navigator).0
    }
}
