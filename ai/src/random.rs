// SPDX-License-Identifier: MIT OR Apache-2.0

//! Uniform random baseline opponent

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use aadupuli_core::engine::{BoardNavigator, GameAi};

/// Picks a successor uniformly at random. Baseline opponent for
/// exercising the engine; not meant for serious play.
pub struct RandomAi<R> {
    rng: R,
}

impl<R: Rng> RandomAi<R> {
    /// Random strategy drawing from `rng`
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomAi<StdRng> {
    /// Entropy-seeded baseline
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic baseline for reproducible games
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<N, R> GameAi<N> for RandomAi<R>
where
    N: BoardNavigator,
    R: Rng,
{
    fn next_move(&mut self, state: &N::State, navigator: &N) -> (N::State, N::Move) {
        let mut successors = navigator.successors(state);
        if successors.is_empty() {
            return (state.clone(), navigator.empty_move());
        }

        let choice = self.rng.gen_range(0..successors.len());
        successors.swap_remove(choice)
    }
}
