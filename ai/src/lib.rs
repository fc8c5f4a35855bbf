// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aadu Puli AI - Adversarial Search Strategies
//!
//! Game-agnostic implementations of the [`aadupuli_core::engine::GameAi`]
//! contract:
//! - [`AlphaBeta`]: alpha-beta pruned minimax with randomized tie-breaking
//! - [`RandomAi`]: uniform random baseline opponent

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod alphabeta;
pub mod random;

pub use alphabeta::AlphaBeta;
pub use random::RandomAi;
