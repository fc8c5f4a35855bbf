// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aadu Puli Core - Game Rules and Board Logic
//!
//! This crate provides the core functionality for the Tiger and Goat
//! board game (Aadu Puli Attam), including:
//! - Board topology (the fixed 23-vertex graph and its capture edges)
//! - Board state and turn handling
//! - Game rules and move validation
//! - Successor generation and heuristic evaluation for AI search

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod engine;
pub mod navigator;
pub mod rules;
pub mod topology;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use board::Board;
pub use navigator::{Heuristic, Navigator};
pub use rules::Rules;
pub use topology::Topology;

/// Maximum number of goats placed during the placement phase.
pub const MAX_GOATS: u8 = 15;

/// Number of tigers on the board; never changes during a game.
pub const MAX_TIGERS: u8 = 3;

/// Captured goats required for a tiger win.
pub const CAPTURES_TO_WIN: u8 = 6;

/// Piece kind in a Tiger and Goat game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    /// Tiger: may step and capture by jumping over a goat
    Tiger,
    /// Goat: placed first, may only step once all goats are placed
    Goat,
}

impl Piece {
    /// Returns the opposing side
    pub fn opponent(&self) -> Self {
        match self {
            Piece::Tiger => Piece::Goat,
            Piece::Goat => Piece::Tiger,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Tiger => write!(f, "Tiger"),
            Piece::Goat => write!(f, "Goat"),
        }
    }
}

/// Board vertex, named by row (1-5) and column (A-F), e.g. "3C".
///
/// Rows have differing numbers of columns; the 23 valid vertices are
/// enumerated by [`Topology::positions`], and parsing rejects any other
/// token. `Pos` itself is an opaque key: row/column arithmetic only
/// happens during topology construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Create a position from a 1-based row and 0-based column offset.
    pub(crate) const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub(crate) fn row(&self) -> u8 {
        self.row
    }

    pub(crate) fn col(&self) -> u8 {
        self.col
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, (b'A' + self.col) as char)
    }
}

impl FromStr for Pos {
    type Err = ParsePosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParsePosError(s.to_string()));
        }

        let row = bytes[0].wrapping_sub(b'0');
        let col = bytes[1].wrapping_sub(b'A');
        // rows have differing widths: 1A; 2A-2F; 3A-3F; 4A-4F; 5A-5D
        let max_col = match row {
            1 => 0,
            2..=4 => 5,
            5 => 3,
            _ => return Err(ParsePosError(s.to_string())),
        };
        if col > max_col {
            return Err(ParsePosError(s.to_string()));
        }

        Ok(Pos { row, col })
    }
}

impl From<Pos> for String {
    fn from(pos: Pos) -> String {
        pos.to_string()
    }
}

impl TryFrom<String> for Pos {
    type Error = ParsePosError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Error parsing a position token
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid position token '{0}'")]
pub struct ParsePosError(pub String);

/// Errors detected while constructing or validating the board topology.
///
/// These are programmer errors in the fixed edge tables: fatal at
/// initialization, never at move time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// An edge table entry failed to parse
    #[error(transparent)]
    BadPosition(#[from] ParsePosError),

    /// An edge is missing its synthesized reverse edge
    #[error("edge {from}-{to} has no reverse edge")]
    AsymmetricEdge { from: Pos, to: Pos },

    /// A capture edge has no precomputed middle position
    #[error("capture edge {from}-{to} has no middle position")]
    MissingMiddle { from: Pos, to: Pos },

    /// A computed middle position is not a board vertex
    #[error("middle {middle} of capture edge {from}-{to} is not on the board")]
    MiddleOffBoard { from: Pos, to: Pos, middle: Pos },
}

/// Moves produced by the navigator and consumed by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMove {
    /// Place a goat during the placement phase
    Place {
        /// Placement target
        at: Pos,
    },
    /// Step a piece along a common edge
    Step {
        /// Origin vertex
        from: Pos,
        /// Destination vertex
        to: Pos,
    },
    /// Tiger jump along a capture edge, removing the goat in between
    Capture {
        /// Origin vertex
        from: Pos,
        /// Landing vertex
        to: Pos,
        /// Captured goat's vertex
        taken: Pos,
    },
}

impl fmt::Display for GameMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMove::Place { at } => write!(f, "place {at}"),
            GameMove::Step { from, to } => write!(f, "{from} -> {to}"),
            GameMove::Capture { from, to, taken } => {
                write!(f, "{from} -> {to} (captures {taken})")
            }
        }
    }
}

/// Game events emitted during play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The game has ended
    GameEnded {
        /// The winning side
        winner: Piece,
        /// The side controlled by the human player
        human: Piece,
    },
}

/// Derive the outcome event from two consecutive board states.
///
/// Fires exactly once per game: only on the transition from no winner to a
/// decided winner. Recording the event is up to the caller.
pub fn outcome_event(prev: &Board, next: &Board) -> Option<GameEvent> {
    if prev.winner().is_some() {
        return None;
    }

    next.winner().map(|winner| GameEvent::GameEnded {
        winner,
        human: next.human(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_round_trips_through_display_and_parse() {
        for token in ["1A", "2F", "3C", "5D"] {
            let pos: Pos = token.parse().unwrap();
            assert_eq!(pos.to_string(), token);
        }
    }

    #[test]
    fn pos_rejects_malformed_tokens() {
        for token in ["", "1", "0A", "6A", "1G", "1a", "10A"] {
            assert!(token.parse::<Pos>().is_err(), "accepted {token:?}");
        }
    }

    #[test]
    fn pos_rejects_off_board_vertices() {
        // row/column combinations that fit the grid but are not vertices
        for token in ["1B", "1F", "5E", "5F"] {
            assert!(token.parse::<Pos>().is_err(), "accepted {token:?}");
        }
    }

    #[test]
    fn pos_accepts_exactly_the_board_vertices() {
        let topology = Topology::standard().unwrap();
        let mut accepted = 0;
        for row in 1..=5u8 {
            for col in 0..6u8 {
                let token = format!("{row}{}", (b'A' + col) as char);
                if let Ok(pos) = token.parse::<Pos>() {
                    accepted += 1;
                    assert!(
                        topology.positions().contains(&pos),
                        "{token} parses but is off the board"
                    );
                }
            }
        }
        assert_eq!(accepted, topology.positions().len());
    }

    #[test]
    fn pos_serializes_as_token() {
        let pos: Pos = "3C".parse().unwrap();
        assert_eq!(serde_json::to_string(&pos).unwrap(), "\"3C\"");
        let back: Pos = serde_json::from_str("\"3C\"").unwrap();
        assert_eq!(back, pos);
    }

    #[test]
    fn opponent_flips_sides() {
        assert_eq!(Piece::Tiger.opponent(), Piece::Goat);
        assert_eq!(Piece::Goat.opponent(), Piece::Tiger);
    }
}
