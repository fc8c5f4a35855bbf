// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board state: piece placement, turn, counters, and per-turn selection

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Piece, Pos};

/// Fixed tiger starting vertices; tigers are relocated but never removed.
const TIGER_STARTS: [Pos; 3] = [Pos::new(1, 0), Pos::new(2, 2), Pos::new(2, 3)];

/// One snapshot of the game: piece placement, whose turn it is, placement
/// and capture counters, and the current user selection.
///
/// Boards are copy-on-write: the rules engine and the navigator always
/// return a fresh board and never mutate the one they were given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Piece placement; a vertex absent from the map is empty
    pub(crate) pieces: HashMap<Pos, Piece>,
    /// Side to move
    pub(crate) turn: Piece,
    /// Goats placed so far, bounded by [`crate::MAX_GOATS`]
    pub(crate) goats_placed: u8,
    /// Goats removed from the board by tiger captures
    pub(crate) goats_captured: u8,
    /// Currently selected vertex, if any
    pub(crate) selection: Option<Pos>,
    /// Search-tree depth at which this state was generated; 0 for the
    /// live game state
    pub(crate) depth: u32,
    /// Cached winner; `Some` means the state is terminal
    pub(crate) winner: Option<Piece>,
    /// Which side the human controls
    pub(crate) human: Piece,
}

impl Board {
    /// Fresh game: three tigers at their fixed starting vertices, goats
    /// to move first.
    pub fn new(human: Piece) -> Self {
        let mut pieces = HashMap::new();
        for pos in TIGER_STARTS {
            pieces.insert(pos, Piece::Tiger);
        }

        Self {
            pieces,
            turn: Piece::Goat,
            goats_placed: 0,
            goats_captured: 0,
            selection: None,
            depth: 0,
            winner: None,
            human,
        }
    }

    /// The piece at a vertex, if any
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.pieces.get(&pos).copied()
    }

    /// Whether a vertex is unoccupied
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.pieces.contains_key(&pos)
    }

    /// Side to move
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// Goats placed so far
    pub fn goats_placed(&self) -> u8 {
        self.goats_placed
    }

    /// Goats captured so far
    pub fn goats_captured(&self) -> u8 {
        self.goats_captured
    }

    /// Currently selected vertex
    pub fn selection(&self) -> Option<Pos> {
        self.selection
    }

    /// Search-tree depth at which this state was generated
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Cached winner, if the game has been decided
    pub fn winner(&self) -> Option<Piece> {
        self.winner
    }

    /// The side the human controls
    pub fn human(&self) -> Piece {
        self.human
    }

    /// Whether the placement phase is still in progress
    pub fn in_placement_phase(&self) -> bool {
        self.goats_placed < crate::MAX_GOATS
    }

    /// Count of pieces of one kind currently on the board
    pub fn count(&self, piece: Piece) -> usize {
        self.pieces.values().filter(|&&p| p == piece).count()
    }

    /// Iterate over occupied vertices
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.pieces.iter().map(|(&pos, &piece)| (pos, piece))
    }

    /// Put a piece on a vertex; returns false if it was occupied.
    /// Intended for setting up positions, not for play; use
    /// [`crate::Rules`] to make moves.
    pub fn place(&mut self, pos: Pos, piece: Piece) -> bool {
        if self.pieces.contains_key(&pos) {
            return false;
        }
        self.pieces.insert(pos, piece);
        true
    }

    /// Remove the piece on a vertex; returns false if it was empty.
    pub fn remove(&mut self, pos: Pos) -> bool {
        self.pieces.remove(&pos).is_some()
    }

    /// Set the side to move
    pub fn set_turn(&mut self, turn: Piece) {
        self.turn = turn;
    }

    /// Set the selected vertex
    pub fn set_selection(&mut self, selection: Option<Pos>) {
        self.selection = selection;
    }

    /// Set the placement counter
    pub fn set_goats_placed(&mut self, goats_placed: u8) {
        self.goats_placed = goats_placed;
    }

    /// Set the capture counter
    pub fn set_goats_captured(&mut self, goats_captured: u8) {
        self.goats_captured = goats_captured;
    }

    /// Cache a computed winner. [`crate::Rules::select`] does this after
    /// every accepted move; front-ends do it after an AI move.
    pub fn set_winner(&mut self, winner: Option<Piece>) {
        self.winner = winner;
    }

    /// Defensive copy used when the navigator enumerates hypothetical
    /// successors: one ply deeper, selection and cached winner cleared.
    pub fn clone_for_search(&self) -> Self {
        let mut board = self.clone();
        board.depth = self.depth + 1;
        board.selection = None;
        board.winner = None;
        board
    }
}
