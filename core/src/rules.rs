// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game rules and move validation logic
//!
//! All operations are copy-on-write: they take the current board by
//! reference and return the successor board. Illegal targets are never
//! errors; [`Rules::select`] treats them as a selection change or no-op.

use std::sync::Arc;

use crate::{Board, Navigator, Piece, Pos, Topology};

/// Validates and applies moves for Tiger and Goat.
#[derive(Debug, Clone)]
pub struct Rules {
    topology: Arc<Topology>,
    navigator: Navigator,
}

impl Rules {
    /// Rules engine over the given board connectivity
    pub fn new(topology: Arc<Topology>) -> Self {
        Self {
            navigator: Navigator::new(topology.clone()),
            topology,
        }
    }

    /// True iff the selected piece is a `piece`, `piece` owns the turn,
    /// `to` is empty, and the selection connects to `to` by a common edge.
    pub fn can_step(&self, board: &Board, to: Pos, piece: Piece) -> bool {
        let Some(from) = board.selection() else {
            return false;
        };

        board.piece_at(from) == Some(piece)
            && board.turn() == piece
            && board.is_empty(to)
            && self.topology.is_common_edge(from, to)
    }

    /// True iff the selected piece is a tiger, the selection connects to
    /// `to` by a capture edge, `to` is empty, and the middle vertex holds
    /// a goat. The turn is not rechecked here; `select` only tries
    /// captures on the tigers' turn.
    pub fn can_capture(&self, board: &Board, to: Pos) -> bool {
        let Some(from) = board.selection() else {
            return false;
        };

        board.piece_at(from) == Some(Piece::Tiger)
            && self.topology.is_capture_edge(from, to)
            && board.is_empty(to)
            && self
                .topology
                .middle(from, to)
                .map_or(false, |middle| board.piece_at(middle) == Some(Piece::Goat))
    }

    /// Move the selected piece one step to `to` and hand over the turn.
    /// Callers must have checked [`Rules::can_step`].
    pub fn apply_step(&self, board: &Board, to: Pos, piece: Piece) -> Board {
        let mut next = board.clone();
        let Some(from) = next.selection.take() else {
            return next;
        };

        next.pieces.remove(&from);
        next.pieces.insert(to, piece);
        next.turn = piece.opponent();
        tracing::debug!(%piece, %from, %to, "step");
        next
    }

    /// Jump the selected tiger to `to`, removing the goat in between.
    /// Callers must have checked [`Rules::can_capture`].
    pub fn apply_capture(&self, board: &Board, to: Pos) -> Board {
        let mut next = board.clone();
        let Some(from) = next.selection.take() else {
            return next;
        };
        let Some(taken) = self.topology.middle(from, to) else {
            return next;
        };

        next.pieces.remove(&from);
        next.pieces.remove(&taken);
        next.pieces.insert(to, Piece::Tiger);
        next.goats_captured += 1;
        next.turn = Piece::Goat;
        tracing::debug!(%from, %to, %taken, captured = next.goats_captured, "capture");
        next
    }

    /// Top-level user-intent handler: interpret a click on `loc` for the
    /// side to move, then recompute and cache the winner. On a terminal
    /// board, returns a freshly reset game for the same human side.
    pub fn select(&self, board: &Board, loc: Pos) -> Board {
        if board.winner().is_some() {
            return Board::new(board.human());
        }

        let mut next = match board.turn() {
            Piece::Goat => self.select_goat(board, loc),
            Piece::Tiger => self.select_tiger(board, loc),
        };

        if next.winner.is_none() {
            next.winner = self.navigator.winner(&next);
            if let Some(winner) = next.winner {
                tracing::debug!(%winner, "game over");
            }
        }

        next
    }

    fn select_goat(&self, board: &Board, loc: Pos) -> Board {
        if !board.in_placement_phase() {
            if self.can_step(board, loc, Piece::Goat) {
                return self.apply_step(board, loc, Piece::Goat);
            }

            let mut next = board.clone();
            next.selection = (board.piece_at(loc) == Some(Piece::Goat)).then_some(loc);
            return next;
        }

        // placement phase: selecting an empty vertex twice places a goat
        if board.is_empty(loc) {
            let mut next = board.clone();
            if board.selection() == Some(loc) {
                next.selection = None;
                next.pieces.insert(loc, Piece::Goat);
                next.goats_placed += 1;
                next.turn = Piece::Tiger;
                tracing::debug!(at = %loc, placed = next.goats_placed, "goat placed");
            } else {
                next.selection = Some(loc);
            }
            return next;
        }

        let mut next = board.clone();
        next.selection = None;
        next
    }

    fn select_tiger(&self, board: &Board, loc: Pos) -> Board {
        if self.can_step(board, loc, Piece::Tiger) {
            return self.apply_step(board, loc, Piece::Tiger);
        }
        if self.can_capture(board, loc) {
            return self.apply_capture(board, loc);
        }

        let mut next = board.clone();
        next.selection = (board.piece_at(loc) == Some(Piece::Tiger)).then_some(loc);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{outcome_event, GameEvent, CAPTURES_TO_WIN, MAX_GOATS, MAX_TIGERS};

    fn rules() -> Rules {
        Rules::new(Arc::new(Topology::standard().unwrap()))
    }

    fn p(s: &str) -> Pos {
        s.parse().unwrap()
    }

    /// Board with only the given pieces, ignoring the usual start position.
    fn bare_board(turn: Piece, pieces: &[(&str, Piece)]) -> Board {
        let mut board = Board::new(Piece::Goat);
        board.pieces.clear();
        board.turn = turn;
        for (pos, piece) in pieces {
            board.pieces.insert(p(pos), *piece);
        }
        board
    }

    #[test]
    fn capture_round_trip_holds_for_every_capture_edge() {
        let topology = Arc::new(Topology::standard().unwrap());
        let rules = Rules::new(topology.clone());

        for &from in topology.positions() {
            for &to in topology.jumps(from) {
                let middle = topology.middle(from, to).unwrap();

                let mut board = bare_board(Piece::Tiger, &[(&from.to_string(), Piece::Tiger)]);
                board.pieces.insert(middle, Piece::Goat);
                board.selection = Some(from);

                assert!(rules.can_capture(&board, to), "{from}->{to}");

                let after = rules.apply_capture(&board, to);
                assert_eq!(after.goats_captured(), board.goats_captured() + 1);
                assert!(after.is_empty(middle), "middle {middle} not vacated");
                assert!(after.is_empty(from), "origin {from} not vacated");
                assert_eq!(after.piece_at(to), Some(Piece::Tiger));
                assert_eq!(after.turn(), Piece::Goat);

                // jumping straight back must now be illegal
                let mut back = after.clone();
                back.selection = Some(to);
                assert!(!rules.can_capture(&back, from), "{to}->{from}");
            }
        }
    }

    #[test]
    fn placement_requires_selecting_the_same_vertex_twice() {
        let rules = rules();
        let board = Board::new(Piece::Goat);

        let selected = rules.select(&board, p("3C"));
        assert_eq!(selected.selection(), Some(p("3C")));
        assert!(selected.is_empty(p("3C")));
        assert_eq!(selected.goats_placed(), 0);

        let placed = rules.select(&selected, p("3C"));
        assert_eq!(placed.piece_at(p("3C")), Some(Piece::Goat));
        assert_eq!(placed.goats_placed(), 1);
        assert_eq!(placed.turn(), Piece::Tiger);
        assert_eq!(placed.selection(), None);
    }

    #[test]
    fn selecting_a_different_empty_vertex_moves_the_selection() {
        let rules = rules();
        let board = Board::new(Piece::Goat);

        let first = rules.select(&board, p("3C"));
        let second = rules.select(&first, p("4D"));
        assert_eq!(second.selection(), Some(p("4D")));
        assert_eq!(second.goats_placed(), 0);
    }

    #[test]
    fn clicking_an_occupied_vertex_during_placement_clears_selection() {
        let rules = rules();
        let board = Board::new(Piece::Goat);

        let selected = rules.select(&board, p("3C"));
        let cleared = rules.select(&selected, p("1A"));
        assert_eq!(cleared.selection(), None);
        assert_eq!(cleared.goats_placed(), 0);
    }

    #[test]
    fn goat_steps_only_after_placement_phase() {
        let rules = rules();
        let mut board = bare_board(
            Piece::Goat,
            &[("3C", Piece::Goat), ("1A", Piece::Tiger), ("5A", Piece::Tiger), ("5D", Piece::Tiger)],
        );
        board.goats_placed = MAX_GOATS;
        board.selection = Some(p("3C"));

        assert!(rules.can_step(&board, p("3B"), Piece::Goat));
        let after = rules.select(&board, p("3B"));
        assert_eq!(after.piece_at(p("3B")), Some(Piece::Goat));
        assert!(after.is_empty(p("3C")));
        assert_eq!(after.turn(), Piece::Tiger);

        // not adjacent: treated as a selection change attempt, not a move
        let mut reset = board.clone();
        reset.selection = Some(p("3C"));
        let noop = rules.select(&reset, p("5B"));
        assert_eq!(noop.piece_at(p("3C")), Some(Piece::Goat));
        assert_eq!(noop.selection(), None);
    }

    #[test]
    fn tiger_turn_clicking_a_tiger_selects_it() {
        let rules = rules();
        let mut board = Board::new(Piece::Goat);
        board.turn = Piece::Tiger;

        let selected = rules.select(&board, p("2C"));
        assert_eq!(selected.selection(), Some(p("2C")));

        // clicking elsewhere resets the selection
        let cleared = rules.select(&selected, p("5B"));
        assert_eq!(cleared.selection(), None);
    }

    #[test]
    fn tiger_step_toggles_turn_and_keeps_three_tigers() {
        let rules = rules();
        let mut board = Board::new(Piece::Goat);
        board.turn = Piece::Tiger;
        board.selection = Some(p("1A"));

        assert!(rules.can_step(&board, p("2B"), Piece::Tiger));
        let after = rules.select(&board, p("2B"));
        assert_eq!(after.piece_at(p("2B")), Some(Piece::Tiger));
        assert!(after.is_empty(p("1A")));
        assert_eq!(after.turn(), Piece::Goat);
        assert_eq!(after.count(Piece::Tiger), MAX_TIGERS as usize);
    }

    #[test]
    fn cannot_step_out_of_turn() {
        let rules = rules();
        let mut board = Board::new(Piece::Goat);
        board.selection = Some(p("1A"));
        assert!(!rules.can_step(&board, p("2B"), Piece::Tiger));
    }

    #[test]
    fn select_detects_a_tiger_win_and_fires_the_outcome_once() {
        let rules = rules();
        // tiger at 2C captures over 2B to 2A for the sixth goat
        let mut board = bare_board(
            Piece::Tiger,
            &[("2C", Piece::Tiger), ("1A", Piece::Tiger), ("5D", Piece::Tiger), ("2B", Piece::Goat)],
        );
        board.goats_captured = CAPTURES_TO_WIN - 1;
        board.goats_placed = MAX_GOATS;
        board.selection = Some(p("2C"));

        let after = rules.select(&board, p("2A"));
        assert_eq!(after.goats_captured(), CAPTURES_TO_WIN);
        assert_eq!(after.winner(), Some(Piece::Tiger));

        assert_eq!(
            outcome_event(&board, &after),
            Some(GameEvent::GameEnded {
                winner: Piece::Tiger,
                human: Piece::Goat,
            })
        );
        // the transition already happened: no second event
        assert_eq!(outcome_event(&after, &after), None);
    }

    #[test]
    fn select_on_a_terminal_board_resets_the_game() {
        let rules = rules();
        let mut board = Board::new(Piece::Tiger);
        board.winner = Some(Piece::Goat);
        board.goats_placed = 7;

        let fresh = rules.select(&board, p("3C"));
        assert_eq!(fresh.winner(), None);
        assert_eq!(fresh.goats_placed(), 0);
        assert_eq!(fresh.human(), Piece::Tiger);
        assert_eq!(fresh.count(Piece::Tiger), MAX_TIGERS as usize);
    }

    #[test]
    fn illegal_click_is_never_an_error() {
        let rules = rules();
        let mut board = Board::new(Piece::Goat);
        board.turn = Piece::Tiger;
        board.selection = Some(p("1A"));

        // occupied target: falls through to selection handling
        let after = rules.select(&board, p("2C"));
        assert_eq!(after.selection(), Some(p("2C")));
        assert_eq!(after.piece_at(p("1A")), Some(Piece::Tiger));
    }
}
