// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use aadupuli_core::{Board, Piece, Pos, MAX_GOATS};

/// Columns present in each board row; row 1 is the apex, row 5 the base.
const ROW_COLUMNS: [(u8, &str); 5] = [
    (1, "A"),
    (2, "ABCDEF"),
    (3, "ABCDEF"),
    (4, "ABCDEF"),
    (5, "ABCD"),
];

/// Render the game board and its counters as ASCII art
pub fn render_board(board: &Board) -> String {
    let mut output = String::new();

    for (row, columns) in ROW_COLUMNS {
        output.push_str(&format!("{row} "));

        for col in columns.chars() {
            let token = format!("{row}{col}");
            let Ok(pos) = token.parse::<Pos>() else {
                continue;
            };

            let symbol = match board.piece_at(pos) {
                Some(Piece::Tiger) => 'T',
                Some(Piece::Goat) => 'G',
                None => '+',
            };

            if board.selection() == Some(pos) {
                output.push_str(&format!("[{symbol}]"));
            } else {
                output.push_str(&format!(" {symbol} "));
            }
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "\nGoats placed: {}   captured: {}   remaining: {}\n",
        board.goats_placed(),
        board.goats_captured(),
        MAX_GOATS - board.goats_placed(),
    ));

    match board.winner() {
        Some(winner) => output.push_str(&format!("Winner: {winner}\n")),
        None => output.push_str(&format!("Current player: {}\n", board.turn())),
    }

    output
}
