//! Move enumeration for a seat.
//!
//! Candidate turns come from every token of the seat combined with every
//! delta of every style it owns, with deltas negated for player 1 so that
//! patterns are relative to facing. Candidates are filtered through
//! [`Game::is_legal_move`], which only accepts moves for the seat whose turn
//! it is: asking for the other seat yields nothing.

use rustc_hash::FxHashMap;

use crate::core::{PlayerId, Style};
use crate::game::{Game, Turn};

/// Positions of the seat's tokens, row-major.
#[must_use]
pub fn tokens_of(game: &Game, seat: PlayerId) -> Vec<(i32, i32)> {
    game.board()
        .grid()
        .positions_of(seat)
        .into_iter()
        .map(|(r, c)| (r as i32, c as i32))
        .collect()
}

/// Styles currently owned by the seat, in board order.
#[must_use]
pub fn styles_of(game: &Game, seat: PlayerId) -> Vec<&Style> {
    game.board().styles_of(seat).collect()
}

/// Legal turns grouped by style name. Every owned style has an entry, even
/// when it offers no legal move.
#[must_use]
pub fn valid_turns(game: &Game, seat: PlayerId) -> FxHashMap<String, Vec<Turn>> {
    let tokens = tokens_of(game, seat);
    styles_of(game, seat)
        .into_iter()
        .map(|style| (style.name().to_string(), turns_for_style(game, seat, style, &tokens)))
        .collect()
}

/// All legal turns, ordered by style, then token, then delta.
#[must_use]
pub fn all_valid_turns(game: &Game, seat: PlayerId) -> Vec<Turn> {
    let tokens = tokens_of(game, seat);
    styles_of(game, seat)
        .into_iter()
        .flat_map(|style| turns_for_style(game, seat, style, &tokens))
        .collect()
}

fn turns_for_style(game: &Game, seat: PlayerId, style: &Style, tokens: &[(i32, i32)]) -> Vec<Turn> {
    let mut turns = Vec::new();
    for &(row, col) in tokens {
        for delta in style.moves() {
            let delta = delta.facing(seat);
            let dest = (row + delta.row, col + delta.col);
            if game.is_legal_move(row, col, dest.0, dest.1) {
                turns.push(Turn::new((row, col), dest, style.name(), seat));
            }
        }
    }
    turns
}
