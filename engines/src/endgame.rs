//! Exhaustive endgame search.
//!
//! With few empty cells left the whole game tree fits in a direct search, so
//! instead of a heuristic the engine computes the exact final disc
//! difference every line leads to.

use reversi::{Board, Player};

/// Remaining-empty-cell count at or below which exact search is affordable.
pub const EXACT_SEARCH_LIMIT: usize = 8;

/// Play out every legal continuation and return the best achievable final
/// disc difference for `to_move`, with the move that reaches it.
///
/// A stuck side passes (`-solve(board, opponent)`); when neither side can
/// move the game is over and the value is the literal signed disc count
/// difference. First-seen moves win ties, preserving row-major order.
pub fn solve(board: &Board, to_move: Player) -> (i32, Option<(usize, usize)>) {
    let moves = board.legal_moves(to_move);

    if moves.is_empty() {
        if board.has_any_move(to_move.opponent()) {
            let (value, _) = solve(board, to_move.opponent());
            return (-value, None);
        }
        return (board.disc_difference(to_move), None);
    }

    let mut best_value = i32::MIN;
    let mut best = None;

    for (row, col) in moves {
        let child = board.apply_move(row, col, to_move);
        let (value, _) = solve(&child, to_move.opponent());
        let value = -value;

        if value > best_value {
            best_value = value;
            best = Some((row, col));
        }
    }

    (best_value, best)
}
