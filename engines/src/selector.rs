//! Phase-dispatched move selection.
//!
//! The selector reads the stone count off the board, picks the strategy and
//! depth budget for that phase of the game, and reports the winning move.
//! Internally everything runs on (row, col); the public result is reported
//! as (col, row).

use log::debug;
use reversi::{Board, Player};

use crate::{alphabeta, endgame, lookahead, weights};

/// Stones-placed ceiling of the opening band.
const OPENING_STONES: usize = 8;
/// Stones-placed ceiling of the early midgame band.
const MIDGAME_STONES: usize = 20;
/// Lookahead depth while the board is still nearly empty.
const OPENING_DEPTH: u32 = 3;
/// Lookahead and alpha-beta depth past the opening.
const MAIN_DEPTH: u32 = 5;

/// Pick the best legal move for `player`, or `None` when there is none.
///
/// Dispatch: with at most [`endgame::EXACT_SEARCH_LIMIT`] empty cells left
/// the exact solver runs to the end of the game; in the opening the bounded
/// lookahead aggregates pessimistically (the shallow horizon cannot be
/// trusted); through the midgame it aggregates optimistically at full depth;
/// after that alpha-beta takes over. Every band breaks score ties by
/// keeping the first move in row-major order.
///
/// The returned coordinate is `(col, row)`.
pub fn select_move(board: &Board, player: Player) -> Option<(usize, usize)> {
    let moves = board.legal_moves(player);
    if moves.is_empty() {
        return None;
    }

    let occupied = board.occupied();
    let empties = board.empties();

    let chosen = if empties <= endgame::EXACT_SEARCH_LIMIT {
        debug!("endgame band ({empties} empties): exact search");
        endgame::solve(board, player).1
    } else if occupied <= OPENING_STONES {
        debug!("opening band ({occupied} stones): lookahead depth {OPENING_DEPTH}, minimize");
        Some(best_by_lookahead(board, player, &moves, OPENING_DEPTH, true))
    } else if occupied <= MIDGAME_STONES {
        debug!("midgame band ({occupied} stones): lookahead depth {MAIN_DEPTH}, maximize");
        Some(best_by_lookahead(board, player, &moves, MAIN_DEPTH, false))
    } else {
        debug!("late band ({occupied} stones): alpha-beta depth {MAIN_DEPTH}");
        alphabeta::best_move(board, player, MAIN_DEPTH)
    };

    chosen.map(|(row, col)| (col, row))
}

/// Evaluate the position after each legal move for `player` with the
/// mobility-blended evaluator. Keys are `(col, row)` in row-major order;
/// empty when no legal move exists.
pub fn score_moves(board: &Board, player: Player) -> Vec<((usize, usize), i32)> {
    board
        .legal_moves(player)
        .into_iter()
        .map(|(row, col)| {
            let next = board.apply_move(row, col, player);
            ((col, row), weights::evaluate_with_mobility(&next, player))
        })
        .collect()
}

fn best_by_lookahead(
    board: &Board,
    player: Player,
    moves: &[(usize, usize)],
    depth: u32,
    minimize: bool,
) -> (usize, usize) {
    let mut best_score = i32::MIN;
    let mut best = moves[0];

    for &mv in moves {
        let score = lookahead::score_move(board, player, mv, depth, minimize);
        if score > best_score {
            best_score = score;
            best = mv;
        }
    }

    best
}
