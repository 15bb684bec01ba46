//! Bounded breadth-first lookahead with min/max leaf aggregation.
//!
//! Explores every move sequence below one candidate root move out to a fixed
//! depth and collapses the leaf evaluations into a single score. Unlike a
//! minimax, the aggregation mode does not alternate per ply: the caller picks
//! `min` (pessimistic, opening play) or `max` (optimistic, later play) for
//! the whole search, trading fidelity for a bounded cost at high branching
//! factors.

use std::collections::VecDeque;

use reversi::{Board, Player};

use crate::weights;

/// One queued position: the board after some sequence of moves, the color
/// that produced it, and the number of plies played from the root board.
struct Node {
    board: Board,
    mover: Player,
    depth: u32,
}

/// Score the candidate root move `(row, col)` for `player`.
///
/// Every position reached at exactly `depth` plies is evaluated with the
/// plain weight-table evaluator from `player`'s perspective; positions where
/// neither color can move are scored early. The result is the minimum of the
/// collected leaf scores when `minimize` is set, otherwise the maximum.
pub fn score_move(
    board: &Board,
    player: Player,
    (row, col): (usize, usize),
    depth: u32,
    minimize: bool,
) -> i32 {
    let root = board.apply_move(row, col, player);
    // Fallback when the search collects no leaves.
    let root_score = weights::evaluate(&root, player);

    let mut queue = VecDeque::new();
    queue.push_back(Node {
        board: root,
        mover: player,
        depth: 1,
    });

    let mut scores = Vec::new();

    while let Some(node) = queue.pop_front() {
        if node.depth == depth {
            scores.push(weights::evaluate(&node.board, player));
            continue;
        }

        // The turn alternates unless the side to move is stuck, in which
        // case it passes back; if both sides are stuck the game is over
        // here and the position scores as a leaf.
        let mut next = node.mover.opponent();
        let mut moves = node.board.legal_moves(next);
        if moves.is_empty() {
            moves = node.board.legal_moves(node.mover);
            if moves.is_empty() {
                scores.push(weights::evaluate(&node.board, player));
                continue;
            }
            next = node.mover;
        }

        for (r, c) in moves {
            queue.push_back(Node {
                board: node.board.apply_move(r, c, next),
                mover: next,
                depth: node.depth + 1,
            });
        }
    }

    let aggregate = if minimize {
        scores.iter().min()
    } else {
        scores.iter().max()
    };

    match aggregate {
        Some(&score) => score,
        None => root_score,
    }
}
