//! Static position evaluation from fixed weight tables.
//!
//! One read-only table per supported board size; corners are worth the most,
//! cells next to them the least. The score is the signed sum of weights over
//! occupied cells: positive for the evaluated color, negative for the
//! opponent. A second variant blends in a mobility term.

use reversi::{Board, BoardSize, Cell, Player};

/// Position weights for the 6x6 board.
pub const WEIGHTS_6X6: [i32; 36] = [
    10, 5, 5, 5, 5, 10, //
    5, 1, 2, 2, 1, 5, //
    5, 2, 0, 0, 2, 5, //
    5, 2, 0, 0, 2, 5, //
    5, 1, 2, 2, 1, 5, //
    10, 5, 5, 5, 5, 10,
];

/// Position weights for the 8x8 board.
pub const WEIGHTS_8X8: [i32; 64] = [
    20, -3, 11, 8, 8, 11, -3, 20, -3, -7, -4, 1, 1, -4, -7, -3, 11, -4, 2, 2, 2, 2, -4, 11, 8, 1,
    2, -3, -3, 2, 1, 8, 8, 1, 2, -3, -3, 2, 1, 8, 11, -4, 2, 2, 2, 2, -4, 11, -3, -7, -4, 1, 1, -4,
    -7, -3, 20, -3, 11, 8, 8, 11, -3, 20,
];

fn table_for(size: BoardSize) -> &'static [i32] {
    match size {
        BoardSize::Six => &WEIGHTS_6X6,
        BoardSize::Eight => &WEIGHTS_8X8,
    }
}

/// Weight-table evaluation of `board` from `player`'s perspective.
///
/// Deterministic for identical input; antisymmetric in the color argument.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let table = table_for(board.size());
    let side = board.side();
    let own = player.to_cell();
    let mut total = 0;

    for row in 0..side {
        for col in 0..side {
            match board.get(row, col) {
                Cell::Empty => {}
                cell if cell == own => total += table[row * side + col],
                _ => total -= table[row * side + col],
            }
        }
    }

    total
}

/// Weight-table evaluation plus twice the legal-move-count difference,
/// rewarding positions that leave the mover more options.
pub fn evaluate_with_mobility(board: &Board, player: Player) -> i32 {
    let own_moves = board.legal_moves(player).len() as i32;
    let opponent_moves = board.legal_moves(player.opponent()).len() as i32;

    evaluate(board, player) + 2 * (own_moves - opponent_moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi::BoardSize;

    #[test]
    fn test_corner_weights() {
        assert_eq!(WEIGHTS_6X6[0], 10);
        assert_eq!(WEIGHTS_6X6[5], 10);
        assert_eq!(WEIGHTS_6X6[30], 10);
        assert_eq!(WEIGHTS_6X6[35], 10);

        assert_eq!(WEIGHTS_8X8[0], 20);
        assert_eq!(WEIGHTS_8X8[7], 20);
        assert_eq!(WEIGHTS_8X8[56], 20);
        assert_eq!(WEIGHTS_8X8[63], 20);
    }

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::empty(BoardSize::Six), Player::Black), 0);
        assert_eq!(evaluate(&Board::empty(BoardSize::Eight), Player::White), 0);
    }

    #[test]
    fn test_evaluate_single_stone() {
        let mut board = Board::empty(BoardSize::Six);
        board.set(0, 0, Cell::Black);

        assert_eq!(evaluate(&board, Player::Black), 10);
        assert_eq!(evaluate(&board, Player::White), -10);
    }

    #[test]
    fn test_evaluate_balanced_opening() {
        // The opening occupies a symmetric center block with equal counts.
        let board = Board::new(BoardSize::Eight);
        assert_eq!(evaluate(&board, Player::Black), 0);
        assert_eq!(evaluate(&board, Player::White), 0);
    }

    #[test]
    fn test_evaluate_antisymmetric() {
        let board = Board::new(BoardSize::Eight).apply_move(2, 3, Player::Black);
        assert_eq!(
            evaluate(&board, Player::Black),
            -evaluate(&board, Player::White)
        );
        assert_eq!(
            evaluate_with_mobility(&board, Player::Black),
            -evaluate_with_mobility(&board, Player::White)
        );
    }

    #[test]
    fn test_evaluate_deterministic() {
        let board = Board::new(BoardSize::Six);
        assert_eq!(
            evaluate(&board, Player::Black),
            evaluate(&board, Player::Black)
        );
        assert_eq!(
            evaluate_with_mobility(&board, Player::Black),
            evaluate_with_mobility(&board, Player::Black)
        );
    }

    #[test]
    fn test_mobility_term() {
        let board = Board::new(BoardSize::Eight).apply_move(2, 3, Player::Black);
        let base = evaluate(&board, Player::Black);
        let own = board.legal_moves(Player::Black).len() as i32;
        let opp = board.legal_moves(Player::White).len() as i32;

        assert_eq!(
            evaluate_with_mobility(&board, Player::Black),
            base + 2 * (own - opp)
        );
    }
}
