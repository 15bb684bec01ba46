//! PyO3 bindings exposing the engine to a Python game harness.
//!
//! Boards cross the boundary as flat row-major lists of 0/1/2 cells; the
//! side is inferred from the length (36 or 64). Malformed input raises
//! `ValueError` instead of producing a wrong move.

use ndarray::Array2;
use numpy::{PyArray1, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use reversi::{Board, BoardSize, Player};

fn board_from_flat(cells: &[u8]) -> PyResult<Board> {
    let size = match cells.len() {
        36 => BoardSize::Six,
        64 => BoardSize::Eight,
        len => {
            return Err(PyValueError::new_err(format!(
                "Board must have 36 or 64 cells, got {}",
                len
            )))
        }
    };

    Board::from_cells(size, cells).map_err(|err| PyValueError::new_err(err.to_string()))
}

fn player_from_id(player: u8) -> PyResult<Player> {
    Player::try_from(player).map_err(|err| PyValueError::new_err(err.to_string()))
}

/// Best move for `player` on the given board, as (col, row), or None when
/// no legal move exists.
///
/// Args:
///     board (list): Flat board state, 36 or 64 elements (0=Empty, 1=Black, 2=White)
///     player (int): Current player (1=Black, 2=White)
#[pyfunction]
fn select_move(board: Vec<u8>, player: u8) -> PyResult<Option<(usize, usize)>> {
    let board = board_from_flat(&board)?;
    let player = player_from_id(player)?;

    Ok(crate::selector::select_move(&board, player))
}

/// Legal moves for `player` as a flat bool mask indexed row * side + col.
#[pyfunction]
fn legal_move_mask<'py>(
    py: Python<'py>,
    board: Vec<u8>,
    player: u8,
) -> PyResult<&'py PyArray1<bool>> {
    let board = board_from_flat(&board)?;
    let player = player_from_id(player)?;

    let side = board.side();
    let mut mask = vec![false; side * side];
    for (row, col) in board.legal_moves(player) {
        mask[row * side + col] = true;
    }

    Ok(PyArray1::from_slice(py, &mask))
}

/// Apply one move for `player` and return the resulting grid as a
/// (side, side) uint8 array. Raises ValueError for an illegal move.
#[pyfunction]
fn apply_move<'py>(
    py: Python<'py>,
    board: Vec<u8>,
    player: u8,
    row: usize,
    col: usize,
) -> PyResult<&'py PyArray2<u8>> {
    let board = board_from_flat(&board)?;
    let player = player_from_id(player)?;

    if !board.is_valid_move(row, col, player) {
        return Err(PyValueError::new_err(format!(
            "({}, {}) is not a legal move for player {}",
            row,
            col,
            if player == Player::Black { 1 } else { 2 },
        )));
    }

    let next = board.apply_move(row, col, player);
    let side = next.side();
    let cells = next.to_cells();
    let array = Array2::from_shape_fn((side, side), |(r, c)| cells[r * side + c]);

    Ok(PyArray2::from_owned_array(py, array))
}

/// Python module definition, importable as `reversi_engines`.
#[pymodule]
fn reversi_engines(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(select_move, m)?)?;
    m.add_function(wrap_pyfunction!(legal_move_mask, m)?)?;
    m.add_function(wrap_pyfunction!(apply_move, m)?)?;
    Ok(())
}
