//! Board model and move rules for Othello (Reversi).
//!
//! Boards come in two fixed sizes (6x6 and 8x8) and are plain value types:
//! `apply_move` returns a fresh board instead of mutating, so search code can
//! explore independent branches without aliasing.

use thiserror::Error;

/// Errors raised when constructing a board or player from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("unsupported board side {0}, expected 6 or 8")]
    InvalidSize(usize),
    #[error("expected {expected} cells, got {got}")]
    WrongCellCount { expected: usize, got: usize },
    #[error("invalid cell value {value} at index {index}, expected 0, 1 or 2")]
    InvalidCell { index: usize, value: u8 },
    #[error("invalid player id {0}, expected 1 (black) or 2 (white)")]
    InvalidPlayer(u8),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert player to cell representation
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, BoardError> {
        match value {
            1 => Ok(Player::Black),
            2 => Ok(Player::White),
            other => Err(BoardError::InvalidPlayer(other)),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// Supported board sides. The size is fixed for the lifetime of a board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoardSize {
    Six,
    Eight,
}

impl BoardSize {
    pub fn side(self) -> usize {
        match self {
            BoardSize::Six => 6,
            BoardSize::Eight => 8,
        }
    }

    pub fn cell_count(self) -> usize {
        self.side() * self.side()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardError;

    fn try_from(side: usize) -> Result<Self, BoardError> {
        match side {
            6 => Ok(BoardSize::Six),
            8 => Ok(BoardSize::Eight),
            other => Err(BoardError::InvalidSize(other)),
        }
    }
}

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An N x N Othello grid stored row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with the standard four-stone central opening:
    /// white on the main diagonal of the center block, black on the other.
    pub fn new(size: BoardSize) -> Self {
        let mut board = Self::empty(size);
        let h = size.side() / 2;
        board.set(h - 1, h - 1, Cell::White);
        board.set(h - 1, h, Cell::Black);
        board.set(h, h - 1, Cell::Black);
        board.set(h, h, Cell::White);
        board
    }

    /// Create an all-empty board.
    pub fn empty(size: BoardSize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Build a board from a flat row-major cell array where
    /// 0 = empty, 1 = black, 2 = white. Rejects malformed input.
    pub fn from_cells(size: BoardSize, raw: &[u8]) -> Result<Self, BoardError> {
        if raw.len() != size.cell_count() {
            return Err(BoardError::WrongCellCount {
                expected: size.cell_count(),
                got: raw.len(),
            });
        }

        let mut cells = Vec::with_capacity(raw.len());
        for (index, &value) in raw.iter().enumerate() {
            cells.push(match value {
                0 => Cell::Empty,
                1 => Cell::Black,
                2 => Cell::White,
                _ => return Err(BoardError::InvalidCell { index, value }),
            });
        }

        Ok(Board { size, cells })
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Side length (6 or 8).
    pub fn side(&self) -> usize {
        self.size.side()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.side() && col < self.side());
        row * self.side() + col
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let index = self.index(row, col);
        self.cells[index] = cell;
    }

    /// Flat row-major view with 0 = empty, 1 = black, 2 = white.
    pub fn to_cells(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => 0,
                Cell::Black => 1,
                Cell::White => 2,
            })
            .collect()
    }

    /// Check if a move is valid at position (row, col)
    ///
    /// A move is valid if the cell is on the board and empty, and placing a
    /// stone there would flip at least one opponent stone in some direction.
    pub fn is_valid_move(&self, row: usize, col: usize, player: Player) -> bool {
        if row >= self.side() || col >= self.side() {
            return false;
        }

        if self.get(row, col) != Cell::Empty {
            return false;
        }

        for (dr, dc) in DIRECTIONS {
            if self.would_flip_in_direction(row, col, dr, dc, player) {
                return true;
            }
        }

        false
    }

    /// Check if placing a stone at (row, col) would flip stones in direction
    /// (dr, dc): at least one opponent stone followed by one of `player`'s.
    fn would_flip_in_direction(&self, row: usize, col: usize, dr: i8, dc: i8, player: Player) -> bool {
        let side = self.side() as i8;
        let own = player.to_cell();
        let opponent = player.opponent().to_cell();

        let mut r = row as i8 + dr;
        let mut c = col as i8 + dc;
        let mut found_opponent = false;

        while r >= 0 && r < side && c >= 0 && c < side {
            match self.get(r as usize, c as usize) {
                Cell::Empty => return false,
                cell if cell == opponent => {
                    found_opponent = true;
                    r += dr;
                    c += dc;
                }
                cell if cell == own => return found_opponent,
                _ => return false,
            }
        }

        false
    }

    /// Flip the opponent run in one direction, if it is bracketed.
    fn flip_in_direction(&mut self, row: usize, col: usize, dr: i8, dc: i8, player: Player) {
        if !self.would_flip_in_direction(row, col, dr, dc, player) {
            return;
        }

        let side = self.side() as i8;
        let own = player.to_cell();
        let opponent = player.opponent().to_cell();

        let mut r = row as i8 + dr;
        let mut c = col as i8 + dc;

        while r >= 0 && r < side && c >= 0 && c < side {
            if self.get(r as usize, c as usize) == opponent {
                self.set(r as usize, c as usize, own);
                r += dr;
                c += dc;
            } else {
                break;
            }
        }
    }

    /// All legal moves for `player` as (row, col) pairs in row-major order.
    ///
    /// The order is deterministic and load-bearing: search strategies break
    /// score ties by keeping the first-seen move.
    pub fn legal_moves(&self, player: Player) -> Vec<(usize, usize)> {
        let mut moves = Vec::new();

        for row in 0..self.side() {
            for col in 0..self.side() {
                if self.get(row, col) == Cell::Empty && self.is_valid_move(row, col, player) {
                    moves.push((row, col));
                }
            }
        }

        moves
    }

    pub fn has_any_move(&self, player: Player) -> bool {
        for row in 0..self.side() {
            for col in 0..self.side() {
                if self.get(row, col) == Cell::Empty && self.is_valid_move(row, col, player) {
                    return true;
                }
            }
        }

        false
    }

    /// Apply a move, returning the resulting board and leaving `self` intact.
    ///
    /// Callers must have established validity via `is_valid_move` or
    /// `legal_moves`; this does not re-validate.
    pub fn apply_move(&self, row: usize, col: usize, player: Player) -> Board {
        debug_assert!(
            self.is_valid_move(row, col, player),
            "apply_move called with invalid move ({row}, {col})"
        );

        let mut next = self.clone();
        next.set(row, col, player.to_cell());

        for (dr, dc) in DIRECTIONS {
            next.flip_in_direction(row, col, dr, dc, player);
        }

        next
    }

    /// Number of stones `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        let own = player.to_cell();
        self.cells.iter().filter(|&&cell| cell == own).count()
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    pub fn empties(&self) -> usize {
        self.size.cell_count() - self.occupied()
    }

    /// Signed stone-count difference from `player`'s perspective.
    pub fn disc_difference(&self, player: Player) -> i32 {
        self.count(player) as i32 - self.count(player.opponent()) as i32
    }

    /// The game is over when neither color has a legal move.
    pub fn is_game_over(&self) -> bool {
        !self.has_any_move(Player::Black) && !self.has_any_move(Player::White)
    }

    /// The color holding more stones, or `None` for a draw. Only meaningful
    /// once `is_game_over` holds.
    pub fn winner(&self) -> Option<Player> {
        let black = self.count(Player::Black);
        let white = self.count(Player::White);

        if black > white {
            Some(Player::Black)
        } else if white > black {
            Some(Player::White)
        } else {
            None
        }
    }
}
