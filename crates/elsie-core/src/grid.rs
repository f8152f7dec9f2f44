//! The self-modifying 6×6 substitution grid.
//!
//! The grid is the cipher's core mutable state: a bijective placement of
//! the 36 alphabet symbols onto 36 cells, laid out row-major from the key.
//! Rotations permute it in place after every processed symbol.
//!
//! # Invariants
//!
//! - Permutation: every alphabet symbol occupies exactly one cell, before
//!   and after any rotation.
//! - Position map coherence: `positions[s.index()]` always names the cell
//!   holding symbol `s`. Rotations update it in the same call that moves
//!   the cells, so lookups never scan the grid.

use crate::alphabet::{ALPHABET_SIZE, Symbol};

/// Grid dimension: six rows by six columns.
pub const GRID_DIM: usize = 6;

/// A 6×6 arrangement of the alphabet plus a symbol→cell lookup table.
///
/// Owned exclusively by one [`Cipher`](crate::Cipher) for the duration of
/// one message; never shared or reused across messages.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Row-major cells.
    cells: [[Symbol; GRID_DIM]; GRID_DIM],

    /// `(row, col)` of each symbol, indexed by alphabet index.
    positions: [(u8, u8); ALPHABET_SIZE],
}

impl Grid {
    /// Build a grid from 36 distinct symbols, six per row in order.
    ///
    /// The caller (key validation in [`Cipher::new`](crate::Cipher::new))
    /// guarantees `symbols` is a full permutation of the alphabet.
    pub(crate) fn from_symbols(symbols: &[Symbol; ALPHABET_SIZE]) -> Self {
        let mut cells = [[symbols[0]; GRID_DIM]; GRID_DIM];
        let mut positions = [(0u8, 0u8); ALPHABET_SIZE];

        for (i, &symbol) in symbols.iter().enumerate() {
            let (row, col) = (i / GRID_DIM, i % GRID_DIM);
            cells[row][col] = symbol;
            positions[symbol.index()] = (row as u8, col as u8);
        }

        Self { cells, positions }
    }

    /// The cell coordinates currently holding `symbol`.
    pub fn locate(&self, symbol: Symbol) -> (usize, usize) {
        let (row, col) = self.positions[symbol.index()];
        (usize::from(row), usize::from(col))
    }

    /// The symbol at `(row, col)`. Coordinates must be in `0..6`.
    pub fn at(&self, row: usize, col: usize) -> Symbol {
        self.cells[row][col]
    }

    /// Right-rotate one row by a single position: the last cell wraps to
    /// column 0, everything else shifts right.
    pub(crate) fn rotate_row_right(&mut self, row: usize) {
        self.cells[row].rotate_right(1);

        for (col, symbol) in self.cells[row].iter().enumerate() {
            self.positions[symbol.index()] = (row as u8, col as u8);
        }
    }

    /// Down-rotate one column by a single position: the bottom cell wraps
    /// to row 0, everything else shifts down.
    pub(crate) fn rotate_column_down(&mut self, col: usize) {
        let bottom = self.cells[GRID_DIM - 1][col];
        for row in (1..GRID_DIM).rev() {
            self.cells[row][col] = self.cells[row - 1][col];
        }
        self.cells[0][col] = bottom;

        for row in 0..GRID_DIM {
            let symbol = self.cells[row][col];
            self.positions[symbol.index()] = (row as u8, col as u8);
        }
    }

    /// Iterate over all 36 cells in row-major order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// True if every alphabet symbol occupies exactly one cell.
    ///
    /// Always holds; exposed so tests and fuzzers can assert it after
    /// arbitrary step sequences.
    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; ALPHABET_SIZE];
        for symbol in self.symbols() {
            if seen[symbol.index()] {
                return false;
            }
            seen[symbol.index()] = true;
        }
        seen.iter().all(|&s| s)
    }
}
