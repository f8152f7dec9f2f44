//! The LC4 cipher engine.
//!
//! One [`Cipher`] owns one grid/marker pair for the duration of one
//! message. Every [`Cipher::step`] substitutes a single symbol and then
//! mutates the state in a fixed order: right-rotate the plaintext row,
//! down-rotate the ciphertext column, relocate the marker. The order is
//! load-bearing — each stage looks the affected symbol up in the grid as
//! left by the previous stage, and reordering them yields an incompatible
//! cipher.

use crate::{
    alphabet::{ALPHABET_SIZE, Symbol},
    error::CipherError,
    grid::{GRID_DIM, Grid},
};

/// Which way a message is being transformed.
///
/// Decryption walks the marker vector backwards (left/up) where
/// encryption walks it forwards (right/down); the state mutations after
/// the substitution are identical in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext in, ciphertext out.
    Encrypt,
    /// Ciphertext in, plaintext out.
    Decrypt,
}

/// The LC4 cipher engine: a 6×6 substitution grid plus a marker.
///
/// The marker is tracked by symbol value, not by coordinate, so row and
/// column rotations carry it along implicitly; only the explicit
/// relocation at the end of each step changes which symbol it names.
///
/// Not safe for concurrent use: each step depends on the grid left by the
/// previous one, so symbols of one message are strictly sequential.
/// Separate messages get separate engines.
#[derive(Debug, Clone)]
pub struct Cipher {
    grid: Grid,
    marker: Symbol,
}

impl Cipher {
    /// Build an engine from a key: a string of exactly 36 characters
    /// forming a permutation of the alphabet, laid into the grid six
    /// symbols per row. The marker starts on the top-left cell.
    ///
    /// # Errors
    ///
    /// Returns a key-validation [`CipherError`] if the key has the wrong
    /// length, contains a character outside the alphabet, or repeats a
    /// symbol.
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let symbols = parse_key(key)?;
        let grid = Grid::from_symbols(&symbols);
        let marker = grid.at(0, 0);
        Ok(Self { grid, marker })
    }

    /// The symbol currently acting as the marker.
    pub fn marker(&self) -> Symbol {
        self.marker
    }

    /// Read-only view of the grid, for invariant checks.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Transform one symbol and mutate the engine state.
    ///
    /// For a fixed state this is a bijection on the alphabet: the output
    /// cell is the input cell displaced by the marker's vector, and the
    /// grid is a permutation.
    pub fn step(&mut self, input: Symbol, direction: Direction) -> Symbol {
        let (row, col) = self.grid.locate(input);
        let marker_vector = self.marker.vector();

        // Substitute: walk the marker's vector from the input cell,
        // forwards when encrypting, backwards when decrypting.
        let output = match direction {
            Direction::Encrypt => self
                .grid
                .at((row + marker_vector.down) % GRID_DIM, (col + marker_vector.right) % GRID_DIM),
            Direction::Decrypt => self.grid.at(
                (row + GRID_DIM - marker_vector.down) % GRID_DIM,
                (col + GRID_DIM - marker_vector.right) % GRID_DIM,
            ),
        };

        let (plain, cipher) = match direction {
            Direction::Encrypt => (input, output),
            Direction::Decrypt => (output, input),
        };

        // Rotate the plaintext's row, then the ciphertext's column in the
        // grid as left by the row rotation.
        let (plain_row, _) = self.grid.locate(plain);
        self.grid.rotate_row_right(plain_row);

        let (_, cipher_col) = self.grid.locate(cipher);
        self.grid.rotate_column_down(cipher_col);

        // Relocate the marker from its post-rotation cell along the
        // ciphertext's vector. Always additive, in both directions.
        let cipher_vector = cipher.vector();
        let (marker_row, marker_col) = self.grid.locate(self.marker);
        self.marker = self.grid.at(
            (marker_row + cipher_vector.down) % GRID_DIM,
            (marker_col + cipher_vector.right) % GRID_DIM,
        );

        output
    }

    /// Transform a whole message, one symbol at a time, in input order.
    ///
    /// The message is validated before any symbol is processed, so a
    /// rejected message leaves the engine untouched and produces no
    /// partial output. An empty message yields an empty output.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::AlienSymbol`] for the first message
    /// character outside the alphabet.
    pub fn run(&mut self, message: &str, direction: Direction) -> Result<String, CipherError> {
        let symbols = parse_message(message)?;
        Ok(symbols.into_iter().map(|symbol| self.step(symbol, direction).to_char()).collect())
    }
}

/// Encrypt `plaintext` under `key` with a fresh engine.
///
/// # Errors
///
/// Returns a [`CipherError`] for an invalid key or a plaintext character
/// outside the alphabet.
pub fn encrypt(key: &str, plaintext: &str) -> Result<String, CipherError> {
    Cipher::new(key)?.run(plaintext, Direction::Encrypt)
}

/// Decrypt `ciphertext` under `key` with a fresh engine.
///
/// # Errors
///
/// Returns a [`CipherError`] for an invalid key or a ciphertext character
/// outside the alphabet.
pub fn decrypt(key: &str, ciphertext: &str) -> Result<String, CipherError> {
    Cipher::new(key)?.run(ciphertext, Direction::Decrypt)
}

/// Validate a key into 36 distinct symbols.
fn parse_key(key: &str) -> Result<[Symbol; ALPHABET_SIZE], CipherError> {
    let length = key.chars().count();
    if length != ALPHABET_SIZE {
        return Err(CipherError::KeyLength { length });
    }

    let mut symbols = [Symbol::FIRST; ALPHABET_SIZE];
    let mut seen = [false; ALPHABET_SIZE];

    for (slot, ch) in symbols.iter_mut().zip(key.chars()) {
        let symbol = Symbol::from_char(ch).ok_or(CipherError::KeyAlienSymbol { symbol: ch })?;
        if seen[symbol.index()] {
            return Err(CipherError::KeyDuplicateSymbol { symbol: ch });
        }
        seen[symbol.index()] = true;
        *slot = symbol;
    }

    Ok(symbols)
}

/// Validate a message into symbols without touching any engine state.
fn parse_message(message: &str) -> Result<Vec<Symbol>, CipherError> {
    message
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            Symbol::from_char(ch).ok_or(CipherError::AlienSymbol { symbol: ch, position })
        })
        .collect()
}
