//! The LC4 alphabet and per-symbol movement vectors.
//!
//! LC4 operates on a fixed 36-symbol alphabet rather than octets. Every
//! symbol has a unique index 0–35, and every index derives a movement
//! vector `(index mod 6, index div 6)` used to walk the grid.
//!
//! # Invariants
//!
//! - The alphabet is immutable: the `char ↔ Symbol` bijection never
//!   changes at runtime.
//! - Vector components are always in `[0, 5]`.

/// Number of symbols in the cipher alphabet.
pub const ALPHABET_SIZE: usize = 36;

/// The fixed LC4 alphabet in index order: `#`, `_`, the digits 2–9, then
/// the lowercase letters a–z.
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    '#', '_', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// A symbol of the LC4 alphabet, stored as its alphabet index.
///
/// Construction goes through [`Symbol::from_char`], so a `Symbol` always
/// holds a valid index in `0..36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// The first alphabet symbol, `#`. Used as an array fill value before
    /// real symbols are written in.
    pub(crate) const FIRST: Self = Self(0);

    /// Look up the symbol for a character, or `None` if the character is
    /// outside the alphabet.
    pub fn from_char(ch: char) -> Option<Self> {
        let index = match ch {
            '#' => 0,
            '_' => 1,
            '2'..='9' => 2 + (ch as u8 - b'2'),
            'a'..='z' => 10 + (ch as u8 - b'a'),
            _ => return None,
        };
        Some(Self(index))
    }

    /// The character this symbol represents.
    pub fn to_char(self) -> char {
        ALPHABET[usize::from(self.0)]
    }

    /// The symbol's alphabet index (0–35).
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The movement vector derived from this symbol's index.
    pub fn vector(self) -> Vector {
        Vector { right: self.index() % 6, down: self.index() / 6 }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A grid displacement derived from a symbol, each component in `[0, 5]`.
///
/// Movement always wraps modulo the grid dimension. Encryption and marker
/// relocation add the vector (right/down); decryption subtracts it
/// (left/up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// Horizontal displacement (columns to the right).
    pub right: usize,
    /// Vertical displacement (rows down).
    pub down: usize,
}
