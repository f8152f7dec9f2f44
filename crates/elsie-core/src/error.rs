//! Cipher error types.

use thiserror::Error;

/// Errors from key validation and message processing.
///
/// All variants are fatal: the transform is deterministic, so nothing is
/// gained by retrying, and no output is produced for the failed message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Key is not exactly 36 symbols long.
    #[error("key must be exactly 36 symbols, got {length}")]
    KeyLength {
        /// Number of characters the key actually contained.
        length: usize,
    },

    /// Key contains a character outside the alphabet.
    #[error("key contains {symbol:?}, which is not in the alphabet")]
    KeyAlienSymbol {
        /// The offending character.
        symbol: char,
    },

    /// Key repeats an alphabet symbol, so it is not a permutation.
    #[error("key repeats the symbol {symbol:?}")]
    KeyDuplicateSymbol {
        /// The character that appeared more than once.
        symbol: char,
    },

    /// Message contains a character outside the alphabet.
    #[error("message contains {symbol:?} at position {position}, which is not in the alphabet")]
    AlienSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based character position within the message.
        position: usize,
    },
}

impl CipherError {
    /// Returns true if this error was raised by key validation (as
    /// opposed to an invalid message symbol).
    pub fn is_key_error(&self) -> bool {
        match self {
            Self::KeyLength { .. } | Self::KeyAlienSymbol { .. } | Self::KeyDuplicateSymbol { .. } => {
                true
            },
            Self::AlienSymbol { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_errors_are_key_errors() {
        assert!(CipherError::KeyLength { length: 35 }.is_key_error());
        assert!(CipherError::KeyAlienSymbol { symbol: '!' }.is_key_error());
        assert!(CipherError::KeyDuplicateSymbol { symbol: 'a' }.is_key_error());
        assert!(!CipherError::AlienSymbol { symbol: '%', position: 3 }.is_key_error());
    }

    #[test]
    fn error_display() {
        let err = CipherError::KeyLength { length: 12 };
        assert_eq!(err.to_string(), "key must be exactly 36 symbols, got 12");

        let err = CipherError::AlienSymbol { symbol: 'A', position: 7 };
        assert_eq!(
            err.to_string(),
            "message contains 'A' at position 7, which is not in the alphabet"
        );
    }
}
