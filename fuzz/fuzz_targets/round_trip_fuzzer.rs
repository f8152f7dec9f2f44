//! Fuzz target for the LC4 cipher engine
//!
//! # Strategy
//!
//! - Key permutations: a Fisher-Yates tape derives a valid random key, so
//!   the engine itself gets fuzzed rather than just key validation
//! - Arbitrary messages: symbol indices reduced mod 36
//! - Garbage keys: raw arbitrary strings fed to `Cipher::new`
//!
//! # Invariants
//!
//! - `decrypt(encrypt(m))` recovers `m` symbol by symbol
//! - The grid stays a permutation of the alphabet after every step
//! - Output length equals input length
//! - `Cipher::new` NEVER panics, whatever the key string

#![no_main]

use arbitrary::Arbitrary;
use elsie_core::{ALPHABET, ALPHABET_SIZE, Cipher, Direction, Symbol};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzCase {
    /// Fisher-Yates swap tape for deriving a key permutation.
    swaps: [u8; ALPHABET_SIZE - 1],

    /// Message symbols, as alphabet indices mod 36.
    message: Vec<u8>,

    /// Arbitrary string exercised against key validation.
    raw_key: String,
}

fuzz_target!(|case: FuzzCase| {
    // Key validation must reject garbage with an error, never a panic.
    let _ = Cipher::new(&case.raw_key);

    // Derive a valid key from the swap tape.
    let mut chars = ALPHABET;
    for (i, &swap) in case.swaps.iter().enumerate() {
        let j = i + usize::from(swap) % (ALPHABET_SIZE - i);
        chars.swap(i, j);
    }
    let key: String = chars.iter().collect();

    let mut sender = Cipher::new(&key).expect("derived key is a permutation");
    let mut receiver = Cipher::new(&key).expect("derived key is a permutation");

    for &byte in &case.message {
        let symbol = Symbol::from_char(ALPHABET[usize::from(byte) % ALPHABET_SIZE])
            .expect("alphabet char");

        let wire = sender.step(symbol, Direction::Encrypt);
        let recovered = receiver.step(wire, Direction::Decrypt);

        assert_eq!(recovered, symbol, "round trip diverged");
        assert!(sender.grid().is_permutation(), "encrypt grid lost the permutation");
        assert!(receiver.grid().is_permutation(), "decrypt grid lost the permutation");
        assert_eq!(sender.marker(), receiver.marker(), "markers diverged");
    }
});
