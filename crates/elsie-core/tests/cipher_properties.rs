//! Property-based tests for the LC4 engine.
//!
//! These exercise the cipher's contract over random keys and messages:
//! round-trip correctness, the grid permutation invariant, per-step
//! bijectivity, determinism, and length preservation.

use elsie_core::{ALPHABET, ALPHABET_SIZE, Cipher, Direction, Symbol, decrypt, encrypt};
use proptest::prelude::*;

/// Strategy: a random valid key, i.e. a random permutation of the
/// alphabet rendered as a 36-character string.
fn key_strategy() -> impl Strategy<Value = String> {
    Just(ALPHABET.to_vec()).prop_shuffle().prop_map(|chars| chars.into_iter().collect())
}

/// Strategy: a message of up to 64 alphabet symbols.
fn message_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(0..ALPHABET_SIZE, 0..64)
        .prop_map(|indices| indices.into_iter().map(|i| ALPHABET[i]).collect())
}

#[test]
fn prop_round_trip() {
    proptest!(|(key in key_strategy(), message in message_strategy())| {
        let ciphertext = encrypt(&key, &message).expect("generated inputs are valid");
        let plaintext = decrypt(&key, &ciphertext).expect("ciphertext is over the alphabet");

        // PROPERTY: decrypting an encryption under the same key recovers
        // the original message.
        prop_assert_eq!(plaintext, message);
    });
}

#[test]
fn prop_length_preserved() {
    proptest!(|(key in key_strategy(), message in message_strategy())| {
        let ciphertext = encrypt(&key, &message).expect("generated inputs are valid");

        // PROPERTY: one output symbol per input symbol.
        prop_assert_eq!(ciphertext.chars().count(), message.chars().count());
    });
}

#[test]
fn prop_deterministic() {
    proptest!(|(key in key_strategy(), message in message_strategy())| {
        let first = encrypt(&key, &message).expect("generated inputs are valid");
        let second = encrypt(&key, &message).expect("generated inputs are valid");

        // PROPERTY: no hidden randomness; same inputs, same output.
        prop_assert_eq!(first, second);
    });
}

#[test]
fn prop_grid_stays_permutation() {
    proptest!(|(key in key_strategy(), message in message_strategy())| {
        let mut cipher = Cipher::new(&key).expect("generated key is valid");

        for ch in message.chars() {
            let symbol = Symbol::from_char(ch).expect("message is over the alphabet");
            cipher.step(symbol, Direction::Encrypt);

            // PROPERTY: rotations permute the grid, they never lose or
            // duplicate a symbol.
            prop_assert!(cipher.grid().is_permutation());
        }
    });
}

#[test]
fn prop_step_is_bijective_at_any_reachable_state() {
    proptest!(|(key in key_strategy(), prefix in message_strategy())| {
        // Drive a fresh engine to an arbitrary reachable state.
        let mut cipher = Cipher::new(&key).expect("generated key is valid");
        cipher.run(&prefix, Direction::Encrypt).expect("prefix is over the alphabet");

        let mut outputs = [false; ALPHABET_SIZE];
        for &ch in &ALPHABET {
            let symbol = Symbol::from_char(ch).expect("alphabet char");
            let output = cipher.clone().step(symbol, Direction::Encrypt);

            // PROPERTY: at a fixed state, no two inputs share an output.
            prop_assert!(!outputs[output.index()]);
            outputs[output.index()] = true;
        }
    });
}

#[test]
fn prop_invalid_key_never_constructs_an_engine() {
    proptest!(|(key in "[a-z0-9#_%A-Z]{0,40}")| {
        // Either the key is a genuine permutation of the alphabet and
        // construction succeeds, or it fails with a key error; nothing
        // panics and nothing half-constructs.
        match Cipher::new(&key) {
            Ok(cipher) => {
                prop_assert!(cipher.grid().is_permutation());
                prop_assert_eq!(key.chars().count(), 36);
            },
            Err(err) => prop_assert!(err.is_key_error()),
        }
    });
}

#[test]
fn prop_decrypt_direction_inverts_each_step() {
    proptest!(|(key in key_strategy(), message in message_strategy())| {
        // Two engines in lockstep: one encrypting, one decrypting its
        // output. Their grids and markers must evolve identically.
        let mut sender = Cipher::new(&key).expect("generated key is valid");
        let mut receiver = Cipher::new(&key).expect("generated key is valid");

        for ch in message.chars() {
            let symbol = Symbol::from_char(ch).expect("message is over the alphabet");
            let wire = sender.step(symbol, Direction::Encrypt);
            let recovered = receiver.step(wire, Direction::Decrypt);

            prop_assert_eq!(recovered, symbol);
            prop_assert_eq!(sender.marker(), receiver.marker());
        }
    });
}
