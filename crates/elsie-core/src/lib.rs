//! ElsieFour (LC4) Cipher Engine
//!
//! This crate implements ElsieFour, a hand-computable stream cipher over
//! a 36-symbol alphabet. Instead of a static substitution table, LC4
//! mutates a 6×6 grid and a position marker after every symbol, so the
//! substitution drifts with the message.
//!
//! # Design
//!
//! All functions in this crate are pure state transitions over owned
//! data: no I/O, no clocks, no randomness. Given the same key and
//! message, the output is always identical, enabling:
//!
//! - Deterministic testing against the published LC4 vectors
//! - Independent engines per message with no shared state
//! - No coupling to application-level abstractions
//!
//! # Correctness Properties
//!
//! - Round-trip: `decrypt(k, encrypt(k, m)) == m` for every message over
//!   the alphabet
//! - Bijection: each step maps distinct inputs to distinct outputs
//! - Grid invariant: the grid stays a permutation of the alphabet after
//!   any number of steps

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod grid;

pub use alphabet::{ALPHABET, ALPHABET_SIZE, Symbol, Vector};
pub use cipher::{Cipher, Direction, decrypt, encrypt};
pub use error::CipherError;
pub use grid::{GRID_DIM, Grid};
