//! `vpacker-codec`: per-element building blocks for the `vpacker` block codec.
//!
//! This crate is meant to hold *mechanical* building blocks:
//! - a varint code for one `u32`/`u64` value
//! - a gap (delta) transform for sorted sequences
//!
//! It intentionally does **not** define the block format; `vpacker` does, on top
//! of these primitives.

#![warn(missing_docs)]

pub mod gaps;
pub mod varint;

pub use varint::VarInt;

/// Errors for the gap transform.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input values were not strictly increasing.
    #[error("values are not strictly increasing at index {index}: prev={prev}, next={next}")]
    NotStrictlyIncreasing {
        /// Index where the monotonicity violation occurred.
        index: usize,
        /// Previous value (expected smaller than `next`).
        prev: u64,
        /// Next value (must be strictly greater than `prev`).
        next: u64,
    },
    /// Summing gaps overflowed the element width.
    #[error("u{bits} overflow while summing gaps at index {index}")]
    Overflow {
        /// Index in the gaps stream where overflow occurred.
        index: usize,
        /// Element width in bits.
        bits: u32,
    },
}
