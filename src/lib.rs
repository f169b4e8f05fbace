//! # vpacker
//!
//! Varint compression for sequences of `u32`/`u64` integers skewed toward small
//! values (gaps, counts, ranks).
//!
//! ## Format
//!
//! An encoded block is the plain concatenation of one LEB128-style code per
//! element: 7 payload bits per byte, least significant group first, high bit
//! set on every byte but the last. There is **no** header, length, count or
//! checksum; the caller keeps the element count (and usually the byte length)
//! beside the block.
//!
//! ```
//! let src = [92u32, 923, 0, 31, 293, 92, 22, 38, 23, 18, 102, 231];
//! let mut dst = vec![0u8; vpacker::bound(src.len(), 32)];
//! let written = vpacker::compress(&src, &mut dst)?;
//!
//! let mut back = [0u32; 12];
//! let consumed = vpacker::uncompress(&dst[..written], &mut back)?;
//! assert_eq!(consumed, written);
//! assert_eq!(back, src);
//! # Ok::<(), vpacker::Error>(())
//! ```
//!
//! ## Layout
//!
//! - [`compress`] / [`uncompress`]: the block codec over caller-owned slices.
//! - [`bound`] / [`Width`]: worst-case output size, before looking at data.
//! - [`raw`]: the same operations with `0` as the failure value, for FFI shims.
//! - [`compress_sorted`] / [`uncompress_sorted`]: gap transform for sorted ids.
//! - [`EncodedBlock`]: bytes kept with width and count (serde behind `serde`).
//! - `vpacker::codec` (the `vpacker-codec` crate): per-element primitives.

pub mod raw;

mod block;
mod decode;
mod encode;
mod sorted;
mod width;

pub use vpacker_codec as codec;
pub use vpacker_codec::VarInt;

pub use block::EncodedBlock;
pub use decode::{uncompress, uncompress_to_vec, values, Values};
pub use encode::{compress, compress_to_vec};
pub use sorted::{compress_sorted, uncompress_sorted};
pub use width::{bound, max_encoded_len, Width};

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad width, count or buffer size; caught before any work is done.
    InvalidArgument,
    /// A value does not fit the element width.
    Overflow,
    /// Input ran out before every element was decoded.
    Truncation,
}

/// Errors returned by `vpacker`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width other than 32 or 64 bits.
    #[error("unsupported integer width: {bits} bits")]
    UnsupportedWidth {
        /// Requested width.
        bits: u32,
    },
    /// Width name that does not parse.
    #[error("unknown width {0:?}, expected one of: 32, 64, u32, u64")]
    UnknownWidth(String),
    /// The size bound does not fit in `usize`.
    #[error("bound for {count} u{bits} values overflows usize")]
    BoundOverflow {
        /// Element count.
        count: usize,
        /// Element width in bits.
        bits: u32,
    },
    /// Element count negative or larger than the buffer it refers to.
    #[error("invalid element count {count} (buffer holds {available})")]
    InvalidCount {
        /// Count as supplied.
        count: i64,
        /// Elements actually available.
        available: usize,
    },
    /// Destination shorter than the bound for the input.
    #[error("destination holds {capacity} bytes, {needed} required")]
    DestinationTooSmall {
        /// Bound for the input.
        needed: usize,
        /// Destination length.
        capacity: usize,
    },
    /// A block was decoded with a different element type than it was built with.
    #[error("block holds u{stored} values, decoded as u{requested}")]
    WidthMismatch {
        /// Width recorded with the block.
        stored: u32,
        /// Width asked for.
        requested: u32,
    },
    /// A code carries more bits than the element width.
    #[error("code for element {index} at byte {offset} overflows u{bits}")]
    Overflow {
        /// Element index.
        index: usize,
        /// Byte offset where the code starts.
        offset: usize,
        /// Element width in bits.
        bits: u32,
    },
    /// Input exhausted before every element was decoded.
    #[error("input ended at byte {offset} after {decoded} of {expected} elements")]
    Truncated {
        /// Elements fully decoded.
        decoded: usize,
        /// Elements requested.
        expected: usize,
        /// Input length.
        offset: usize,
    },
    /// Gap transform failure for sorted sequences.
    #[error(transparent)]
    Gaps(#[from] codec::Error),
}

impl Error {
    /// Which of the three failure classes this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Overflow { .. } | Error::Gaps(codec::Error::Overflow { .. }) => {
                ErrorKind::Overflow
            }
            Error::Truncated { .. } => ErrorKind::Truncation,
            Error::UnsupportedWidth { .. }
            | Error::UnknownWidth(_)
            | Error::BoundOverflow { .. }
            | Error::InvalidCount { .. }
            | Error::DestinationTooSmall { .. }
            | Error::WidthMismatch { .. }
            | Error::Gaps(codec::Error::NotStrictlyIncreasing { .. }) => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sample_sequence_roundtrips() {
        let src = [92u32, 923, 0, 31, 293, 92, 22, 38, 23, 18, 102, 231];
        let mut dst = vec![0u8; bound(12, 32)];
        assert_eq!(dst.len(), 60);
        let written = compress(&src, &mut dst).unwrap();
        // 923, 293, 231 need two bytes.
        assert_eq!(written, 15);

        let mut back = [0u32; 12];
        assert_eq!(uncompress(&dst[..written], &mut back), Ok(written));
        assert_eq!(back, src);
    }

    #[test]
    fn error_kinds() {
        assert_eq!(
            Error::UnsupportedWidth { bits: 8 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            Error::Truncated {
                decoded: 0,
                expected: 1,
                offset: 0
            }
            .kind(),
            ErrorKind::Truncation
        );
        assert_eq!(
            Error::Overflow {
                index: 0,
                offset: 0,
                bits: 32
            }
            .kind(),
            ErrorKind::Overflow
        );
        let gaps: Error = codec::Error::Overflow { index: 3, bits: 64 }.into();
        assert_eq!(gaps.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn errors_render() {
        let e = Error::DestinationTooSmall {
            needed: 15,
            capacity: 4,
        };
        assert_eq!(e.to_string(), "destination holds 4 bytes, 15 required");
    }

    #[test]
    fn public_types_are_send_sync() {
        fn check<T: Send + Sync>() {}
        check::<Error>();
        check::<EncodedBlock>();
        check::<Values<'static, u64>>();
    }

    proptest! {
        #[test]
        fn written_never_exceeds_bound(src in prop::collection::vec(any::<u64>(), 0..100)) {
            let mut dst = vec![0u8; bound(src.len(), 64)];
            let n = compress(&src, &mut dst).unwrap();
            prop_assert!(n <= dst.len());
            prop_assert_eq!(n, compress_to_vec(&src).len());
        }
    }
}
