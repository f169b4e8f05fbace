//! Sorted sequences: gap transform followed by the block codec.
//!
//! The bytes are a plain encoded block of the gaps, so any block decoder can
//! read them; only the prefix sum on the way out is specific to this module.

use vpacker_codec::gaps::{gaps_from_sorted, values_from_gaps_in_place};
use vpacker_codec::VarInt;

use crate::{compress, uncompress, Error};

/// Compress a strictly increasing sequence as gaps.
///
/// `dst` has the same size requirement as [`compress`].
pub fn compress_sorted<T: VarInt>(values: &[T], dst: &mut [u8]) -> Result<usize, Error> {
    let gaps = gaps_from_sorted(values)?;
    compress(&gaps, dst)
}

/// Decode `dst.len()` gaps from `src` and turn them back into values.
pub fn uncompress_sorted<T: VarInt>(src: &[u8], dst: &mut [T]) -> Result<usize, Error> {
    let consumed = uncompress(src, dst)?;
    values_from_gaps_in_place(dst)?;
    Ok(consumed)
}
