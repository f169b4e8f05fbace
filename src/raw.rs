//! Sentinel-valued entry points for foreign-function callers.
//!
//! Every function here returns a byte count, with `0` standing for failure of
//! any kind. Counts are `i64` so a binding can pass a foreign `long` through
//! unchanged; negative counts fail. The cause of a failure is logged at
//! `debug` level and then dropped.
//!
//! Compressing zero elements also returns `0`; callers that allow empty
//! input must check `n` themselves.

use log::debug;
use vpacker_codec::VarInt;

use crate::{Error, Width};

/// Compress the first `n` values of `src` into `dst`.
pub fn compress32(src: &[u32], dst: &mut [u8], n: i64) -> usize {
    collapse("compress32", compress_n(src, dst, n))
}

/// Compress the first `n` values of `src` into `dst`.
pub fn compress64(src: &[u64], dst: &mut [u8], n: i64) -> usize {
    collapse("compress64", compress_n(src, dst, n))
}

/// Decode `n` values from `src` into the front of `dst`; returns bytes read.
pub fn uncompress32(src: &[u8], dst: &mut [u32], n: i64) -> usize {
    collapse("uncompress32", uncompress_n(src, dst, n))
}

/// Decode `n` values from `src` into the front of `dst`; returns bytes read.
pub fn uncompress64(src: &[u8], dst: &mut [u64], n: i64) -> usize {
    collapse("uncompress64", uncompress_n(src, dst, n))
}

/// Destination size for `n` 32-bit values.
pub fn compress32_bound(n: i64) -> usize {
    bound(n, 32)
}

/// Destination size for `n` 64-bit values.
pub fn compress64_bound(n: i64) -> usize {
    bound(n, 64)
}

/// Destination size for `n` values of `bits` width.
pub fn bound(n: i64, bits: u32) -> usize {
    let size = Width::from_bits(bits).and_then(|w| w.max_encoded_len(to_count(n, usize::MAX)?));
    collapse("bound", size)
}

fn compress_n<T: VarInt>(src: &[T], dst: &mut [u8], n: i64) -> Result<usize, Error> {
    let n = to_count(n, src.len())?;
    crate::compress(&src[..n], dst)
}

fn uncompress_n<T: VarInt>(src: &[u8], dst: &mut [T], n: i64) -> Result<usize, Error> {
    let n = to_count(n, dst.len())?;
    crate::uncompress(src, &mut dst[..n])
}

fn to_count(n: i64, available: usize) -> Result<usize, Error> {
    usize::try_from(n)
        .ok()
        .filter(|&n| n <= available)
        .ok_or(Error::InvalidCount {
            count: n,
            available,
        })
}

fn collapse(op: &str, res: Result<usize, Error>) -> usize {
    res.unwrap_or_else(|e| {
        debug!("{op} failed ({:?}): {e}", e.kind());
        0
    })
}
