//! Block encoder.

use log::trace;
use vpacker_codec::{varint, VarInt};

use crate::width::max_encoded_len;
use crate::Error;

/// Compress `src` into `dst`, returning the number of bytes written.
///
/// `dst` must hold at least [`bound`](crate::bound) bytes for `src.len()`
/// elements; a shorter buffer is rejected before anything is written. On
/// error the contents of `dst` are unspecified.
pub fn compress<T: VarInt>(src: &[T], dst: &mut [u8]) -> Result<usize, Error> {
    let needed = max_encoded_len::<T>(src.len())?;
    let capacity = dst.len();
    if capacity < needed {
        return Err(Error::DestinationTooSmall { needed, capacity });
    }

    let mut written = 0;
    for &v in src {
        written += varint::write(v, &mut dst[written..])
            .ok_or(Error::DestinationTooSmall { needed, capacity })?;
    }
    trace!(
        "compressed {} u{} values into {written} bytes (bound {needed})",
        src.len(),
        T::BITS
    );
    Ok(written)
}

/// Compress `src` into a freshly allocated buffer sized to fit.
pub fn compress_to_vec<T: VarInt>(src: &[T]) -> Vec<u8> {
    // One byte per value is the common case for skewed input.
    let mut out = Vec::with_capacity(src.len());
    for &v in src {
        varint::encode(v, &mut out);
    }
    out
}
