//! Varint encoding for `u32` and `u64`.
//!
//! Format: little-endian base-128 (LEB128-like): 7 bits per byte, MSB is continuation.
//! A code for a `BITS`-wide integer never exceeds `ceil(BITS / 7)` bytes.

/// Continuation flag (high bit of every non-final byte).
pub const CONTINUATION: u8 = 0x80;

/// Payload mask (low 7 bits).
pub const PAYLOAD: u8 = 0x7F;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Fixed-width unsigned integer that can be varint coded.
///
/// Implemented for `u32` and `u64` only.
pub trait VarInt: sealed::Sealed + Copy + Default + Eq + Ord + std::fmt::Debug + Send + Sync {
    /// Width in bits.
    const BITS: u32;
    /// Longest code a value of this width can produce.
    const MAX_ENCODED_LEN: usize = Self::BITS.div_ceil(7) as usize;
    /// Largest representable value.
    const MAX: Self;

    /// Widen to `u64`.
    fn to_u64(self) -> u64;

    /// Narrow from `u64`; `None` if `v` does not fit.
    fn from_u64(v: u64) -> Option<Self>;

    /// `self + rhs`, `None` on overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self + rhs`, clamped at `MAX`.
    fn saturating_add(self, rhs: Self) -> Self;

    /// `self - rhs`, clamped at zero.
    fn saturating_sub(self, rhs: Self) -> Self;
}

macro_rules! impl_varint {
    ($t:ty) => {
        impl VarInt for $t {
            const BITS: u32 = <$t>::BITS;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn to_u64(self) -> u64 {
                self as u64
            }

            #[inline]
            fn from_u64(v: u64) -> Option<Self> {
                <$t>::try_from(v).ok()
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn saturating_add(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline]
            fn saturating_sub(self, rhs: Self) -> Self {
                <$t>::saturating_sub(self, rhs)
            }
        }
    };
}

impl_varint!(u32);
impl_varint!(u64);

/// Why a single code could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// Input ended before a byte with the continuation flag cleared.
    Truncated,
    /// The code carries more payload than the target width holds.
    Overflow,
}

/// Number of bytes `x` occupies once encoded.
pub fn encoded_len<T: VarInt>(x: T) -> usize {
    let significant = 64 - x.to_u64().leading_zeros();
    (significant.max(1)).div_ceil(7) as usize
}

/// Encode `x` onto the end of `out`.
pub fn encode<T: VarInt>(x: T, out: &mut Vec<u8>) {
    let mut x = x.to_u64();
    while x >= CONTINUATION as u64 {
        out.push(((x as u8) & PAYLOAD) | CONTINUATION);
        x >>= 7;
    }
    out.push(x as u8);
}

/// Encode `x` at the start of `out`, returning the number of bytes written.
///
/// Returns `None` (with `out` possibly partly written) when `out` is too short.
pub fn write<T: VarInt>(x: T, out: &mut [u8]) -> Option<usize> {
    let mut x = x.to_u64();
    let mut i = 0;
    while x >= CONTINUATION as u64 {
        *out.get_mut(i)? = ((x as u8) & PAYLOAD) | CONTINUATION;
        x >>= 7;
        i += 1;
    }
    *out.get_mut(i)? = x as u8;
    Some(i + 1)
}

/// Decode one code from the front of `bytes`, returning (value, bytes_consumed).
pub fn decode<T: VarInt>(bytes: &[u8]) -> Result<(T, usize), CodeError> {
    let mut x: u64 = 0;
    let mut shift = 0u32;
    for (i, &b) in bytes.iter().enumerate() {
        if i == T::MAX_ENCODED_LEN {
            return Err(CodeError::Overflow);
        }
        let low = (b & PAYLOAD) as u64;
        let room = T::BITS - shift;
        if room < 7 && (low >> room) != 0 {
            return Err(CodeError::Overflow);
        }
        x |= low << shift;
        if (b & CONTINUATION) == 0 {
            // Payload bits were range-checked above.
            return T::from_u64(x).map(|v| (v, i + 1)).ok_or(CodeError::Overflow);
        }
        shift += 7;
    }
    Err(CodeError::Truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn max_encoded_len_per_width() {
        assert_eq!(u32::MAX_ENCODED_LEN, 5);
        assert_eq!(u64::MAX_ENCODED_LEN, 10);
    }

    #[test]
    fn known_encodings() {
        let mut out = Vec::new();
        encode(0u32, &mut out);
        assert_eq!(out, [0x00]);

        out.clear();
        encode(127u32, &mut out);
        assert_eq!(out, [0x7F]);

        out.clear();
        encode(128u32, &mut out);
        assert_eq!(out, [0x80, 0x01]);

        out.clear();
        encode(300u64, &mut out);
        assert_eq!(out, [0xAC, 0x02]);

        out.clear();
        encode(u32::MAX, &mut out);
        assert_eq!(out, [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);

        out.clear();
        encode(u64::MAX, &mut out);
        assert_eq!(out.len(), 10);
        assert_eq!(out[9], 0x01);
    }

    #[test]
    fn write_reports_short_buffer() {
        let mut buf = [0u8; 2];
        assert_eq!(write(300u32, &mut buf), Some(2));
        assert_eq!(buf, [0xAC, 0x02]);
        assert_eq!(write(1u32 << 14, &mut buf), None);
        assert_eq!(write(0u32, &mut []), None);
    }

    #[test]
    fn decode_rejects_truncated() {
        assert_eq!(decode::<u32>(&[]), Err(CodeError::Truncated));
        assert_eq!(decode::<u32>(&[0x80, 0x80]), Err(CodeError::Truncated));
    }

    #[test]
    fn decode_rejects_too_many_bytes() {
        assert_eq!(
            decode::<u32>(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x00]),
            Err(CodeError::Overflow)
        );
        let mut eleven = vec![0x80u8; 10];
        eleven.push(0x00);
        assert_eq!(decode::<u64>(&eleven), Err(CodeError::Overflow));
    }

    #[test]
    fn decode_rejects_bits_beyond_width() {
        // 5th byte may only carry 4 bits for u32.
        assert_eq!(
            decode::<u32>(&[0xFF, 0xFF, 0xFF, 0xFF, 0x1F]),
            Err(CodeError::Overflow)
        );
        // 10th byte may only carry 1 bit for u64.
        let mut code = vec![0xFFu8; 9];
        code.push(0x02);
        assert_eq!(decode::<u64>(&code), Err(CodeError::Overflow));
    }

    #[test]
    fn decode_accepts_redundant_groups() {
        assert_eq!(decode::<u32>(&[0x81, 0x80, 0x00]), Ok((1, 3)));
    }

    #[test]
    fn decode_stops_at_first_code() {
        assert_eq!(decode::<u32>(&[0xAC, 0x02, 0x05]), Ok((300, 2)));
    }

    proptest! {
        #[test]
        fn encode_decode_u32(x in any::<u32>()) {
            let mut out = Vec::new();
            encode(x, &mut out);
            prop_assert_eq!(out.len(), encoded_len(x));
            prop_assert!(out.len() <= u32::MAX_ENCODED_LEN);
            prop_assert_eq!(decode::<u32>(&out), Ok((x, out.len())));
        }

        #[test]
        fn encode_decode_u64(x in any::<u64>()) {
            let mut out = Vec::new();
            encode(x, &mut out);
            prop_assert_eq!(out.len(), encoded_len(x));
            prop_assert!(out.len() <= u64::MAX_ENCODED_LEN);
            prop_assert_eq!(decode::<u64>(&out), Ok((x, out.len())));
        }

        #[test]
        fn write_matches_encode(x in any::<u64>()) {
            let mut v = Vec::new();
            encode(x, &mut v);
            let mut buf = [0u8; 10];
            let n = write(x, &mut buf).unwrap();
            prop_assert_eq!(&buf[..n], &v[..]);
        }
    }
}
