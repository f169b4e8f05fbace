//! Element width selection and the worst-case size bound.

use std::fmt;
use std::str::FromStr;

use vpacker_codec::VarInt;

use crate::Error;

/// Width of the integers in a block, when it is only known at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Width {
    /// 32-bit elements (`u32`), at most 5 bytes each.
    #[default]
    W32,
    /// 64-bit elements (`u64`), at most 10 bytes each.
    W64,
}

impl Width {
    /// Width of the static element type `T`.
    pub fn of<T: VarInt>() -> Self {
        if T::BITS == 32 {
            Width::W32
        } else {
            Width::W64
        }
    }

    /// Look up a width by its bit count.
    pub fn from_bits(bits: u32) -> Result<Self, Error> {
        match bits {
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            _ => Err(Error::UnsupportedWidth { bits }),
        }
    }

    /// Bit count.
    pub const fn bits(self) -> u32 {
        match self {
            Width::W32 => u32::BITS,
            Width::W64 => u64::BITS,
        }
    }

    /// Longest code one element can take.
    pub const fn max_code_len(self) -> usize {
        match self {
            Width::W32 => <u32 as VarInt>::MAX_ENCODED_LEN,
            Width::W64 => <u64 as VarInt>::MAX_ENCODED_LEN,
        }
    }

    /// Most bytes `n` elements can encode to.
    pub fn max_encoded_len(self, n: usize) -> Result<usize, Error> {
        n.checked_mul(self.max_code_len())
            .ok_or(Error::BoundOverflow {
                count: n,
                bits: self.bits(),
            })
    }

    /// Like [`Width::max_encoded_len`], with `0` standing for overflow.
    pub fn bound(self, n: usize) -> usize {
        self.max_encoded_len(n).unwrap_or(0)
    }
}

/// Most bytes `n` elements of type `T` can encode to.
pub fn max_encoded_len<T: VarInt>(n: usize) -> Result<usize, Error> {
    Width::of::<T>().max_encoded_len(n)
}

/// Destination size needed to compress `n` elements of `bits` width.
///
/// Returns `0` when `bits` is neither 32 nor 64, or when the result does not
/// fit in `usize`.
pub fn bound(n: usize, bits: u32) -> usize {
    Width::from_bits(bits).map(|w| w.bound(n)).unwrap_or(0)
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::W32 => write!(f, "u32"),
            Width::W64 => write!(f, "u64"),
        }
    }
}

impl FromStr for Width {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "32" | "u32" => Ok(Width::W32),
            "64" | "u64" => Ok(Width::W64),
            _ => Err(Error::UnknownWidth(s.to_string())),
        }
    }
}
