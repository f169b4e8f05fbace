//! An encoded block kept together with the metadata needed to decode it.

use vpacker_codec::VarInt;

use crate::decode::{uncompress_to_vec, values, Values};
use crate::encode::compress_to_vec;
use crate::{Error, Width};

/// Encoded bytes plus their element width and count.
///
/// The bytes are exactly what [`compress`](crate::compress) produces; width
/// and count live beside them, never inside.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedBlock {
    width: Width,
    count: usize,
    bytes: Vec<u8>,
}

impl EncodedBlock {
    /// Encode `values`.
    pub fn encode<T: VarInt>(values: &[T]) -> Self {
        Self {
            width: Width::of::<T>(),
            count: values.len(),
            bytes: compress_to_vec(values),
        }
    }

    /// Wrap bytes produced elsewhere. Nothing is validated until decoding.
    pub fn from_parts(width: Width, count: usize, bytes: Vec<u8>) -> Self {
        Self {
            width,
            count,
            bytes,
        }
    }

    /// Element width.
    pub fn width(&self) -> Width {
        self.width
    }

    /// Number of encoded elements.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Encoded size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if the block holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The raw headerless bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Give up the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Decode every element as `T`.
    ///
    /// `T` must match the stored width.
    pub fn decode<T: VarInt>(&self) -> Result<Vec<T>, Error> {
        self.check_width::<T>()?;
        uncompress_to_vec(&self.bytes, self.count)
    }

    /// Iterate the elements lazily.
    pub fn values<T: VarInt>(&self) -> Result<Values<'_, T>, Error> {
        self.check_width::<T>()?;
        Ok(values(&self.bytes, self.count))
    }

    fn check_width<T: VarInt>(&self) -> Result<(), Error> {
        let requested = Width::of::<T>();
        if requested != self.width {
            return Err(Error::WidthMismatch {
                stored: self.width.bits(),
                requested: requested.bits(),
            });
        }
        Ok(())
    }
}
