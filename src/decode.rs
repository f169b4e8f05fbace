//! Block decoder.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use log::trace;
use vpacker_codec::varint::{self, CodeError};
use vpacker_codec::VarInt;

use crate::Error;

/// Lazily decodes `count` values from the front of an encoded block.
///
/// Yields `Err` at most once; the iterator is exhausted afterwards.
#[derive(Debug, Clone)]
pub struct Values<'a, T> {
    bytes: &'a [u8],
    offset: usize,
    index: usize,
    count: usize,
    _marker: PhantomData<T>,
}

/// Iterate the first `count` values of `src`.
pub fn values<T: VarInt>(src: &[u8], count: usize) -> Values<'_, T> {
    Values {
        bytes: src,
        offset: 0,
        index: 0,
        count,
        _marker: PhantomData,
    }
}

impl<T: VarInt> Values<'_, T> {
    /// Bytes consumed by the values yielded so far.
    pub fn consumed(&self) -> usize {
        self.offset
    }

    fn fail(&mut self, err: CodeError) -> Error {
        let e = match err {
            CodeError::Truncated => Error::Truncated {
                decoded: self.index,
                expected: self.count,
                offset: self.bytes.len(),
            },
            CodeError::Overflow => Error::Overflow {
                index: self.index,
                offset: self.offset,
                bits: T::BITS,
            },
        };
        self.index = self.count;
        e
    }
}

impl<T: VarInt> Iterator for Values<'_, T> {
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        match varint::decode::<T>(&self.bytes[self.offset..]) {
            Ok((v, len)) => {
                self.offset += len;
                self.index += 1;
                Some(Ok(v))
            }
            Err(err) => Some(Err(self.fail(err))),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.count - self.index))
    }
}

impl<T: VarInt> FusedIterator for Values<'_, T> {}

/// Decode `dst.len()` values from `src`, returning the number of bytes consumed.
///
/// Bytes after the last code are left alone. On error the contents of `dst`
/// are unspecified.
pub fn uncompress<T: VarInt>(src: &[u8], dst: &mut [T]) -> Result<usize, Error> {
    let mut it = values::<T>(src, dst.len());
    for (slot, v) in dst.iter_mut().zip(&mut it) {
        *slot = v?;
    }
    trace!(
        "uncompressed {} u{} values from {} bytes",
        dst.len(),
        T::BITS,
        it.consumed()
    );
    Ok(it.consumed())
}

/// Decode `count` values from `src` into a new vector.
pub fn uncompress_to_vec<T: VarInt>(src: &[u8], count: usize) -> Result<Vec<T>, Error> {
    values(src, count).collect()
}
