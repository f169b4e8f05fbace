//! Gap (delta) transform for strictly increasing sequences.
//!
//! The first value is kept as-is; every following value is replaced by its
//! distance to the predecessor. Sorted id lists become small skewed gaps,
//! which is what the varint code is cheap for.

use crate::varint::VarInt;
use crate::Error;

/// Turn a strictly increasing sequence into gaps.
///
/// This is the **checked** variant: input must be strictly increasing.
pub fn gaps_from_sorted<T: VarInt>(values: &[T]) -> Result<Vec<T>, Error> {
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<T> = None;
    for (i, &next) in values.iter().enumerate() {
        match prev {
            None => out.push(next),
            Some(p) if next <= p => {
                return Err(Error::NotStrictlyIncreasing {
                    index: i,
                    prev: p.to_u64(),
                    next: next.to_u64(),
                });
            }
            Some(p) => out.push(next.saturating_sub(p)),
        }
        prev = Some(next);
    }
    Ok(out)
}

/// Turn a sequence into gaps without validating sort order.
///
/// If inputs are not strictly increasing, the output is **not** a meaningful encoding.
pub fn gaps_from_sorted_unchecked<T: VarInt>(values: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(values.len());
    let mut prev = T::default();
    for (i, &v) in values.iter().enumerate() {
        out.push(if i == 0 { v } else { v.saturating_sub(prev) });
        prev = v;
    }
    out
}

/// Rebuild absolute values from gaps, in place.
///
/// This is the **checked** variant: returns an error on overflow.
pub fn values_from_gaps_in_place<T: VarInt>(gaps: &mut [T]) -> Result<(), Error> {
    let mut cur = T::default();
    for (i, g) in gaps.iter_mut().enumerate() {
        if i > 0 {
            cur = cur.checked_add(*g).ok_or(Error::Overflow {
                index: i,
                bits: T::BITS,
            })?;
        } else {
            cur = *g;
        }
        *g = cur;
    }
    Ok(())
}

/// Rebuild absolute values from gaps.
pub fn values_from_gaps<T: VarInt>(gaps: &[T]) -> Result<Vec<T>, Error> {
    let mut out = gaps.to_vec();
    values_from_gaps_in_place(&mut out)?;
    Ok(out)
}

/// Rebuild absolute values without overflow checking.
///
/// If overflow occurs, this saturates at `T::MAX`, which may hide corruption.
pub fn values_from_gaps_unchecked<T: VarInt>(gaps: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(gaps.len());
    let mut cur = T::default();
    for (i, &g) in gaps.iter().enumerate() {
        cur = if i == 0 { g } else { cur.saturating_add(g) };
        out.push(cur);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn gaps_rejects_unsorted() {
        let err = gaps_from_sorted(&[10u32, 10]).unwrap_err();
        assert_eq!(
            err,
            Error::NotStrictlyIncreasing {
                index: 1,
                prev: 10,
                next: 10
            }
        );
    }

    #[test]
    fn gaps_of_empty_is_empty() {
        assert!(gaps_from_sorted::<u64>(&[]).unwrap().is_empty());
        assert!(values_from_gaps::<u64>(&[]).unwrap().is_empty());
    }

    #[test]
    fn values_from_gaps_rejects_overflow() {
        let err = values_from_gaps(&[u32::MAX, 1]).unwrap_err();
        assert_eq!(err, Error::Overflow { index: 1, bits: 32 });
        assert_eq!(values_from_gaps_unchecked(&[u32::MAX, 1]), vec![u32::MAX, u32::MAX]);
    }

    #[test]
    fn unchecked_gaps_saturate_on_descent() {
        assert_eq!(gaps_from_sorted_unchecked(&[5u64, 3, 9]), vec![5, 0, 6]);
    }

    proptest! {
        #[test]
        fn gaps_roundtrip_strictly_increasing(mut ids in prop::collection::vec(any::<u64>(), 0..200)) {
            ids.sort_unstable();
            ids.dedup();
            let gaps = gaps_from_sorted(&ids).unwrap();
            prop_assert_eq!(&gaps_from_sorted_unchecked(&ids), &gaps);
            let back = values_from_gaps(&gaps).unwrap();
            prop_assert_eq!(back, ids);
        }
    }
}
