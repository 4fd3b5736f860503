//! The fill / sort / accumulate workload used to compare optional containers.
//!
//! The sequence is fixed:
//! 1. build `len` empty slots,
//! 2. assign `len - i` into slot `i`,
//! 3. sort the slots by the optional ordering (empty below any value),
//! 4. for `i in 1..len`, `slot[i] += slot[i - 1]`,
//! 5. check the last slot holds `len * (len + 1) / 2`.
//!
//! It is generic over [`OptionalSlot`] so the same sequence runs on
//! [`Holder`] and on `Option`.

use num_traits::{CheckedAdd, NumCast, PrimInt, Zero};
use serde::{Deserialize, Serialize};

use crate::error::WorkloadError;
use crate::Holder;

/// Default number of slots.
pub const DEFAULT_LEN: usize = 100_000;

/// The minimal optional-slot surface the workload drives.
pub trait OptionalSlot: Default + Ord {
    /// The held element type.
    type Item;

    /// Stores `value`, dropping any previous one.
    fn put(&mut self, value: Self::Item);

    /// Borrows the held value, if any.
    fn get(&self) -> Option<&Self::Item>;

    /// Mutably borrows the held value, if any.
    fn get_mut(&mut self) -> Option<&mut Self::Item>;
}

impl<T: Ord> OptionalSlot for Holder<T> {
    type Item = T;

    #[inline]
    fn put(&mut self, value: T) {
        self.set(value);
    }

    #[inline]
    fn get(&self) -> Option<&T> {
        self.value().ok()
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut T> {
        self.value_mut().ok()
    }
}

impl<T: Ord> OptionalSlot for Option<T> {
    type Item = T;

    #[inline]
    fn put(&mut self, value: T) {
        *self = Some(value);
    }

    #[inline]
    fn get(&self) -> Option<&T> {
        self.as_ref()
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut T> {
        self.as_mut()
    }
}

/// Workload parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of slots.
    pub len: usize,
}

impl WorkloadConfig {
    /// Creates a config for `len` slots.
    pub const fn with_len(len: usize) -> Self {
        Self { len }
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self::with_len(DEFAULT_LEN)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadReport<T> {
    /// Number of slots processed.
    pub len: usize,
    /// Value of the last slot after accumulation.
    pub total: T,
}

/// Builds the filled slot sequence (steps 1 and 2).
///
/// # Errors
/// [`WorkloadError::Overflow`] if `len` does not fit in `S::Item`.
pub fn fill<S>(len: usize) -> Result<Vec<S>, WorkloadError>
where
    S: OptionalSlot,
    S::Item: PrimInt,
{
    debug_phase!("fill", len);
    let mut slots: Vec<S> = (0..len).map(|_| S::default()).collect();
    for (i, slot) in slots.iter_mut().enumerate() {
        let value = <S::Item as NumCast>::from(len - i).ok_or(WorkloadError::Overflow { len })?;
        slot.put(value);
    }
    Ok(slots)
}

/// Prefix-sums the slots in place (step 4).
///
/// # Errors
/// - [`WorkloadError::EmptySlot`] if any slot read along the way is empty.
/// - [`WorkloadError::SumOverflow`] if a running sum does not fit in
///   `S::Item`; slots before `index` are already summed, the rest untouched.
pub fn accumulate<S>(slots: &mut [S]) -> Result<(), WorkloadError>
where
    S: OptionalSlot,
    S::Item: PrimInt,
{
    debug_phase!("accumulate", slots.len());
    for i in 1..slots.len() {
        let (done, rest) = slots.split_at_mut(i);
        let prev = *done[i - 1]
            .get()
            .ok_or(WorkloadError::EmptySlot { index: i - 1 })?;
        let current = rest[0]
            .get_mut()
            .ok_or(WorkloadError::EmptySlot { index: i })?;
        *current = current
            .checked_add(&prev)
            .ok_or(WorkloadError::SumOverflow { index: i })?;
    }
    Ok(())
}

/// Runs the whole sequence over slots of type `S`.
///
/// # Errors
/// - [`WorkloadError::Overflow`] if `len * (len + 1) / 2` does not fit.
/// - [`WorkloadError::EmptySlot`] if a slot is unexpectedly empty.
/// - [`WorkloadError::SumOverflow`] if a running sum overflows.
/// - [`WorkloadError::Mismatch`] if the final total is wrong.
///
/// ```rust
/// use holdslot::workload::{run, WorkloadConfig};
/// use holdslot::Holder;
///
/// let report = run::<Holder<u64>>(&WorkloadConfig::with_len(100)).unwrap();
/// assert_eq!(report.total, 5050);
/// ```
pub fn run<S>(config: &WorkloadConfig) -> Result<WorkloadReport<S::Item>, WorkloadError>
where
    S: OptionalSlot,
    S::Item: PrimInt + core::fmt::Display,
{
    let len = config.len;
    let expected = expected_total::<S::Item>(len)?;

    let mut slots = fill::<S>(len)?;

    debug_phase!("sort", len);
    slots.sort_unstable();

    accumulate(&mut slots)?;

    let total = match slots.last() {
        Some(slot) => *slot
            .get()
            .ok_or(WorkloadError::EmptySlot { index: len - 1 })?,
        None => <S::Item as Zero>::zero(),
    };
    if total != expected {
        return Err(WorkloadError::Mismatch {
            expected: expected.to_string(),
            actual: total.to_string(),
        });
    }
    Ok(WorkloadReport { len, total })
}

/// `len * (len + 1) / 2` in `T`, or `Overflow`.
fn expected_total<T: PrimInt>(len: usize) -> Result<T, WorkloadError> {
    let overflow = WorkloadError::Overflow { len };
    let n = <T as NumCast>::from(len).ok_or(overflow.clone())?;
    let next = n.checked_add(&T::one()).ok_or(overflow.clone())?;
    let two = T::one() + T::one();
    // One of n, n + 1 is even; halve it first so the product fits when possible.
    let product = if n % two == T::zero() {
        (n / two).checked_mul(&next)
    } else {
        n.checked_mul(&(next / two))
    };
    product.ok_or(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_total() {
        assert_eq!(expected_total::<u64>(0), Ok(0));
        assert_eq!(expected_total::<u64>(4), Ok(10));
        assert_eq!(expected_total::<u8>(22), Ok(253));
        assert_eq!(expected_total::<u8>(23), Err(WorkloadError::Overflow { len: 23 }));
        assert_eq!(expected_total::<u8>(300), Err(WorkloadError::Overflow { len: 300 }));
    }

    #[test]
    fn test_fill_assigns_descending_values() {
        let slots = fill::<Holder<u32>>(4).unwrap();
        let values: Vec<u32> = slots.iter().filter_map(|s| s.get().copied()).collect();
        assert_eq!(values, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_accumulate_reports_empty_slot() {
        let mut slots = vec![Holder::some(1u32), Holder::new(), Holder::some(3)];
        assert_eq!(accumulate(&mut slots), Err(WorkloadError::EmptySlot { index: 1 }));
    }

    #[test]
    fn test_accumulate_reports_overflowing_sum() {
        let mut slots = vec![Holder::some(200u8), Holder::some(100u8)];
        assert_eq!(accumulate(&mut slots), Err(WorkloadError::SumOverflow { index: 1 }));
        assert_eq!(slots[1].value(), Ok(&100));

        let mut signed = vec![Holder::some(-100i8), Holder::some(-28), Holder::some(-1)];
        assert_eq!(accumulate(&mut signed), Err(WorkloadError::SumOverflow { index: 2 }));
        assert_eq!(signed[1].value(), Ok(&-128));
        assert_eq!(signed[2].value(), Ok(&-1));
    }

    #[test]
    fn test_run_small_lengths() {
        for len in 0..8 {
            let report = run::<Holder<u64>>(&WorkloadConfig::with_len(len)).unwrap();
            assert_eq!(report.len, len);
            assert_eq!(report.total, (len * (len + 1) / 2) as u64);
        }
    }

    #[test]
    fn test_run_overflow_is_reported() {
        let err = run::<Holder<u8>>(&WorkloadConfig::with_len(100)).unwrap_err();
        assert_eq!(err, WorkloadError::Overflow { len: 100 });
    }

    #[test]
    fn test_config_default() {
        assert_eq!(WorkloadConfig::default().len, DEFAULT_LEN);
    }
}
