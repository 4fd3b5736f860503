//! Unsafe, centralized operations on a holder's `MaybeUninit<T>` slot.
//!
//! A `Holder` stores its value as `MaybeUninit<T>` next to an occupancy flag.
//! These helpers are the only code in the crate that reads, writes, drops or
//! reinterprets that slot:
//! - writes (`construct_in_place`)
//! - drops (`destroy_in_place`)
//! - moves out (`read_out`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//! - in-place exchange (`swap_occupied`)
//!
//! ## Core invariant
//! For every caller in this crate the slot is initialized *exactly when* the
//! owning holder's `occupied` flag is `true`. Each helper below either
//! requires the slot to be occupied or requires it to be empty; the caller
//! flips the flag immediately after the helper returns.

use core::{mem::MaybeUninit, ptr};

/// Writes `value` into an empty slot.
///
/// # Safety
/// - `slot` must not currently hold a live `T`; otherwise that value is leaked
///   (its destructor never runs).
/// - The caller must mark the slot occupied right after this returns.
#[inline(always)]
pub(crate) unsafe fn construct_in_place<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    trace_slot!("construct", core::any::type_name::<T>());
    slot.write(value)
}

/// Runs `T`'s destructor on the slot's content.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same logical value; the caller
///   must mark the slot empty before anything else can observe it.
#[inline(always)]
pub(crate) unsafe fn destroy_in_place<T>(slot: &mut MaybeUninit<T>) {
    trace_slot!("destroy", core::any::type_name::<T>());
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}

/// Bitwise-moves the value out of an occupied slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The caller must mark the slot empty afterwards; the bytes left behind are
///   a stale copy and must never be dropped or read again.
#[inline(always)]
pub(crate) unsafe fn read_out<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization + `ptr::read` contract.
    unsafe { slot.assume_init_read() }
}

/// Interprets an occupied slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an occupied slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized and exclusive.
    unsafe { slot.assume_init_mut() }
}

/// Swaps the values of two occupied slots without constructing or dropping.
///
/// # Safety
/// - Both slots must be initialized.
#[inline(always)]
pub(crate) unsafe fn swap_occupied<T>(a: &mut MaybeUninit<T>, b: &mut MaybeUninit<T>) {
    // SAFETY: two `&mut` never overlap; both hold live values that are simply
    // exchanged, so no value is duplicated or lost.
    unsafe { core::mem::swap(a.assume_init_mut(), b.assume_init_mut()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counted(Rc<Cell<usize>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_construct_then_destroy_drops_once() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = MaybeUninit::uninit();
        unsafe {
            construct_in_place(&mut slot, Counted(drops.clone()));
            assert_eq!(drops.get(), 0);
            destroy_in_place(&mut slot);
        }
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_read_out_transfers_ownership() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = MaybeUninit::uninit();
        let moved = unsafe {
            construct_in_place(&mut slot, Counted(drops.clone()));
            read_out(&slot)
        };
        // The slot is now logically empty; only `moved` owns the value.
        assert_eq!(drops.get(), 0);
        drop(moved);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_swap_occupied_exchanges_values() {
        let mut a = MaybeUninit::new(String::from("left"));
        let mut b = MaybeUninit::new(String::from("right"));
        unsafe {
            swap_occupied(&mut a, &mut b);
            assert_eq!(assume_init_ref(&a), "right");
            assert_eq!(assume_init_ref(&b), "left");
            assume_init_mut(&mut a).push('!');
            assert_eq!(assume_init_ref(&a), "right!");
            destroy_in_place(&mut a);
            destroy_in_place(&mut b);
        }
    }
}
