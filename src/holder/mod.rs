//! `Holder`: a single inline slot that is either empty or holds one `T`.
//!
//! The value lives in a `MaybeUninit<T>` stored inside the holder itself (no
//! heap allocation); an `occupied` flag records whether that slot currently
//! contains a live value. All raw slot access is delegated to
//! `raw::slot`, and every transition below keeps the flag and the
//! slot in lockstep:
//!
//! | transition            | slot effect                         | flag          |
//! |-----------------------|-------------------------------------|---------------|
//! | `new` / `default`     | none                                | `false`       |
//! | `some` / `in_place`   | construct                           | `true`        |
//! | `reset`               | destroy (if occupied)               | `false`       |
//! | `swap`                | exchange, or move across            | exchanged     |
//! | `take` / `into_option`| move out (if occupied)              | `false`       |
//! | `drop`                | destroy (if occupied)               | n/a           |
//!
//! Replacing a value (`emplace`, `set`, `assign`, `clone_from`) always builds
//! the new state first and swaps it in, so a panicking constructor or `Clone`
//! leaves the receiver exactly as it was.

mod access;
mod cmp;
mod serde_impl;
#[cfg(feature = "proptest")]
pub mod strategy;

use core::mem::MaybeUninit;

use crate::raw::slot;

/// An optional value stored inline, with explicit slot lifecycle management.
///
/// # Example
///
/// ```rust
/// use holdslot::Holder;
///
/// let mut h = Holder::<i32>::new();
/// assert!(!h.has_value());
///
/// h.emplace(5);
/// h.emplace(-3);
/// assert_eq!(*h, -3);
///
/// h.reset();
/// assert_eq!(h.value_or(10), 10);
/// ```
pub struct Holder<T> {
    value: MaybeUninit<T>,
    occupied: bool,
}

impl<T> Holder<T> {
    /// Creates an empty holder. No storage is written.
    #[inline]
    pub const fn new() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            occupied: false,
        }
    }

    /// Creates a holder containing `value`.
    #[inline]
    pub fn some(value: T) -> Self {
        let mut holder = Self::new();
        holder.install(value);
        holder
    }

    /// Creates a holder whose value is produced by `init`.
    ///
    /// If `init` panics no holder is created.
    ///
    /// ```rust
    /// use holdslot::Holder;
    ///
    /// let a = Holder::in_place(|| "a".repeat(5));
    /// assert_eq!(a.len(), 5);
    /// ```
    #[inline]
    pub fn in_place<F>(init: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let mut holder = Self::new();
        holder.install(init());
        holder
    }

    /// Drops the held value, if any, leaving the holder empty.
    ///
    /// Calling this on an empty holder does nothing.
    #[inline]
    pub fn reset(&mut self) {
        if self.occupied {
            // Flag drops before the destructor runs, even if `T::drop` panics.
            self.occupied = false;
            // SAFETY: the slot was occupied until the line above.
            unsafe { slot::destroy_in_place(&mut self.value) };
        }
    }

    /// Exchanges the states of `self` and `other`.
    ///
    /// Both occupied: the values are swapped in place. One occupied: its value
    /// is moved into the other slot and both flags flip. Neither: no-op.
    pub fn swap(&mut self, other: &mut Self) {
        match (self.occupied, other.occupied) {
            (true, true) => {
                // SAFETY: both slots are occupied.
                unsafe { slot::swap_occupied(&mut self.value, &mut other.value) };
            }
            (false, false) => {}
            (true, false) => Self::transfer(self, other),
            (false, true) => Self::transfer(other, self),
        }
    }

    /// Replaces the held value with `value`, dropping the previous one.
    ///
    /// Returns a reference to the newly installed value.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        drop(self.replace(value));
        // SAFETY: `replace` always leaves `self` occupied.
        unsafe { slot::assume_init_mut(&mut self.value) }
    }

    /// Replaces the held value with the result of `init`.
    ///
    /// `init` runs before `self` is touched, so if it panics the previous
    /// value (or emptiness) is preserved.
    #[inline]
    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let value = init();
        self.emplace(value)
    }

    /// Fallible form of [`emplace_with`](Self::emplace_with).
    ///
    /// # Errors
    /// Returns the constructor's error unchanged; `self` is left exactly as it
    /// was.
    ///
    /// ```rust
    /// use holdslot::Holder;
    ///
    /// let mut h = Holder::some(1u8);
    /// let res = h.try_emplace_with(|| u8::try_from(300u32));
    /// assert!(res.is_err());
    /// assert_eq!(*h, 1);
    /// ```
    pub fn try_emplace_with<F, E>(&mut self, init: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let value = init()?;
        Ok(self.emplace(value))
    }

    /// Installs `value`, returning the previous state as a holder.
    #[must_use = "dropping the returned holder drops the previous value"]
    pub fn replace(&mut self, value: T) -> Self {
        let mut previous = Self::some(value);
        self.swap(&mut previous);
        previous
    }

    /// Sets the held value, dropping the previous one.
    #[inline]
    pub fn set(&mut self, value: T) {
        drop(self.replace(value));
    }

    /// Move-assigns `other` into `self`; the previous state of `self` is dropped.
    #[inline]
    pub fn assign(&mut self, mut other: Self) {
        self.swap(&mut other);
    }

    /// Moves the state out, leaving `self` empty.
    #[must_use = "use `reset` to discard the value"]
    #[inline]
    pub fn take(&mut self) -> Self {
        let mut out = Self::new();
        self.swap(&mut out);
        out
    }

    /// Moves the value out as an `Option`, leaving `self` empty.
    #[inline]
    pub fn take_value(&mut self) -> Option<T> {
        self.vacate()
    }

    /// Consumes the holder, returning its value as an `Option`.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.vacate()
    }

    /// Writes `value` into the slot. The holder must be empty.
    #[inline]
    fn install(&mut self, value: T) -> &mut T {
        debug_assert!(!self.occupied, "install into an occupied holder");
        // SAFETY: callers only install into empty holders, so nothing is leaked.
        let value = unsafe { slot::construct_in_place(&mut self.value, value) };
        self.occupied = true;
        value
    }

    /// Moves the value out of the slot, if any, and marks it empty.
    #[inline]
    fn vacate(&mut self) -> Option<T> {
        if !self.occupied {
            return None;
        }
        self.occupied = false;
        // SAFETY: the slot was occupied; the flag is cleared so the stale bytes
        // are never dropped.
        Some(unsafe { slot::read_out(&self.value) })
    }

    /// Moves `from`'s value into the empty `to`.
    #[inline]
    fn transfer(from: &mut Self, to: &mut Self) {
        trace_slot!("transfer", core::any::type_name::<T>());
        if let Some(value) = from.vacate() {
            to.install(value);
        }
    }
}

impl<T> Default for Holder<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Holder<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T: Clone> Clone for Holder<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::some(value.clone()),
            None => Self::new(),
        }
    }

    /// Clones `source` into a temporary first, then swaps it in; a panicking
    /// `T::clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        self.swap(&mut fresh);
    }
}

impl<T> From<T> for Holder<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for Holder<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Holder<T>> for Option<T> {
    #[inline]
    fn from(holder: Holder<T>) -> Self {
        holder.into_option()
    }
}
