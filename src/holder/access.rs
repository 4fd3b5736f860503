//! Reading the held value.
//!
//! [`Holder::value`] and [`Holder::value_mut`] are the only occupancy gates;
//! dereference, `value_or`, `as_option` and the comparison impls all go
//! through them.

use core::ops::{Deref, DerefMut};

use super::Holder;
use crate::error::BadAccess;
use crate::raw::slot;

impl<T> Holder<T> {
    /// Returns `true` if the holder contains a value.
    #[inline(always)]
    pub fn has_value(&self) -> bool {
        self.occupied
    }

    /// Returns a shared reference to the held value.
    ///
    /// # Errors
    /// Returns [`BadAccess`] if the holder is empty.
    #[inline]
    pub fn value(&self) -> Result<&T, BadAccess> {
        if !self.occupied {
            return Err(BadAccess);
        }
        // SAFETY: `occupied` is true.
        Ok(unsafe { slot::assume_init_ref(&self.value) })
    }

    /// Returns an exclusive reference to the held value.
    ///
    /// # Errors
    /// Returns [`BadAccess`] if the holder is empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadAccess> {
        if !self.occupied {
            return Err(BadAccess);
        }
        // SAFETY: `occupied` is true and `&mut self` is exclusive.
        Ok(unsafe { slot::assume_init_mut(&mut self.value) })
    }

    /// Returns the held value, or `default` if empty.
    #[inline]
    pub fn value_or(&self, default: T) -> T
    where
        T: Clone,
    {
        match self.value() {
            Ok(value) => value.clone(),
            Err(BadAccess) => default,
        }
    }

    /// Returns the held value, or computes one with `f` if empty.
    #[inline]
    pub fn value_or_else<F>(&self, f: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        match self.value() {
            Ok(value) => value.clone(),
            Err(BadAccess) => f(),
        }
    }

    /// Views the held value as an `Option<&T>`.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.value().ok()
    }

    /// Views the held value as an `Option<&mut T>`.
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        self.value_mut().ok()
    }
}

/// Dereferencing an empty holder panics with a [`BadAccess`] payload.
impl<T> Deref for Holder<T> {
    type Target = T;

    #[track_caller]
    #[inline]
    fn deref(&self) -> &T {
        match self.value() {
            Ok(value) => value,
            Err(err) => std::panic::panic_any(err),
        }
    }
}

impl<T> DerefMut for Holder<T> {
    #[track_caller]
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        match self.value_mut() {
            Ok(value) => value,
            Err(err) => std::panic::panic_any(err),
        }
    }
}

impl<T> From<&Holder<T>> for bool {
    #[inline]
    fn from(holder: &Holder<T>) -> Self {
        holder.has_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_value_gate() {
        let mut h = Holder::<i32>::new();
        assert_eq!(h.value(), Err(BadAccess));
        assert_eq!(h.value_mut(), Err(BadAccess));
        h.emplace(3);
        *h.value_mut().unwrap() += 1;
        assert_eq!(h.value(), Ok(&4));
    }

    #[test]
    fn test_deref_panics_with_bad_access_payload() {
        let h: Holder<i32> = Holder::new();
        let payload = catch_unwind(AssertUnwindSafe(|| *h)).unwrap_err();
        assert_eq!(payload.downcast_ref::<BadAccess>(), Some(&BadAccess));
    }

    #[test]
    fn test_deref_mut_panics_with_bad_access_payload() {
        let mut h: Holder<String> = Holder::new();
        let payload = catch_unwind(AssertUnwindSafe(|| h.clear())).unwrap_err();
        assert!(payload.is::<BadAccess>());
    }

    #[test]
    fn test_value_or_else_is_lazy() {
        let h = Holder::some(2);
        assert_eq!(h.value_or_else(|| unreachable!()), 2);
        let e: Holder<i32> = Holder::new();
        assert_eq!(e.value_or_else(|| 8), 8);
    }

    #[test]
    fn test_bool_conversion() {
        assert!(bool::from(&Holder::some(0)));
        assert!(!bool::from(&Holder::<u8>::new()));
    }
}
