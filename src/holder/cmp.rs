//! Comparison, hashing, formatting and chaining.
//!
//! An empty holder compares equal only to another empty holder and orders
//! strictly below every occupied holder.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::Holder;

impl<T> Holder<T> {
    /// Applies `f` to the held value, wrapping the result in a new holder.
    ///
    /// An empty holder yields an empty `Holder<U>`. The receiver is not
    /// modified.
    ///
    /// ```rust
    /// use holdslot::Holder;
    ///
    /// let h = Holder::some(5);
    /// assert_eq!(h.and_then(|v| v * 10), Holder::some(50));
    /// assert!(!Holder::<i32>::new().and_then(|v| v * 10).has_value());
    /// ```
    #[inline]
    pub fn and_then<U, F>(&self, f: F) -> Holder<U>
    where
        F: FnOnce(&T) -> U,
    {
        match self.value() {
            Ok(value) => Holder::some(f(value)),
            Err(_) => Holder::new(),
        }
    }
}

impl<T: PartialEq> PartialEq for Holder<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_option(), other.as_option()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Holder<T> {}

impl<T: PartialOrd> PartialOrd for Holder<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.as_option(), other.as_option()) {
            (Some(a), Some(b)) => a.partial_cmp(b),
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (None, None) => Some(Ordering::Equal),
        }
    }
}

impl<T: Ord> Ord for Holder<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_option(), other.as_option()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T: Hash> Hash for Holder<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.has_value().hash(state);
        if let Some(value) = self.as_option() {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Holder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Holder").field(value).finish(),
            None => f.write_str("Holder(<empty>)"),
        }
    }
}
