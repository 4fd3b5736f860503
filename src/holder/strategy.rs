//! Proptest strategies for [`Holder`], behind the `proptest` feature.

use core::fmt;

use proptest::arbitrary::{any_with, Arbitrary};
use proptest::option::{self, OptionStrategy};
use proptest::strategy::{Map, Strategy};

use super::Holder;

/// Generates holders that are empty or wrap a value drawn from `inner`.
pub fn holder_of<S>(inner: S) -> impl Strategy<Value = Holder<S::Value>>
where
    S: Strategy,
    S::Value: fmt::Debug,
{
    option::of(inner).prop_map(Holder::<S::Value>::from)
}

impl<T: Arbitrary> Arbitrary for Holder<T> {
    type Parameters = T::Parameters;
    type Strategy = Map<OptionStrategy<T::Strategy>, fn(Option<T>) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        option::of(any_with::<T>(args)).prop_map(Self::from as fn(Option<T>) -> Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_holder_of_round_trips_option(h in holder_of(any::<i16>())) {
            let cloned = h.clone();
            prop_assert_eq!(cloned.into_option(), h.as_option().copied());
        }

        #[test]
        fn test_arbitrary_holder_value_or(h in any::<Holder<u8>>()) {
            let expected = h.as_option().copied().unwrap_or(0);
            prop_assert_eq!(h.value_or(0), expected);
        }
    }
}
