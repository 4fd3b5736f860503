//! # `holdslot` - Inline Single-Slot Optional Container
//!
//! `Holder<T>` holds either exactly one `T` or nothing, inside a fixed-size
//! inline slot (`MaybeUninit<T>` plus an occupancy flag). No heap allocation
//! is ever made for the held value.
//!
//! ## Safety Guarantees
//!
//! - **Single audited surface**: every raw read, write, drop and move of the
//!   slot lives in `raw::slot`; the rest of the crate goes through the
//!   occupancy-checked accessors.
//! - **Flag and slot in lockstep**: the slot holds a live `T` exactly when the
//!   flag is set, across every transition including panics in `T`'s own
//!   constructors, `Clone` and `Drop`.
//! - **Strong guarantee on replacement**: `emplace`, `set`, `assign` and
//!   `clone_from` build the new state before touching the old one.
//!
//! ## Layers
//!
//! 1. **Storage core** (`raw::slot`): construct / destroy / read out / swap.
//! 2. **Lifecycle** ([`Holder`]): `new`, `some`, `in_place`, `emplace`,
//!    `reset`, `swap`, `take`, `Clone`, `Drop`.
//! 3. **Access** ([`Holder::value`], `Deref`, [`Holder::value_or`]): reads
//!    gated on occupancy, failing with [`BadAccess`].
//! 4. **Comparison & chaining**: `Eq`/`Ord` with empty as the minimum,
//!    [`Holder::and_then`].
//!
//! The [`workload`] module drives the fill / sort / accumulate sequence used
//! to compare `Holder` with `Option`.
//!
//! ## Example
//!
//! ```rust
//! use holdslot::{BadAccess, Holder};
//!
//! let mut x = Holder::some(5);
//! let mut y = Holder::some(6);
//! assert!(x < y);
//! x.swap(&mut y);
//! assert!(x > y);
//!
//! let e: Holder<i32> = Holder::new();
//! assert_eq!(e.value(), Err(BadAccess));
//! assert_eq!(e.value_or(10), 10);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events on slot transitions and workload phases.
//! - `proptest`: `Arbitrary` for `Holder<T>` and the `holder::strategy`
//!   module.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

mod raw;

pub mod error;
pub mod holder;
pub mod workload;

pub use error::{BadAccess, WorkloadError};
pub use holder::Holder;
pub use workload::{OptionalSlot, WorkloadConfig, WorkloadReport};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // The value is stored inline: a holder is never smaller than its value
    // and only adds the flag (plus padding).
    assert!(mem::size_of::<Holder<u64>>() <= mem::size_of::<u64>() * 2);
    assert!(mem::align_of::<Holder<u64>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<Holder<[u8; 3]>>() == 4);

    // Zero-sized values cost exactly the flag.
    assert!(mem::size_of::<Holder<()>>() == mem::size_of::<bool>());
};
