//! Error types.

/// The error returned when a value is read out of an empty [`Holder`].
///
/// `Deref`/`DerefMut` on an empty holder panic with this type as the panic
/// payload, so it can be recovered with `std::panic::catch_unwind` and
/// `downcast_ref::<BadAccess>()`.
///
/// [`Holder`]: crate::Holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BadAccess;

impl core::fmt::Display for BadAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("bad holder access")
    }
}

impl std::error::Error for BadAccess {}

/// Failures reported by the [`workload`](crate::workload) driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkloadError {
    /// A slot that the accumulation pass needed to read was empty.
    EmptySlot {
        /// Index of the empty slot.
        index: usize,
    },
    /// The requested length cannot be represented in the element type.
    Overflow {
        /// The requested length.
        len: usize,
    },
    /// A running sum overflowed the element type.
    SumOverflow {
        /// Index of the slot whose sum overflowed.
        index: usize,
    },
    /// The accumulated total did not match the closed-form sum.
    Mismatch {
        /// `len * (len + 1) / 2`, rendered for display.
        expected: String,
        /// The value found in the last slot.
        actual: String,
    },
}

impl core::fmt::Display for WorkloadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptySlot { index } => write!(f, "slot {index} was empty during accumulation"),
            Self::Overflow { len } => write!(f, "workload length {len} overflows the element type"),
            Self::SumOverflow { index } => write!(f, "running sum overflows at slot {index}"),
            Self::Mismatch { expected, actual } => {
                write!(f, "accumulated total {actual} does not match expected {expected}")
            }
        }
    }
}

impl std::error::Error for WorkloadError {}
