/// Emits a `tracing` trace event for a slot transition.
///
/// Compiles to nothing unless the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_slot {
    ($op:expr, $ty:expr) => {
        tracing::trace!(op = $op, ty = $ty, "holder slot transition")
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_slot {
    ($op:expr, $ty:expr) => {{
        let _ = ($op, $ty);
    }};
}

/// Emits a `tracing` debug event for a workload phase.
#[cfg(feature = "tracing")]
macro_rules! debug_phase {
    ($phase:expr, $len:expr) => {
        tracing::debug!(phase = $phase, len = $len, "workload phase")
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_phase {
    ($phase:expr, $len:expr) => {{
        let _ = ($phase, $len);
    }};
}
