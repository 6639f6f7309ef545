//! Optional `tracing` hooks.
//!
//! Without the `trace` feature every hook expands to nothing.

#[cfg(feature = "trace")]
macro_rules! trace_bound {
    ($handle:literal, $variant:literal) => {
        ::tracing::trace!(
            target: "simple_delegation",
            handle = $handle,
            variant = $variant,
            "handle bound"
        )
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace_bound {
    ($handle:literal, $variant:literal) => {};
}

#[cfg(feature = "trace")]
macro_rules! debug_ignored_set {
    () => {
        ::tracing::debug!(target: "simple_delegation", "set ignored on read-only property")
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! debug_ignored_set {
    () => {};
}

pub(crate) use debug_ignored_set;
pub(crate) use trace_bound;
