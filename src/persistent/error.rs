//! Error types for persistent structures.
//!
//! Only a handful of list accessors can fail, and all of them fail for the
//! same reason: they need an element that an empty list does not have.

/// Returned when an operation needs a non-empty structure but got an empty one.
///
/// This signals a usage error in the caller; check [`List::is_empty`] first
/// if emptiness is expected.
///
/// [`List::is_empty`]: crate::persistent::List::is_empty
///
/// # Examples
///
/// ```rust
/// use stackless::persistent::{EmptyStructureError, List};
///
/// let empty: List<i32> = List::empty();
/// let error = empty.head().unwrap_err();
/// assert_eq!(error, EmptyStructureError { operation: "head" });
/// assert_eq!(error.to_string(), "head of empty list");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyStructureError {
    /// The name of the operation that was attempted.
    pub operation: &'static str,
}

impl EmptyStructureError {
    pub(crate) const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

impl std::fmt::Display for EmptyStructureError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} of empty list", self.operation)
    }
}

impl std::error::Error for EmptyStructureError {}
