//! Combinators for [`Option`] that the standard library does not provide.
//!
//! Lifting a whole [`List`](crate::persistent::List) of options lives in
//! [`persistent::traverse`](crate::persistent::traverse); this module holds
//! the pairwise building block it is made of.

/// Combines two optional values with `function`, or returns `None` if either
/// is missing.
///
/// # Examples
///
/// ```rust
/// use stackless::control::map2;
///
/// assert_eq!(map2(Some(2), Some(3), |a, b| a * b), Some(6));
/// assert_eq!(map2(Some(2), None::<i32>, |a, b| a * b), None);
/// ```
#[inline]
pub fn map2<A, B, C, F>(first: Option<A>, second: Option<B>, function: F) -> Option<C>
where
    F: FnOnce(A, B) -> C,
{
    first.and_then(|a| second.map(|b| function(a, b)))
}
