//! Lifting a [`List`] of optional or fallible values into a single one.
//!
//! `traverse` maps every element to an `Option` (or an [`Either`]) and
//! collects the successes into a list, giving up at the first failure.
//! `sequence` is `traverse` with the identity function.
//!
//! All four functions are folds, so they are stack-safe for lists of any
//! length, and they stop visiting elements as soon as the outcome is known.
//!
//! # Examples
//!
//! ```rust
//! use stackless::list;
//! use stackless::persistent::traverse::{sequence, traverse};
//!
//! assert_eq!(sequence(&list![Some(1), Some(2)]), Some(list![1, 2]));
//! assert_eq!(sequence(&list![Some(1), None]), None);
//!
//! let parsed = traverse(&list!["1", "2", "3"], |s| s.parse::<i32>().ok());
//! assert_eq!(parsed, Some(list![1, 2, 3]));
//! ```

use super::List;
use crate::control::{Either, map2};

/// Applies `function` to every element and collects the results, or returns
/// `None` at the first element mapped to `None`.
///
/// An empty list yields `Some` of the empty list.
pub fn traverse<A, B, F>(list: &List<A>, mut function: F) -> Option<List<B>>
where
    A: 'static,
    B: Clone + 'static,
    F: FnMut(&A) -> Option<B> + 'static,
{
    list.try_fold(List::empty(), move |accumulator: List<B>, element| {
        map2(Some(accumulator), function(element), |accumulator, value| accumulator.cons(value)).ok_or(())
    })
    .ok()
    .map(|reversed| reversed.reverse())
}

/// Turns a list of options into an optional list.
///
/// # Examples
///
/// ```rust
/// use stackless::list;
/// use stackless::persistent::List;
/// use stackless::persistent::traverse::sequence;
///
/// let empty: List<Option<i32>> = List::empty();
/// assert_eq!(sequence(&empty), Some(List::empty()));
/// ```
pub fn sequence<A: Clone + 'static>(list: &List<Option<A>>) -> Option<List<A>> {
    traverse(list, Option::clone)
}

/// Applies `function` to every element and collects the `Right` results,
/// or returns the first `Left` produced.
///
/// # Examples
///
/// ```rust
/// use stackless::list;
/// use stackless::control::Either;
/// use stackless::persistent::traverse::traverse_either;
///
/// let positive = |x: &i32| {
///     if *x > 0 { Either::Right(*x) } else { Either::Left(format!("{x} is not positive")) }
/// };
/// assert_eq!(traverse_either(&list![1, 2], positive), Either::Right(list![1, 2]));
/// assert_eq!(
///     traverse_either(&list![1, -2, -3], positive),
///     Either::Left("-2 is not positive".to_string()),
/// );
/// ```
pub fn traverse_either<A, L, R, F>(list: &List<A>, mut function: F) -> Either<L, List<R>>
where
    A: 'static,
    L: 'static,
    R: Clone + 'static,
    F: FnMut(&A) -> Either<L, R> + 'static,
{
    let collected = list.try_fold(List::empty(), move |accumulator: List<R>, element| {
        Result::from(Either::Right(accumulator).map2(function(element), |accumulator, value| accumulator.cons(value)))
    });
    Either::from(collected).map(|reversed| reversed.reverse())
}

/// Turns a list of `Either` values into an `Either` of a list, keeping the
/// first `Left`.
pub fn sequence_either<L, R>(list: &List<Either<L, R>>) -> Either<L, List<R>>
where
    L: Clone + 'static,
    R: Clone + 'static,
{
    traverse_either(list, Either::clone)
}
