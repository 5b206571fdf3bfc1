//! Tail-recursive numeric functions and slice searches.
//!
//! Each function here is written as a recursive helper returning a
//! [`Trampoline`], then evaluated once. The helpers read like the textbook
//! recursive definitions but run in constant native stack space.
//!
//! Trampoline steps must own what they capture, so the slice searches take
//! their input as a shared `Rc<[A]>`, converted from whatever the caller
//! has.
//!
//! # Examples
//!
//! ```rust
//! use stackless::search::{binary_search, factorial, find_first};
//!
//! assert_eq!(factorial(5), 120);
//! assert_eq!(find_first(vec!["a", "b", "c"], |s| *s == "b"), Some(1));
//! assert_eq!(binary_search(vec![1, 3, 5, 7], 5, |a, b| a > b), Ok(2));
//! ```

use std::rc::Rc;

use crate::control::Trampoline;

fn factorial_step(n: u64, accumulator: u64) -> Trampoline<u64> {
    if n == 0 {
        Trampoline::done(accumulator)
    } else {
        Trampoline::more(move || factorial_step(n - 1, n.wrapping_mul(accumulator)))
    }
}

/// Computes `n!`.
///
/// The product wraps on overflow, which happens for `n > 20`.
///
/// # Examples
///
/// ```rust
/// use stackless::search::factorial;
///
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(10), 3_628_800);
/// ```
pub fn factorial(n: u64) -> u64 {
    factorial_step(n, 1).eval()
}

fn fibonacci_step(remaining: u64, current: u64, next: u64) -> Trampoline<u64> {
    if remaining == 0 {
        Trampoline::done(current)
    } else {
        Trampoline::more(move || fibonacci_step(remaining - 1, next, current.wrapping_add(next)))
    }
}

/// Returns the `n`th Fibonacci number, counting from `fibonacci(0) == 0`.
///
/// Wraps on overflow, which happens for `n > 93`.
pub fn fibonacci(n: u64) -> u64 {
    fibonacci_step(n, 0, 1).eval()
}

fn find_first_step<A, P>(elements: Rc<[A]>, index: usize, predicate: P) -> Trampoline<Option<usize>>
where
    A: 'static,
    P: Fn(&A) -> bool + 'static,
{
    let Some(element) = elements.get(index) else {
        return Trampoline::done(None);
    };
    if predicate(element) {
        return Trampoline::done(Some(index));
    }
    Trampoline::more(move || find_first_step(elements, index + 1, predicate))
}

/// Index of the first element satisfying `predicate`, or `None`.
///
/// `elements` is anything convertible into a shared slice, such as a
/// `Vec`, a borrowed slice of `Clone` elements, or an existing `Rc<[A]>`.
///
/// # Examples
///
/// ```rust
/// use stackless::search::find_first;
///
/// assert_eq!(find_first(vec![1, 3, 4, 6], |x| x % 2 == 0), Some(2));
/// assert_eq!(find_first(vec![1, 3], |x| x % 2 == 0), None);
/// ```
pub fn find_first<A, P>(elements: impl Into<Rc<[A]>>, predicate: P) -> Option<usize>
where
    A: 'static,
    P: Fn(&A) -> bool + 'static,
{
    find_first_step(elements.into(), 0, predicate).eval()
}

struct BinarySearch<A, G> {
    elements: Rc<[A]>,
    key: A,
    greater_than: G,
}

fn binary_search_step<A, G>(search: BinarySearch<A, G>, low: usize, high: usize) -> Trampoline<Result<usize, usize>>
where
    A: 'static,
    G: Fn(&A, &A) -> bool + 'static,
{
    if low >= high {
        return Trampoline::done(Err(low));
    }
    let middle = low + (high - low) / 2;
    let candidate = &search.elements[middle];
    if (search.greater_than)(candidate, &search.key) {
        Trampoline::more(move || binary_search_step(search, low, middle))
    } else if (search.greater_than)(&search.key, candidate) {
        Trampoline::more(move || binary_search_step(search, middle + 1, high))
    } else {
        Trampoline::done(Ok(middle))
    }
}

/// Searches a slice sorted by `greater_than` for `key`.
///
/// Two elements are equal when neither is greater than the other. Returns
/// `Ok(index)` of a matching element, or `Err(index)` where `key` could be
/// inserted while keeping the slice sorted.
///
/// # Errors
///
/// Returns `Err` with the insertion point when `key` is not present.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use stackless::search::binary_search;
///
/// let sorted: Rc<[f64]> = Rc::from(vec![1.0, 2.5, 4.0, 8.0]);
/// assert_eq!(binary_search(Rc::clone(&sorted), 4.0, |a, b| a > b), Ok(2));
/// assert_eq!(binary_search(Rc::clone(&sorted), 3.0, |a, b| a > b), Err(2));
/// assert_eq!(binary_search(Vec::new(), 3.0, |a: &f64, b| a > b), Err(0));
/// ```
pub fn binary_search<A, G>(elements: impl Into<Rc<[A]>>, key: A, greater_than: G) -> Result<usize, usize>
where
    A: 'static,
    G: Fn(&A, &A) -> bool + 'static,
{
    let elements = elements.into();
    let high = elements.len();
    binary_search_step(BinarySearch { elements, key, greater_than }, 0, high).eval()
}

fn is_sorted_step<A, G>(elements: Rc<[A]>, index: usize, greater_than: G) -> Trampoline<bool>
where
    A: 'static,
    G: Fn(&A, &A) -> bool + 'static,
{
    let (Some(current), Some(next)) = (elements.get(index), elements.get(index + 1)) else {
        return Trampoline::done(true);
    };
    if greater_than(current, next) {
        return Trampoline::done(false);
    }
    Trampoline::more(move || is_sorted_step(elements, index + 1, greater_than))
}

/// Returns `true` if no element is greater than its successor.
///
/// Empty and single-element slices are sorted.
///
/// # Examples
///
/// ```rust
/// use stackless::search::is_sorted;
///
/// assert!(is_sorted(vec![1, 2, 2, 5], |a, b| a > b));
/// assert!(!is_sorted(vec!["b", "a"], |a, b| a > b));
/// ```
pub fn is_sorted<A, G>(elements: impl Into<Rc<[A]>>, greater_than: G) -> bool
where
    A: 'static,
    G: Fn(&A, &A) -> bool + 'static,
{
    is_sorted_step(elements.into(), 0, greater_than).eval()
}
