//! Immutable linked structures with stack-safe traversals.
//!
//! - [`List`]: a persistent singly-linked list whose folds run on a
//!   [`Trampoline`](crate::control::Trampoline)
//! - [`Stream`]: a lazy, possibly infinite list of deferred computations
//! - [`Tree`]: a binary tree with values at the leaves
//! - [`traverse`]: lifting a list of `Option`/`Either` values into one
//!
//! # Structural Sharing
//!
//! Every structure here is immutable. Operations that "modify" a list
//! return a new list that shares as much of the old one as possible:
//! `cons` and `tail` are O(1) and copy nothing.
//!
//! # Examples
//!
//! ```rust
//! use stackless::list;
//! use stackless::persistent::List;
//!
//! let list = list![2, 3];
//! let extended = list.cons(1);
//! assert_eq!(extended, list![1, 2, 3]);
//! assert_eq!(list.length(), 2); // Original unchanged
//!
//! let long: List<u32> = (0..100_000).collect();
//! assert_eq!(long.fold(0_u64, |total, x| total + u64::from(*x)), 4_999_950_000);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod list;
mod macros;
mod stream;
pub mod traverse;
mod tree;

pub use error::EmptyStructureError;
pub use list::List;
pub use list::ListIterator;
pub use list::Node;
pub use stream::Stream;
pub use stream::Thunk;
pub use tree::Tree;

// Streams hold `dyn Fn` thunks without a `Send` bound, so they never cross
// threads even with `arc`.
static_assertions::assert_not_impl_any!(Stream<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(List<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Tree<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
