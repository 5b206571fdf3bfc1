//! # stackless
//!
//! Immutable lists, lazy streams and binary trees whose traversals are
//! driven by a trampoline instead of native recursion.
//!
//! ## Overview
//!
//! Functional code over linked structures is naturally recursive, and Rust
//! does not eliminate tail calls. This library expresses those recursions
//! as [`control::Trampoline`] values (a chain of suspended steps) and runs
//! them in a loop, so folds over a list of a million elements or a search
//! over a long slice use constant native stack.
//!
//! - **Control Structures**: `Trampoline`, a right-biased `Either`, and
//!   `Option` combinators
//! - **Persistent Data Structures**: `List`, `Stream` and `Tree` with
//!   structural sharing
//! - **Search**: factorial, Fibonacci and slice searches written as
//!   trampolined tail recursion
//!
//! ## Feature Flags
//!
//! - `control`: Trampoline, Either and Option helpers
//! - `persistent`: List, Stream, Tree, and the `list!`/`stream!` macros
//! - `search`: Trampolined numeric and slice searches
//! - `arc`: Share structure through `Arc` so lists and trees are `Send + Sync`
//! - `log`: Emit `log::trace!` records from trampoline evaluation
//! - `full`: Enable all of the above except `arc`
//!
//! ## Example
//!
//! ```rust
//! use stackless::prelude::*;
//! use stackless::list;
//!
//! let list: List<u64> = (1..=100_000).collect();
//! assert_eq!(list.fold(0_u64, |total, x| total + x), 5_000_050_000);
//! assert!(list![1, 2, 3, 4, 5].has_subsequence(&list![4, 5]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use stackless::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "search")]
    pub use crate::search::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "search")]
pub mod search;
