//! Control structures for stack-safe recursion.
//!
//! - [`Trampoline`]: recursion expressed as data and driven by a loop
//! - [`Either`]: a right-biased sum of two types, also used by
//!   [`Trampoline::resume`]
//! - [`map2`]: pairwise combination of [`Option`] values
//!
//! # Examples
//!
//! ```rust
//! use stackless::control::Trampoline;
//!
//! fn sum_to(n: u64, accumulator: u64) -> Trampoline<u64> {
//!     if n == 0 {
//!         Trampoline::done(accumulator)
//!     } else {
//!         Trampoline::more(move || sum_to(n - 1, accumulator + n))
//!     }
//! }
//!
//! assert_eq!(sum_to(100_000, 0).eval(), 5_000_050_000);
//! ```

mod either;
mod option;
mod trampoline;

pub use either::Either;
pub use option::map2;
pub use trampoline::{Step, Trampoline};
