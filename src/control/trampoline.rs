//! Recursion expressed as data.
//!
//! A [`Trampoline<A>`] describes a computation that either has finished
//! (`Done`) or still has a step to take (`More`). [`Trampoline::eval`]
//! drives the steps in a loop, so a chain of any length runs in constant
//! native stack depth.
//!
//! # Motivation
//!
//! Rust does not guarantee tail call elimination. A function that walks a
//! list by calling itself on the tail will overflow the stack once the list
//! is long enough. Rewriting the self call as `Trampoline::more(move || ...)`
//! hands the next step back to the driver loop instead.
//!
//! # Examples
//!
//! ## Factorial
//!
//! ```rust
//! use stackless::control::Trampoline;
//!
//! fn factorial(n: u64, accumulator: u64) -> Trampoline<u64> {
//!     if n <= 1 {
//!         Trampoline::done(accumulator)
//!     } else {
//!         Trampoline::more(move || factorial(n - 1, n * accumulator))
//!     }
//! }
//!
//! assert_eq!(factorial(20, 1).eval(), 2_432_902_008_176_640_000);
//! ```
//!
//! ## Mutual Recursion
//!
//! ```rust
//! use stackless::control::Trampoline;
//!
//! fn is_even(n: u64) -> Trampoline<bool> {
//!     if n == 0 {
//!         Trampoline::done(true)
//!     } else {
//!         Trampoline::more(move || is_odd(n - 1))
//!     }
//! }
//!
//! fn is_odd(n: u64) -> Trampoline<bool> {
//!     if n == 0 {
//!         Trampoline::done(false)
//!     } else {
//!         Trampoline::more(move || is_even(n - 1))
//!     }
//! }
//!
//! assert!(is_even(100_000).eval());
//! ```

use std::any::Any;

use super::either::Either;

/// A deferred step: invoking it yields the next trampoline state.
pub type Step<A> = Box<dyn FnOnce() -> Trampoline<A> + 'static>;

/// A result whose type has been erased while it travels between
/// continuations.
type Value = Box<dyn Any>;

/// A continuation with its input and output types erased.
type Arrow = Box<dyn FnOnce(Value) -> Erased>;

/// A trampoline with its result type erased.
///
/// `eval` and `resume` drive this form with an explicit stack of pending
/// [`Arrow`]s, so binds nested to any depth on either side run without
/// growing the native stack.
enum Erased {
    Done(Value),
    More(Box<dyn FnOnce() -> Erased>),
    /// The bound computation, erased on demand, and what receives its result.
    Bind(Box<dyn FnOnce() -> Erased>, Arrow),
}

fn unbox<A: 'static>(value: Value) -> A {
    *value
        .downcast::<A>()
        .expect("Type mismatch in trampoline continuation")
}

/// Type-erased continuation stored by `flat_map`.
///
/// The intermediate result type of the bound computation is hidden behind
/// this trait so that `Trampoline<B>` does not need to name it.
trait Continuation<A> {
    /// Splits the bound computation from the function awaiting its result.
    fn erase(self: Box<Self>) -> Erased;
}

#[doc(hidden)]
pub struct Bound<A>(Box<dyn Continuation<A>>);

impl<A> Bound<A> {
    fn new<C: Continuation<A> + 'static>(continuation: C) -> Self {
        Self(Box::new(continuation))
    }
}

/// A computation that is either finished or has another step to run.
///
/// Values are never mutated once built; evaluation only consumes them and
/// invokes the continuations in order.
///
/// # Construction discipline
///
/// A recursive step that would call itself and use the result returns
/// `Trampoline::more(move || recursive_call(..))`. A step that has the answer
/// returns `Trampoline::done(answer)`.
///
/// # Laws
///
/// - **Left Identity**: `Trampoline::done(a).flat_map(f).eval() == f(a).eval()`
/// - **Right Identity**: `m.flat_map(Trampoline::done).eval() == m.eval()`
/// - **Associativity**: `m.flat_map(f).flat_map(g).eval() == m.flat_map(|x| f(x).flat_map(g)).eval()`
///
/// # Examples
///
/// ```rust
/// use stackless::control::Trampoline;
///
/// assert_eq!(Trampoline::done(42).eval(), 42);
/// assert_eq!(Trampoline::more(|| Trampoline::done(42)).eval(), 42);
/// ```
pub enum Trampoline<A> {
    /// The computation has completed with a value.
    Done(A),
    /// An unevaluated continuation producing the next state.
    More(Step<A>),
    /// A computation whose result feeds another computation.
    #[doc(hidden)]
    FlatMap(Bound<A>),
}

impl<A> Trampoline<A> {
    /// Creates a finished trampoline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::control::Trampoline;
    ///
    /// assert_eq!(Trampoline::done("ready").eval(), "ready");
    /// ```
    #[inline]
    pub fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// Creates a trampoline whose next state is produced by `thunk`.
    ///
    /// The thunk is not invoked until the trampoline is evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::control::Trampoline;
    ///
    /// let trampoline = Trampoline::more(|| Trampoline::done(42));
    /// assert_eq!(trampoline.eval(), 42);
    /// ```
    #[inline]
    pub fn more<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::More(Box::new(thunk))
    }

    /// Alias for [`Trampoline::done`].
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::done(value)
    }

    /// Returns `true` if no steps remain.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

impl<A: 'static> Trampoline<A> {
    /// Drives the trampoline to completion and returns the final value.
    ///
    /// Each `More` step is invoked from this loop, never from the previous
    /// step, so native stack depth does not grow with the number of steps.
    /// A panic raised by a continuation unwinds out of `eval` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::control::Trampoline;
    ///
    /// fn count_down(n: u64) -> Trampoline<u64> {
    ///     if n == 0 {
    ///         Trampoline::done(0)
    ///     } else {
    ///         Trampoline::more(move || count_down(n - 1))
    ///     }
    /// }
    ///
    /// assert_eq!(count_down(1_000_000).eval(), 0);
    /// ```
    pub fn eval(self) -> A {
        let mut current = self.erase();
        let mut continuations: Vec<Arrow> = Vec::new();
        #[cfg(feature = "log")]
        let mut steps: usize = 0;

        loop {
            current = match current {
                Erased::Done(value) => match continuations.pop() {
                    Some(arrow) => arrow(value),
                    None => {
                        #[cfg(feature = "log")]
                        log::trace!("trampoline finished after {steps} steps");
                        return unbox(value);
                    }
                },
                Erased::More(thunk) => thunk(),
                Erased::Bind(bound, arrow) => {
                    continuations.push(arrow);
                    bound()
                }
            };
            #[cfg(feature = "log")]
            {
                steps += 1;
            }
        }
    }

    /// Runs the trampoline until the next `More` step or the final value.
    ///
    /// Returns `Either::Right(value)` when finished and
    /// `Either::Left(step)` when work remains. The returned step carries the
    /// continuations still waiting on it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::control::{Either, Trampoline};
    ///
    /// let trampoline = Trampoline::more(|| Trampoline::done(42));
    /// match trampoline.resume() {
    ///     Either::Left(step) => assert_eq!(step().eval(), 42),
    ///     Either::Right(_) => unreachable!(),
    /// }
    /// ```
    pub fn resume(self) -> Either<Step<A>, A> {
        let mut current = self.erase();
        let mut continuations: Vec<Arrow> = Vec::new();

        loop {
            current = match current {
                Erased::Done(value) => match continuations.pop() {
                    Some(arrow) => arrow(value),
                    None => return Either::Right(unbox(value)),
                },
                Erased::More(thunk) => {
                    return Either::Left(Box::new(move || Self::suspended(thunk(), continuations)));
                }
                Erased::Bind(bound, arrow) => {
                    continuations.push(arrow);
                    bound()
                }
            };
        }
    }

    /// Rebuilds a typed trampoline from an erased state and the
    /// continuations stacked above it, innermost last.
    fn suspended(state: Erased, continuations: Vec<Arrow>) -> Self {
        let erased = continuations
            .into_iter()
            .rev()
            .fold(state, |inner, arrow| Erased::Bind(Box::new(move || inner), arrow));
        Self::FlatMap(Bound::new(Suspended(erased)))
    }

    fn erase(self) -> Erased {
        match self {
            Self::Done(value) => Erased::Done(Box::new(value)),
            Self::More(thunk) => Erased::More(Box::new(move || thunk().erase())),
            Self::FlatMap(bound) => bound.0.erase(),
        }
    }

    /// Applies `function` to the final value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::control::Trampoline;
    ///
    /// assert_eq!(Trampoline::done(21).map(|x| x * 2).eval(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.flat_map(move |a| Trampoline::done(function(a)))
    }

    /// Feeds the final value into another trampoline computation.
    ///
    /// This is what lets non-tail recursion (such as folding both branches
    /// of a tree) be expressed as a trampoline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::control::Trampoline;
    ///
    /// let result = Trampoline::done(21).flat_map(|x| Trampoline::done(x * 2));
    /// assert_eq!(result.eval(), 42);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> Trampoline<B> + 'static,
        B: 'static,
    {
        Trampoline::FlatMap(Bound::new(BindContinuation {
            trampoline: self,
            function,
        }))
    }

    /// Alias for [`Trampoline::flat_map`].
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Trampoline<B>
    where
        F: FnOnce(A) -> Trampoline<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }
}

struct BindContinuation<A, B, F>
where
    F: FnOnce(A) -> Trampoline<B>,
{
    trampoline: Trampoline<A>,
    function: F,
}

impl<A: 'static, B: 'static, F> Continuation<B> for BindContinuation<A, B, F>
where
    F: FnOnce(A) -> Trampoline<B> + 'static,
{
    fn erase(self: Box<Self>) -> Erased {
        let Self { trampoline, function } = *self;
        Erased::Bind(
            Box::new(move || trampoline.erase()),
            Box::new(move |value: Value| function(unbox::<A>(value)).erase()),
        )
    }
}

/// An erased state handed back by `resume`.
struct Suspended(Erased);

impl<A> Continuation<A> for Suspended {
    fn erase(self: Box<Self>) -> Erased {
        self.0
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for Trampoline<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::More(_) => formatter.debug_tuple("More").field(&"<thunk>").finish(),
            Self::FlatMap(_) => formatter
                .debug_tuple("FlatMap")
                .field(&"<continuation>")
                .finish(),
        }
    }
}
