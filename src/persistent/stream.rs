//! Lazy, possibly infinite streams.
//!
//! A [`Stream`] is a cons list whose head and tail are both deferred
//! computations ([`Thunk`]s). Nothing is evaluated until an operation asks
//! for it, and no operation forces more of the stream than the prefix it
//! consumes. Thunks are not memoized: forcing the same head twice runs its
//! computation twice.
//!
//! `map` and `append` are written on top of [`Stream::fold_right`], whose
//! combining function receives the rest of the fold unevaluated and may
//! simply never force it. That is how they work on infinite streams.
//!
//! Operations that may force an unbounded run of elements before they can
//! answer ([`Stream::exists`], [`Stream::find`], the skipping done by
//! [`Stream::filter`] and [`Stream::flat_map`], [`Stream::drop`],
//! [`Stream::to_list`]) run on a [`Trampoline`](crate::control::Trampoline).
//!
//! # Examples
//!
//! ```rust
//! use stackless::{list, stream};
//! use stackless::persistent::Stream;
//!
//! assert_eq!(stream![1, 2, 3, 4, 5].take(3).to_list(), list![1, 2, 3]);
//!
//! let naturals = Stream::iterate(1, |n| n + 1);
//! let squares = naturals.map(|n| n * n).filter(|n| n % 2 == 1);
//! assert_eq!(squares.take(3).to_list(), list![1, 9, 25]);
//! assert!(naturals.exists(|n| *n == 1_000));
//! ```

use std::fmt;

use super::ReferenceCounter;
use super::list::List;
use crate::control::Trampoline;

/// A shared, re-invokable deferred computation.
pub type Thunk<T> = ReferenceCounter<dyn Fn() -> T>;

fn thunk<T, F>(function: F) -> Thunk<T>
where
    F: Fn() -> T + 'static,
{
    ReferenceCounter::new(function)
}

/// A lazily evaluated sequence.
pub enum Stream<A> {
    /// The empty stream.
    Empty,
    /// A deferred head followed by a deferred tail.
    Node(Thunk<A>, Thunk<Stream<A>>),
}

impl<A> Stream<A> {
    /// Creates an empty stream.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Returns `true` if this is the empty stream. Forces nothing.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl<A: Clone + 'static> Stream<A> {
    /// Creates a stream from a deferred head and a deferred tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::persistent::Stream;
    ///
    /// let stream = Stream::cons(|| 1, || Stream::cons(|| 2, Stream::empty));
    /// assert_eq!(stream.to_list().to_vec(), vec![1, 2]);
    /// ```
    pub fn cons<H, T>(head: H, tail: T) -> Self
    where
        H: Fn() -> A + 'static,
        T: Fn() -> Self + 'static,
    {
        Self::Node(thunk(head), thunk(tail))
    }

    /// Creates a finite stream over the elements of `elements`.
    #[must_use]
    pub fn from_vec(elements: Vec<A>) -> Self {
        Self::from_shared(ReferenceCounter::from(elements), 0)
    }

    fn from_shared(elements: ReferenceCounter<[A]>, index: usize) -> Self {
        if index >= elements.len() {
            return Self::Empty;
        }
        let head_elements = ReferenceCounter::clone(&elements);
        Self::cons(
            move || head_elements[index].clone(),
            move || Self::from_shared(ReferenceCounter::clone(&elements), index + 1),
        )
    }

    /// An infinite stream repeating `value`.
    #[must_use]
    pub fn constant(value: A) -> Self {
        Self::iterate(value, A::clone)
    }

    /// An infinite stream `seed, step(seed), step(step(seed)), ...`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    /// use stackless::persistent::Stream;
    ///
    /// let powers = Stream::iterate(1, |n| n * 2);
    /// assert_eq!(powers.take(5).to_list(), list![1, 2, 4, 8, 16]);
    /// ```
    pub fn iterate<F>(seed: A, step: F) -> Self
    where
        F: Fn(&A) -> A + 'static,
    {
        Self::iterate_shared(seed, ReferenceCounter::new(step))
    }

    fn iterate_shared(seed: A, step: ReferenceCounter<dyn Fn(&A) -> A>) -> Self {
        let head = seed.clone();
        Self::cons(move || head.clone(), move || {
            Self::iterate_shared(step(&seed), ReferenceCounter::clone(&step))
        })
    }

    /// Builds a stream from a state machine.
    ///
    /// `next` is applied to the current state; `Some((element, state))`
    /// emits an element and continues, `None` ends the stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    /// use stackless::persistent::Stream;
    ///
    /// let fibonacci = Stream::unfold((0_u64, 1_u64), |&(a, b)| Some((a, (b, a + b))));
    /// assert_eq!(fibonacci.take(7).to_list(), list![0, 1, 1, 2, 3, 5, 8]);
    ///
    /// let countdown = Stream::unfold(3, |&n| (n > 0).then_some((n, n - 1)));
    /// assert_eq!(countdown.to_list(), list![3, 2, 1]);
    /// ```
    pub fn unfold<S, F>(state: S, next: F) -> Self
    where
        S: 'static,
        F: Fn(&S) -> Option<(A, S)> + 'static,
    {
        Self::unfold_shared(&state, ReferenceCounter::new(next))
    }

    fn unfold_shared<S: 'static>(state: &S, next: ReferenceCounter<dyn Fn(&S) -> Option<(A, S)>>) -> Self {
        match next(state) {
            None => Self::Empty,
            Some((head, following)) => {
                let following = ReferenceCounter::new(following);
                Self::cons(move || head.clone(), move || {
                    Self::unfold_shared(&*following, ReferenceCounter::clone(&next))
                })
            }
        }
    }

    /// Forces and returns the first element, if any.
    pub fn head_option(&self) -> Option<A> {
        match self {
            Self::Empty => None,
            Self::Node(head, _) => Some(head()),
        }
    }

    /// Lazily folds from the right.
    ///
    /// `combine` receives each element together with the rest of the fold
    /// as an unevaluated [`Thunk`]. Not forcing that thunk ends the
    /// traversal, which is what makes short-circuiting and infinite streams
    /// work. `default` is only evaluated when the end of the stream is
    /// reached.
    ///
    /// Each forced `rest` nests one native call, so a `combine` that always
    /// forces should only be used on streams of moderate length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::stream;
    ///
    /// let total = stream![1, 2, 3].fold_right(|| 0, |x, rest| x + rest());
    /// assert_eq!(total, 6);
    /// ```
    pub fn fold_right<B, Z, F>(&self, default: Z, combine: F) -> B
    where
        B: 'static,
        Z: Fn() -> B + 'static,
        F: Fn(A, Thunk<B>) -> B + 'static,
    {
        Self::fold_right_shared(
            self.clone(),
            ReferenceCounter::new(default),
            ReferenceCounter::new(combine),
        )
    }

    fn fold_right_shared<B: 'static>(
        stream: Self,
        default: ReferenceCounter<dyn Fn() -> B>,
        combine: ReferenceCounter<dyn Fn(A, Thunk<B>) -> B>,
    ) -> B {
        match stream {
            Self::Empty => default(),
            Self::Node(head, tail) => {
                let rest_default = ReferenceCounter::clone(&default);
                let rest_combine = ReferenceCounter::clone(&combine);
                let rest = thunk(move || {
                    Self::fold_right_shared(
                        tail(),
                        ReferenceCounter::clone(&rest_default),
                        ReferenceCounter::clone(&rest_combine),
                    )
                });
                combine(head(), rest)
            }
        }
    }

    /// Forces heads until one satisfies `predicate` and returns it together
    /// with the unevaluated tail after it. Each head is forced once.
    fn first_match(stream: Self, predicate: ReferenceCounter<dyn Fn(&A) -> bool>) -> Option<(A, Thunk<Self>)> {
        fn step<A: Clone + 'static>(
            stream: Stream<A>,
            predicate: ReferenceCounter<dyn Fn(&A) -> bool>,
        ) -> Trampoline<Option<(A, Thunk<Stream<A>>)>> {
            match stream {
                Stream::Empty => Trampoline::done(None),
                Stream::Node(head, tail) => {
                    let element = head();
                    if predicate(&element) {
                        Trampoline::done(Some((element, tail)))
                    } else {
                        Trampoline::more(move || step(tail(), predicate))
                    }
                }
            }
        }

        step(stream, predicate).eval()
    }

    /// Returns `true` if some element satisfies `predicate`.
    ///
    /// Stops forcing the stream at the first match, so it terminates on an
    /// infinite stream whenever a match exists, however far in.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: Fn(&A) -> bool + 'static,
    {
        Self::first_match(self.clone(), ReferenceCounter::new(predicate)).is_some()
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops forcing the stream at the first failure.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&A) -> bool + 'static,
    {
        !self.exists(move |element| !predicate(element))
    }

    /// A stream of the first `count` elements.
    ///
    /// Elements are produced as they are consumed; nothing past what the
    /// caller reads is forced.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        match self {
            Self::Node(head, tail) if count > 1 => {
                let tail = ReferenceCounter::clone(tail);
                Self::Node(ReferenceCounter::clone(head), thunk(move || tail().take(count - 1)))
            }
            Self::Node(head, _) if count == 1 => Self::Node(ReferenceCounter::clone(head), thunk(Self::empty)),
            _ => Self::Empty,
        }
    }

    /// Skips the first `count` elements eagerly and returns the rest.
    ///
    /// Forces exactly `count` tails (fewer if the stream ends first) and
    /// no heads.
    #[must_use]
    pub fn drop(&self, count: usize) -> Self {
        fn step<A: Clone + 'static>(stream: Stream<A>, remaining: usize) -> Trampoline<Stream<A>> {
            if remaining == 0 {
                return Trampoline::done(stream);
            }
            match stream {
                Stream::Empty => Trampoline::done(Stream::Empty),
                Stream::Node(_, tail) => Trampoline::more(move || step(tail(), remaining - 1)),
            }
        }

        step(self.clone(), count).eval()
    }

    /// The longest prefix whose elements satisfy `predicate`.
    ///
    /// Stops at the first element that fails without forcing anything
    /// after it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    /// use stackless::persistent::Stream;
    ///
    /// let small = Stream::iterate(1, |n| n + 1).take_while(|n| *n < 4);
    /// assert_eq!(small.to_list(), list![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        self.take_while_shared(ReferenceCounter::new(predicate))
    }

    fn take_while_shared(&self, predicate: ReferenceCounter<dyn Fn(&A) -> bool>) -> Self {
        match self {
            Self::Node(head, tail) if predicate(&head()) => {
                let tail = ReferenceCounter::clone(tail);
                Self::Node(
                    ReferenceCounter::clone(head),
                    thunk(move || tail().take_while_shared(ReferenceCounter::clone(&predicate))),
                )
            }
            _ => Self::Empty,
        }
    }

    /// Lazily applies `function` to each element.
    ///
    /// `function` runs when a mapped head is forced, not when the mapped
    /// stream is built.
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> Stream<B>
    where
        B: Clone + 'static,
        F: Fn(&A) -> B + 'static,
    {
        let function: ReferenceCounter<dyn Fn(&A) -> B> = ReferenceCounter::new(function);
        self.fold_right(Stream::empty, move |element, rest| {
            let function = ReferenceCounter::clone(&function);
            Stream::Node(thunk(move || function(&element)), rest)
        })
    }

    /// Lazily keeps the elements satisfying `predicate`.
    ///
    /// Building the result forces the source up to and including the first
    /// match; forcing each following tail skips ahead to the next one.
    /// Rejected runs of any length are skipped on a trampoline.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        Self::filter_shared(self.clone(), ReferenceCounter::new(predicate))
    }

    fn filter_shared(stream: Self, predicate: ReferenceCounter<dyn Fn(&A) -> bool>) -> Self {
        match Self::first_match(stream, ReferenceCounter::clone(&predicate)) {
            None => Self::Empty,
            Some((element, tail)) => Self::Node(
                thunk(move || element.clone()),
                thunk(move || Self::filter_shared(tail(), ReferenceCounter::clone(&predicate))),
            ),
        }
    }

    /// Lazily concatenates `other` after `self`.
    ///
    /// `other` is not evaluated until `self` is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::{list, stream};
    /// use stackless::persistent::Stream;
    ///
    /// let joined = stream![1, 2].append(|| stream![3]);
    /// assert_eq!(joined.to_list(), list![1, 2, 3]);
    ///
    /// // The infinite right operand is never reached by `take(2)`.
    /// let capped = stream![1, 2].append(|| Stream::constant(0));
    /// assert_eq!(capped.take(2).to_list(), list![1, 2]);
    /// ```
    #[must_use]
    pub fn append<F>(&self, other: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        self.fold_right(other, |element, rest| Self::Node(thunk(move || element.clone()), rest))
    }

    /// Lazily maps each element to a stream and concatenates the results.
    ///
    /// Source elements whose stream is empty are skipped on a trampoline,
    /// so long runs of them are fine.
    #[must_use]
    pub fn flat_map<B, F>(&self, function: F) -> Stream<B>
    where
        B: Clone + 'static,
        F: Fn(&A) -> Stream<B> + 'static,
    {
        Self::flat_map_shared(self.clone(), ReferenceCounter::new(function))
    }

    fn flat_map_shared<B: Clone + 'static>(stream: Self, function: ReferenceCounter<dyn Fn(&A) -> Stream<B>>) -> Stream<B> {
        fn step<A: Clone + 'static, B: Clone + 'static>(
            stream: Stream<A>,
            function: ReferenceCounter<dyn Fn(&A) -> Stream<B>>,
        ) -> Trampoline<Option<(Stream<B>, Thunk<Stream<A>>)>> {
            match stream {
                Stream::Empty => Trampoline::done(None),
                Stream::Node(head, tail) => {
                    let inner = function(&head());
                    if inner.is_empty() {
                        Trampoline::more(move || step(tail(), function))
                    } else {
                        Trampoline::done(Some((inner, tail)))
                    }
                }
            }
        }

        match step(stream, ReferenceCounter::clone(&function)).eval() {
            None => Stream::Empty,
            Some((inner, tail)) => {
                inner.append(move || Self::flat_map_shared(tail(), ReferenceCounter::clone(&function)))
            }
        }
    }

    /// The first element satisfying `predicate`, forcing no further.
    pub fn find<P>(&self, predicate: P) -> Option<A>
    where
        P: Fn(&A) -> bool + 'static,
    {
        Self::first_match(self.clone(), ReferenceCounter::new(predicate)).map(|(element, _)| element)
    }

    /// Lazily combines two streams pairwise, ending with the shorter one.
    #[must_use]
    pub fn zip_with<B, C, F>(&self, other: &Stream<B>, function: F) -> Stream<C>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        F: Fn(&A, &B) -> C + 'static,
    {
        Stream::unfold((self.clone(), other.clone()), move |(left, right)| match (left, right) {
            (Self::Node(left_head, left_tail), Stream::Node(right_head, right_tail)) => Some((
                function(&left_head(), &right_head()),
                (left_tail(), right_tail()),
            )),
            _ => None,
        })
    }

    /// Forces the whole stream into a [`List`].
    ///
    /// Runs on a trampoline, so long finite streams are fine. An infinite
    /// stream never finishes; bound it first with [`Stream::take`] or
    /// [`Stream::take_while`].
    pub fn to_list(&self) -> List<A> {
        fn step<A: Clone + 'static>(stream: Stream<A>, accumulator: List<A>) -> Trampoline<List<A>> {
            match stream {
                Stream::Empty => Trampoline::done(accumulator),
                Stream::Node(head, tail) => {
                    let next = accumulator.cons(head());
                    Trampoline::more(move || step(tail(), next))
                }
            }
        }

        step(self.clone(), List::empty()).eval().reverse()
    }
}

impl<A: Clone + PartialEq + 'static> Stream<A> {
    /// Returns `true` if the stream begins with the elements of `prefix`.
    ///
    /// Forces at most as many elements as `prefix` has, so `self` may be
    /// infinite as long as `prefix` is finite.
    pub fn starts_with(&self, prefix: &Self) -> bool {
        fn step<A: Clone + PartialEq + 'static>(stream: Stream<A>, prefix: Stream<A>) -> Trampoline<bool> {
            match (stream, prefix) {
                (_, Stream::Empty) => Trampoline::done(true),
                (Stream::Node(head, tail), Stream::Node(prefix_head, prefix_tail)) => {
                    if head() == prefix_head() {
                        Trampoline::more(move || step(tail(), prefix_tail()))
                    } else {
                        Trampoline::done(false)
                    }
                }
                (Stream::Empty, Stream::Node(..)) => Trampoline::done(false),
            }
        }

        step(self.clone(), prefix.clone()).eval()
    }
}

impl Stream<i64> {
    /// Successive integers starting at `start`.
    #[must_use]
    pub fn counting_from(start: i64) -> Self {
        Self::iterate(start, |n| n + 1)
    }
}

impl<A> Clone for Stream<A> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(head, tail) => Self::Node(ReferenceCounter::clone(head), ReferenceCounter::clone(tail)),
        }
    }
}

impl<A> Default for Stream<A> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<A> fmt::Debug for Stream<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => formatter.write_str("Empty"),
            Self::Node(..) => formatter
                .debug_tuple("Node")
                .field(&"<thunk>")
                .field(&"<thunk>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{list, stream};
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    /// A stream of `1..=length` whose heads record how often they are forced.
    fn counted(length: i32, forced: &Rc<Cell<usize>>) -> Stream<i32> {
        let forced = Rc::clone(forced);
        Stream::unfold(1, move |&n| (n <= length).then_some((n, n + 1))).map(move |x| {
            forced.set(forced.get() + 1);
            *x
        })
    }

    #[rstest]
    fn test_head_option() {
        assert_eq!(Stream::<i32>::empty().head_option(), None);
        assert_eq!(stream![7, 8].head_option(), Some(7));
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(1, vec![1])]
    #[case(3, vec![1, 2, 3])]
    #[case(9, vec![1, 2, 3, 4, 5])]
    fn test_take(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(stream![1, 2, 3, 4, 5].take(count).to_list().to_vec(), expected);
    }

    #[rstest]
    #[case(0, vec![1, 2, 3])]
    #[case(2, vec![3])]
    #[case(5, vec![])]
    fn test_drop(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(stream![1, 2, 3].drop(count).to_list().to_vec(), expected);
    }

    #[rstest]
    fn test_drop_forces_no_heads() {
        let forced = Rc::new(Cell::new(0));
        let rest = counted(10, &forced).drop(8);
        assert_eq!(forced.get(), 0);
        assert_eq!(rest.to_list(), list![9, 10]);
    }

    #[rstest]
    fn test_take_while_stops_at_first_failure() {
        assert_eq!(stream![1, 2, 3, 1].take_while(|x| *x < 3).to_list(), list![1, 2]);
        assert!(stream![5].take_while(|x| *x < 3).is_empty());
    }

    #[rstest]
    fn test_exists_short_circuits() {
        let forced = Rc::new(Cell::new(0));
        assert!(counted(6, &forced).exists(|x| *x == 4));
        assert_eq!(forced.get(), 4);
        assert!(!stream![1, 2, 3].exists(|x| *x == 4));
    }

    #[rstest]
    fn test_for_all_short_circuits() {
        let forced = Rc::new(Cell::new(0));
        assert!(!counted(6, &forced).for_all(|x| *x < 2));
        assert_eq!(forced.get(), 2);
        assert!(stream![1, 2, 3].for_all(|x| *x > 0));
    }

    #[rstest]
    fn test_map_forces_only_what_is_consumed() {
        let forced = Rc::new(Cell::new(0));
        let mapped = counted(100, &forced).map(|x| x * 2);
        assert_eq!(forced.get(), 1);
        assert_eq!(mapped.take(3).to_list(), list![2, 4, 6]);
        assert_eq!(forced.get(), 3);
    }

    #[rstest]
    fn test_filter_and_find_on_infinite_stream() {
        let naturals = Stream::counting_from(1);
        assert_eq!(naturals.filter(|n| n % 3 == 0).take(3).to_list(), list![3, 6, 9]);
        assert_eq!(naturals.find(|n| n * n > 50), Some(8));
    }

    #[rstest]
    fn test_flat_map() {
        let repeated = stream![1, 2, 3].flat_map(|n| Stream::constant(*n).take(usize::try_from(*n).unwrap_or(0)));
        assert_eq!(repeated.to_list(), list![1, 2, 2, 3, 3, 3]);
    }

    #[rstest]
    fn test_append_does_not_force_other_early() {
        let touched = Rc::new(Cell::new(false));
        let flag = Rc::clone(&touched);
        let joined = stream![1, 2].append(move || {
            flag.set(true);
            stream![3]
        });
        assert_eq!(joined.take(2).to_list(), list![1, 2]);
        assert!(!touched.get());
        assert_eq!(joined.to_list(), list![1, 2, 3]);
        assert!(touched.get());
    }

    #[rstest]
    fn test_zip_with_and_starts_with() {
        let naturals = Stream::counting_from(1);
        let sums = naturals.zip_with(&stream![10_i64, 20, 30], |a, b| a + b);
        assert_eq!(sums.to_list(), list![11, 22, 33]);
        assert!(naturals.starts_with(&stream![1, 2, 3]));
        assert!(!naturals.starts_with(&stream![2]));
        assert!(!stream![1].starts_with(&stream![1, 2]));
    }

    #[rstest]
    fn test_to_list_of_long_stream() {
        let long = Stream::counting_from(0).take(100_000);
        let list = long.to_list();
        assert_eq!(list.length(), 100_000);
        assert_eq!(list.drop(99_999), list![99_999]);
        assert_eq!(Stream::counting_from(0).drop(100_000).head_option(), Some(100_000));
    }

    #[rstest]
    fn test_searches_reach_far_into_infinite_stream() {
        let naturals = Stream::counting_from(1);
        assert!(naturals.exists(|n| *n == 100_000));
        assert!(!naturals.for_all(|n| *n < 100_000));
        assert!(naturals.take(100_000).for_all(|n| *n <= 100_000));
        assert_eq!(naturals.find(|n| n % 100_000 == 0), Some(100_000));
    }

    #[rstest]
    fn test_sparse_filter_and_flat_map_skip_long_runs() {
        let naturals = Stream::counting_from(1);
        let sparse = naturals.filter(|n| n % 100_000 == 0);
        assert_eq!(sparse.take(2).to_list(), list![100_000, 200_000]);

        let expanded = naturals.flat_map(|n| if n % 50_000 == 0 { stream![*n, -*n] } else { Stream::empty() });
        assert_eq!(expanded.take(3).to_list(), list![50_000, -50_000, 100_000]);
    }

    #[rstest]
    fn test_find_forces_each_head_once() {
        let forced = Rc::new(Cell::new(0));
        assert_eq!(counted(10, &forced).find(|x| *x == 3), Some(3));
        assert_eq!(forced.get(), 3);
    }

    #[rstest]
    fn test_debug_does_not_force() {
        let stream: Stream<i32> = Stream::cons(|| panic!("forced"), Stream::empty);
        assert_eq!(format!("{stream:?}"), "Node(\"<thunk>\", \"<thunk>\")");
        assert_eq!(format!("{:?}", Stream::<i32>::empty()), "Empty");
    }
}
