//! Immutable singly-linked list.
//!
//! This module provides [`List`], a cons list whose tails are shared rather
//! than copied. Every traversal whose cost grows with the list (folds,
//! searches, `drop`) runs on a [`Trampoline`], so lists of any length can
//! be walked without growing the native stack.
//!
//! # Overview
//!
//! - `List::Empty` is the empty list.
//! - `List::Node` holds a reference-counted [`Node`]: an owned head plus a
//!   shared tail.
//!
//! All operations return new lists and never touch the original. `cons`,
//! `tail` and `drop` hand out existing suffixes instead of copying them.
//!
//! # Examples
//!
//! ```rust
//! use stackless::list;
//! use stackless::persistent::List;
//!
//! let numbers = list![1, 2, 3, 4];
//! let digits = numbers.fold(String::new(), |accumulator, x| format!("{x}{accumulator}"));
//! assert_eq!(digits, "4321");
//!
//! let evens = numbers.filter(|x| x % 2 == 0);
//! assert_eq!(evens, list![2, 4]);
//! assert_eq!(numbers.length(), 4);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list:              1 -> 2 -> 3 -> Empty
//! list.cons(0):      0 -> [1 -> 2 -> 3 -> Empty]   // shares the whole of `list`
//! list.drop(1):           [2 -> 3 -> Empty]         // shares the suffix of `list`
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul};

use indexmap::IndexMap;

use super::ReferenceCounter;
use super::error::EmptyStructureError;
use crate::control::Trampoline;

/// A non-empty cell of a [`List`]: an owned head and a shared tail.
pub struct Node<A> {
    head: A,
    tail: List<A>,
}

impl<A> Node<A> {
    /// The element stored in this cell.
    #[inline]
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// The rest of the list after this cell.
    #[inline]
    pub const fn tail(&self) -> &List<A> {
        &self.tail
    }
}

// Unlinks uniquely owned tails one cell at a time, so dropping a long list
// does not recurse once per element.
impl<A> Drop for Node<A> {
    fn drop(&mut self) {
        let mut next = std::mem::replace(&mut self.tail, List::Empty);
        while let List::Node(shared) = next {
            match ReferenceCounter::try_unwrap(shared) {
                Ok(mut node) => next = std::mem::replace(&mut node.tail, List::Empty),
                Err(_) => break,
            }
        }
    }
}

/// An immutable singly-linked list.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `cons`           | O(1)       |
/// | `head` / `tail`  | O(1)       |
/// | `length`         | O(n)       |
/// | `drop(k)`        | O(k)       |
/// | `append`         | O(n) in the left operand |
/// | `reverse`, `map`, `filter` | O(n) |
///
/// # Examples
///
/// ```rust
/// use stackless::persistent::List;
///
/// let list = List::empty().cons(3).cons(2).cons(1);
/// match &list {
///     List::Node(node) => assert_eq!(*node.head(), 1),
///     List::Empty => unreachable!(),
/// }
/// ```
pub enum List<A> {
    /// The empty list.
    Empty,
    /// A head element followed by a shared tail.
    Node(ReferenceCounter<Node<A>>),
}

impl<A> List<A> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::persistent::List;
    ///
    /// let list = List::singleton(42);
    /// assert_eq!(list.head(), Ok(&42));
    /// assert!(list.tail().unwrap().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: A) -> Self {
        Self::Empty.cons(element)
    }

    /// Builds a list with `head` in front of `tail`, sharing `tail`.
    #[inline]
    #[must_use]
    pub fn node(head: A, tail: Self) -> Self {
        Self::Node(ReferenceCounter::new(Node { head, tail }))
    }

    /// Prepends an element, sharing `self` as the new tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::persistent::List;
    ///
    /// let list = List::empty().cons(2).cons(1);
    /// let extended = list.cons(0);
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// assert_eq!(extended.to_vec(), vec![0, 1, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: A) -> Self {
        Self::node(element, self.clone())
    }

    /// Builds a list holding the elements of `elements` in the same order.
    ///
    /// Elements are popped from the back of the vector, so the list is
    /// assembled tail first without a separate reverse pass.
    #[must_use]
    pub fn from_vec(mut elements: Vec<A>) -> Self {
        let mut list = Self::Empty;
        while let Some(element) = elements.pop() {
            list = Self::node(element, list);
        }
        list
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    /// use stackless::persistent::List;
    ///
    /// assert_eq!(list![1, 2].head(), Ok(&1));
    /// assert!(List::<i32>::empty().head().is_err());
    /// ```
    pub fn head(&self) -> Result<&A, EmptyStructureError> {
        self.head_option().ok_or(EmptyStructureError::new("head"))
    }

    /// Returns the first element, or `None` if the list is empty.
    #[inline]
    pub fn head_option(&self) -> Option<&A> {
        match self {
            Self::Empty => None,
            Self::Node(node) => Some(&node.head),
        }
    }

    /// Returns the list without its first element, sharing the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the list is empty.
    pub fn tail(&self) -> Result<Self, EmptyStructureError> {
        match self {
            Self::Empty => Err(EmptyStructureError::new("tail")),
            Self::Node(node) => Ok(node.tail.clone()),
        }
    }

    /// Replaces the first element, keeping the tail shared.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// assert_eq!(list![1, 2, 3].set_head(9), Ok(list![9, 2, 3]));
    /// ```
    pub fn set_head(&self, head: A) -> Result<Self, EmptyStructureError> {
        match self {
            Self::Empty => Err(EmptyStructureError::new("set_head")),
            Self::Node(node) => Ok(Self::node(head, node.tail.clone())),
        }
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    pub const fn iter(&self) -> ListIterator<'_, A> {
        ListIterator { current: self }
    }
}

impl<A: 'static> List<A> {
    fn fold_step<B, F>(list: Self, accumulator: B, mut combine: F) -> Trampoline<B>
    where
        B: 'static,
        F: FnMut(B, &A) -> B + 'static,
    {
        match &list {
            Self::Empty => Trampoline::done(accumulator),
            Self::Node(node) => {
                let next = combine(accumulator, &node.head);
                let tail = node.tail.clone();
                Trampoline::more(move || Self::fold_step(tail, next, combine))
            }
        }
    }

    /// Left fold: walks the list head to tail, threading an accumulator.
    ///
    /// Every other traversal on `List` is built on this. It runs on a
    /// trampoline, so it is safe for lists of any length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// let total = list![1, 2, 3, 4].fold(0, |accumulator, x| accumulator + x);
    /// assert_eq!(total, 10);
    /// ```
    pub fn fold<B, F>(&self, initial: B, combine: F) -> B
    where
        B: 'static,
        F: FnMut(B, &A) -> B + 'static,
    {
        Self::fold_step(self.clone(), initial, combine).eval()
    }

    fn try_fold_step<B, E, F>(list: Self, accumulator: B, mut combine: F) -> Trampoline<Result<B, E>>
    where
        B: 'static,
        E: 'static,
        F: FnMut(B, &A) -> Result<B, E> + 'static,
    {
        match &list {
            Self::Empty => Trampoline::done(Ok(accumulator)),
            Self::Node(node) => match combine(accumulator, &node.head) {
                Ok(next) => {
                    let tail = node.tail.clone();
                    Trampoline::more(move || Self::try_fold_step(tail, next, combine))
                }
                Err(error) => Trampoline::done(Err(error)),
            },
        }
    }

    /// Left fold that stops at the first error returned by `combine`.
    ///
    /// The error is returned as is; no further elements are visited.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` produced by `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// let checked = list![1, 2, 3].try_fold(0_u8, |accumulator, x| {
    ///     accumulator.checked_add(*x).ok_or("overflow")
    /// });
    /// assert_eq!(checked, Ok(6));
    /// ```
    pub fn try_fold<B, E, F>(&self, initial: B, combine: F) -> Result<B, E>
    where
        B: 'static,
        E: 'static,
        F: FnMut(B, &A) -> Result<B, E> + 'static,
    {
        Self::try_fold_step(self.clone(), initial, combine).eval()
    }

    /// Right fold: combines from the last element back to the first.
    ///
    /// The suffixes of the list are collected by a left fold and then
    /// visited in reverse, so no native recursion is involved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    /// use stackless::persistent::List;
    ///
    /// let list = list![1, 2, 3];
    /// let rebuilt = list.fold_right(List::empty(), |x, tail| tail.cons(*x));
    /// assert_eq!(rebuilt, list);
    /// ```
    pub fn fold_right<B, F>(&self, initial: B, mut combine: F) -> B
    where
        F: FnMut(&A, B) -> B,
    {
        let suffixes = self.suffixes();
        let mut accumulator = initial;
        for suffix in suffixes.iter().rev() {
            if let Self::Node(node) = suffix {
                accumulator = combine(&node.head, accumulator);
            }
        }
        accumulator
    }

    /// Every non-empty suffix, longest first.
    fn suffixes(&self) -> Vec<Self> {
        let start = Self::fold_step(self.clone(), (Vec::new(), self.clone()), |(mut buffer, suffix), _| {
            let next = suffix.tail().unwrap_or_default();
            buffer.push(suffix);
            (buffer, next)
        });
        start.eval().0
    }

    /// Number of elements, counted by a fold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    /// use stackless::persistent::List;
    ///
    /// assert_eq!(list![1, 2, 3].length(), 3);
    /// assert_eq!(List::<i32>::empty().length(), 0);
    /// ```
    pub fn length(&self) -> usize {
        self.fold(0, |count, _| count + 1)
    }

    /// Applies `function` to every element, preserving order.
    ///
    /// Results are gathered into a buffer owned by this call and the list is
    /// rebuilt from its back, which keeps the traversal stack-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// assert_eq!(list![1, 2, 3].map(|x| x * 10), list![10, 20, 30]);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut function: F) -> List<B>
    where
        B: 'static,
        F: FnMut(&A) -> B + 'static,
    {
        let buffer = self.fold(Vec::new(), move |mut buffer, element| {
            buffer.push(function(element));
            buffer
        });
        List::from_vec(buffer)
    }

    /// Maps every element to a list and concatenates the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// let doubled = list![1, 2].flat_map(|x| list![*x, *x]);
    /// assert_eq!(doubled, list![1, 1, 2, 2]);
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(&self, function: F) -> List<B>
    where
        B: Clone + 'static,
        F: FnMut(&A) -> List<B> + 'static,
    {
        self.map(function).concat()
    }

    /// Returns the list with its first `count` elements removed.
    ///
    /// The result is a shared suffix of `self`. Dropping more elements than
    /// the list holds yields the empty list; dropping zero returns the list
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    /// use stackless::persistent::List;
    ///
    /// assert_eq!(list![1, 2, 3].drop(2), list![3]);
    /// assert_eq!(list![1, 2, 3].drop(10), List::empty());
    /// assert_eq!(list![1, 2, 3].drop(0), list![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn drop(&self, count: usize) -> Self {
        fn step<A: 'static>(list: List<A>, remaining: usize) -> Trampoline<List<A>> {
            if remaining == 0 {
                return Trampoline::done(list);
            }
            match list {
                List::Empty => Trampoline::done(List::Empty),
                List::Node(node) => {
                    let tail = node.tail.clone();
                    Trampoline::more(move || step(tail, remaining - 1))
                }
            }
        }

        step(self.clone(), count).eval()
    }

    /// Removes the longest prefix whose elements satisfy `predicate`.
    ///
    /// Returns a shared suffix of `self`.
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        let mut current = self;
        while let Self::Node(node) = current {
            if !predicate(&node.head) {
                break;
            }
            current = &node.tail;
        }
        current.clone()
    }
}

impl<A: Clone + 'static> List<A> {
    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold(Self::Empty, |reversed, element| reversed.cons(element.clone()))
    }

    /// Copies the elements into a `Vec`, preserving order.
    pub fn to_vec(&self) -> Vec<A> {
        self.fold(Vec::new(), |mut buffer, element| {
            buffer.push(element.clone());
            buffer
        })
    }

    /// Keeps the elements satisfying `predicate`, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// assert_eq!(list![1, 2, 3, 4, 5].filter(|x| x % 2 == 1), list![1, 3, 5]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool + 'static,
    {
        let buffer = self.fold(Vec::new(), move |mut buffer, element| {
            if predicate(element) {
                buffer.push(element.clone());
            }
            buffer
        });
        Self::from_vec(buffer)
    }

    /// Returns the elements of `self` followed by `other`.
    ///
    /// Only `self` is copied; `other` becomes the shared tail of the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// assert_eq!(list![1, 2].append(&list![3, 4]), list![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        self.fold_right(other.clone(), |element, tail| tail.cons(element.clone()))
    }

    /// Returns every element except the last.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStructureError`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// assert_eq!(list![1, 2, 3].init(), Ok(list![1, 2]));
    /// ```
    pub fn init(&self) -> Result<Self, EmptyStructureError> {
        fn step<A: Clone + 'static>(list: List<A>, mut buffer: Vec<A>) -> Trampoline<Vec<A>> {
            match &list {
                List::Node(node) if !node.tail.is_empty() => {
                    buffer.push(node.head.clone());
                    let tail = node.tail.clone();
                    Trampoline::more(move || step(tail, buffer))
                }
                _ => Trampoline::done(buffer),
            }
        }

        if self.is_empty() {
            return Err(EmptyStructureError::new("init"));
        }
        Ok(Self::from_vec(step(self.clone(), Vec::new()).eval()))
    }

    /// Combines elements pairwise; the result is as long as the shorter list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// let sums = list![1, 2, 3].zip_with(&list![10, 20], |a, b| a + b);
    /// assert_eq!(sums, list![11, 22]);
    /// ```
    #[must_use]
    pub fn zip_with<B, C, F>(&self, other: &List<B>, function: F) -> List<C>
    where
        B: 'static,
        C: 'static,
        F: FnMut(&A, &B) -> C + 'static,
    {
        fn step<A: 'static, B: 'static, C: 'static, F>(
            left: List<A>,
            right: List<B>,
            mut buffer: Vec<C>,
            mut function: F,
        ) -> Trampoline<Vec<C>>
        where
            F: FnMut(&A, &B) -> C + 'static,
        {
            match (&left, &right) {
                (List::Node(left_node), List::Node(right_node)) => {
                    buffer.push(function(&left_node.head, &right_node.head));
                    let left_tail = left_node.tail.clone();
                    let right_tail = right_node.tail.clone();
                    Trampoline::more(move || step(left_tail, right_tail, buffer, function))
                }
                _ => Trampoline::done(buffer),
            }
        }

        List::from_vec(step(self.clone(), other.clone(), Vec::new(), function).eval())
    }

    /// Groups elements by the key `key_of` computes for them.
    ///
    /// Keys appear in the order of their first occurrence; each group keeps
    /// the original relative order of its elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// let groups = list![1, 2, 3, 4, 5].group_by(|x| x % 2);
    /// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 0]);
    /// assert_eq!(groups[&0], list![2, 4]);
    /// assert_eq!(groups[&1], list![1, 3, 5]);
    /// ```
    pub fn group_by<K, F>(&self, mut key_of: F) -> IndexMap<K, Self>
    where
        K: Hash + Eq + 'static,
        F: FnMut(&A) -> K + 'static,
    {
        let buckets = self.fold(IndexMap::new(), move |mut buckets: IndexMap<K, Vec<A>>, element| {
            buckets
                .entry(key_of(element))
                .or_default()
                .push(element.clone());
            buckets
        });
        buckets
            .into_iter()
            .map(|(key, elements)| (key, Self::from_vec(elements)))
            .collect()
    }
}

impl<A: PartialEq + 'static> List<A> {
    /// Returns `true` if `prefix` matches the first elements of `self`.
    ///
    /// The empty prefix matches every list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    /// use stackless::persistent::List;
    ///
    /// assert!(list![1, 2, 3].starts_with(&list![1, 2]));
    /// assert!(!list![1, 2].starts_with(&list![1, 2, 3]));
    /// assert!(list![1].starts_with(&List::empty()));
    /// ```
    pub fn starts_with(&self, prefix: &Self) -> bool {
        fn step<A: PartialEq + 'static>(list: List<A>, prefix: List<A>) -> Trampoline<bool> {
            match (&list, &prefix) {
                (_, List::Empty) => Trampoline::done(true),
                (List::Node(node), List::Node(prefix_node)) if node.head == prefix_node.head => {
                    let tail = node.tail.clone();
                    let prefix_tail = prefix_node.tail.clone();
                    Trampoline::more(move || step(tail, prefix_tail))
                }
                _ => Trampoline::done(false),
            }
        }

        step(self.clone(), prefix.clone()).eval()
    }

    /// Returns `true` if `subsequence` occurs as a contiguous run in `self`.
    ///
    /// The empty subsequence is found in every list, including the empty one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// let list = list![1, 2, 3, 4, 5];
    /// assert!(list.has_subsequence(&list![4, 5]));
    /// assert!(!list.has_subsequence(&list![5, 6]));
    /// ```
    pub fn has_subsequence(&self, subsequence: &Self) -> bool {
        fn step<A: PartialEq + 'static>(list: List<A>, subsequence: List<A>) -> Trampoline<bool> {
            match &list {
                List::Empty => Trampoline::done(subsequence.is_empty()),
                List::Node(_) if list.starts_with(&subsequence) => Trampoline::done(true),
                List::Node(node) => {
                    let tail = node.tail.clone();
                    Trampoline::more(move || step(tail, subsequence))
                }
            }
        }

        step(self.clone(), subsequence.clone()).eval()
    }
}

impl<A: Clone + 'static> List<List<A>> {
    /// Flattens a list of lists, left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// let nested = list![list![1, 2], list![], list![3]];
    /// assert_eq!(nested.concat(), list![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn concat(&self) -> List<A> {
        self.fold_right(List::Empty, |list, tail| list.append(&tail))
    }
}

impl<A> List<A>
where
    A: Clone + From<u8> + 'static,
{
    /// Sum of the elements; `0` for the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::list;
    ///
    /// assert_eq!(list![1_i64, 2, 3].sum(), 6);
    /// assert_eq!(list![1_u32, 2, 3].sum(), 6);
    /// ```
    pub fn sum(&self) -> A
    where
        A: Add<Output = A>,
    {
        self.fold(A::from(0), |total, x| total + x.clone())
    }

    /// Product of the elements; `1` for the empty list. Stops at the first
    /// zero.
    pub fn product(&self) -> A
    where
        A: Mul<Output = A> + PartialEq,
    {
        let zero = A::from(0);
        self.try_fold(A::from(1), move |total, x| {
            if *x == zero { Err(zero.clone()) } else { Ok(total * x.clone()) }
        })
        .unwrap_or_else(|zero| zero)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`List`].
pub struct ListIterator<'a, A> {
    current: &'a List<A>,
}

impl<'a, A> Iterator for ListIterator<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            List::Empty => None,
            List::Node(node) => {
                self.current = &node.tail;
                Some(&node.head)
            }
        }
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = ListIterator<'a, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A> Clone for List<A> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(node) => Self::Node(ReferenceCounter::clone(node)),
        }
    }
}

impl<A> Default for List<A> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<A: PartialEq> PartialEq for List<A> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for List<A> {}

impl<A: Hash> Hash for List<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count: usize = 0;
        for element in self {
            element.hash(state);
            count += 1;
        }
        count.hash(state);
    }
}

impl<A: fmt::Debug> fmt::Debug for List<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for List<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use rstest::rstest;

    // =========================================================================
    // Construction and Access
    // =========================================================================

    #[rstest]
    fn test_empty_has_no_head() {
        let list: List<i32> = List::empty();
        assert!(list.is_empty());
        assert_eq!(list.head(), Err(EmptyStructureError::new("head")));
        assert_eq!(list.tail().unwrap_err().to_string(), "tail of empty list");
        assert_eq!(list.set_head(1).unwrap_err().operation, "set_head");
        assert_eq!(list.init().unwrap_err().operation, "init");
    }

    #[rstest]
    fn test_cons_shares_tail() {
        let tail = list![2, 3];
        let list = tail.cons(1);
        let List::Node(node) = &list else {
            panic!("expected a node");
        };
        let (List::Node(shared), List::Node(original)) = (node.tail(), &tail) else {
            panic!("expected nodes");
        };
        assert!(ReferenceCounter::ptr_eq(shared, original));
    }

    #[rstest]
    fn test_drop_shares_suffix() {
        let list = list![1, 2, 3];
        let dropped = list.drop(1);
        let (List::Node(suffix), List::Node(head)) = (&dropped, &list) else {
            panic!("expected nodes");
        };
        let List::Node(second) = head.tail() else {
            panic!("expected a node");
        };
        assert!(ReferenceCounter::ptr_eq(suffix, second));
    }

    #[rstest]
    #[case(0, vec![1, 2, 3])]
    #[case(1, vec![2, 3])]
    #[case(3, vec![])]
    #[case(7, vec![])]
    fn test_drop(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(list![1, 2, 3].drop(count).to_vec(), expected);
    }

    #[rstest]
    fn test_drop_while() {
        assert_eq!(list![1, 2, 3, 1].drop_while(|x| *x < 3), list![3, 1]);
        assert_eq!(list![1, 2].drop_while(|_| true), List::empty());
        assert_eq!(List::<i32>::empty().drop_while(|_| true), List::empty());
    }

    #[rstest]
    fn test_init_and_set_head() {
        assert_eq!(list![1].init(), Ok(List::empty()));
        assert_eq!(list![1, 2, 3].init(), Ok(list![1, 2]));
        assert_eq!(list![1, 2].set_head(5), Ok(list![5, 2]));
    }

    // =========================================================================
    // Folds
    // =========================================================================

    #[rstest]
    fn test_fold_order() {
        let result = list![1, 2, 3, 4].fold(String::new(), |accumulator, x| format!("{x}{accumulator}"));
        assert_eq!(result, "4321");
    }

    #[rstest]
    fn test_fold_right_order() {
        let result = list![1, 2, 3].fold_right(String::new(), |x, accumulator| format!("{x}{accumulator}"));
        assert_eq!(result, "123");
    }

    #[rstest]
    fn test_try_fold_stops_at_first_error() {
        let result = list![1, 2, 3, 4].try_fold(0_i32, |total, x| {
            if *x == 3 { Err(format!("hit {x} after {total}")) } else { Ok(total + x) }
        });
        assert_eq!(result, Err("hit 3 after 3".to_string()));
    }

    #[rstest]
    fn test_sum_and_product() {
        assert_eq!(list![1_i64, 2, 3].sum(), 6);
        assert_eq!(List::<i64>::empty().sum(), 0);
        assert!((list![2.0_f64, 3.5].product() - 7.0).abs() < f64::EPSILON);
        assert!(list![2.0_f64, 0.0, 3.0].product().abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_sum_and_product_over_other_numeric_types() {
        assert_eq!(list![1_u8, 2, 3].sum(), 6);
        assert_eq!(list![2_i32, -3, 4].product(), -24);
        assert_eq!(list![5_u64, 0, 7].product(), 0);
        assert_eq!(List::<i32>::empty().product(), 1);
        assert!((list![0.5_f32, 0.25].sum() - 0.75).abs() < f32::EPSILON);
    }

    // =========================================================================
    // Derived Traversals
    // =========================================================================

    #[rstest]
    fn test_length_and_reverse() {
        let list = list![1, 2, 3];
        assert_eq!(list.length(), 3);
        assert_eq!(list.reverse(), list![3, 2, 1]);
        assert_eq!(List::<i32>::empty().reverse(), List::empty());
    }

    #[rstest]
    fn test_map_filter_flat_map() {
        let list = list![1, 2, 3];
        assert_eq!(list.map(|x| x.to_string()), list!["1".to_string(), "2".to_string(), "3".to_string()]);
        assert_eq!(list.filter(|x| *x != 2), list![1, 3]);
        assert_eq!(list.flat_map(|x| List::from_vec(vec![*x; *x as usize])), list![1, 2, 2, 3, 3, 3]);
    }

    #[rstest]
    fn test_append_and_concat() {
        assert_eq!(list![1].append(&List::empty()), list![1]);
        assert_eq!(List::empty().append(&list![1]), list![1]);
        let nested: List<List<i32>> = list![list![1], list![2, 3]];
        assert_eq!(nested.concat(), list![1, 2, 3]);
    }

    #[rstest]
    fn test_zip_with() {
        let pairs = list![1, 2, 3].zip_with(&list!["a", "b"], |n, s| format!("{s}{n}"));
        assert_eq!(pairs, list!["a1".to_string(), "b2".to_string()]);
    }

    #[rstest]
    fn test_group_by() {
        let list: List<i32> = (1..=10).collect();
        let groups = list.group_by(|x| x % 2);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&0], list![2, 4, 6, 8, 10]);
        assert_eq!(groups[&1], list![1, 3, 5, 7, 9]);
        assert!(List::<i32>::empty().group_by(|x| *x).is_empty());
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![], true)]
    #[case(vec![1, 2, 3], vec![1, 2], true)]
    #[case(vec![1, 2, 3], vec![2], false)]
    #[case(vec![1], vec![1, 2], false)]
    #[case(vec![], vec![], true)]
    fn test_starts_with(#[case] list: Vec<i32>, #[case] prefix: Vec<i32>, #[case] expected: bool) {
        assert_eq!(List::from_vec(list).starts_with(&List::from_vec(prefix)), expected);
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4, 5], vec![4, 5], true)]
    #[case(vec![1, 2, 3, 4, 5], vec![5, 6], false)]
    #[case(vec![1, 2, 3, 4, 5], vec![2, 3, 4], true)]
    #[case(vec![1, 2, 3, 4, 5], vec![], true)]
    #[case(vec![], vec![], true)]
    #[case(vec![], vec![1], false)]
    fn test_has_subsequence(#[case] list: Vec<i32>, #[case] subsequence: Vec<i32>, #[case] expected: bool) {
        assert_eq!(List::from_vec(list).has_subsequence(&List::from_vec(subsequence)), expected);
    }

    // =========================================================================
    // Stack Safety
    // =========================================================================

    #[rstest]
    fn test_long_list_traversals() {
        let list: List<u32> = (0..200_000).collect();
        assert_eq!(list.length(), 200_000);
        assert_eq!(list.reverse().head(), Ok(&199_999));
        assert_eq!(list.map(|x| x + 1).drop(199_999), list![200_000]);
        assert_eq!(list.filter(|x| x % 100_000 == 0), list![0, 100_000]);
        assert!(list.has_subsequence(&list![199_998, 199_999]));
    }

    // =========================================================================
    // Display
    // =========================================================================

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", List::<i32>::empty()), "[]");
        assert_eq!(format!("{}", list![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format!("{:?}", list![1, 2]), "[1, 2]");
    }
}
