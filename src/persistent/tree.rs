//! Binary trees with values at the leaves.
//!
//! Every traversal is a [`Tree::fold`], and `fold` itself is built from
//! [`Trampoline::flat_map`]: the left subtree's result is fed into a
//! continuation that folds the right subtree. Recursion over the shape of
//! the tree therefore never recurses natively once per node.
//!
//! Equality, hashing and dropping walk the tree with an explicit stack for
//! the same reason.

use std::hash::{Hash, Hasher};

use super::ReferenceCounter;
use crate::control::Trampoline;

/// A binary tree whose subtrees are shared.
///
/// # Examples
///
/// ```rust
/// use stackless::persistent::Tree;
///
/// let tree = Tree::branch(Tree::branch(Tree::leaf(1), Tree::leaf(2)), Tree::leaf(3));
/// assert_eq!(tree.size(), 5);
/// assert_eq!(tree.maximum(), 3);
/// assert_eq!(tree.depth(), 2);
/// ```
#[derive(Debug, Clone)]
pub enum Tree<A> {
    /// A single value.
    Leaf(A),
    /// Two subtrees.
    Branch(ReferenceCounter<Self>, ReferenceCounter<Self>),
}

type LeafFunction<A, B> = ReferenceCounter<dyn Fn(&A) -> B>;
type BranchFunction<B> = ReferenceCounter<dyn Fn(B, B) -> B>;

impl<A> Tree<A> {
    /// Creates a leaf.
    #[inline]
    pub const fn leaf(value: A) -> Self {
        Self::Leaf(value)
    }

    /// Creates a branch over two subtrees.
    #[inline]
    pub fn branch(left: Self, right: Self) -> Self {
        Self::Branch(ReferenceCounter::new(left), ReferenceCounter::new(right))
    }
}

impl<A: 'static> Tree<A> {
    fn fold_step<B: 'static>(
        tree: &Self,
        leaf: &LeafFunction<A, B>,
        branch: &BranchFunction<B>,
    ) -> Trampoline<B> {
        match tree {
            Self::Leaf(value) => Trampoline::done(leaf(value)),
            Self::Branch(left, right) => {
                let left = ReferenceCounter::clone(left);
                let right = ReferenceCounter::clone(right);
                let (left_leaf, left_branch) = (ReferenceCounter::clone(leaf), ReferenceCounter::clone(branch));
                let (right_leaf, right_branch) = (ReferenceCounter::clone(leaf), ReferenceCounter::clone(branch));

                Trampoline::more(move || Self::fold_step(&left, &left_leaf, &left_branch)).flat_map(
                    move |left_result| {
                        Self::fold_step(&right, &right_leaf, &right_branch)
                            .map(move |right_result| right_branch(left_result, right_result))
                    },
                )
            }
        }
    }

    /// Replaces every leaf with `leaf(value)` and every branch with
    /// `branch(left, right)`, bottom up.
    ///
    /// `tree.fold(|a| Tree::leaf(a.clone()), Tree::branch) == tree` for any
    /// tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::persistent::Tree;
    ///
    /// let tree = Tree::branch(Tree::branch(Tree::leaf(1), Tree::leaf(2)), Tree::leaf(3));
    /// let joined = tree.fold(|value| value.to_string(), |left, right| left + &right);
    /// assert_eq!(joined, "123");
    /// ```
    pub fn fold<B, L, G>(&self, leaf: L, branch: G) -> B
    where
        B: 'static,
        L: Fn(&A) -> B + 'static,
        G: Fn(B, B) -> B + 'static,
    {
        let leaf: LeafFunction<A, B> = ReferenceCounter::new(leaf);
        let branch: BranchFunction<B> = ReferenceCounter::new(branch);
        Self::fold_step(self, &leaf, &branch).eval()
    }

    /// Number of leaves and branches.
    pub fn size(&self) -> usize {
        self.fold(|_| 1, |left, right| 1 + left + right)
    }

    /// Length of the longest path from the root to a leaf; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.fold(|_| 0, |left: usize, right| 1 + left.max(right))
    }

    /// Applies `function` to every leaf, keeping the shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::persistent::Tree;
    ///
    /// let tree = Tree::branch(Tree::leaf(1), Tree::leaf(2));
    /// assert_eq!(
    ///     tree.map(|x| x.to_string()),
    ///     Tree::branch(Tree::leaf("1".to_string()), Tree::leaf("2".to_string())),
    /// );
    /// ```
    pub fn map<B, F>(&self, function: F) -> Tree<B>
    where
        B: 'static,
        F: Fn(&A) -> B + 'static,
    {
        self.fold(move |value| Tree::Leaf(function(value)), Tree::branch)
    }
}

impl<A: Ord + Clone + 'static> Tree<A> {
    /// The largest leaf value.
    pub fn maximum(&self) -> A {
        self.fold(A::clone, Ord::max)
    }
}

impl<A: PartialEq> PartialEq for Tree<A> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Leaf(left), Self::Leaf(right)) => {
                    if left != right {
                        return false;
                    }
                }
                (Self::Branch(left, right), Self::Branch(other_left, other_right)) => {
                    pending.push((&**right, &**other_right));
                    pending.push((&**left, &**other_left));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<A: Eq> Eq for Tree<A> {}

impl<A: Hash> Hash for Tree<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            match tree {
                Self::Leaf(value) => {
                    state.write_u8(0);
                    value.hash(state);
                }
                Self::Branch(left, right) => {
                    state.write_u8(1);
                    pending.push(&**right);
                    pending.push(&**left);
                }
            }
        }
    }
}

// Subtrees held only by this tree are unlinked onto a stack and dropped one
// at a time. Their slots are refilled with a shared leaf from the same tree,
// so each unlinked branch drops shallowly.
impl<A> Drop for Tree<A> {
    fn drop(&mut self) {
        let Self::Branch(left, right) = self else {
            return;
        };
        if ReferenceCounter::get_mut(left).is_none() && ReferenceCounter::get_mut(right).is_none() {
            return;
        }

        let mut cursor = &*left;
        while let Self::Branch(next, _) = &**cursor {
            cursor = next;
        }
        let filler = ReferenceCounter::clone(cursor);

        let mut pending = vec![
            std::mem::replace(left, ReferenceCounter::clone(&filler)),
            std::mem::replace(right, ReferenceCounter::clone(&filler)),
        ];
        while let Some(subtree) = pending.pop() {
            if let Ok(mut tree) = ReferenceCounter::try_unwrap(subtree) {
                if let Self::Branch(left, right) = &mut tree {
                    pending.push(std::mem::replace(left, ReferenceCounter::clone(&filler)));
                    pending.push(std::mem::replace(right, ReferenceCounter::clone(&filler)));
                }
            }
        }
    }
}
