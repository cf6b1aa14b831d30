//! An unbalanced binary search tree storing each distinct value once.
//!
//! Nodes are owned by their parent through `Box`, so there are no parent links and no
//! `unsafe`. Nothing here rebalances: inserting in sorted order produces a chain as deep as
//! the tree is long. Because of that every walk below (insertion, search, height, the
//! iterators and `Drop`) runs on a loop or an explicit stack instead of recursing.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, TreeOps};
//!
//! let mut tree = OrderedTree::new();
//! for value in [5, 3, 8, 1, 4, 7, 9] {
//!     assert!(tree.insert(value));
//! }
//!
//! // Duplicates are rejected and change nothing.
//! assert!(!tree.insert(4));
//! assert_eq!(tree.len(), 7);
//!
//! let values: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(values, [1, 3, 4, 5, 7, 8, 9]);
//! ```

use crate::tree::TreeOps;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use tracing::trace;

pub struct OrderedTree<T: Ord> {
    root: Link<T>,
    len: usize,
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// Borrowing in-order iterator returned by [`OrderedTree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

/// Owning in-order iterator returned by `OrderedTree::into_iter`.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T: Ord> TreeOps<T> for OrderedTree<T> {
    fn insert(&mut self, value: T) -> bool {
        let Some(slot) = self.find_slot(&value) else {
            trace!(len = self.len, "rejected duplicate insert");
            return false;
        };
        *slot = Some(Node::boxed(value));
        self.len += 1;
        true
    }

    fn search(&self, value: &T) -> bool {
        let mut cur = &self.root;
        while let Some(node) = cur {
            match value.cmp(&node.value) {
                Ordering::Less => cur = &node.left,
                Ordering::Greater => cur = &node.right,
                Ordering::Equal => return true,
            }
        }
        false
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        // The height of the root is the depth of its deepest node.
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    fn traverse<F: FnMut(&T)>(&self, visit: F) {
        self.iter().for_each(visit);
    }
}

impl<T: Ord> OrderedTree<T> {
    pub fn new() -> Self {
        OrderedTree { root: None, len: 0 }
    }

    /// Values in ascending order. Each call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(&self.root);
        iter
    }

    /// Returns the empty link where `value` belongs, or `None` if an equal value is already
    /// stored.
    fn find_slot(&mut self, value: &T) -> Option<&mut Link<T>> {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match value.cmp(&node.value) {
                Ordering::Less => cur = &mut node.left,
                Ordering::Greater => cur = &mut node.right,
                Ordering::Equal => return None,
            }
        }
        Some(cur)
    }
}

impl<T> Node<T> {
    fn boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

/// Frees nodes one at a time so that a long chain is not dropped recursively.
fn dismantle<T>(mut stack: Vec<Box<Node<T>>>) {
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<T: Ord> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        dismantle(self.root.take().into_iter().collect());
    }
}

impl<T: Ord> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.take());
        self.len = 0;
        iter
    }
}

impl<'a, T: Ord> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link {
            self.stack.push(&**node);
            link = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { value, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        dismantle(std::mem::take(&mut self.stack));
    }
}

impl<T: fmt::Debug + Ord> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
