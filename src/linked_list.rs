//! A singly linked list with indexed access.
//!
//! Indexed operations walk from the head and report an out-of-range index as
//! [`Error::IndexOutOfBounds`] instead of panicking.

use crate::error::{Error, Result};
use std::fmt;
use std::iter::FusedIterator;

pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Appends `value` to the end of the list.
    pub fn add(&mut self, value: T) {
        let slot = self.link_at(self.len);
        *slot = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at `index`, shifting later elements back.
    /// `index == len` appends.
    pub fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_bounds(index));
        }
        let slot = self.link_at(index);
        let next = slot.take();
        *slot = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let err = self.out_of_bounds(index);
        if index >= self.len {
            return Err(err);
        }
        let node = self.link_at(index).as_deref_mut().ok_or(err)?;
        Ok(std::mem::replace(&mut node.value, value))
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.iter()
            .nth(index)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        let err = self.out_of_bounds(index);
        if index >= self.len {
            return Err(err);
        }
        let slot = self.link_at(index);
        let Node { value, next } = *slot.take().ok_or(err)?;
        *slot = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// The link that holds (or would hold) the element at `index`. Stops early at the tail.
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut cur = &mut self.head;
        let mut steps = index;
        while steps > 0 {
            let Some(node) = cur else {
                break;
            };
            cur = &mut node.next;
            steps -= 1;
        }
        cur
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Keep a cursor on the tail so appending n values stays linear.
        let mut tail = self.link_at(self.len);
        let mut added = 0;
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}
