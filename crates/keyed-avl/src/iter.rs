use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// Direction of an in-order walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IteratorType {
    /// Ascending key order: left, self, right.
    Normal,
    /// Descending key order: right, self, left.
    Reverse,
}

/// Lazy in-order walk over borrowed values.
///
/// Holds the spine of not-yet-visited ancestors on an explicit stack, so each
/// call to `next` does amortised O(1) work and at most O(height) memory.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
    pub iterator_type: IteratorType,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize, iterator_type: IteratorType) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
            iterator_type,
        };
        iter.descend(root);
        iter
    }

    fn descend(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = match self.iterator_type {
                IteratorType::Normal => n.left(),
                IteratorType::Reverse => n.right(),
            };
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.descend(match self.iterator_type {
            IteratorType::Normal => node.right(),
            IteratorType::Reverse => node.left(),
        });
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning ascending walk. Consumes the tree node by node.
#[derive(Debug)]
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.descend(root);
        iter
    }

    fn descend(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let mut node = self.stack.pop()?;
        self.descend(node.right.take());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
