use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::assert::assert_avl_tree;
use crate::error::InvariantError;
use crate::iter::{IntoIter, Iter, IteratorType};
use crate::node::{height, Link};
use crate::print::print;
use crate::util;

/// Ordered container backed by an AVL tree.
///
/// Every stored value is ordered by the key `key_fn(&value)`. Keys are
/// recomputed on demand and never stored. At most one value is kept per key:
/// inserting a value whose key is already present leaves the stored value
/// untouched and drops the new one.
///
/// # Example
///
/// ```
/// use keyed_avl::AvlTree;
///
/// let mut tree = AvlTree::with_key(|s: &String| s.len());
/// tree.insert("ccc".to_string());
/// tree.insert("a".to_string());
/// tree.insert("bb".to_string());
/// tree.insert("zz".to_string()); // key 2 is taken, dropped
///
/// assert_eq!(tree.get(&2).map(String::as_str), Some("bb"));
/// let asc: Vec<&str> = tree.iter().map(String::as_str).collect();
/// assert_eq!(asc, ["a", "bb", "ccc"]);
/// ```
pub struct AvlTree<T, K = T, F = fn(&T) -> K> {
    root: Link<T>,
    len: usize,
    key_fn: F,
    _key: PhantomData<fn() -> K>,
}

impl<T> AvlTree<T, T, fn(&T) -> T>
where
    T: Ord + Clone,
{
    /// Empty tree keyed by the values themselves.
    pub fn new() -> Self {
        Self::with_key(<T as Clone>::clone)
    }

    /// Tree keyed by the values themselves, populated from `items` in
    /// iteration order.
    ///
    /// ```
    /// use keyed_avl::AvlTree;
    ///
    /// let tree = AvlTree::from_items([1, 2, 3, 4]);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    /// assert_eq!(tree.reversed().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
    /// ```
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from_items_with_key(items, <T as Clone>::clone)
    }
}

impl<T> Default for AvlTree<T, T, fn(&T) -> T>
where
    T: Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K, F> AvlTree<T, K, F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    /// Empty tree keyed by `key_fn`.
    pub fn with_key(key_fn: F) -> Self {
        Self {
            root: None,
            len: 0,
            key_fn,
            _key: PhantomData,
        }
    }

    /// Tree keyed by `key_fn`, populated from `items` in iteration order.
    pub fn from_items_with_key<I: IntoIterator<Item = T>>(items: I, key_fn: F) -> Self {
        let mut tree = Self::with_key(key_fn);
        tree.extend(items);
        tree
    }

    /// Inserts `value`. A no-op when its key is already present.
    pub fn insert(&mut self, value: T) {
        let (root, inserted) = util::insert(self.root.take(), value, &self.key_fn);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
    }

    pub fn get(&self, key: &K) -> Option<&T> {
        util::find(self.root.as_deref(), key, &self.key_fn)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes the value stored under `key`, if any.
    pub fn remove(&mut self, key: &K) {
        self.take(key);
    }

    /// Removes and returns the value stored under `key`.
    pub fn take(&mut self, key: &K) -> Option<T> {
        let (root, removed) = util::remove(self.root.take(), key, &self.key_fn);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Applies this tree's key function to `value`.
    pub fn key_of(&self, value: &T) -> K {
        (self.key_fn)(value)
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        assert_avl_tree(self.root.as_deref(), self.len, &self.key_fn)
    }
}

impl<T, K, F> AvlTree<T, K, F> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        debug!(len = self.len, "clearing tree");
        self.root = None;
        self.len = 0;
    }

    /// Height of the root, `0` when empty.
    pub fn height(&self) -> usize {
        height(self.root.as_deref())
    }

    /// Value with the smallest key.
    pub fn first(&self) -> Option<&T> {
        util::first(self.root.as_deref()).map(|n| &n.value)
    }

    /// Value with the largest key.
    pub fn last(&self) -> Option<&T> {
        util::last(self.root.as_deref()).map(|n| &n.value)
    }

    /// Ascending key order. Every call starts a fresh walk from the root.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len, IteratorType::Normal)
    }

    /// Descending key order, independent of any ascending walk.
    pub fn reversed(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len, IteratorType::Reverse)
    }

    /// Multi-line dump of the tree shape with cached heights.
    pub fn print(&self) -> String
    where
        T: fmt::Debug,
    {
        print(self.root.as_deref(), "")
    }
}

impl<T: Clone, K, F: Clone> Clone for AvlTree<T, K, F> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            key_fn: self.key_fn.clone(),
            _key: PhantomData,
        }
    }
}

impl<T: fmt::Debug, K, F> fmt::Debug for AvlTree<T, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, K, F> Extend<T> for AvlTree<T, K, F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for value in items {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for AvlTree<T, T, fn(&T) -> T>
where
    T: Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from_items(items)
    }
}

impl<'a, T, K, F> IntoIterator for &'a AvlTree<T, K, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, K, F> IntoIterator for AvlTree<T, K, F> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.root, self.len)
    }
}
