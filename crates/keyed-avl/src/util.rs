use std::cmp::Ordering;

use tracing::trace;

use crate::node::{balance_factor, Link, Node};

/// Rotates `node` to the left, promoting its right child.
///
/// The in-order sequence is unchanged. Heights of the two nodes involved are
/// recomputed child first. A node without a right child is returned as is.
pub fn left_rotate<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut right) = node.right.take() else {
        return node;
    };
    node.right = right.left.take();
    node.update_height();
    right.left = Some(node);
    right.update_height();
    trace!(height = right.height, "left rotation");
    right
}

/// Mirror of [`left_rotate`], promoting the left child.
pub fn right_rotate<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut left) = node.left.take() else {
        return node;
    };
    node.left = left.right.take();
    node.update_height();
    left.right = Some(node);
    left.update_height();
    trace!(height = left.height, "right rotation");
    left
}

/// Inserts `value` into the subtree, returning the new subtree root and
/// whether a node was created.
///
/// When a value with an equal key is already present, the stored value is
/// kept and `value` is dropped.
pub fn insert<T, K, F>(link: Link<T>, value: T, key_fn: &F) -> (Box<Node<T>>, bool)
where
    F: Fn(&T) -> K,
    K: Ord,
{
    let key = key_fn(&value);
    insert_at(link, value, &key, key_fn)
}

fn insert_at<T, K, F>(link: Link<T>, value: T, key: &K, key_fn: &F) -> (Box<Node<T>>, bool)
where
    F: Fn(&T) -> K,
    K: Ord,
{
    let Some(mut node) = link else {
        return (Node::leaf(value), true);
    };

    let inserted = match key.cmp(&key_fn(&node.value)) {
        Ordering::Less => {
            let (left, inserted) = insert_at(node.left.take(), value, key, key_fn);
            node.left = Some(left);
            inserted
        }
        Ordering::Greater => {
            let (right, inserted) = insert_at(node.right.take(), value, key, key_fn);
            node.right = Some(right);
            inserted
        }
        Ordering::Equal => {
            trace!("key already present, insert dropped");
            false
        }
    };

    node.update_height();
    (rebalance_after_insert(node, key, key_fn), inserted)
}

fn rebalance_after_insert<T, K, F>(mut node: Box<Node<T>>, key: &K, key_fn: &F) -> Box<Node<T>>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    let bf = balance_factor(Some(&*node));
    if bf > 1 {
        let left_left = node.left().is_some_and(|l| *key < key_fn(&l.value));
        if !left_left {
            node.left = node.left.take().map(left_rotate);
        }
        return right_rotate(node);
    }
    if bf < -1 {
        let right_right = node.right().is_some_and(|r| *key > key_fn(&r.value));
        if !right_right {
            node.right = node.right.take().map(right_rotate);
        }
        return left_rotate(node);
    }
    node
}

/// Removes the value keyed by `key` from the subtree, returning the new
/// subtree root and the removed value.
///
/// A node with two children takes over the value of its in-order successor,
/// which is unlinked from the right subtree.
pub fn remove<T, K, F>(link: Link<T>, key: &K, key_fn: &F) -> (Link<T>, Option<T>)
where
    F: Fn(&T) -> K,
    K: Ord,
{
    let Some(mut node) = link else {
        return (None, None);
    };

    let removed = match key.cmp(&key_fn(&node.value)) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key, key_fn);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key, key_fn);
            node.right = right;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => {
                let Node { value, .. } = *node;
                return (right, Some(value));
            }
            (left, None) => {
                let Node { value, .. } = *node;
                return (left, Some(value));
            }
            (Some(left), Some(right)) => {
                let (rest, successor) = remove_min(right);
                node.left = Some(left);
                node.right = rest;
                Some(std::mem::replace(&mut node.value, successor))
            }
        },
    };

    (Some(rebalance_after_remove(node)), removed)
}

/// Unlinks the minimum node of the subtree, returning the rebalanced rest and
/// the minimum value.
fn remove_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (rest, min) = remove_min(left);
            node.left = rest;
            (Some(rebalance_after_remove(node)), min)
        }
    }
}

fn rebalance_after_remove<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let bf = balance_factor(Some(&*node));
    if bf > 1 {
        if balance_factor(node.left()) < 0 {
            node.left = node.left.take().map(left_rotate);
        }
        return right_rotate(node);
    }
    if bf < -1 {
        if balance_factor(node.right()) > 0 {
            node.right = node.right.take().map(right_rotate);
        }
        return left_rotate(node);
    }
    node
}

/// Binary search for the value keyed by `key`.
pub fn find<'a, T, K, F>(node: Option<&'a Node<T>>, key: &K, key_fn: &F) -> Option<&'a T>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    let node = node?;
    match key.cmp(&key_fn(&node.value)) {
        Ordering::Equal => Some(&node.value),
        Ordering::Less => find(node.left(), key, key_fn),
        Ordering::Greater => find(node.right(), key, key_fn),
    }
}

pub fn first<T>(mut node: Option<&Node<T>>) -> Option<&Node<T>> {
    while let Some(l) = node?.left() {
        node = Some(l);
    }
    node
}

pub fn last<T>(mut node: Option<&Node<T>>) -> Option<&Node<T>> {
    while let Some(r) = node?.right() {
        node = Some(r);
    }
    node
}
