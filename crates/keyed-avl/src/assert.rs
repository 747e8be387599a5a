use crate::error::InvariantError;
use crate::iter::{Iter, IteratorType};
use crate::node::Node;

/// Verifies height caches, AVL balance, strict key order and the node count.
pub fn assert_avl_tree<T, K, F>(
    root: Option<&Node<T>>,
    len: usize,
    key_fn: &F,
) -> Result<(), InvariantError>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn validate_heights<T>(node: &Node<T>, depth: usize) -> Result<usize, InvariantError> {
        let lh = match node.left() {
            Some(l) => validate_heights(l, depth + 1)?,
            None => 0,
        };
        let rh = match node.right() {
            Some(r) => validate_heights(r, depth + 1)?,
            None => 0,
        };

        let expected = 1 + lh.max(rh);
        if node.height != expected {
            return Err(InvariantError::StaleHeight {
                expected,
                cached: node.height,
                depth,
            });
        }

        let balance = lh as isize - rh as isize;
        if !(-1..=1).contains(&balance) {
            return Err(InvariantError::Unbalanced { balance, depth });
        }

        Ok(expected)
    }

    if let Some(root) = root {
        validate_heights(root, 0)?;
    }

    let mut actual = 0;
    let mut prev: Option<K> = None;
    for value in Iter::new(root, len, IteratorType::Normal) {
        let key = key_fn(value);
        if prev.as_ref().is_some_and(|p| *p >= key) {
            return Err(InvariantError::OutOfOrder { position: actual });
        }
        prev = Some(key);
        actual += 1;
    }

    if actual != len {
        return Err(InvariantError::LengthMismatch {
            counted: len,
            actual,
        });
    }

    Ok(())
}
