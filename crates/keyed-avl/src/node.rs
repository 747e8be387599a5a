//! Tree vertex and the height / balance primitives.

/// Owned, optional child link. Each node exclusively owns its children.
pub type Link<T> = Option<Box<Node<T>>>;

/// One vertex of the tree.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
    /// Cached height of the subtree rooted here. A leaf has height 1.
    pub height: usize,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub fn leaf(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Recomputes the cached height from the children's cached heights.
    #[inline]
    pub fn update_height(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
    }
}

/// Cached height of `node`, `0` for an absent node.
#[inline]
pub fn height<T>(node: Option<&Node<T>>) -> usize {
    node.map_or(0, |n| n.height)
}

/// `height(left) - height(right)`, `0` for an absent node.
#[inline]
pub fn balance_factor<T>(node: Option<&Node<T>>) -> isize {
    match node {
        None => 0,
        Some(n) => height(n.left()) as isize - height(n.right()) as isize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_node_has_zero_height_and_balance() {
        assert_eq!(height::<i32>(None), 0);
        assert_eq!(balance_factor::<i32>(None), 0);
    }

    #[test]
    fn leaf_has_height_one() {
        let leaf = Node::new(7);
        assert_eq!(height(Some(&leaf)), 1);
        assert_eq!(balance_factor(Some(&leaf)), 0);
    }

    #[test]
    fn update_height_reads_children() {
        let mut n = Node::new(5);
        n.left = Some(Node::leaf(3));
        assert_eq!(n.height, 1);
        n.update_height();
        assert_eq!(n.height, 2);
        assert_eq!(balance_factor(Some(&n)), 1);

        let mut r = Node::leaf(8);
        r.right = Some(Node::leaf(9));
        r.update_height();
        n.right = Some(r);
        n.update_height();
        assert_eq!(n.height, 3);
        assert_eq!(balance_factor(Some(&n)), -1);
    }
}
