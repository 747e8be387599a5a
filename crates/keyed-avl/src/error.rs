use thiserror::Error;

/// A structural invariant found broken by
/// [`AvlTree::check_invariants`](crate::AvlTree::check_invariants).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("AVL balance violated: balance factor {balance} at depth {depth}")]
    Unbalanced { balance: isize, depth: usize },
    #[error("Height cache mismatch: expected {expected}, got {cached} at depth {depth}")]
    StaleHeight {
        expected: usize,
        cached: usize,
        depth: usize,
    },
    #[error("Node order violated at in-order position {position}")]
    OutOfOrder { position: usize },
    #[error("Length mismatch: counter says {counted}, tree holds {actual}")]
    LengthMismatch { counted: usize, actual: usize },
}
