use keyed_avl::{AvlTree, IteratorType};

#[test]
fn identity_iterable_matrix() {
    let tree = AvlTree::from_items([1, 2, 3, 4]);
    let asc: Vec<i32> = tree.iter().copied().collect();
    let desc: Vec<i32> = tree.reversed().copied().collect();
    assert_eq!(asc, vec![1, 2, 3, 4]);
    assert_eq!(desc, vec![4, 3, 2, 1]);
}

#[test]
fn traversal_is_restartable_matrix() {
    let tree = AvlTree::from_items([8, 3, 5, 1]);
    let first: Vec<i32> = tree.iter().copied().collect();
    let second: Vec<i32> = (&tree).into_iter().copied().collect();
    assert_eq!(first, second);

    let mut asc = tree.iter();
    let mut desc = tree.reversed();
    assert_eq!(asc.next(), Some(&1));
    assert_eq!(desc.next(), Some(&8));
    assert_eq!(asc.next(), Some(&3));
    assert_eq!(desc.next(), Some(&5));
    assert_eq!(asc.iterator_type, IteratorType::Normal);
    assert_eq!(desc.iterator_type, IteratorType::Reverse);
}

#[test]
fn traversal_sees_latest_root_matrix() {
    let mut tree = AvlTree::from_items([2, 4]);
    assert_eq!(tree.iter().count(), 2);
    tree.insert(3);
    tree.remove(&2);
    let asc: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(asc, vec![3, 4]);
}

#[test]
fn exact_size_matrix() {
    let tree: AvlTree<u32> = (0..50).collect();
    let mut it = tree.reversed();
    assert_eq!(it.len(), 50);
    it.nth(9);
    assert_eq!(it.len(), 40);
    assert_eq!(it.next(), Some(&39));
}

#[test]
fn owning_iteration_matrix() {
    let tree = AvlTree::from_items_with_key(
        vec!["delta".to_string(), "al".to_string(), "bet".to_string()],
        |s: &String| s.len(),
    );
    let owned: Vec<String> = tree.into_iter().collect();
    assert_eq!(owned, vec!["al", "bet", "delta"]);
}

#[test]
fn descending_is_reverse_of_ascending_matrix() {
    let tree = AvlTree::from_items([50, 20, 70, 10, 30, 60, 80, 25, 65]);
    let asc: Vec<i32> = tree.iter().copied().collect();
    let mut desc: Vec<i32> = tree.reversed().copied().collect();
    desc.reverse();
    assert_eq!(asc, desc);
    assert!(asc.windows(2).all(|w| w[0] < w[1]));
}
