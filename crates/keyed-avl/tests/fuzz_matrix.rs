use std::collections::BTreeMap;

use keyed_avl::AvlTree;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

#[derive(Clone, Debug, PartialEq)]
struct Record {
    id: u32,
    payload: String,
}

fn record(id: u32, round: usize) -> Record {
    Record {
        id,
        payload: format!("{id}@{round}"),
    }
}

#[test]
fn seeded_fuzz_against_btree_map() {
    for seed in 0..8u64 {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut tree = AvlTree::with_key(|r: &Record| r.id);
        let mut model: BTreeMap<u32, Record> = BTreeMap::new();

        for round in 0..2_000 {
            let id = rng.gen_range(0..500);
            if rng.gen_bool(0.6) {
                let r = record(id, round);
                tree.insert(r.clone());
                model.entry(id).or_insert(r);
            } else {
                let removed = tree.take(&id);
                assert_eq!(removed, model.remove(&id), "seed {seed} round {round}");
            }

            if round % 97 == 0 {
                tree.check_invariants().unwrap();
            }
        }

        tree.check_invariants().unwrap();
        assert_eq!(tree.len(), model.len());
        assert!(tree.iter().eq(model.values()));
        assert!(tree.reversed().eq(model.values().rev()));
        assert_eq!(tree.first(), model.values().next());
        assert_eq!(tree.last(), model.values().next_back());
    }
}

#[test]
fn balanced_height_bound() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);
    let mut tree = AvlTree::new();
    for _ in 0..10_000 {
        tree.insert(rng.gen::<u64>());
    }
    let n = tree.len() as f64;
    // AVL height is below 1.45 * log2(n + 2).
    assert!((tree.height() as f64) < 1.45 * (n + 2.0).log2());
    tree.check_invariants().unwrap();
}
