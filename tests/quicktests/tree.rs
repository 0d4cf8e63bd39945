use ordered_tree::{Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

fn keys(tree: &Tree<i8>, order: Order) -> Vec<i8> {
    tree.traverse(order).copied().collect()
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both. Returns `false` as soon
/// as the tree and the model disagree.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) -> bool {
    for op in ops {
        let agrees = match op {
            Op::Insert(k) => tree.insert(*k) == set.insert(*k),
            Op::Delete(k) => tree.delete(k) == set.remove(k),
            Op::Iter => keys(tree, Order::InOrder) == set.iter().copied().collect::<Vec<_>>(),
        };
        if !agrees || tree.len() != set.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && (i8::MIN..=i8::MAX).all(|key| tree.search(&key) == set.contains(&key))
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();
    let in_order = keys(&tree, Order::InOrder);

    in_order.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn in_order_after_deletes_is_strictly_ascending(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().collect();
    for delete in &deletes {
        tree.delete(delete);
    }
    let in_order = keys(&tree, Order::InOrder);

    in_order.len() == tree.len() && in_order.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x) && tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same key multiple times - drop each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.search(x)) && still_present.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn insert_then_delete_restores_keys(xs: Vec<i8>, key: i8) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().filter(|x| *x != key).collect();
    let before = keys(&tree, Order::InOrder);

    tree.insert(key);
    tree.delete(&key);

    keys(&tree, Order::InOrder) == before
}

#[quickcheck]
fn missing_delete_and_duplicate_insert_are_noops(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().filter(|x| *x != missing).collect();
    let before: Vec<_> = Order::ALL.iter().map(|o| keys(&tree, *o)).collect();
    let len = tree.len();

    let deleted = tree.delete(&missing);
    let reinserted = xs.first().map_or(false, |x| *x != missing && tree.insert(*x));
    let after: Vec<_> = Order::ALL.iter().map(|o| keys(&tree, *o)).collect();

    !deleted && !reinserted && before == after && tree.len() == len
}

#[quickcheck]
fn pre_order_rebuilds_the_same_shape(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();
    let rebuilt: Tree<i8> = keys(&tree, Order::PreOrder).into_iter().collect();

    Order::ALL
        .iter()
        .all(|order| keys(&tree, *order) == keys(&rebuilt, *order))
}

#[quickcheck]
fn traversals_visit_every_key_once(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();
    let sorted = keys(&tree, Order::InOrder);

    Order::ALL.iter().all(|order| {
        let mut visited = keys(&tree, *order);
        visited.sort_unstable();
        visited == sorted
    })
}
