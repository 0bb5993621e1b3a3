use monitored_bst::Tree;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of appends,
/// deletes and rebuilds we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], mut bst: Tree<K>, set: &mut HashSet<K>) -> Tree<K>
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Append(k) => {
                bst.append(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete(k);
                set.remove(k);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }

    bst
}

/// Whether an in-order walk yields strictly ascending keys.
fn is_search_ordered<K: Ord>(tree: &Tree<K>) -> bool {
    tree.keys().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = HashSet::new();
    let tree = do_ops(&ops, Tree::new(), &mut set);

    is_search_ordered(&tree)
        && tree.len() == set.len()
        && set.iter().all(|key| tree.exists(key))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::from_keys(xs.iter().copied());

    is_search_ordered(&tree) && xs.iter().all(|x| tree.exists(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_keys(xs.iter().copied());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.exists(x) && tree.find(x).is_none() && tree.depth(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::from_keys(xs.iter().copied());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    is_search_ordered(&tree)
        && deletes.iter().all(|x| !tree.exists(x))
        && still_present.iter().all(|x| tree.exists(x))
}

#[quickcheck]
fn duplicate_appends_change_nothing(xs: Vec<i8>) -> bool {
    let mut tree = Tree::from_keys(xs.iter().copied());
    let before: Vec<i8> = tree.keys().into_iter().copied().collect();

    xs.iter().all(|x| !tree.append(*x))
        && tree.keys().into_iter().copied().eq(before)
}

#[quickcheck]
fn rebalance_keeps_keys(xs: Vec<i8>, appended: Vec<i8>) -> bool {
    let mut tree = Tree::from_keys(xs);
    tree.extend(appended);
    let before: Vec<i8> = tree.keys().into_iter().copied().collect();

    tree.rebalance();
    let once: Vec<i8> = tree.keys().into_iter().copied().collect();
    tree.rebalance();

    tree.is_balanced() && once == before && tree.keys().into_iter().copied().eq(before)
}
