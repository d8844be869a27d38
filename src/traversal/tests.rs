use super::*;
use alloc::vec::Vec;
use pretty_assertions::assert_eq;

fn sample() -> SplayTree<u32, u32> {
    [40, 20, 60, 10, 30, 50, 70].iter().map(|&k| (k, k + 1)).collect()
}

#[test]
fn level_order_from_the_root() {
    let tree = sample();
    let mut levels = Vec::new();
    tree.for_each_node(|node| levels.push(*node.key()));
    // The last key inserted is the root
    assert_eq!(levels[0], 70);
    let mut sorted = levels.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, [10, 20, 30, 40, 50, 60, 70]);

    let iterated: Vec<u32> = tree.breadth_first().map(|(k, _)| *k).collect();
    assert_eq!(iterated, levels);
}

#[test]
fn children_follow_parents() {
    let tree = sample();
    let mut seen = Vec::new();
    tree.for_each_node(|node| {
        for child in node.left().into_iter().chain(node.right()) {
            let child_key = tree.storage().get(child).expect("children are linked to live nodes").key();
            assert!(!seen.contains(child_key), "child {} visited before its parent", child_key);
        }
        seen.push(*node.key());
    });
    assert_eq!(seen.len(), 7);
}

#[test]
fn pair_visitor() {
    struct Summer<'a>(&'a mut u32, &'a mut usize);
    impl Visitor<u32, u32> for Summer<'_> {
        fn visit(&mut self, key: &u32, value: &u32) {
            assert_eq!(*value, key + 1);
            *self.0 += value;
            *self.1 += 1;
        }
    }
    let tree = sample();
    let (mut sum, mut count) = (0, 0);
    tree.for_each(Summer(&mut sum, &mut count));
    assert_eq!(count, 7);
    assert_eq!(sum, 287);
}

#[test]
fn mutable_visit() {
    let mut tree = sample();
    tree.for_each_mut(|key, value| *value = key * 2);
    let mut pairs: Vec<(u32, u32)> = tree.breadth_first().map(|(k, v)| (*k, *v)).collect();
    pairs.sort_unstable();
    assert_eq!(pairs[0], (10, 20));
    assert_eq!(pairs[6], (70, 140));
    assert!(tree.is_well_formed());
}

#[test]
fn breadth_first_is_exact_size() {
    let tree = sample();
    let mut iter = tree.breadth_first();
    assert_eq!(iter.len(), 7);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.by_ref().count(), 5);
    assert_eq!(iter.next(), None);
}

#[test]
fn empty_tree_visits_nothing() {
    let mut tree = SplayTree::<u32, ()>::new();
    tree.for_each(|_: &u32, _: &()| panic!("visited a node of an empty tree"));
    assert_eq!(tree.breadth_first().next(), None);
    assert_eq!(tree.drain().next(), None);
    tree.clear();
    assert!(tree.is_empty());
}

#[test]
fn drain_yields_every_pair() {
    let mut tree = sample();
    let drain = tree.drain();
    assert_eq!(drain.len(), 7);
    let mut pairs: Vec<(u32, u32)> = drain.collect();
    pairs.sort_unstable();
    assert_eq!(pairs, [(10, 11), (20, 21), (30, 31), (40, 41), (50, 51), (60, 61), (70, 71)]);
    assert!(tree.is_empty());
    assert_eq!(tree.storage().len(), 0);
    // The tree is usable again
    tree.insert(5);
    assert_eq!(tree.len(), 1);
    assert!(tree.is_well_formed());
}

#[test]
fn teardown_of_a_deep_chain() {
    let mut tree = SplayTree::<u32, u32>::new();
    tree.extend((0..50_000).map(|x| (x, x)));
    let mut count = 0;
    tree.for_each(|_: &u32, _: &u32| count += 1);
    assert_eq!(count, 50_000);
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.storage().len(), 0);
}

#[test]
fn pending_queue_compacts() {
    let mut pending = Pending::new(Some(0_usize));
    let mut popped = Vec::new();
    let mut next = 1;
    while let Some(handle) = pending.pop() {
        popped.push(handle);
        if next < 100 {
            pending.push(Some(next));
            pending.push(Some(next + 1));
            next += 2;
        }
        pending.push(None);
    }
    assert_eq!(popped, (0..next).collect::<Vec<_>>());
}

#[cfg(feature = "smallvec")]
#[test]
fn pending_queue_spills_past_the_inline_buffer() {
    let mut pending = Pending::new(None);
    for handle in 0..100_usize {
        pending.push(Some(handle));
    }
    assert!(pending.list.spilled());
    let mut popped = Vec::new();
    while let Some(handle) = pending.pop() {
        popped.push(handle);
        if handle % 10 == 0 && handle < 500 {
            pending.push(Some(handle + 1000));
        }
    }
    let mut expected: Vec<usize> = (0..100).collect();
    expected.extend((0..100).step_by(10).map(|x| x + 1000));
    assert_eq!(popped, expected);
}

#[cfg(feature = "smallvec")]
#[test]
fn bushy_tree_traversal() {
    // Scattered insertion order keeps the tree bushy, so the queue holds many handles at once
    let tree: SplayTree<u32, u32> = (0..2_000).map(|x| (x * 7_919 % 2_000, x)).collect();
    assert_eq!(tree.len(), 2_000);
    let mut keys: Vec<u32> = tree.breadth_first().map(|(k, _)| *k).collect();
    keys.sort_unstable();
    assert_eq!(keys, (0..2_000).collect::<Vec<_>>());
    let mut count = 0;
    tree.for_each(|_: &u32, _: &u32| count += 1);
    assert_eq!(count, 2_000);
    assert!(tree.is_well_formed());
}

#[test]
fn leaked_drain_leaves_an_empty_tree() {
    let mut tree = sample();
    {
        let mut drain = tree.drain();
        assert_eq!(drain.next().map(|(k, _)| k), Some(70));
        assert_eq!(drain.len(), 6);
        core::mem::forget(drain);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    let iter = tree.breadth_first();
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.count(), 0);
    // The six unreached nodes are orphaned in the storage
    assert_eq!(tree.storage().len(), 6);
    assert!(!tree.is_well_formed());

    tree.insert(3);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.breadth_first().len(), 1);
    assert_eq!(tree.breadth_first().count(), 1);
}

#[test]
fn clear_resets_the_count() {
    let mut tree = sample();
    tree.clear();
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.breadth_first().len(), 0);
    tree.extend((0..3).map(|x| (x, x)));
    assert_eq!(tree.len(), 3);
    assert!(tree.is_well_formed());
}
