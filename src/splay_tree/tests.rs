use super::*;
use crate::{compare::ReverseOrder, storage::{SparseStorageSlot, Storage as _}};
use alloc::{rc::Rc, vec::Vec};
use core::{cell::Cell, fmt::Debug};
use pretty_assertions::assert_eq;

fn tree_of(keys: &[i32]) -> SplayTree<i32, i32> {
    let mut tree = SplayTree::new();
    for &key in keys {
        let (mut locator, inserted) = tree.insert(key);
        assert!(inserted);
        locator.set_value(key * 10);
    }
    assert!(tree.is_well_formed());
    tree
}
fn sorted_keys<C, H, S>(tree: &SplayTree<i32, i32, C, H, S>) -> Vec<i32>
where
    S: crate::Storage<Element = Node<i32, i32, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    let mut keys: Vec<i32> = tree.breadth_first().map(|(k, _)| *k).collect();
    keys.sort();
    keys
}

#[test]
fn insert_and_query_extremes() {
    let mut tree = tree_of(&[5, 3, 8, 1, 4]);
    assert!(tree.contains(&4));
    assert_eq!(tree.find_greatest().map(|l| *l.key()), Some(8));
    assert_eq!(tree.find_least().map(|l| *l.key()), Some(1));
    assert_eq!(tree.greatest(), Some((&8, &80)));
    assert_eq!(tree.least(), Some((&1, &10)));
    assert_eq!(tree.len(), 5);
}

#[test]
fn strict_neighbors() {
    let mut tree = tree_of(&[5, 3, 8, 1, 4]);
    assert_eq!(tree.find_greatest_less_than(&6).map(|l| *l.key()), Some(5));
    assert_eq!(tree.find_least_greater_than(&6).map(|l| *l.key()), Some(8));
    // Present keys are never their own neighbors
    assert_eq!(tree.find_greatest_less_than(&5).map(|l| *l.key()), Some(4));
    assert_eq!(tree.find_least_greater_than(&5).map(|l| *l.key()), Some(8));
    assert_eq!(tree.find_least_greater_than(&4).map(|l| *l.key()), Some(5));
    assert_eq!(tree.find_greatest_less_than(&3).map(|l| *l.key()), Some(1));
    // Past the ends
    assert!(tree.find_greatest_less_than(&1).is_none());
    assert!(tree.find_least_greater_than(&8).is_none());
    assert!(tree.find_greatest_less_than(&0).is_none());
    assert!(tree.find_least_greater_than(&100).is_none());
    assert!(tree.is_well_formed());
    assert_eq!(tree.len(), 5);
}

#[test]
fn inclusive_neighbors() {
    let mut tree = tree_of(&[10, 20, 30]);
    assert_eq!(tree.find_greatest_at_most(&20).map(|l| *l.key()), Some(20));
    assert_eq!(tree.find_greatest_at_most(&25).map(|l| *l.key()), Some(20));
    assert_eq!(tree.find_least_at_least(&20).map(|l| *l.key()), Some(20));
    assert_eq!(tree.find_least_at_least(&21).map(|l| *l.key()), Some(30));
    assert!(tree.find_greatest_at_most(&9).is_none());
    assert!(tree.find_least_at_least(&31).is_none());
}

#[test]
fn remove_keeps_the_rest() {
    let mut tree = tree_of(&[5, 3, 8, 1, 4]);
    assert_eq!(tree.remove(&3), Some(30));
    assert!(!tree.contains(&3));
    assert!(tree.contains(&5));
    assert_eq!(tree.remove(&3), None);
    assert_eq!(tree.remove_entry(&8), Some((8, 80)));
    assert!(tree.is_well_formed());
    assert_eq!(sorted_keys(&tree), [1, 4, 5]);
}

#[test]
fn move_key_and_collision() {
    let mut tree = tree_of(&[5, 3, 8, 1, 4]);
    assert_eq!(tree.move_key(&4, 10), Ok(()));
    assert!(!tree.contains(&4));
    assert!(tree.contains(&10));
    assert_eq!(tree.get(&10), Some(&40));

    let error = tree.move_key(&10, 5).unwrap_err();
    assert_eq!(error, MoveKeyError::Occupied { new_key: 5 });
    assert_eq!(error.into_key(), 5);
    assert_eq!(tree.get(&10), Some(&40));
    assert_eq!(tree.get(&5), Some(&50));
    assert_eq!(tree.len(), 5);
    assert!(tree.is_well_formed());
    assert_eq!(sorted_keys(&tree), [1, 3, 5, 8, 10]);

    assert_eq!(
        tree.move_key(&4, 11),
        Err(MoveKeyError::NotFound { new_key: 11 }),
    );
    assert!(!tree.contains(&11));
}

#[test]
fn move_key_in_single_node_tree() {
    let mut tree = tree_of(&[4]);
    tree.move_key(&4, 9).unwrap();
    assert_eq!(tree.root_key(), Some(&9));
    assert_eq!(tree.get(&9), Some(&40));
    assert_eq!(tree.len(), 1);
    // The node is detached before the new key is looked up, so moving onto itself succeeds
    assert_eq!(tree.move_key(&9, 9), Ok(()));
    assert_eq!(tree.get(&9), Some(&40));
}

#[test]
fn empty_tree_reports_absence() {
    let mut tree = SplayTree::<i32, i32>::new();
    assert!(tree.find(&1).is_none());
    assert!(!tree.contains(&1));
    assert_eq!(tree.remove(&1), None);
    assert!(tree.find_greatest().is_none());
    assert!(tree.find_least().is_none());
    assert!(tree.find_greatest_less_than(&1).is_none());
    assert!(tree.find_least_greater_than(&1).is_none());
    assert_eq!(tree.greatest(), None);
    assert_eq!(tree.move_key(&1, 2), Err(MoveKeyError::NotFound { new_key: 2 }));
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.is_well_formed());
}

#[test]
fn accessed_key_becomes_root() {
    let mut tree = tree_of(&[50, 20, 80, 10, 30, 70, 90]);
    for &key in &[10, 90, 30, 70, 50] {
        assert!(tree.contains(&key));
        assert_eq!(tree.root_key(), Some(&key));
        assert!(tree.is_well_formed());
    }
    // A failed lookup leaves one of the would-be neighbors at the root
    assert!(!tree.contains(&75));
    let root = *tree.root_key().expect("tree is not empty");
    assert!(root == 70 || root == 80);
    // Extreme queries do not reshape
    tree.find_greatest();
    assert_eq!(tree.root_key(), Some(&root));
}

#[test]
fn duplicate_insert_is_idempotent() {
    let mut tree = tree_of(&[1, 2, 3]);
    let mut called = false;
    let (locator, inserted) = tree.insert_with(2, || {
        called = true;
        -1
    });
    assert!(!inserted);
    assert_eq!(*locator.value(), 20);
    assert!(!called);
    assert_eq!(tree.len(), 3);
}

#[test]
fn locator_access() {
    let mut tree = tree_of(&[1, 2, 3]);
    let mut locator = tree.find(&2).expect("key is present");
    *locator.value_mut() += 1;
    assert_eq!(locator.set_value(7), 21);
    let (key, value) = locator.into_key_value();
    assert_eq!(*key, 2);
    *value *= 2;
    assert_eq!(tree.get(&2), Some(&14));
    if let Some(value) = tree.get_mut(&3) {
        *value = 0;
    }
    assert_eq!(tree.get(&3), Some(&0));
}

#[test]
fn custom_comparators() {
    let mut tree = SplayTree::<i32, (), ReverseOrder>::new();
    tree.extend((0..10).map(|x| (x, ())));
    assert_eq!(tree.least().map(|(k, _)| *k), Some(9));
    assert_eq!(tree.find_least_greater_than(&5).map(|l| *l.key()), Some(4));
    assert!(tree.is_well_formed());

    let mut by_len = SplayTree::<&str, u8, _>::with_comparator(|a: &&str, b: &&str| {
        a.len().cmp(&b.len())
    });
    assert!(by_len.insert("ab").1);
    // Equal under the comparator counts as a duplicate
    assert!(!by_len.insert("cd").1);
    assert!(by_len.contains(&"xy"));
}

#[test]
fn sorted_insertion_chain() {
    let mut tree = SplayTree::<u32, ()>::new();
    for key in 0..10_000 {
        tree.insert(key);
    }
    assert_eq!(tree.len(), 10_000);
    assert_eq!(tree.breadth_first().count(), 10_000);
    assert!(tree.is_well_formed());
    // Splaying the far end of the chain roughly halves its depth
    assert!(tree.contains(&0));
    assert!(tree.is_well_formed());
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[derive(Debug)]
struct DropCounter(Rc<Cell<usize>>);
impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn every_value_is_dropped_once() {
    let drops = Rc::new(Cell::new(0));
    let mut tree = SplayTree::<u32, DropCounter>::new();
    for key in 0..64 {
        let counter = DropCounter(Rc::clone(&drops));
        tree.insert_with(key * 7 % 64, move || counter);
    }
    assert_eq!(drops.get(), 0);
    for key in (0..64).step_by(3) {
        assert!(tree.remove(&key).is_some());
    }
    assert_eq!(drops.get(), 22);
    tree.move_key(&1, 100).unwrap();
    assert_eq!(drops.get(), 22);
    {
        let mut drain = tree.drain();
        assert!(drain.next().is_some());
    }
    assert_eq!(drops.get(), 64);
    assert!(tree.is_empty());
    assert_eq!(tree.storage().len(), 0);

    for key in 0..8 {
        let counter = DropCounter(Rc::clone(&drops));
        tree.insert_with(key, move || counter);
    }
    drop(tree);
    assert_eq!(drops.get(), 72);
}

#[test]
fn released_slots_are_reused() {
    let mut tree = tree_of(&[1, 2, 3, 4]);
    tree.remove(&2);
    tree.remove(&3);
    assert_eq!(tree.storage().num_holes(), 2);
    tree.insert(5);
    tree.insert(6);
    assert!(tree.storage().is_dense());
    assert_eq!(tree.storage().num_slots(), 4);
    assert!(tree.is_well_formed());
}

#[test]
#[should_panic(expected = "the node arena is full")]
fn fixed_capacity_tree_overflows() {
    let mut tree = SparseArrayVecSplayTree::<
        u8,
        (),
        [SparseStorageSlot<Node<u8, (), usize>>; 4],
    >::new();
    for key in 0..4 {
        tree.insert(key);
    }
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.remove(&0), Some(()));
    tree.insert(10);
    tree.insert(11);
}
