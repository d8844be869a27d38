use super::*;
use alloc::vec::Vec;
use pretty_assertions::assert_eq;

#[test]
fn sparse_reuses_holes() {
    let mut storage = SparseVec::<&str>::new();
    let a = storage.add("a");
    let b = storage.add("b");
    let c = storage.add("c");
    assert_eq!(storage.len(), 3);

    assert_eq!(storage.remove(&b), "b");
    assert_eq!(storage.len(), 2);
    assert_eq!(storage.num_holes(), 1);
    assert!(!storage.contains_key(&b));
    assert_eq!(storage.get(&b), None);

    // Keys of the surviving elements are unaffected
    assert_eq!(storage.get(&a), Some(&"a"));
    assert_eq!(storage.get(&c), Some(&"c"));

    // The hole is filled before the list grows
    let d = storage.add("d");
    assert_eq!(d, b);
    assert!(storage.is_dense());
    assert_eq!(storage.num_slots(), 3);
}

#[test]
fn sparse_free_list_is_lifo() {
    let mut storage = SparseVec::<u32>::new();
    let keys: Vec<usize> = (0..5).map(|x| storage.add(x)).collect();
    storage.remove(&keys[1]);
    storage.remove(&keys[3]);
    assert_eq!(storage.add(10), keys[3]);
    assert_eq!(storage.add(11), keys[1]);
    assert_eq!(storage.add(12), 5);
}

#[test]
fn sparse_shrink_drops_trailing_holes_only() {
    let mut storage = SparseVec::<u32>::new();
    let keys: Vec<usize> = (0..6).map(|x| storage.add(x)).collect();
    storage.remove(&keys[1]);
    storage.remove(&keys[4]);
    storage.remove(&keys[5]);
    storage.shrink_to_fit();
    assert_eq!(storage.num_slots(), 4);
    assert_eq!(storage.num_holes(), 1);
    assert_eq!(storage.len(), 3);
    for &key in &[0, 2, 3] {
        assert_eq!(storage.get(&keys[key]), Some(&(key as u32)));
    }
    // The hole in the middle is still on the free list
    assert_eq!(storage.add(7), keys[1]);
    assert_eq!(storage.add(8), 4);
}

#[test]
#[should_panic]
fn sparse_remove_hole_panics() {
    let mut storage = SparseVec::<u8>::new();
    let key = storage.add(1);
    storage.remove(&key);
    storage.remove(&key);
}

#[test]
fn sparse_arrayvec() {
    let mut storage = SparseArrayVec::<u8, [SparseStorageSlot<u8>; 4]>::new();
    let keys: Vec<usize> = (0..4).map(|x| storage.add(x)).collect();
    assert_eq!(storage.len(), 4);
    storage.remove(&keys[0]);
    assert_eq!(storage.add(9), keys[0]);
    assert_eq!(storage.get(&keys[0]), Some(&9));
}

#[test]
#[should_panic(expected = "the node arena is full")]
fn sparse_arrayvec_overflow_panics() {
    let mut storage = SparseArrayVec::<u8, [SparseStorageSlot<u8>; 2]>::new();
    for x in 0..3 {
        storage.add(x);
    }
}

#[test]
#[should_panic(expected = "the node arena cannot fit 3 more nodes (capacity 4, 2 in use)")]
fn sparse_arrayvec_reserve_past_capacity_panics() {
    let mut storage = SparseArrayVec::<u8, [SparseStorageSlot<u8>; 4]>::new();
    storage.add(1);
    storage.add(2);
    storage.reserve(2);
    storage.reserve(3);
}

#[cfg(feature = "smallvec")]
#[test]
fn sparse_smallvec_spills_onto_the_heap() {
    let mut storage = SparseSmallVec::<u8, [SparseStorageSlot<u8>; 2]>::new();
    let keys: Vec<usize> = (0..5).map(|x| storage.add(x)).collect();
    assert_eq!(storage.len(), 5);
    assert_eq!(storage.remove(&keys[3]), 3);
    assert_eq!(storage.add(30), keys[3]);
    for (x, key) in keys.iter().enumerate().filter(|&(x, _)| x != 3) {
        assert_eq!(storage.get(key), Some(&(x as u8)));
    }
    // Unlike ArrayVec, reserving past the inline capacity is fine
    storage.reserve(100);
    assert!(storage.capacity() >= 105);
}

#[cfg(feature = "smallvec")]
#[test]
fn smallvec_backed_tree() {
    use crate::splay_tree::{Node, SparseSmallVecSplayTree};
    let mut tree = SparseSmallVecSplayTree::<u32, u32, [SparseStorageSlot<Node<u32, u32, usize>>; 4]>::new();
    tree.extend((0..40).map(|x| (x, x + 1)));
    assert_eq!(tree.len(), 40);
    assert_eq!(tree.remove(&7), Some(8));
    assert_eq!(tree.move_key(&8, 7), Ok(()));
    assert_eq!(tree.get(&7), Some(&9));
    assert!(tree.is_well_formed());
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.storage().len(), 0);
}

#[cfg(feature = "slotmap")]
mod slotmap_storage {
    use crate::storage::Storage;
    use crate::{compare::NaturalOrder, splay_tree::{MoveKeyError, Node, SplayTree}};
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;
    use slotmap::{DefaultKey, DenseSlotMap, HopSlotMap, SlotMap};

    type SlotMapTree<M> = SplayTree<i32, i32, NaturalOrder, DefaultKey, M>;

    fn exercise<M>()
    where M: Storage<Element = Node<i32, i32, DefaultKey>, Key = DefaultKey>,
    {
        let mut tree = SlotMapTree::<M>::new();
        for key in &[5, 3, 8, 1, 4] {
            tree.insert_with(*key, || key * 10);
        }
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.root_key(), Some(&4));
        assert_eq!(tree.find_greatest_less_than(&6).map(|l| *l.key()), Some(5));
        assert_eq!(tree.remove(&3), Some(30));
        assert!(!tree.contains(&3));
        assert_eq!(tree.move_key(&4, 10), Ok(()));
        assert_eq!(tree.move_key(&10, 5), Err(MoveKeyError::Occupied { new_key: 5 }));
        assert_eq!(tree.get(&10), Some(&40));
        assert!(tree.is_well_formed());

        let mut keys: Vec<i32> = tree.breadth_first().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        assert_eq!(keys, [1, 5, 8, 10]);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.storage().len(), 0);
        assert!(tree.is_well_formed());
        tree.insert(1);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn slot_map() {
        exercise::<SlotMap<DefaultKey, Node<i32, i32, DefaultKey>>>();
    }
    #[test]
    fn hop_slot_map() {
        exercise::<HopSlotMap<DefaultKey, Node<i32, i32, DefaultKey>>>();
    }
    #[test]
    fn dense_slot_map() {
        exercise::<DenseSlotMap<DefaultKey, Node<i32, i32, DefaultKey>>>();
    }

    #[test]
    fn removed_keys_go_stale() {
        let mut map = SlotMap::<DefaultKey, u8>::with_key();
        let a = Storage::add(&mut map, 1);
        let b = Storage::add(&mut map, 2);
        assert_eq!(Storage::remove(&mut map, &a), 1);
        assert!(!Storage::contains_key(&map, &a));
        assert_eq!(Storage::get(&map, &b), Some(&2));
        assert_eq!(Storage::len(&map), 1);
    }
}
