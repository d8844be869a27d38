use core::{cmp::Ordering, fmt::Debug};
use crate::{
    compare::Comparator,
    storage::Storage,
    util::abort_on_panic,
};
use super::{Node, SplayTree};

impl<K, V, C, H, S> SplayTree<K, V, C, H, S>
where
    C: Comparator<K>,
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    /// Compares `key` against the key of the node at `handle`.
    #[inline]
    pub(super) fn compare_to(&self, key: &K, handle: &H) -> Ordering {
        self.comparator.compare(key, &self.node(handle).key)
    }

    /// Moves the node with the specified key, or the last node on the search path for it if there is none, to the root.
    ///
    /// This is the top-down variant of the algorithm. Nodes which are passed on the way down are collected into two chains, one with the nodes less than the key and one with the nodes greater than it, which become the subtrees of the new root once the walk stops.
    pub(super) fn splay(&mut self, key: &K) {
        let root = match self.root.take() {
            Some(root) => root,
            None => return,
        };
        // While the walk is in progress the chains are detached from the root, so the tree must
        // not be observed if the comparator panics midway.
        let new_root = abort_on_panic(|| self.splay_from(root, key));
        self.root = Some(new_root);
    }
    fn splay_from(&mut self, mut current: H, key: &K) -> H {
        // Nodes less than the key, linked through their right slots
        let mut lesser_head: Option<H> = None;
        let mut lesser_tail: Option<H> = None;
        // Nodes greater than the key, linked through their left slots
        let mut greater_head: Option<H> = None;
        let mut greater_tail: Option<H> = None;
        loop {
            match self.compare_to(key, &current) {
                Ordering::Less => {
                    let mut left = match &self.node(&current).left {
                        Some(left) => left.clone(),
                        None => break,
                    };
                    if self.compare_to(key, &left) == Ordering::Less {
                        // Rotate right
                        let left_right = self.node_mut(&left).right.take();
                        self.node_mut(&current).left = left_right;
                        self.node_mut(&left).right = Some(current);
                        current = left;
                        left = match &self.node(&current).left {
                            Some(left) => left.clone(),
                            None => break,
                        };
                    }
                    // Link right
                    match &greater_tail {
                        Some(tail) => self.node_mut(tail).left = Some(current.clone()),
                        None => greater_head = Some(current.clone()),
                    }
                    greater_tail = Some(current);
                    current = left;
                }
                Ordering::Greater => {
                    let mut right = match &self.node(&current).right {
                        Some(right) => right.clone(),
                        None => break,
                    };
                    if self.compare_to(key, &right) == Ordering::Greater {
                        // Rotate left
                        let right_left = self.node_mut(&right).left.take();
                        self.node_mut(&current).right = right_left;
                        self.node_mut(&right).left = Some(current);
                        current = right;
                        right = match &self.node(&current).right {
                            Some(right) => right.clone(),
                            None => break,
                        };
                    }
                    // Link left
                    match &lesser_tail {
                        Some(tail) => self.node_mut(tail).right = Some(current.clone()),
                        None => lesser_head = Some(current.clone()),
                    }
                    lesser_tail = Some(current);
                    current = right;
                }
                Ordering::Equal => break,
            }
        }
        // Assemble
        let node = self.node_mut(&current);
        let (left, right) = (node.left.take(), node.right.take());
        match &lesser_tail {
            Some(tail) => self.node_mut(tail).right = left,
            None => lesser_head = left,
        }
        match &greater_tail {
            Some(tail) => self.node_mut(tail).left = right,
            None => greater_head = right,
        }
        let node = self.node_mut(&current);
        node.left = lesser_head;
        node.right = greater_head;
        current
    }

    /// Splays `key` and returns the new root along with how `key` compares to the root's key, or `None` if the tree is empty.
    pub(super) fn splay_and_compare(&mut self, key: &K) -> Option<(H, Ordering)> {
        self.splay(key);
        let root = self.root.clone()?;
        let ordering = self.compare_to(key, &root);
        Some((root, ordering))
    }
    /// Splays `key` and returns the root if it holds exactly that key.
    #[inline]
    pub(super) fn find_handle(&mut self, key: &K) -> Option<H> {
        match self.splay_and_compare(key)? {
            (root, Ordering::Equal) => Some(root),
            _ => None,
        }
    }

    /// Unlinks the root node from the tree, returning its handle. The node stays in the storage, with both of its child slots cleared.
    ///
    /// `key` must compare greater than every key in the root's left subtree, which is always the case for the key the root was splayed with.
    pub(super) fn detach_root(&mut self, key: &K) -> Option<H> {
        let root = self.root.take()?;
        let node = self.node_mut(&root);
        let (left, right) = (node.left.take(), node.right.take());
        match left {
            None => self.root = right,
            Some(left) => {
                self.root = Some(left);
                // Everything left of the old root is less than `key`, so the splay leaves the
                // right slot of the new root empty.
                self.splay(key);
                if let Some(new_root) = self.root.clone() {
                    let new_root = self.node_mut(&new_root);
                    debug_assert!(
                        new_root.right.is_none(),
                        "splaying the left subtree left a right child under its root",
                    );
                    new_root.right = right;
                }
            }
        }
        Some(root)
    }
    /// Makes a detached node the new root. `ordering` is how its key compares to the key of the current root, which must have been splayed with that key beforehand and must not be `Ordering::Equal`.
    pub(super) fn attach_root(&mut self, handle: H, ordering: Ordering) {
        if let Some(old_root) = self.root.take() {
            debug_assert_ne!(ordering, Ordering::Equal, "attached a duplicate key");
            if ordering == Ordering::Greater {
                let right = self.node_mut(&old_root).right.take();
                let node = self.node_mut(&handle);
                node.left = Some(old_root);
                node.right = right;
            } else {
                let left = self.node_mut(&old_root).left.take();
                let node = self.node_mut(&handle);
                node.right = Some(old_root);
                node.left = left;
            }
        }
        self.root = Some(handle);
    }
}
