use core::{cmp::Ordering, fmt::Debug};
use crate::{
    compare::Comparator,
    storage::Storage,
    util::unreachable_debugchecked,
};
use super::{Locator, MoveKeyError, Node, SplayTree};

/// Every key-based operation here splays before doing anything else, which is why even the lookups take `&mut self`: a failed lookup still moves the last node on its search path to the root.
impl<K, V, C, H, S> SplayTree<K, V, C, H, S>
where
    C: Comparator<K>,
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    /// Inserts `key` with a default value, returning a locator for the node holding the key and whether a new node was created.
    ///
    /// If the key is already present, nothing is modified and the locator points to the existing node.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::SplayTree;
    /// let mut tree = SplayTree::<u32, u32>::new();
    /// let (mut locator, inserted) = tree.insert(7);
    /// assert!(inserted);
    /// assert_eq!(*locator.value(), 0);
    /// locator.set_value(49);
    ///
    /// let (locator, inserted) = tree.insert(7);
    /// assert!(!inserted);
    /// assert_eq!(*locator.value(), 49);
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K) -> (Locator<'_, K, V, C, H, S>, bool)
    where V: Default,
    {
        self.insert_with(key, V::default)
    }
    /// Inserts `key` with the value produced by `make_value`, returning a locator for the node holding the key and whether a new node was created.
    ///
    /// `make_value` is only called if the key was not present. Otherwise, nothing is modified and the locator points to the existing node.
    pub fn insert_with(
        &mut self,
        key: K,
        make_value: impl FnOnce() -> V,
    ) -> (Locator<'_, K, V, C, H, S>, bool) {
        let ordering = match self.splay_and_compare(&key) {
            Some((root, Ordering::Equal)) => return (Locator::new(self, root), false),
            Some((_, ordering)) => Some(ordering),
            None => None,
        };
        let handle = self.storage.add(Node::new(key, make_value()));
        self.len += 1;
        match ordering {
            Some(ordering) => self.attach_root(handle.clone(), ordering),
            None => self.root = Some(handle.clone()),
        }
        (Locator::new(self, handle), true)
    }

    /// Looks up `key`, returning a locator for its node if it is present.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::SplayTree;
    /// let mut tree: SplayTree<_, _> = vec![(1, "one"), (2, "two")].into_iter().collect();
    /// assert_eq!(tree.find(&2).map(|l| *l.value()), Some("two"));
    /// assert!(tree.find(&3).is_none());
    /// ```
    #[inline]
    pub fn find(&mut self, key: &K) -> Option<Locator<'_, K, V, C, H, S>> {
        let handle = self.find_handle(key)?;
        Some(Locator::new(self, handle))
    }
    /// Returns `true` if `key` is present in the tree. Reshapes the tree exactly like [`find`] does.
    ///
    /// [`find`]: #method.find " "
    #[inline]
    pub fn contains(&mut self, key: &K) -> bool {
        self.find_handle(key).is_some()
    }
    /// Returns a reference to the value stored under `key`.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let handle = self.find_handle(key)?;
        Some(&self.node(&handle).value)
    }
    /// Returns a *mutable* reference to the value stored under `key`.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let handle = self.find_handle(key)?;
        Some(&mut self.node_mut(&handle).value)
    }

    /// Finds the greatest key which is strictly less than `key`.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::SplayTree;
    /// let mut tree: SplayTree<_, ()> = vec![(10, ()), (20, ())].into_iter().collect();
    /// assert_eq!(tree.find_greatest_less_than(&20).map(|l| *l.key()), Some(10));
    /// assert!(tree.find_greatest_less_than(&10).is_none());
    /// ```
    pub fn find_greatest_less_than(&mut self, key: &K) -> Option<Locator<'_, K, V, C, H, S>> {
        let handle = match self.splay_and_compare(key)? {
            (root, Ordering::Greater) => root,
            (root, _) => self.greatest_in_left_subtree(&root)?,
        };
        Some(Locator::new(self, handle))
    }
    /// Finds the greatest key which is less than or equal to `key`.
    pub fn find_greatest_at_most(&mut self, key: &K) -> Option<Locator<'_, K, V, C, H, S>> {
        let handle = match self.splay_and_compare(key)? {
            (root, Ordering::Less) => self.greatest_in_left_subtree(&root)?,
            (root, _) => root,
        };
        Some(Locator::new(self, handle))
    }
    /// Finds the least key which is strictly greater than `key`.
    pub fn find_least_greater_than(&mut self, key: &K) -> Option<Locator<'_, K, V, C, H, S>> {
        let handle = match self.splay_and_compare(key)? {
            (root, Ordering::Less) => root,
            (root, _) => self.least_in_right_subtree(&root)?,
        };
        Some(Locator::new(self, handle))
    }
    /// Finds the least key which is greater than or equal to `key`.
    pub fn find_least_at_least(&mut self, key: &K) -> Option<Locator<'_, K, V, C, H, S>> {
        let handle = match self.splay_and_compare(key)? {
            (root, Ordering::Greater) => self.least_in_right_subtree(&root)?,
            (root, _) => root,
        };
        Some(Locator::new(self, handle))
    }
    // The real root stays in place, only its subtree is searched.
    fn greatest_in_left_subtree(&self, root: &H) -> Option<H> {
        let left = self.node(root).left.clone()?;
        Some(self.rightmost_from(left))
    }
    fn least_in_right_subtree(&self, root: &H) -> Option<H> {
        let right = self.node(root).right.clone()?;
        Some(self.leftmost_from(right))
    }

    /// Removes `key` from the tree, returning its value if it was present.
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }
    /// Removes `key` from the tree, returning the stored key and value if it was present.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.find_handle(key)?;
        let handle = self.detach_root(key)?;
        self.len -= 1;
        Some(self.storage.remove(&handle).into_key_value())
    }

    /// Renames `old_key` to `new_key`, keeping the value and the node.
    ///
    /// # Errors
    /// Nothing is modified (apart from the tree being reshaped by the lookups) if:
    /// - `old_key` is not present in the tree;
    /// - `new_key` is already present in the tree. Renaming onto an existing key is rejected rather than merged.
    ///
    /// In both cases, `new_key` is handed back inside the error.
    ///
    /// # Example
    /// ```rust
    /// # use cinder::{SplayTree, MoveKeyError};
    /// let mut tree: SplayTree<_, _> = vec![(4, 'a'), (5, 'b')].into_iter().collect();
    /// tree.move_key(&4, 10).unwrap();
    /// assert_eq!(tree.get(&10), Some(&'a'));
    ///
    /// let error = tree.move_key(&10, 5).unwrap_err();
    /// assert_eq!(error, MoveKeyError::Occupied { new_key: 5 });
    /// assert_eq!(tree.get(&10), Some(&'a'));
    /// assert_eq!(tree.get(&5), Some(&'b'));
    /// ```
    pub fn move_key(&mut self, old_key: &K, new_key: K) -> Result<(), MoveKeyError<K>> {
        if self.find_handle(old_key).is_none() {
            return Err(MoveKeyError::NotFound { new_key });
        }
        let handle = self.detach_root(old_key).unwrap_or_else(|| unsafe {
            // SAFETY: the lookup above found the key at the root
            unreachable_debugchecked("the root disappeared after a successful lookup")
        });
        match self.splay_and_compare(&new_key) {
            Some((_, Ordering::Equal)) => {
                tracing::debug!("rejected a key move onto a key which is already present");
                // Put the node back under its old key, which is known to be absent now
                match self.splay_and_compare(old_key) {
                    Some((_, ordering)) => self.attach_root(handle, ordering),
                    None => self.root = Some(handle),
                }
                Err(MoveKeyError::Occupied { new_key })
            }
            Some((_, ordering)) => {
                self.node_mut(&handle).key = new_key;
                self.attach_root(handle, ordering);
                Ok(())
            }
            None => {
                self.node_mut(&handle).key = new_key;
                self.root = Some(handle);
                Ok(())
            }
        }
    }
}
impl<K, V, C, H, S> SplayTree<K, V, C, H, S>
where
    S: Storage<Element = Node<K, V, H>, Key = H>,
    H: Clone + Debug + Eq,
{
    /// Returns a locator for the greatest key in the tree. Does not reshape the tree.
    pub fn find_greatest(&mut self) -> Option<Locator<'_, K, V, C, H, S>> {
        let handle = self.rightmost_from(self.root.clone()?);
        Some(Locator::new(self, handle))
    }
    /// Returns a locator for the least key in the tree. Does not reshape the tree.
    pub fn find_least(&mut self) -> Option<Locator<'_, K, V, C, H, S>> {
        let handle = self.leftmost_from(self.root.clone()?);
        Some(Locator::new(self, handle))
    }
    /// Returns the greatest key in the tree along with its value.
    pub fn greatest(&self) -> Option<(&K, &V)> {
        let handle = self.rightmost_from(self.root.clone()?);
        Some(self.node(&handle).key_value())
    }
    /// Returns the least key in the tree along with its value.
    pub fn least(&self) -> Option<(&K, &V)> {
        let handle = self.leftmost_from(self.root.clone()?);
        Some(self.node(&handle).key_value())
    }
}
