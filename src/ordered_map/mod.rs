//! A plain, unbalanced binary search tree keyed by strings, ordered without
//! regard to case. No rotations, no heights: insert keys in sorted order and
//! you get a very expensive linked list. That is the price of simplicity.

mod iter;
pub mod key_order;

use log::trace;
use std::{
    cmp::Ordering,
    fmt,
    iter::FromIterator,
    mem,
};

pub use iter::Iter;
use key_order::compare_keys;

/// An owned edge to a subtree. Every node has exactly one owner: its parent,
/// or the map itself for the root.
pub(crate) type Link<V> = Option<Box<Node<V>>>;

/// A node in the tree.
pub(crate) struct Node<V> {
    /// The key, with the casing it was first inserted with.
    pub(crate) key: String,

    /// The value being stored.
    pub(crate) value: V,

    /// Everything that sorts before `key`.
    pub(crate) left: Link<V>,

    /// Everything that sorts after `key`.
    pub(crate) right: Link<V>,
}

impl<V> Node<V> {
    fn leaf(key: String, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// A key-value map sorted by case-insensitive key order, backed by a binary
/// search tree. Keys which differ only in case are the same key; the stored
/// key keeps whatever casing it had when it was first inserted.
pub struct OrderedMap<V = String> {
    root: Link<V>,
    len: usize,
}

impl<V> OrderedMap<V> {
    /// Makes an empty map.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts a key-value pair, or overwrites the value if the key (in any
    /// casing) is already present. Returns the previous value if there was
    /// one.
    pub fn insert<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: Into<String>,
    {
        let (root, previous) = insert_into(self.root.take(), key.into(), value);
        self.root = Some(root);

        if previous.is_none() {
            self.len += 1;
        }

        #[cfg(test)]
        self.ordering_test();

        previous
    }

    /// Looks up the value for a key, ignoring case.
    pub fn search(&self, key: &str) -> Option<&V> {
        let mut cursor = self.root.as_deref();

        while let Some(node) = cursor {
            cursor = match compare_keys(key, &node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }

        None
    }

    /// Gets a mutable reference to the value for a key. This never changes
    /// the shape of the tree.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let mut cursor = self.root.as_deref_mut();

        while let Some(node) = cursor {
            cursor = match compare_keys(key, &node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }

        None
    }

    /// Whether the key is present, in any casing.
    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Removes a key, returning its value. Deleting a key that isn't there
    /// does nothing.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let (root, removed) = delete_from(self.root.take(), key);
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
        }

        #[cfg(test)]
        self.ordering_test();

        removed
    }

    /// Every entry, smallest key first.
    pub fn traverse_in_order(&self) -> Vec<(&str, &V)> {
        self.iter().collect()
    }

    /// A lazy version of [`traverse_in_order`](Self::traverse_in_order).
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// The entry with the smallest key.
    pub fn first(&self) -> Option<(&str, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((node.key.as_str(), &node.value))
    }

    /// The entry with the largest key.
    pub fn last(&self) -> Option<(&str, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((node.key.as_str(), &node.value))
    }

    /// The number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        drop_subtree(self.root.take());
        self.len = 0;
    }

    /// Walks the whole tree and checks that keys are strictly increasing and
    /// that the count agrees with `len`.
    #[cfg(test)]
    fn ordering_test(&self) {
        let entries = self.traverse_in_order();
        assert_eq!(self.len, entries.len());

        for pair in entries.windows(2) {
            assert_eq!(
                Ordering::Less,
                compare_keys(pair[0].0, pair[1].0),
                "{:?} is not ordered before {:?}",
                pair[0].0,
                pair[1].0
            );
        }

        assert_eq!(self.len, count_nodes(&self.root));
    }
}

/// Puts `key` somewhere under `link`, handing back the subtree the caller
/// should store in its place along with any value that got overwritten.
fn insert_into<V>(
    link: Link<V>,
    key: String,
    value: V,
) -> (Box<Node<V>>, Option<V>) {
    let mut node = match link {
        Some(node) => node,
        None => return (Node::leaf(key, value), None),
    };

    let previous = match compare_keys(&key, &node.key) {
        Ordering::Less => {
            let (left, previous) = insert_into(node.left.take(), key, value);
            node.left = Some(left);
            previous
        }
        Ordering::Greater => {
            let (right, previous) = insert_into(node.right.take(), key, value);
            node.right = Some(right);
            previous
        }
        Ordering::Equal => Some(mem::replace(&mut node.value, value)),
    };

    (node, previous)
}

/// Removes `key` from the subtree under `link`. Returns whatever should
/// replace `link` and the removed value, if any.
fn delete_from<V>(link: Link<V>, key: &str) -> (Link<V>, Option<V>) {
    let mut node = match link {
        Some(node) => node,
        None => return (None, None),
    };

    match compare_keys(key, &node.key) {
        Ordering::Less => {
            let (left, removed) = delete_from(node.left.take(), key);
            node.left = left;
            (Some(node), removed)
        }
        Ordering::Greater => {
            let (right, removed) = delete_from(node.right.take(), key);
            node.right = right;
            (Some(node), removed)
        }
        Ordering::Equal => match (node.left.is_some(), node.right.take()) {
            (true, Some(right)) => {
                // two children: pull the in-order successor up into this node
                let (rest, successor) = take_min(right);
                let Node {
                    key: successor_key,
                    value: successor_value,
                    ..
                } = *successor;

                trace!(
                    "promoting successor {:?} into the place of {:?}",
                    successor_key,
                    node.key
                );

                node.right = rest;
                node.key = successor_key;
                let removed = mem::replace(&mut node.value, successor_value);
                (Some(node), Some(removed))
            }
            (_, right) => {
                // zero or one child: whichever child exists takes our place
                let Node { value, left, .. } = *node;
                (left.or(right), Some(value))
            }
        },
    }
}

/// Detaches the smallest node of a subtree. It never has a left child, so
/// its right child (if any) moves up to fill the gap.
fn take_min<V>(mut node: Box<Node<V>>) -> (Link<V>, Box<Node<V>>) {
    match node.left.take() {
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(node), min)
        }
        None => {
            let rest = node.right.take();
            (rest, node)
        }
    }
}

/// Counts nodes by following links directly, independent of `len` and `Iter`.
#[cfg(test)]
fn count_nodes<V>(link: &Link<V>) -> usize {
    match link {
        Some(node) => 1 + count_nodes(&node.left) + count_nodes(&node.right),
        None => 0,
    }
}

/// Tears a subtree down with an explicit stack. The default recursive drop
/// of `Box` would blow the stack on a degenerate (sorted-insert) tree.
fn drop_subtree<V>(link: Link<V>) {
    let mut pending: Vec<Box<Node<V>>> = link.into_iter().collect();

    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

impl<V> Drop for OrderedMap<V> {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for OrderedMap<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<V>
where
    K: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for OrderedMap<V>
where
    K: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
