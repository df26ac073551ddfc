//! A fixed-size hash table keyed by `i64`, resolving collisions with linear
//! probing and deleting lazily with tombstones. It never grows: when every
//! slot holds a live key, inserting a new one fails with
//! [`Error::Overflow`] rather than rehashing.

mod slot;
pub mod slot_index;

use log::{debug, trace};
use std::{fmt, iter::FusedIterator, mem, slice};

use crate::error::{Error, Result};
use slot::Slot;
pub use slot_index::{ModuloIndex, SlotIndex};

/// What a successful [`ProbingHashMap::insert`] did.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion<V> {
    /// The key was new and took a free (empty or tombstoned) slot.
    Inserted,

    /// The key was already present; this is the value it used to have.
    Updated(V),
}

impl<V> Insertion<V> {
    /// Whether the insert overwrote an existing value.
    pub fn is_update(&self) -> bool {
        matches!(self, Insertion::Updated(_))
    }

    /// The value that got overwritten, if any.
    pub fn previous(self) -> Option<V> {
        match self {
            Insertion::Inserted => None,
            Insertion::Updated(v) => Some(v),
        }
    }
}

/// An open-addressing hash map with a capacity fixed at construction.
///
/// Every live key sits somewhere along the run of slots starting at its
/// home slot (as chosen by `I`) without an empty slot in between, wrapping
/// around the end of the table. Deletes leave a tombstone behind so that
/// run is never broken.
pub struct ProbingHashMap<V = String, I = ModuloIndex>
where
    I: SlotIndex,
{
    slots: Box<[Slot<V>]>,
    len: usize,
    indexer: I,
}

impl<V> ProbingHashMap<V, ModuloIndex> {
    /// Makes a table with exactly `capacity` slots, homing each key at
    /// `key mod capacity`.
    ///
    /// # Panics
    ///
    /// If `capacity` is zero. See [`try_new`](Self::try_new).
    pub fn new(capacity: usize) -> Self {
        Self::with_capacity_and_indexer(capacity, ModuloIndex)
    }

    /// Like [`new`](Self::new), but reports a zero capacity as an error.
    pub fn try_new(capacity: usize) -> Result<Self> {
        Self::try_with_capacity_and_indexer(capacity, ModuloIndex)
    }
}

impl<V, I> ProbingHashMap<V, I>
where
    I: SlotIndex,
{
    /// Makes a table with exactly `capacity` slots and a custom strategy for
    /// picking each key's home slot.
    ///
    /// # Panics
    ///
    /// If `capacity` is zero.
    pub fn with_capacity_and_indexer(capacity: usize, indexer: I) -> Self {
        assert!(capacity > 0, "{}", Error::ZeroCapacity);
        Self::build(capacity, indexer)
    }

    /// Like [`with_capacity_and_indexer`](Self::with_capacity_and_indexer),
    /// but reports a zero capacity as an error.
    pub fn try_with_capacity_and_indexer(
        capacity: usize,
        indexer: I,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self::build(capacity, indexer))
    }

    fn build(capacity: usize, indexer: I) -> Self {
        Self {
            slots: (0..capacity).map(|_| Slot::Empty).collect(),
            len: 0,
            indexer,
        }
    }

    /// Inserts a key-value pair, or overwrites the value if the key is
    /// already present.
    ///
    /// The new entry goes in the first empty or tombstoned slot along the
    /// key's probe sequence, but only once the sequence has been followed far
    /// enough to be sure the key isn't already live further along it.
    ///
    /// Fails with [`Error::Overflow`] when every slot holds some other live
    /// key. The table is untouched in that case.
    pub fn insert(&mut self, key: i64, value: V) -> Result<Insertion<V>> {
        let mut vacant = None;

        for index in self.probe_sequence(key) {
            match &mut self.slots[index] {
                Slot::Occupied {
                    key: existing,
                    value: current,
                } if *existing == key => {
                    let previous = mem::replace(current, value);
                    return Ok(Insertion::Updated(previous));
                }
                Slot::Occupied { .. } => {}
                Slot::Tombstone => {
                    vacant.get_or_insert(index);
                }
                Slot::Empty => {
                    // nothing lives past an empty slot, the key is new
                    vacant.get_or_insert(index);
                    break;
                }
            }
        }

        let index = match vacant {
            Some(index) => index,
            None => {
                debug!(
                    "no room for key {} in a table of {} live keys",
                    key, self.len
                );
                return Err(Error::Overflow {
                    key,
                    capacity: self.capacity(),
                });
            }
        };

        if self.slots[index].is_tombstone() {
            trace!("key {} reuses the tombstone in slot {}", key, index);
        }

        self.slots[index] = Slot::Occupied { key, value };
        self.len += 1;

        #[cfg(test)]
        self.reachability_test();

        Ok(Insertion::Inserted)
    }

    /// Looks up the value for a key.
    pub fn search(&self, key: i64) -> Option<&V> {
        let index = self.find(key)?;
        self.slots[index].entry().map(|(_, v)| v)
    }

    /// Gets a mutable reference to the value for a key. The key stays in
    /// the slot it was in.
    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        let index = self.find(key)?;
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Whether the key is live in the table.
    pub fn contains_key(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    /// Removes a key, returning its value and leaving a tombstone in its
    /// slot. Deleting a key that isn't there does nothing.
    pub fn delete(&mut self, key: i64) -> Option<V> {
        let index = self.find(key)?;
        let removed = mem::replace(&mut self.slots[index], Slot::Tombstone);
        self.len -= 1;

        trace!("key {} in slot {} is now a tombstone", key, index);

        #[cfg(test)]
        self.reachability_test();

        removed.into_value()
    }

    /// Resets every slot to empty, tombstones included. The capacity doesn't
    /// change.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.len = 0;
    }

    /// The number of slots, which is also the most keys this map will ever
    /// hold at once.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of live keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no live keys. Tombstones don't count.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether inserting a new key would overflow.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// The number of slots holding a tombstone.
    pub fn tombstones(&self) -> usize {
        self.slots.iter().filter(|s| s.is_tombstone()).count()
    }

    /// Live entries in slot order, which is not any particular key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }

    /// The slots to visit for `key`, starting from its home slot and
    /// wrapping once around the table.
    fn probe_sequence(&self, key: i64) -> impl Iterator<Item = usize> {
        let capacity = self.capacity();
        let start = self.indexer.slot_index(key, capacity) % capacity;
        (0..capacity).map(move |i| (start + i) % capacity)
    }

    /// The slot holding `key`, if it is live.
    fn find(&self, key: i64) -> Option<usize> {
        for index in self.probe_sequence(key) {
            let slot = &self.slots[index];
            if slot.is_empty() {
                return None;
            }
            if slot.holds(key) {
                return Some(index);
            }
        }

        None
    }

    /// Checks that every live key can be reached from its home slot without
    /// crossing an empty slot, that no key is live twice, and that `len` is
    /// right.
    #[cfg(test)]
    fn reachability_test(&self) {
        let mut live = 0;

        for (index, slot) in self.slots.iter().enumerate() {
            if let Some((key, _)) = slot.entry() {
                live += 1;

                for probe in self.probe_sequence(key) {
                    if probe == index {
                        break;
                    }
                    assert!(
                        !self.slots[probe].is_empty(),
                        "key {} in slot {} is cut off by empty slot {}",
                        key,
                        index,
                        probe
                    );
                    assert!(
                        !self.slots[probe].holds(key),
                        "key {} is live in slots {} and {}",
                        key,
                        probe,
                        index
                    );
                }
            }
        }

        assert_eq!(self.len, live);
    }
}

impl<V, I> fmt::Debug for ProbingHashMap<V, I>
where
    V: fmt::Debug,
    I: SlotIndex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbingHashMap")
            .field("len", &self.len)
            .field("slots", &self.slots)
            .finish()
    }
}

/// Live entries of a [`ProbingHashMap`], in slot order.
pub struct Iter<'a, V> {
    slots: slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in &mut self.slots {
            if let Some(entry) = slot.entry() {
                self.remaining -= 1;
                return Some(entry);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}

impl<'a, V> FusedIterator for Iter<'a, V> {}

impl<'a, V, I> IntoIterator for &'a ProbingHashMap<V, I>
where
    I: SlotIndex,
{
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
