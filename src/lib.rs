//! Two small associative containers that solve the same problem two ways.
//!
//! - [`OrderedMap`] keeps string keys sorted, ignoring case, in a plain
//!   binary search tree. It can't fail and it never rebalances.
//! - [`ProbingHashMap`] keeps `i64` keys in a fixed number of slots using
//!   linear probing and tombstones. It never grows, so an insert into a full
//!   table is an error you have to deal with.
//!
//! Neither is thread-safe beyond what `&mut self` already guarantees, and
//! neither prints anything. Structural events are reported through [`log`]
//! at trace level for anyone who wants to watch.
//!
//! ```
//! use assoc_containers::{Error, Insertion, OrderedMap, ProbingHashMap};
//!
//! let mut names = OrderedMap::new();
//! names.insert("Tanaka", "engineer".to_owned());
//! names.insert("abe", "designer".to_owned());
//! assert_eq!(Some(&"engineer".to_owned()), names.search("TANAKA"));
//! assert_eq!(
//!     vec!["abe", "Tanaka"],
//!     names.iter().map(|(k, _)| k).collect::<Vec<_>>()
//! );
//!
//! let mut table = ProbingHashMap::new(2);
//! assert_eq!(Ok(Insertion::Inserted), table.insert(1, "one".to_owned()));
//! assert_eq!(Ok(Insertion::Inserted), table.insert(3, "three".to_owned()));
//! assert_eq!(
//!     Err(Error::Overflow { key: 5, capacity: 2 }),
//!     table.insert(5, "five".to_owned())
//! );
//! ```

pub mod error;
pub mod ordered_map;
pub mod probing_map;

pub use error::{Error, Result};
pub use ordered_map::{key_order::compare_keys, OrderedMap};
pub use probing_map::{Insertion, ModuloIndex, ProbingHashMap, SlotIndex};

#[cfg(test)]
mod tests {
    use crate::{Error, Insertion, OrderedMap, ProbingHashMap};

    /// The same script of operations against both containers, checking the
    /// parts of the contract they share.
    #[test]
    fn test_shared_contract() {
        let keys = [40i64, 7, 19, 3, 88];

        let mut tree = OrderedMap::new();
        let mut table = ProbingHashMap::new(keys.len());

        for (i, k) in keys.iter().enumerate() {
            tree.insert(k.to_string(), i);
            assert!(table.insert(*k, i).is_ok());
        }

        // round trip, last write wins
        tree.insert("19", 100);
        assert_eq!(Ok(Insertion::Updated(2)), table.insert(19, 100));
        assert_eq!(Some(&100), tree.search("19"));
        assert_eq!(Some(&100), table.search(19));

        // delete then search, present or not
        for k in &[7i64, 7, 1000] {
            tree.delete(&k.to_string());
            table.delete(*k);
            assert_eq!(None, tree.search(&k.to_string()));
            assert_eq!(None, table.search(*k));
        }
        assert_eq!(4, tree.len());
        assert_eq!(4, table.len());

        // the freed slot takes a new key, the one after that doesn't fit
        assert!(table.insert(1000, 9).is_ok());
        assert_eq!(
            Err(Error::Overflow {
                key: 2000,
                capacity: 5
            }),
            table.insert(2000, 10)
        );
    }
}
