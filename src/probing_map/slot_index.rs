//! Maps a key to the slot its probe sequence starts at. The table's keys are
//! already integers, so there is nothing to hash in the usual sense: the
//! default just reduces the key modulo the table size.

/// Picks the starting slot for a key in a table of `capacity` slots.
///
/// Implementations should return something in `0..capacity`; the table
/// reduces whatever comes back into range anyway, so a sloppy index can
/// only cost collisions, never a panic.
pub trait SlotIndex {
    /// The home slot for `key`.
    fn slot_index(&self, key: i64, capacity: usize) -> usize;
}

/// `key mod capacity`, always landing in `0..capacity`. Negative keys wrap
/// around from the top of the table instead of producing a negative index,
/// so `-1` goes in the last slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModuloIndex;

impl SlotIndex for ModuloIndex {
    fn slot_index(&self, key: i64, capacity: usize) -> usize {
        // i128 holds every i64 and every usize, so nothing truncates
        (i128::from(key).rem_euclid(capacity as i128)) as usize
    }
}

impl<F> SlotIndex for F
where
    F: Fn(i64, usize) -> usize,
{
    fn slot_index(&self, key: i64, capacity: usize) -> usize {
        self(key, capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::{ModuloIndex, SlotIndex};

    #[test]
    fn test_modulo() {
        assert_eq!(0, ModuloIndex.slot_index(0, 3));
        assert_eq!(0, ModuloIndex.slot_index(3, 3));
        assert_eq!(2, ModuloIndex.slot_index(8, 3));
    }

    #[test]
    fn test_negative_keys_stay_in_range() {
        assert_eq!(2, ModuloIndex.slot_index(-1, 3));
        assert_eq!(0, ModuloIndex.slot_index(-3, 3));
        assert_eq!(1, ModuloIndex.slot_index(-5, 3));

        let capacity = 7;
        for key in &[i64::MIN, i64::MIN + 1, -1, i64::MAX] {
            assert!(ModuloIndex.slot_index(*key, capacity) < capacity);
        }
        assert_eq!(
            (i64::MIN as i128).rem_euclid(7) as usize,
            ModuloIndex.slot_index(i64::MIN, 7)
        );
    }

    #[test]
    fn test_closures_index_too() {
        let everything_collides = |_: i64, _: usize| -> usize { 0 };
        assert_eq!(0, everything_collides.slot_index(12345, 10));
    }
}
