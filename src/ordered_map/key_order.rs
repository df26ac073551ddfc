//! The one and only key ordering used by [`OrderedMap`]. Each char is mapped
//! to uppercase and then back down to lowercase using Unicode's locale-free
//! case mappings, and the results are compared lexicographically. Going
//! through uppercase first is what makes "ſ" and "s", or "ς" and "σ", the
//! same key. "Apple", "APPLE" and "apple" are one key too, and it sorts
//! before "banana" no matter what the host locale thinks.
//!
//! [`OrderedMap`]: super::OrderedMap

use std::cmp::Ordering;

/// Compares two keys case-insensitively. Doesn't allocate.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    fold(a).cmp(fold(b))
}

/// Whether two keys name the same entry.
#[cfg(test)]
fn keys_match(a: &str, b: &str) -> bool {
    compare_keys(a, b) == Ordering::Equal
}

fn fold(key: &str) -> impl Iterator<Item = char> + '_ {
    key.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{compare_keys, keys_match};

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(Ordering::Equal, compare_keys("Apple", "aPPLE"));
        assert!(keys_match("MIXED case", "mixed CASE"));
        assert!(!keys_match("apple", "apples"));
    }

    #[test]
    fn test_ordering_ignores_case_of_either_side() {
        // a plain byte comparison would put every uppercase letter first
        assert_eq!(Ordering::Less, compare_keys("apple", "Banana"));
        assert_eq!(Ordering::Less, compare_keys("Apple", "banana"));
        assert_eq!(Ordering::Greater, compare_keys("Zebra", "yak"));
    }

    #[test]
    fn test_prefixes_sort_first() {
        assert_eq!(Ordering::Less, compare_keys("", "a"));
        assert_eq!(Ordering::Less, compare_keys("CAR", "cart"));
        assert_eq!(Ordering::Greater, compare_keys("Carts", "CART"));
    }

    #[test]
    fn test_non_ascii_folds() {
        assert!(keys_match("ÉCOLE", "école"));
        assert!(keys_match("ΣΊΣΥΦΟΣ", "σίσυφοσ"));
        assert!(keys_match("ſ", "s"));
        assert!(keys_match("ſ", "S"));
        assert!(keys_match("ς", "σ"));
        assert!(keys_match("ΟΔΟΣ", "οδος"));
    }
}
