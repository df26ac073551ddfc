//! Errors raised by the containers. Only [`ProbingHashMap`] can fail; a
//! missing key is never an error, it's a `None`.
//!
//! [`ProbingHashMap`]: crate::ProbingHashMap

use thiserror::Error;

/// Result alias for fallible container operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Every slot in the table holds some other live key, so there is
    /// nowhere to put this one. The table is left exactly as it was; the
    /// caller has to delete something or build a bigger table.
    #[error("hash table overflow: no free slot for key {key} among {capacity} slots")]
    Overflow { key: i64, capacity: usize },

    /// A table was requested with zero slots.
    #[error("hash table capacity must be positive")]
    ZeroCapacity,
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_messages() {
        let overflow = Error::Overflow {
            key: -7,
            capacity: 3,
        };
        assert_eq!(
            "hash table overflow: no free slot for key -7 among 3 slots",
            overflow.to_string()
        );
        assert_eq!(
            "hash table capacity must be positive",
            Error::ZeroCapacity.to_string()
        );
    }
}
