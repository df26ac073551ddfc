/// One position in a [`ProbingHashMap`](super::ProbingHashMap)'s table.
///
/// A tombstone carries nothing: once a key is deleted its value is handed
/// back to the caller and there is no stale data left to mistake for a live
/// entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot<V> {
    /// Never been used. Ends every probe sequence that reaches it.
    Empty,

    /// Holds a live entry.
    Occupied { key: i64, value: V },

    /// Used to hold an entry that has since been deleted. Probes walk past
    /// it, inserts may reuse it.
    Tombstone,
}

impl<V> Slot<V> {
    /// Whether this slot holds `key`.
    pub(crate) fn holds(&self, key: i64) -> bool {
        matches!(self, Slot::Occupied { key: k, .. } if *k == key)
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub(crate) fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    /// The key and value, if the slot is live.
    pub(crate) fn entry(&self) -> Option<(i64, &V)> {
        match self {
            Slot::Occupied { key, value } => Some((*key, value)),
            _ => None,
        }
    }

    pub(crate) fn into_value(self) -> Option<V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }
}
