//! Sequential record identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a [`Record`](crate::record::Record).
///
/// Serialized as a bare JSON integer. The first record of a collection
/// gets `1`; every later one gets the current maximum plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i32);

impl RecordId {
    /// Identifier handed out to the first record of an empty collection.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw integer.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Access the raw integer.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// The identifier following this one, or `None` once `i32` is exhausted.
    #[must_use]
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_at_one() {
        assert_eq!(RecordId::FIRST.get(), 1);
    }

    #[test]
    fn should_increment_by_one() {
        assert_eq!(RecordId::new(41).checked_next(), Some(RecordId::new(42)));
    }

    #[test]
    fn should_stop_at_i32_max() {
        assert_eq!(RecordId::new(i32::MAX).checked_next(), None);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&RecordId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn should_display_raw_value() {
        assert_eq!(RecordId::new(3).to_string(), "3");
    }
}
