//! Construction-time failure kinds.
//!
//! Every failure here is fatal to construction: [`ClosedEnum::new`] returns
//! `Err` and no partial instance exists. The utility operations themselves
//! never fail once an instance has been constructed.
//!
//! [`ClosedEnum::new`]: crate::ClosedEnum::new

use thiserror::Error;

/// Names of the utility operations on a [`ClosedEnum`]. A source key equal
/// to any of these is rejected at construction so the entries and the
/// operations remain presentable as one flat surface.
///
/// [`ClosedEnum`]: crate::ClosedEnum
pub const RESERVED_NAMES: [&str; 5] = ["is_key", "is_value", "key_of", "keys", "values"];

/// Why a source mapping was rejected by the factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    /// Two keys mapped to the same value, which would make reverse lookup
    /// ambiguous.
    #[error("enumerated values must be unique: key `{key}` repeats the value of key `{prior_key}`")]
    DuplicateValue {
        /// The key whose value was already taken.
        key: String,
        /// The earlier key holding the same value.
        prior_key: String,
    },

    /// A key collides with one of the utility operation names.
    #[error(
        "key `{key}` shadows a reserved operation name (reserved: {})",
        RESERVED_NAMES.join(", ")
    )]
    ReservedKey { key: String },

    /// The same key appeared more than once in the source pairs.
    #[error("key `{key}` appears more than once")]
    DuplicateKey { key: String },

    /// A key was the empty string.
    #[error("keys must be non-empty")]
    EmptyKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_value_message_names_both_keys() {
        let err = EnumError::DuplicateValue {
            key: "Second".to_string(),
            prior_key: "First".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("must be unique"), "got: {text}");
        assert!(text.contains("Second") && text.contains("First"), "got: {text}");
    }

    #[test]
    fn test_reserved_key_message_enumerates_reserved_names() {
        let err = EnumError::ReservedKey {
            key: "keys".to_string(),
        };
        let text = err.to_string();
        for name in RESERVED_NAMES {
            assert!(text.contains(name), "missing `{name}` in: {text}");
        }
    }

    #[test]
    fn test_reserved_names_are_sorted_and_distinct() {
        let mut sorted = RESERVED_NAMES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, RESERVED_NAMES);
        sorted.dedup();
        assert_eq!(sorted.len(), RESERVED_NAMES.len());
    }
}
