//! The enum factory and the frozen instance it returns.
//!
//! [`ClosedEnum::new`] validates the source pairs (non-empty keys, no
//! duplicate keys, no reserved keys, no duplicate values), stores them in
//! insertion order, and precomputes the value → key reverse mapping. The
//! returned instance exposes no mutating methods, so everything after
//! construction is a pure read over frozen state and the instance is
//! `Send + Sync` whenever the value type is.
//!
//! Enumeration (`keys`, `values`, `iter`, serialization) is defined over the
//! entries only; the utility operations are methods on the type and can
//! never leak into it.

use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::{EnumError, RESERVED_NAMES};
use crate::value::Value;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A frozen, validated name → value mapping with reverse lookup.
///
/// Construct one with [`ClosedEnum::new`] (or the [`closed_enum!`] macro).
/// Entries keep their declaration order; values are guaranteed pairwise
/// distinct, which is what makes [`key_of`](ClosedEnum::key_of) well
/// defined.
///
/// [`closed_enum!`]: crate::closed_enum
#[derive(Clone)]
pub struct ClosedEnum<V: Value> {
    entries: FxIndexMap<String, V>,
    reverse: FxHashMap<V, String>,
}

impl<V: Value> ClosedEnum<V> {
    /// Build a frozen enum from `(name, value)` pairs.
    ///
    /// Each pair is validated as it is consumed: the key must be non-empty,
    /// not yet seen, and not one of [`RESERVED_NAMES`]; the value must not
    /// repeat an earlier entry's value. The first violation aborts
    /// construction with the matching [`EnumError`] and no instance escapes.
    pub fn new<K, I>(entries: I) -> Result<Self, EnumError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = entries.into_iter();
        let mut map: FxIndexMap<String, V> =
            FxIndexMap::with_capacity_and_hasher(entries.size_hint().0, FxBuildHasher);
        let mut reverse: FxHashMap<V, String> = FxHashMap::default();

        for (key, value) in entries {
            let key = key.into();
            if key.is_empty() {
                trace!("rejected source mapping: empty key");
                return Err(EnumError::EmptyKey);
            }
            if RESERVED_NAMES.contains(&key.as_str()) {
                trace!(key = key.as_str(), "rejected source mapping: reserved key");
                return Err(EnumError::ReservedKey { key });
            }
            if map.contains_key(&key) {
                trace!(key = key.as_str(), "rejected source mapping: duplicate key");
                return Err(EnumError::DuplicateKey { key });
            }
            if let Some(prior_key) = reverse.insert(value.clone(), key.clone()) {
                trace!(key = key.as_str(), "rejected source mapping: duplicate value");
                return Err(EnumError::DuplicateValue { key, prior_key });
            }
            map.insert(key, value);
        }

        debug!(entries = map.len(), "constructed enum");
        Ok(Self {
            entries: map,
            reverse,
        })
    }

    /// All keys in declaration order. The vector is fresh on every call;
    /// callers may mutate it freely.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// All values in declaration order. Fresh on every call.
    pub fn values(&self) -> Vec<&V> {
        self.entries.values().collect()
    }

    /// Whether `candidate` is one of the keys.
    pub fn is_key(&self, candidate: &str) -> bool {
        self.entries.contains_key(candidate)
    }

    /// Whether `candidate` is one of the values.
    pub fn is_value(&self, candidate: &V) -> bool {
        self.reverse.contains_key(candidate)
    }

    /// The unique key holding `value`, or `None` if `value` is not part of
    /// the enum. Never yields an unrelated key.
    pub fn key_of(&self, value: &V) -> Option<&str> {
        self.reverse.get(value).map(String::as_str)
    }

    /// The value under `key`, or `None` if `key` is not part of the enum.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in declaration order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter(self.entries.iter())
    }
}

/// Panics if `key` is not part of the enum, like the `Index` impl of the
/// underlying map. Use [`ClosedEnum::get`] for a fallible read.
impl<V: Value> Index<&str> for ClosedEnum<V> {
    type Output = V;

    fn index(&self, key: &str) -> &V {
        &self.entries[key]
    }
}

/// Declaration-order iterator over the entries of a [`ClosedEnum`].
pub struct Iter<'a, V>(indexmap::map::Iter<'a, String, V>);

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a, V: Value> IntoIterator for &'a ClosedEnum<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Entry-wise equality. The reverse mapping is derived state and does not
/// participate.
impl<V: Value> PartialEq for ClosedEnum<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Value> Eq for ClosedEnum<V> {}

impl<V: Value + fmt::Debug> fmt::Debug for ClosedEnum<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

/// Serializes as a plain mapping in declaration order; the utility
/// operations do not appear.
impl<V: Value + Serialize> Serialize for ClosedEnum<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Deserializes through the validating factory, so invalid mappings become
/// deserialization errors rather than unchecked instances.
impl<'de, V: Value + Deserialize<'de>> Deserialize<'de> for ClosedEnum<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = IndexMap::<String, V>::deserialize(deserializer)?;
        ClosedEnum::new(entries).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    fn sample() -> ClosedEnum<&'static str> {
        ClosedEnum::new([("First", "one"), ("Second", "two"), ("Third", "three")])
            .unwrap()
    }

    #[test]
    fn test_entries_readable_after_construction() {
        let test_enum = sample();
        assert_eq!(test_enum["First"], "one");
        assert_eq!(test_enum.get("Second"), Some(&"two"));
        assert_eq!(test_enum.get("seventh"), None);
    }

    #[test]
    fn test_keys_and_values_preserve_declaration_order() {
        let test_enum = sample();
        assert_eq!(test_enum.keys(), ["First", "Second", "Third"]);
        assert_eq!(test_enum.values(), [&"one", &"two", &"three"]);
    }

    #[test]
    fn test_order_preserved_for_integer_values() {
        let levels = ClosedEnum::new([("High", 3_u32), ("Low", 1), ("Mid", 2)]).unwrap();
        assert_eq!(levels.keys(), ["High", "Low", "Mid"]);
        assert_eq!(levels.values(), [&3, &1, &2]);
    }

    #[test]
    fn test_order_preserved_for_symbol_values() {
        let (a, b, c) = (Symbol::new(), Symbol::new(), Symbol::new());
        let tokens = ClosedEnum::new([("A", a), ("B", b), ("C", c)]).unwrap();
        assert_eq!(tokens.keys(), ["A", "B", "C"]);
        assert_eq!(tokens.values(), [&a, &b, &c]);
        assert_eq!(tokens.key_of(&b), Some("B"));
    }

    #[test]
    fn test_is_key_membership() {
        let test_enum = sample();
        assert!(test_enum.is_key("First"));
        assert!(!test_enum.is_key("seventh"));
        assert!(!test_enum.is_key(""));
    }

    #[test]
    fn test_is_value_membership() {
        let test_enum = sample();
        assert!(test_enum.is_value(&"one"));
        assert!(!test_enum.is_value(&"seven"));
    }

    #[test]
    fn test_key_of_inverts_the_mapping() {
        let test_enum = sample();
        assert_eq!(test_enum.key_of(&"one"), Some("First"));
        assert_eq!(test_enum.key_of(&"two"), Some("Second"));
        assert_eq!(test_enum.key_of(&"three"), Some("Third"));
        assert_eq!(test_enum.key_of(&"seven"), None);
    }

    #[test]
    fn test_key_of_round_trips_every_key() {
        let test_enum = sample();
        for key in test_enum.keys() {
            assert_eq!(test_enum.key_of(&test_enum[key]), Some(key));
        }
    }

    #[test]
    fn test_iteration_yields_only_entries_in_order() {
        let test_enum = sample();
        let pairs: Vec<_> = test_enum.iter().collect();
        assert_eq!(
            pairs,
            [("First", &"one"), ("Second", &"two"), ("Third", &"three")]
        );
        assert_eq!(test_enum.iter().len(), 3);
    }

    #[test]
    fn test_duplicate_value_rejected() {
        let err = ClosedEnum::new([("First", "one"), ("Second", "one")]).unwrap_err();
        assert_eq!(
            err,
            EnumError::DuplicateValue {
                key: "Second".to_string(),
                prior_key: "First".to_string(),
            }
        );
    }

    #[test]
    fn test_reserved_key_rejected() {
        for name in RESERVED_NAMES {
            let err = ClosedEnum::new([(name, "x")]).unwrap_err();
            assert_eq!(
                err,
                EnumError::ReservedKey {
                    key: name.to_string()
                }
            );
        }
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = ClosedEnum::new([("First", "one"), ("First", "two")]).unwrap_err();
        assert_eq!(
            err,
            EnumError::DuplicateKey {
                key: "First".to_string()
            }
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = ClosedEnum::new([("", "one")]).unwrap_err();
        assert_eq!(err, EnumError::EmptyKey);
    }

    #[test]
    fn test_empty_mapping_is_valid() {
        let empty: ClosedEnum<&str> = ClosedEnum::new(Vec::<(&str, &str)>::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.keys().is_empty());
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn test_index_panics_on_unknown_key() {
        let test_enum = sample();
        let _ = test_enum["seventh"];
    }

    #[test]
    fn test_returned_sequences_are_fresh() {
        let test_enum = sample();
        let mut keys = test_enum.keys();
        keys.clear();
        assert_eq!(test_enum.keys(), ["First", "Second", "Third"]);
    }

    #[test]
    fn test_instance_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClosedEnum<String>>();
        assert_send_sync::<ClosedEnum<u32>>();
        assert_send_sync::<ClosedEnum<Symbol>>();
    }
}
