//! Ordered parameter set.
//!
//! [`ParamMap`] wraps an [`IndexMap`] so decoded parameters iterate in the
//! order their segments appeared in the identifier. Re-inserting a name replaces
//! its value but keeps the position where the name was first seen, which gives
//! decoding its last-wins semantics for duplicate names.
//!
//! Encoding never depends on this order: [`encode`](crate::encode) sorts names.
//!
//! ## Examples
//!
//! ```rust
//! use param_ident::{ParamMap, ParamValue};
//!
//! let mut map = ParamMap::new();
//! map.insert("lag".to_string(), ParamValue::from(3));
//! map.insert("f_agg".to_string(), ParamValue::from("mean"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("f_agg").and_then(|v| v.as_str()), Some("mean"));
//! ```

use crate::ParamValue;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// An insertion-ordered map of parameter names to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamMap(IndexMap<String, ParamValue>);

impl ParamMap {
    #[must_use]
    pub fn new() -> Self {
        ParamMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ParamMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a name/value pair.
    ///
    /// If the name was already present, the old value is returned and the
    /// name keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use param_ident::{ParamMap, ParamValue};
    ///
    /// let mut map = ParamMap::new();
    /// map.insert("a".to_string(), ParamValue::from(1));
    /// map.insert("b".to_string(), ParamValue::from(2));
    /// assert!(map.insert("a".to_string(), ParamValue::from(3)).is_some());
    ///
    /// let names: Vec<_> = map.keys().cloned().collect();
    /// assert_eq!(names, vec!["a", "b"]);
    /// assert_eq!(map.get("a"), Some(&ParamValue::from(3)));
    /// ```
    pub fn insert(&mut self, name: String, value: ParamValue) -> Option<ParamValue> {
        self.0.insert(name, value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Removes a parameter, preserving the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.0.shift_remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the names of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, ParamValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, ParamValue> {
        self.0.values()
    }

    /// Returns an iterator over the name/value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Returns the entries sorted by name, the order used for encoding.
    pub(crate) fn sorted_entries(&self) -> Vec<(&String, &ParamValue)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl From<HashMap<String, ParamValue>> for ParamMap {
    fn from(map: HashMap<String, ParamValue>) -> Self {
        ParamMap(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, ParamValue>> for ParamMap {
    fn from(map: BTreeMap<String, ParamValue>) -> Self {
        ParamMap(map.into_iter().collect())
    }
}

impl From<ParamMap> for HashMap<String, ParamValue> {
    fn from(map: ParamMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for ParamMap {
    type Item = (String, ParamValue);
    type IntoIter = indexmap::map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParamMap {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = indexmap::map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, ParamValue)> for ParamMap {
    fn from_iter<T: IntoIterator<Item = (String, ParamValue)>>(iter: T) -> Self {
        ParamMap(IndexMap::from_iter(iter))
    }
}

impl Serialize for ParamMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for ParamMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{MapAccess, Visitor};

        struct ParamMapVisitor;

        impl<'de> Visitor<'de> for ParamMapVisitor {
            type Value = ParamMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of parameter names to values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut params = ParamMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, ParamValue>()? {
                    params.insert(name, value);
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ParamMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_entries_ignore_insertion_order() {
        let map: ParamMap = vec![
            ("b".to_string(), ParamValue::from(1)),
            ("a".to_string(), ParamValue::from(2)),
            ("B".to_string(), ParamValue::from(3)),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = map.sorted_entries().into_iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["B", "a", "b"]);
        let names: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["b", "a", "B"]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut map = ParamMap::new();
        map.insert("x".to_string(), ParamValue::from(1));
        map.insert("y".to_string(), ParamValue::from(2));
        map.insert("z".to_string(), ParamValue::from(3));
        assert_eq!(map.remove("y"), Some(ParamValue::from(2)));
        let names: Vec<_> = map.keys().cloned().collect();
        assert_eq!(names, vec!["x", "z"]);
        assert!(!map.contains_key("y"));
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let json = r#"{"zeta":1,"alpha":"mean","mid":[1,2]}"#;
        let map: ParamMap = serde_json::from_str(json).unwrap();
        let names: Vec<_> = map.keys().cloned().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(serde_json::to_string(&map).unwrap(), json);
    }
}
