use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Insertion-ordered map keyed by role id.
///
/// The rubric file is a JSON object, and the recommender breaks ties by the order roles are
/// declared in it, so every role-keyed collection keeps document order instead of hashing.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for RoleMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> RoleMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces. A replaced role keeps its original position.
    pub fn insert(&mut self, role: impl Into<String>, value: T) {
        let role = role.into();
        match self.entries.iter_mut().find(|(k, _)| *k == role) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((role, value)),
        }
    }

    pub fn get(&self, role: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(k, _)| k == role)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<T: Serialize> Serialize for RoleMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct RoleMapVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for RoleMapVisitor<T> {
    type Value = RoleMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object keyed by role id")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = RoleMap::new();
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RoleMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RoleMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_document_order() {
        let json = r#"{"zeta": 1, "alpha": 2, "mid": 3}"#;
        let map: RoleMap<u32> = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_key_keeps_first_position_last_value() {
        let json = r#"{"a": 1, "b": 2, "a": 3}"#;
        let map: RoleMap<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().next(), Some("a"));
        assert_eq!(map.get("a"), Some(&3));
    }

    #[test]
    fn test_serialize_as_ordered_object() {
        let mut map = RoleMap::new();
        map.insert("data_scientist", 0.5);
        map.insert("data_analyst", 0.25);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"data_scientist":0.5,"data_analyst":0.25}"#);
    }

    #[test]
    fn test_rejects_non_object() {
        let result: Result<RoleMap<u32>, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }
}
