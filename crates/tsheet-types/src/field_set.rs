//! Extracted fields for one document.
//!
//! A [`FieldSet`] maps normalized field names to optional text. `None` is the
//! explicit "no value" marker produced when extraction found a field label but
//! no value; it is kept distinct from the empty string.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;
use crate::field::FieldName;

/// Field name → optional text mapping extracted from one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: BTreeMap<FieldName, Option<String>>,
}

impl FieldSet {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field set from raw `(key, value)` pairs.
    ///
    /// Fails if any key is blank or if two keys normalize to the same name.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self, TypeError>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, Option<V>)>,
    {
        let mut set = Self::new();
        for (key, value) in pairs {
            set.insert(key.as_ref(), value.map(Into::into))?;
        }
        Ok(set)
    }

    /// Insert a field under its normalized name.
    pub fn insert(&mut self, raw_key: &str, value: Option<String>) -> Result<(), TypeError> {
        let name = FieldName::new(raw_key)?;
        if self.fields.contains_key(&name) {
            return Err(TypeError::DuplicateFieldName(name.into_string()));
        }
        self.fields.insert(name, value);
        Ok(())
    }

    /// Returns `true` if the field name is a key of this set (with or without a value).
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The stored value for a field, flattening "key absent" and "no value".
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_deref())
    }

    /// Field names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k, v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for FieldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FieldSetVisitor)
    }
}

struct FieldSetVisitor;

impl<'de> Visitor<'de> for FieldSetVisitor {
    type Value = FieldSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of field names to strings or null")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = FieldSet::new();
        while let Some((key, value)) = access.next_entry::<String, Option<String>>()? {
            set.insert(&key, value).map_err(serde::de::Error::custom)?;
        }
        Ok(set)
    }
}
