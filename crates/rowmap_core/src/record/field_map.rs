//! Ordered field-name/value container shared by records and write calls.
//!
//! # Responsibility
//! - Preserve field declaration order for statement construction and
//!   record marshaling.
//! - Bridge JSON boundary payloads to store scalars and back.
//!
//! # Invariants
//! - Field names are unique within one map; `set` replaces in place.
//! - Iteration order is insertion order, with replaced fields keeping
//!   their original position.

use rusqlite::types::Value;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Ordered mapping from field name to a tagged scalar value.
///
/// This is the row shape of the mapping layer: callers build one per row
/// for insert, one per call for update, and select produces one per result
/// row inside each [`Record`](super::Record). Which fields exist is
/// entirely the caller's choice; nothing is validated against a schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: Vec<(String, Value)>,
}

impl FieldMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chaining form of [`set`](Self::set) for literal row construction.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets one field, replacing any existing entry in place so the field
    /// keeps its original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns the value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Field values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Name/value pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compares field-name sets, ignoring declaration order.
    ///
    /// Names are unique within a map, so equal length plus full containment
    /// is set equality.
    pub fn same_fields(&self, other: &FieldMap) -> bool {
        self.len() == other.len() && self.names().all(|name| other.get(name).is_some())
    }
}

impl Serialize for FieldMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            match value {
                Value::Null => map.serialize_entry(name, &None::<i64>)?,
                Value::Integer(integer) => map.serialize_entry(name, integer)?,
                Value::Real(real) => map.serialize_entry(name, real)?,
                Value::Text(text) => map.serialize_entry(name, text)?,
                Value::Blob(blob) => map.serialize_entry(name, blob)?,
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldMapVisitor;

        impl<'de> Visitor<'de> for FieldMapVisitor {
            type Value = FieldMap;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of field names to scalar values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<FieldMap, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = FieldMap::new();
                while let Some((name, scalar)) = access.next_entry::<String, ScalarDe>()? {
                    fields.set(name, scalar.0);
                }
                Ok(fields)
            }
        }

        deserializer.deserialize_map(FieldMapVisitor)
    }
}

/// Decodes one boundary scalar into a store value.
///
/// Booleans land as 0/1 integers, matching how SQLite stores them; nested
/// arrays and objects are rejected.
struct ScalarDe(Value);

impl<'de> Deserialize<'de> for ScalarDe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = ScalarDe;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a null, boolean, number, string, or byte-array scalar")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(ScalarDe(Value::Null))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(ScalarDe(Value::Null))
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                ScalarDe::deserialize(deserializer)
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(ScalarDe(Value::Integer(i64::from(value))))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(ScalarDe(Value::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(|integer| ScalarDe(Value::Integer(integer)))
                    .map_err(|_| {
                        E::custom(format!("integer {value} exceeds the store's integer range"))
                    })
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(ScalarDe(Value::Real(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(ScalarDe(Value::Text(value.to_owned())))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(ScalarDe(Value::Text(value)))
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E> {
                Ok(ScalarDe(Value::Blob(value.to_vec())))
            }

            fn visit_byte_buf<E>(self, value: Vec<u8>) -> Result<Self::Value, E> {
                Ok(ScalarDe(Value::Blob(value)))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}
