//! Record base shapes for mapped rows.
//!
//! # Responsibility
//! - Declare mapped types (table name + diagnostic name) via [`RecordType`].
//! - Represent one result row as an ordered, schema-less field bag.
//!
//! # Invariants
//! - A record adopts whatever field names the producing call supplied,
//!   verbatim and in order; no declared-schema validation exists.
//! - `describe()`/`Display` output is diagnostic only, never persisted and
//!   never used for equality.

use crate::manager::{Manager, ManagerRegistry};
use rusqlite::types::Value;
use serde::ser::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

mod field_map;

pub use field_map::FieldMap;

/// Declaration-time descriptor of a mapped entity.
///
/// Implementors are typically empty unit structs: the type exists to carry
/// the backing table name and to key the manager registry.
///
/// ```
/// use rowmap_core::RecordType;
///
/// struct Product;
///
/// impl RecordType for Product {
///     const TABLE: &'static str = "products";
/// }
///
/// assert_eq!(Product::TABLE, "products");
/// assert_eq!(Product::type_name(), "Product");
/// ```
pub trait RecordType: 'static {
    /// Name of the table every statement built for this type addresses.
    const TABLE: &'static str;

    /// Short type name used in diagnostics and record display.
    fn type_name() -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Returns the manager bound to this record type within `registry`.
    ///
    /// Convenience over [`ManagerRegistry::manager_for`] so call sites read
    /// as record type, then manager, then operation.
    fn manager(registry: &ManagerRegistry) -> Arc<Manager>
    where
        Self: Sized,
    {
        registry.manager_for::<Self>()
    }
}

/// One in-memory instance of a single result row.
///
/// Created by select's row marshaling; ephemeral and held only by the
/// caller. The field order matches the projection order of the producing
/// select call.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: &'static str,
    fields: FieldMap,
}

impl Record {
    /// Builds a record from a marshaled field map.
    pub fn new(type_name: &'static str, fields: FieldMap) -> Self {
        Self { type_name, fields }
    }

    /// Short name of the record type that produced this row.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the value of `name`, if the projection included it.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn into_fields(self) -> FieldMap {
        self.fields
    }

    /// Human-readable listing of `TypeName: (field1=value1, field2=value2)`
    /// in field order, for diagnostic display.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: (", self.type_name)?;
        for (index, (name, value)) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}=")?;
            write_scalar(f, value)?;
        }
        f.write_str(")")
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.fields.serialize(serializer)
    }
}

fn write_scalar(f: &mut Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("NULL"),
        Value::Integer(integer) => write!(f, "{integer}"),
        Value::Real(real) => write!(f, "{real}"),
        Value::Text(text) => f.write_str(text),
        Value::Blob(blob) => write!(f, "<blob {} bytes>", blob.len()),
    }
}
