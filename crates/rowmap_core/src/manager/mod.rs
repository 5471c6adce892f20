//! Record managers and whole-table statement construction.
//!
//! # Responsibility
//! - Bind one manager per record type and expose its select/insert/update/
//!   delete operations.
//! - Assemble statement text and positional parameters from field names.
//!
//! # Invariants
//! - No operation emits a WHERE clause; update and delete touch every row
//!   of the bound table.
//! - insert checks field-name parity across rows before any store access,
//!   then executes one statement per row in slice order.

use crate::record::{FieldMap, Record, RecordType};
use crate::store::{StatementExecutor, StoreError, StoreHandle, StoreResult};
use log::debug;
use rusqlite::types::Value;
use std::sync::Arc;

pub mod registry;

pub use registry::ManagerRegistry;

/// Shared CRUD surface for one record type's table.
///
/// Managers are created by the registry on first lookup and hold nothing
/// beyond the record type's names and the injected store handle.
pub struct Manager {
    handle: Arc<StoreHandle>,
    table_name: &'static str,
    record_name: &'static str,
}

impl Manager {
    pub(crate) fn bound<T: RecordType>(handle: Arc<StoreHandle>) -> Self {
        Self {
            handle,
            table_name: T::TABLE,
            record_name: T::type_name(),
        }
    }

    /// Table every statement built by this manager addresses.
    pub fn table_name(&self) -> &'static str {
        self.table_name
    }

    /// Short record type name stamped onto selected records.
    pub fn record_name(&self) -> &'static str {
        self.record_name
    }

    /// Reads the named fields from every row of the bound table.
    ///
    /// `fields` is an ordered projection: it fixes the statement's column
    /// list and the field order of each returned record. Rows come back in
    /// the store's natural order.
    pub fn select(&self, fields: &[&str]) -> StoreResult<Vec<Record>> {
        let statement = select_statement(self.table_name, fields);
        let rows = StatementExecutor::new(&self.handle).query_rows(&statement, &[])?;

        let records = rows
            .into_iter()
            .map(|row| {
                let mut mapped = FieldMap::new();
                for (name, value) in fields.iter().zip(row) {
                    mapped.set(*name, value);
                }
                Record::new(self.record_name, mapped)
            })
            .collect::<Vec<_>>();

        debug!(
            "event=record_select module=manager record={} table={} fields={} rows={}",
            self.record_name,
            self.table_name,
            fields.len(),
            records.len()
        );
        Ok(records)
    }

    /// Inserts one table row per field map, in slice order.
    ///
    /// Every row must carry the same field-name set as `rows[0]`; a
    /// mismatch or an empty slice fails with `SchemaMismatch` before any
    /// store access. The first row fixes the column order and each row
    /// binds its values by those names, one statement per row, so a
    /// failure on a later row leaves earlier rows applied.
    pub fn insert(&self, rows: &[FieldMap]) -> StoreResult<()> {
        let Some(first) = rows.first() else {
            return Err(StoreError::SchemaMismatch(
                "insert requires at least one row".to_string(),
            ));
        };

        for (index, row) in rows.iter().enumerate().skip(1) {
            if !row.same_fields(first) {
                return Err(StoreError::SchemaMismatch(format!(
                    "insert row {index} fields `{}` do not match row 0 fields `{}`",
                    field_list(row),
                    field_list(first)
                )));
            }
        }

        let canonical: Vec<&str> = first.names().collect();
        let statement = insert_statement(self.table_name, &canonical);
        let executor = StatementExecutor::new(&self.handle);

        for row in rows {
            let params: Vec<Value> = canonical
                .iter()
                .map(|name| row.get(name).cloned().unwrap_or(Value::Null))
                .collect();
            executor.execute(&statement, &params)?;
        }

        debug!(
            "event=record_insert module=manager record={} table={} rows={}",
            self.record_name,
            self.table_name,
            rows.len()
        );
        Ok(())
    }

    /// Overwrites the named fields on every row of the bound table.
    ///
    /// The statement carries no row filter, so the assignment applies
    /// uniformly across the table. Values bind in the map's field order.
    pub fn update(&self, values: &FieldMap) -> StoreResult<()> {
        let names: Vec<&str> = values.names().collect();
        let statement = update_statement(self.table_name, &names);
        let params: Vec<Value> = values.values().cloned().collect();
        let changed = StatementExecutor::new(&self.handle).execute(&statement, &params)?;

        debug!(
            "event=record_update module=manager record={} table={} fields={} changed={}",
            self.record_name,
            self.table_name,
            names.len(),
            changed
        );
        Ok(())
    }

    /// Removes every row from the bound table.
    pub fn delete(&self) -> StoreResult<()> {
        let statement = delete_statement(self.table_name);
        let changed = StatementExecutor::new(&self.handle).execute(&statement, &[])?;

        debug!(
            "event=record_delete module=manager record={} table={} changed={}",
            self.record_name, self.table_name, changed
        );
        Ok(())
    }
}

fn select_statement(table: &str, fields: &[&str]) -> String {
    format!("SELECT {} FROM {table}", fields.join(", "))
}

fn insert_statement(table: &str, fields: &[&str]) -> String {
    let placeholders = vec!["?"; fields.len()].join(", ");
    format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders})",
        fields.join(", ")
    )
}

fn update_statement(table: &str, fields: &[&str]) -> String {
    let assignments = fields
        .iter()
        .map(|field| format!("{field} = ?"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("UPDATE {table} SET {assignments}")
}

fn delete_statement(table: &str) -> String {
    format!("DELETE FROM {table}")
}

fn field_list(fields: &FieldMap) -> String {
    fields.names().collect::<Vec<_>>().join(", ")
}
