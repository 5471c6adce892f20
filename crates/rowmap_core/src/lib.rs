//! Minimal record/table mapping over SQLite.
//! Record types declare a backing table and gain whole-table CRUD through a
//! shared manager; no query language, schema validation, or transactions.

pub mod logging;
pub mod manager;
pub mod record;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use manager::{Manager, ManagerRegistry};
pub use record::{FieldMap, Record, RecordType};
pub use store::{StatementExecutor, StoreError, StoreHandle, StoreResult};

pub use rusqlite::types::Value;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
