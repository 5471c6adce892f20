//! SQLite store access: connection handle and statement execution.
//!
//! # Responsibility
//! - Hold the single shared store connection behind an injectable handle.
//! - Execute textual statements with positional parameters.
//! - Define the error taxonomy shared by every mapping operation.
//!
//! # Invariants
//! - No statement reaches SQLite before a connection is established.
//! - Store failures carry SQLite's native message unreinterpreted.
//! - No retry, no recovery: every failure propagates to the caller.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod executor;
mod handle;

pub use executor::StatementExecutor;
pub use handle::StoreHandle;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the mapping layer.
#[derive(Debug)]
pub enum StoreError {
    /// A store operation was attempted before any connection was established.
    NotConnected,
    /// Insert rows do not declare one common field-name set.
    SchemaMismatch(String),
    /// Failure surfaced by SQLite: malformed statement, binding type
    /// mismatch, or constraint violation.
    Sqlite(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConnected => {
                write!(f, "store handle is not connected; call connect first")
            }
            Self::SchemaMismatch(message) => write!(f, "{message}"),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotConnected => None,
            Self::SchemaMismatch(_) => None,
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
