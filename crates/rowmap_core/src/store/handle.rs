//! Shared connection handle for the SQLite store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections on demand.
//! - Expose the current connection to statement execution.
//!
//! # Invariants
//! - At most one connection is installed at a time; a repeated `connect`
//!   replaces the previous connection for all subsequent operations.
//! - Operations issued on an unconnected handle fail with `NotConnected`
//!   before any store access happens.
//! - There is no close/teardown path; a replaced connection is simply
//!   dropped.

use super::{StoreError, StoreResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

/// Injectable holder of the single store connection.
///
/// Managers share one handle through `Arc<StoreHandle>`; the handle performs
/// no concurrency control beyond guarding the connection slot itself, so
/// concurrent callers interleave at statement granularity under SQLite's
/// default autocommit.
pub struct StoreHandle {
    conn: Mutex<Option<Connection>>,
}

impl StoreHandle {
    /// Creates an unconnected handle.
    pub fn new() -> Self {
        Self {
            conn: Mutex::new(None),
        }
    }

    /// Opens a file-backed SQLite database and installs it as the current
    /// connection, replacing any prior connection.
    ///
    /// # Side effects
    /// - Emits `store_connect` logging events with duration and status.
    pub fn connect(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let started_at = Instant::now();
        info!(
            "event=store_connect module=store status=start mode=file target={}",
            path.as_ref().display()
        );

        match Connection::open(path) {
            Ok(conn) => {
                self.install(conn);
                info!(
                    "event=store_connect module=store status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_connect module=store status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Opens an in-memory SQLite database and installs it as the current
    /// connection, replacing any prior connection.
    ///
    /// # Side effects
    /// - Emits `store_connect` logging events with duration and status.
    pub fn connect_in_memory(&self) -> StoreResult<()> {
        let started_at = Instant::now();
        info!("event=store_connect module=store status=start mode=memory");

        match Connection::open_in_memory() {
            Ok(conn) => {
                self.install(conn);
                info!(
                    "event=store_connect module=store status=ok mode=memory duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_connect module=store status=error mode=memory duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Returns whether a connection is currently installed.
    pub fn is_connected(&self) -> bool {
        self.lock_slot().is_some()
    }

    /// Runs `f` against the current connection.
    ///
    /// Fails with [`StoreError::NotConnected`] when no connection has been
    /// established; `f` is not invoked in that case.
    pub(crate) fn with_connection<T>(
        &self,
        f: impl FnOnce(&Connection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let slot = self.lock_slot();
        match slot.as_ref() {
            Some(conn) => f(conn),
            None => Err(StoreError::NotConnected),
        }
    }

    fn install(&self, conn: Connection) {
        let mut slot = self.lock_slot();
        *slot = Some(conn);
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<Connection>> {
        // A poisoned lock still guards a structurally valid slot.
        match self.conn.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::new()
    }
}
