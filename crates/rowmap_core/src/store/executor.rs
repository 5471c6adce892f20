//! Statement execution against the shared store connection.
//!
//! # Responsibility
//! - Run single statements, prepared batches, and row-collecting queries.
//! - Bind positional parameters in declaration order.
//!
//! # Invariants
//! - Statements are executed as given; nothing is cached across calls.
//! - Batch execution has no atomicity: a mid-batch failure leaves prior
//!   executions applied under default autocommit.

use super::{StoreHandle, StoreResult};
use log::debug;
use rusqlite::params_from_iter;
use rusqlite::types::Value;

/// Executes textual statements through a [`StoreHandle`].
///
/// The executor is a borrow-scoped view over the handle; constructing one
/// is free and every mapping operation builds its own per call.
pub struct StatementExecutor<'h> {
    handle: &'h StoreHandle,
}

impl<'h> StatementExecutor<'h> {
    pub fn new(handle: &'h StoreHandle) -> Self {
        Self { handle }
    }

    /// Executes one statement with positional parameters bound in order and
    /// returns the changed-row count.
    ///
    /// An empty `params` slice executes the statement as a pure literal,
    /// which is how schema statements reach the store.
    pub fn execute(&self, statement: &str, params: &[Value]) -> StoreResult<usize> {
        self.handle.with_connection(|conn| {
            let changed = conn.execute(statement, params_from_iter(params.iter()))?;
            debug!(
                "event=stmt_exec module=store status=ok changed={changed} statement={statement}"
            );
            Ok(changed)
        })
    }

    /// Executes the same statement once per parameter tuple, in sequence.
    ///
    /// The statement is prepared once and re-bound per tuple, which is
    /// SQLite's native form of batch execution. There is no rollback of
    /// tuples applied before a failing one.
    pub fn execute_many(&self, statement: &str, param_sets: &[Vec<Value>]) -> StoreResult<()> {
        self.handle.with_connection(|conn| {
            let mut stmt = conn.prepare(statement)?;
            for params in param_sets {
                stmt.execute(params_from_iter(params.iter()))?;
            }
            debug!(
                "event=stmt_exec_many module=store status=ok sets={} statement={statement}",
                param_sets.len()
            );
            Ok(())
        })
    }

    /// Runs a query and collects every result row as positional values, in
    /// the store's natural row order.
    pub fn query_rows(&self, statement: &str, params: &[Value]) -> StoreResult<Vec<Vec<Value>>> {
        self.handle.with_connection(|conn| {
            let mut stmt = conn.prepare(statement)?;
            let column_count = stmt.column_count();
            let mut rows = stmt.query(params_from_iter(params.iter()))?;

            let mut collected = Vec::new();
            while let Some(row) = rows.next()? {
                let mut values = Vec::with_capacity(column_count);
                for index in 0..column_count {
                    values.push(row.get::<_, Value>(index)?);
                }
                collected.push(values);
            }

            debug!(
                "event=stmt_query module=store status=ok rows={} statement={statement}",
                collected.len()
            );
            Ok(collected)
        })
    }
}
