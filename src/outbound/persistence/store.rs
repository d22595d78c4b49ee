//! SQLite store handle owning the process-wide connection lifecycle.
//!
//! The service keeps exactly one connection: opened at startup (creating
//! the database file if absent), schema-synchronised from the entity
//! descriptors, and closed once at shutdown. SQLite serialises conflicting
//! writes internally, so callers need no locking beyond the handle's own
//! mutex.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::debug;

use super::entity::USERS_TABLE;

/// Errors raised while opening or using the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The database file could not be opened.
    #[error("failed to open store at {path}: {message}")]
    Open { path: String, message: String },

    /// Schema synchronisation failed after the connection was established.
    #[error("store schema sync failed: {message}")]
    SchemaSync { message: String },

    /// The handle has already been closed.
    #[error("store connection is closed")]
    Closed,
}

/// Handle to the single SQLite connection.
///
/// Cloning is cheap and shares the underlying connection; the connected
/// flag feeds the `database` field of the health report.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Option<SqliteConnection>>>,
    connected: Arc<AtomicBool>,
}

impl Store {
    /// Open the database file, apply connection pragmas, and synchronise
    /// the schema from the entity descriptors.
    ///
    /// The file is created when absent; existing tables are left untouched.
    pub fn connect(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().display().to_string();
        let mut conn = SqliteConnection::establish(&path).map_err(|err| StoreError::Open {
            path: path.clone(),
            message: err.to_string(),
        })?;

        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(|err| StoreError::Open { path, message: err.to_string() })?;

        sync_schema(&mut conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(Some(conn))),
            connected: Arc::new(AtomicBool::new(true)),
        })
    }

    /// Whether the handle currently holds a live connection.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    /// Drop the connection and clear the connected flag. Idempotent.
    pub fn close(&self) {
        let conn = self.lock_conn().take();
        self.connected.store(false, Ordering::Release);
        if conn.is_some() {
            debug!("store connection closed");
        }
    }

    /// Run a closure against the live connection.
    ///
    /// Returns [`StoreError::Closed`] (converted into the caller's error
    /// type) once [`Store::close`] has been called.
    pub(crate) fn with_conn<T, E>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let mut guard = self.lock_conn();
        let conn = guard.as_mut().ok_or(StoreError::Closed)?;
        f(conn)
    }

    fn lock_conn(&self) -> std::sync::MutexGuard<'_, Option<SqliteConnection>> {
        // A poisoned mutex only means a query panicked; the connection
        // itself is still usable.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Create any missing tables from the entity descriptors.
fn sync_schema(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    for table in [&USERS_TABLE] {
        conn.batch_execute(&table.create_sql())
            .map_err(|err| StoreError::SchemaSync { message: err.to_string() })?;
        debug!(table = table.name, "schema synchronised");
    }
    Ok(())
}
