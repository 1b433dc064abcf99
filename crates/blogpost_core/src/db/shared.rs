//! Shared store handle with scoped transactions.
//!
//! # Responsibility
//! - Hand out bootstrapped connections to concurrent requests.
//! - Run multi-step operations (check + write + re-read) atomically.
//!
//! # Invariants
//! - A transaction is committed only when the closure returns `Ok`.
//! - Dropping the transaction (error or unwind) rolls it back.
//! - File-backed stores give each concurrent call its own connection, so
//!   locking between readers and writers is left to SQLite.

use super::{open_db, open_db_in_memory, DbError, DbResult};
use rusqlite::{Connection, TransactionBehavior};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Idle file connections kept for reuse; extra ones are closed on return.
const MAX_IDLE_CONNECTIONS: usize = 8;

/// Store handle shared across request handlers.
pub struct Database {
    backend: Backend,
}

enum Backend {
    /// An in-memory store lives and dies with its one connection.
    Single(Mutex<Connection>),
    File {
        path: PathBuf,
        idle: Mutex<Vec<Connection>>,
    },
}

impl Database {
    /// Wraps an already bootstrapped connection as the only connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            backend: Backend::Single(Mutex::new(conn)),
        }
    }

    /// Opens (and migrates) a file-backed database.
    ///
    /// Further connections to the same file are opened on demand.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref().to_path_buf();
        let first = open_db(&path)?;
        Ok(Self {
            backend: Backend::File {
                path,
                idle: Mutex::new(vec![first]),
            },
        })
    }

    /// Opens (and migrates) an isolated in-memory database.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    /// Runs a read-only step on a store connection.
    pub fn with_connection<T, E>(&self, f: impl FnOnce(&Connection) -> Result<T, E>) -> Result<T, E>
    where
        E: From<DbError>,
    {
        let conn = self.checkout()?;
        let result = f(&conn);
        self.checkin(conn);
        result
    }

    /// Runs `f` inside one IMMEDIATE transaction.
    ///
    /// The write lock is taken up front, so a check performed inside `f`
    /// still holds when the following write executes.
    pub fn with_transaction<T, E>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<DbError>,
    {
        let mut conn = self.checkout()?;
        let result = run_immediate(&mut conn, f);
        self.checkin(conn);
        result
    }

    fn checkout(&self) -> DbResult<Checkout<'_>> {
        match &self.backend {
            // A panic inside a closure unwinds through the transaction guard,
            // which rolls back; the connection itself is still consistent.
            Backend::Single(conn) => Ok(Checkout::Single(
                conn.lock().unwrap_or_else(PoisonError::into_inner),
            )),
            Backend::File { path, idle } => {
                let reused = idle.lock().unwrap_or_else(PoisonError::into_inner).pop();
                match reused {
                    Some(conn) => Ok(Checkout::Pooled(conn)),
                    None => Ok(Checkout::Pooled(open_db(path)?)),
                }
            }
        }
    }

    /// Returns a file connection to the idle list. A connection lost to a
    /// panic is simply closed.
    fn checkin(&self, checkout: Checkout<'_>) {
        let (Backend::File { idle, .. }, Checkout::Pooled(conn)) = (&self.backend, checkout) else {
            return;
        };
        let mut idle = idle.lock().unwrap_or_else(PoisonError::into_inner);
        if idle.len() < MAX_IDLE_CONNECTIONS {
            idle.push(conn);
        }
    }
}

fn run_immediate<T, E>(
    conn: &mut Connection,
    f: impl FnOnce(&Connection) -> Result<T, E>,
) -> Result<T, E>
where
    E: From<DbError>,
{
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(DbError::from)?;
    let value = f(&tx)?;
    tx.commit().map_err(DbError::from)?;
    Ok(value)
}

enum Checkout<'db> {
    Single(MutexGuard<'db, Connection>),
    Pooled(Connection),
}

impl Deref for Checkout<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        match self {
            Self::Single(guard) => &**guard,
            Self::Pooled(conn) => conn,
        }
    }
}

impl DerefMut for Checkout<'_> {
    fn deref_mut(&mut self) -> &mut Connection {
        match self {
            Self::Single(guard) => &mut **guard,
            Self::Pooled(conn) => conn,
        }
    }
}
