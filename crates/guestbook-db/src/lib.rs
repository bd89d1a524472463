pub mod error;
pub mod manager;
pub mod migrations;
pub mod models;
pub mod queries;

pub use error::Error;
pub use manager::ConnectionManager;

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use tracing::info;

pub struct Database {
    conn: Mutex<Connection>,
    last_created_at: Mutex<DateTime<Utc>>,
}

impl Database {
    /// Open (or create) the database, switch to WAL and run migrations.
    /// Anything that fails before the handle is usable counts as a
    /// connection failure.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let conn = Connection::open(path).map_err(Error::Connection)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(Error::Connection)?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(Error::Connection)?;

        migrations::run(&conn).map_err(Error::Connection)?;

        info!("Guestbook database opened at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
            last_created_at: Mutex::new(DateTime::<Utc>::MIN_UTC),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&Connection) -> Result<T, Error>,
    {
        let conn = self.conn.lock().map_err(|_| Error::LockPoisoned)?;
        f(&conn)
    }

    pub fn with_conn_mut<F, T>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&Connection) -> Result<T, Error>,
    {
        let conn = self.conn.lock().map_err(|_| Error::LockPoisoned)?;
        f(&conn)
    }

    /// Next `created_at` value. Strictly greater than every value handed out
    /// before it in this process, even if the wall clock stalls or steps back.
    pub(crate) fn next_created_at(&self) -> Result<DateTime<Utc>, Error> {
        let mut last = self
            .last_created_at
            .lock()
            .map_err(|_| Error::LockPoisoned)?;
        let mut now = Utc::now();
        if now <= *last {
            now = *last + chrono::Duration::microseconds(1);
        }
        *last = now;
        Ok(now)
    }
}
