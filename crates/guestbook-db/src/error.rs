use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A required field was missing or empty. The message is client-safe.
    #[error("{0}")]
    Validation(&'static str),

    /// The database could not be opened. Covers everything up to a usable
    /// handle: open, pragmas, migrations.
    #[error("failed to open guestbook database: {0}")]
    Connection(#[source] rusqlite::Error),

    /// A read or write failed after the connection was established.
    #[error("guestbook query failed: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("blocking database task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("database lock poisoned")]
    LockPoisoned,
}
