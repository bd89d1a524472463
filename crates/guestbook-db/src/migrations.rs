use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS messages (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL CHECK (name <> ''),
            email       TEXT,
            body        TEXT NOT NULL CHECK (body <> ''),
            created_at  TEXT NOT NULL
        );

        -- Only for list performance; ordering correctness does not depend on it.
        CREATE INDEX IF NOT EXISTS idx_messages_created_at
            ON messages(created_at);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
