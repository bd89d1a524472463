use chrono::SecondsFormat;
use uuid::Uuid;

use crate::models::MessageRow;
use crate::{Database, Error};

/// Client-visible reason returned when `name` or `body` is missing.
pub const REQUIRED_FIELDS: &str = "Name and message are required";

impl Database {
    /// Validate, assign `id` and `created_at`, persist, and return the stored
    /// row including the generated fields.
    pub fn insert_message(
        &self,
        name: &str,
        email: Option<&str>,
        body: &str,
    ) -> Result<MessageRow, Error> {
        if name.is_empty() || body.is_empty() {
            return Err(Error::Validation(REQUIRED_FIELDS));
        }

        let id = Uuid::new_v4().to_string();
        let created_at = self
            .next_created_at()?
            .to_rfc3339_opts(SecondsFormat::Micros, true);

        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO messages (id, name, email, body, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![id, name, email, body, created_at],
            )?;
            Ok(())
        })?;

        Ok(MessageRow {
            id,
            name: name.to_string(),
            email: email.map(str::to_string),
            body: body.to_string(),
            created_at,
        })
    }

    /// Up to `limit` messages, newest first. RFC 3339 timestamps in a fixed
    /// format sort lexicographically; `rowid` breaks any remaining tie by
    /// insertion order.
    pub fn list_recent(&self, limit: u32) -> Result<Vec<MessageRow>, Error> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, email, body, created_at
                 FROM messages
                 ORDER BY created_at DESC, rowid DESC
                 LIMIT ?1",
            )?;

            let rows = stmt
                .query_map([limit], |row| {
                    Ok(MessageRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        email: row.get(2)?,
                        body: row.get(3)?,
                        created_at: row.get(4)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }
}
