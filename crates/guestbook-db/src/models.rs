/// Database row types — these map directly to SQLite rows. `id` and
/// `created_at` stay as stored text; the API layer owns conversion to the
/// wire types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub body: String,
    pub created_at: String,
}
