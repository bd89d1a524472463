use std::sync::Arc;

use guestbook_db::ConnectionManager;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub connections: ConnectionManager,
    /// Cap applied to the list endpoint (GUESTBOOK_LIST_LIMIT, default 100).
    pub list_limit: u32,
}
