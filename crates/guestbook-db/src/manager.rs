use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tokio::task;

use crate::{Database, Error};

/// Lazy, process-lifetime connection cache. Nothing is opened until the first
/// `get`; concurrent first calls share a single open attempt, and a failed
/// attempt leaves the cell empty so the next call retries.
pub struct ConnectionManager {
    path: PathBuf,
    cell: OnceCell<Arc<Database>>,
}

impl ConnectionManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    pub async fn get(&self) -> Result<Arc<Database>, Error> {
        let db = self
            .cell
            .get_or_try_init(|| async {
                let path = self.path.clone();
                // Opening runs blocking SQLite calls; keep them off the runtime.
                let db = task::spawn_blocking(move || Database::open(&path)).await??;
                Ok::<_, Error>(Arc::new(db))
            })
            .await?;
        Ok(db.clone())
    }
}
