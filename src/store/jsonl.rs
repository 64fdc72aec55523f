//! Append-only JSON Lines store for running without Cosmos DB.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{fs::OpenOptions, io::AsyncWriteExt, sync::Mutex};
use tracing::debug;

use crate::error::TriageResult;

use super::{CommentRecord, CommentStore};

pub struct JsonlStore {
    path: PathBuf,
    // Serializes appends so lines never interleave.
    lock: Mutex<()>,
}

impl JsonlStore {
    pub async fn open(path: impl Into<PathBuf>) -> TriageResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CommentStore for JsonlStore {
    async fn create_item(&self, record: &CommentRecord) -> TriageResult<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let _guard = self.lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;
        debug!(id = %record.id, path = %self.path.display(), "record appended");
        Ok(())
    }
}
