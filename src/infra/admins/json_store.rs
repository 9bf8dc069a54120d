use crate::core::admins::{AdminError, AdminStore};
use crate::infra::json_file::{read_json, write_json_atomic};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Admin ids persisted as a sorted JSON array.
///
/// Mutations hold the write lock until the file is rewritten, so two racing
/// `/add_admin` calls can't interleave their writes. If the write fails the
/// in-memory set is rolled back.
pub struct JsonAdminStore {
    path: PathBuf,
    cache: RwLock<BTreeSet<u64>>,
}

impl JsonAdminStore {
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, AdminError> {
        let path = path.into();
        let admins = read_json(&path)
            .await
            .map_err(|e| AdminError::StorageError(format!("{}: {}", path.display(), e)))?
            .unwrap_or_default();

        Ok(Self {
            path,
            cache: RwLock::new(admins),
        })
    }

    async fn persist(&self, admins: &BTreeSet<u64>) -> Result<(), AdminError> {
        write_json_atomic(&self.path, admins)
            .await
            .map_err(|e| AdminError::StorageError(e.to_string()))
    }
}

#[async_trait]
impl AdminStore for JsonAdminStore {
    async fn contains(&self, user_id: u64) -> Result<bool, AdminError> {
        Ok(self.cache.read().await.contains(&user_id))
    }

    async fn insert(&self, user_id: u64) -> Result<bool, AdminError> {
        let mut cache = self.cache.write().await;
        if !cache.insert(user_id) {
            return Ok(false);
        }

        if let Err(e) = self.persist(&cache).await {
            cache.remove(&user_id);
            return Err(e);
        }
        Ok(true)
    }

    async fn remove(&self, user_id: u64) -> Result<bool, AdminError> {
        let mut cache = self.cache.write().await;
        if !cache.remove(&user_id) {
            return Ok(false);
        }

        if let Err(e) = self.persist(&cache).await {
            cache.insert(user_id);
            return Err(e);
        }
        Ok(true)
    }

    async fn all(&self) -> Result<Vec<u64>, AdminError> {
        Ok(self.cache.read().await.iter().copied().collect())
    }
}
