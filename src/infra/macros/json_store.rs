use crate::core::macros::{Macro, MacroError, MacroStore};
use crate::infra::json_file::{read_json, write_json_atomic};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Macros persisted as a JSON array, kept in insertion order so the oldest
/// macro wins when several match the same message.
pub struct JsonMacroStore {
    path: PathBuf,
    cache: RwLock<Vec<Macro>>,
}

impl JsonMacroStore {
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, MacroError> {
        let path = path.into();
        let entries: Vec<Macro> = read_json(&path)
            .await
            .map_err(|e| MacroError::Storage(format!("{}: {}", path.display(), e)))?
            .unwrap_or_default();

        Ok(Self {
            path,
            cache: RwLock::new(entries),
        })
    }

    async fn persist(&self, entries: &[Macro]) -> Result<(), MacroError> {
        write_json_atomic(&self.path, &entries)
            .await
            .map_err(|e| MacroError::Storage(e.to_string()))
    }
}

#[async_trait]
impl MacroStore for JsonMacroStore {
    async fn insert(&self, entry: Macro) -> Result<bool, MacroError> {
        let mut cache = self.cache.write().await;
        if cache.iter().any(|m| m.name == entry.name) {
            return Ok(false);
        }

        cache.push(entry);
        if let Err(e) = self.persist(&cache).await {
            cache.pop();
            return Err(e);
        }
        Ok(true)
    }

    async fn remove(&self, name: &str) -> Result<bool, MacroError> {
        let mut cache = self.cache.write().await;
        let Some(index) = cache.iter().position(|m| m.name == name) else {
            return Ok(false);
        };

        let removed = cache.remove(index);
        if let Err(e) = self.persist(&cache).await {
            cache.insert(index, removed);
            return Err(e);
        }
        Ok(true)
    }

    async fn entries(&self) -> Result<Vec<Macro>, MacroError> {
        Ok(self.cache.read().await.clone())
    }

    async fn find_match(&self, text: &str) -> Result<Option<Macro>, MacroError> {
        let cache = self.cache.read().await;
        Ok(cache.iter().find(|m| m.matches(text)).cloned())
    }
}
