use super::macro_models::Macro;
use super::macro_store::MacroStore;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MacroError {
    #[error("Macro cannot contain '\\n' as it's used as a separator internally")]
    ContainsNewline,
    #[error("Macro name cannot be empty")]
    EmptyName,
    #[error("Storage error: {0}")]
    Storage(String),
}

pub struct MacroService<S: MacroStore> {
    store: S,
}

impl<S: MacroStore> MacroService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Check a name/response pair before it gets anywhere near the store.
    ///
    /// Newlines are rejected in both fields. An empty name is rejected too,
    /// since it would be a substring of every message.
    pub fn validate(name: &str, response: &str) -> Result<(), MacroError> {
        if name.contains('\n') || response.contains('\n') {
            return Err(MacroError::ContainsNewline);
        }
        if name.is_empty() {
            return Err(MacroError::EmptyName);
        }
        Ok(())
    }

    /// Returns `Ok(false)` if a macro with this name already exists.
    pub async fn add_macro(
        &self,
        name: &str,
        response: &str,
        created_by: u64,
    ) -> Result<bool, MacroError> {
        Self::validate(name, response)?;

        let added = self
            .store
            .insert(Macro::new(name, response, created_by))
            .await?;
        if added {
            tracing::info!(macro_name = name, created_by, "Macro added");
        }
        Ok(added)
    }

    /// Returns `Ok(false)` if no macro has this name.
    pub async fn remove_macro(&self, name: &str) -> Result<bool, MacroError> {
        let removed = self.store.remove(name).await?;
        if removed {
            tracing::info!(macro_name = name, "Macro removed");
        }
        Ok(removed)
    }

    /// Find the macro triggered by a chat message.
    ///
    /// When several names occur in the text, the oldest macro wins.
    pub async fn lookup(&self, text: &str) -> Result<Option<Macro>, MacroError> {
        self.store.find_match(text).await
    }

    pub async fn macro_count(&self) -> Result<usize, MacroError> {
        Ok(self.store.entries().await?.len())
    }
}
