use super::macro_models::Macro;
use super::macro_service::MacroError;
use async_trait::async_trait;

#[async_trait]
pub trait MacroStore: Send + Sync {
    /// Insert a macro. Returns `false` without touching anything if the name is taken.
    async fn insert(&self, entry: Macro) -> Result<bool, MacroError>;

    /// Returns `false` if no macro has this exact name.
    async fn remove(&self, name: &str) -> Result<bool, MacroError>;

    /// All macros in insertion order.
    async fn entries(&self) -> Result<Vec<Macro>, MacroError>;

    /// The oldest macro whose name occurs in `text`.
    async fn find_match(&self, text: &str) -> Result<Option<Macro>, MacroError>;
}
