// Admin management - the set of users allowed to run privileged commands.
// Like the rest of core, nothing in here knows about Discord; users are plain u64 ids.

use async_trait::async_trait;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

// ============================================================================
// STORAGE TRAIT (PORT)
// ============================================================================

/// Trait for persisting the admin set.
///
/// Implementations must serialize mutations with each other and with whatever
/// persistence they do, since several slash commands can race on the same set.
#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Is this user in the admin set?
    async fn contains(&self, user_id: u64) -> Result<bool, AdminError>;

    /// Add a user. Returns `false` (and changes nothing) if they were already present.
    async fn insert(&self, user_id: u64) -> Result<bool, AdminError>;

    /// Remove a user. Returns `false` if they were not present.
    async fn remove(&self, user_id: u64) -> Result<bool, AdminError>;

    /// Every admin id, in ascending order.
    async fn all(&self) -> Result<Vec<u64>, AdminError>;
}

// ============================================================================
// CORE SERVICE
// ============================================================================

pub struct AdminService<S: AdminStore> {
    store: S,
}

impl<S: AdminStore> AdminService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn is_admin(&self, user_id: u64) -> Result<bool, AdminError> {
        self.store.contains(user_id).await
    }

    /// Returns `true` if the user was newly added.
    pub async fn add_admin(&self, user_id: u64) -> Result<bool, AdminError> {
        let added = self.store.insert(user_id).await?;
        if added {
            tracing::info!(user_id, "Admin added");
        }
        Ok(added)
    }

    /// Returns `true` if the user was an admin and got removed.
    pub async fn remove_admin(&self, user_id: u64) -> Result<bool, AdminError> {
        let removed = self.store.remove(user_id).await?;
        if removed {
            tracing::info!(user_id, "Admin removed");
        }
        Ok(removed)
    }

    pub async fn admin_count(&self) -> Result<usize, AdminError> {
        Ok(self.store.all().await?.len())
    }
}

// ============================================================================
// TESTS
// ============================================================================
