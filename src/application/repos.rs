//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{OfferingRecord, PageRecord};
use crate::domain::offerings::{OfferingDraft, OfferingPatch};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("integrity error: {message}")]
    Integrity { message: String },
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Singleton page persistence. One row per slug, insert-or-replace only;
/// pages are never deleted.
#[async_trait]
pub trait PagesRepo: Send + Sync {
    /// At most one row. A miss is `None`, not an error.
    async fn find_page(&self, slug: &str) -> Result<Option<PageRecord>, RepoError>;

    /// Insert if absent, else fully replace `content` and refresh
    /// `updated_at`, in a single atomic statement. Last writer wins.
    async fn upsert_page(
        &self,
        slug: &str,
        content: &serde_json::Value,
    ) -> Result<PageRecord, RepoError>;
}

/// Row-based offering persistence. Ordering is always ascending id, which
/// is insertion order and therefore stable.
#[async_trait]
pub trait OfferingsRepo: Send + Sync {
    async fn list_offerings(&self, only_active: bool) -> Result<Vec<OfferingRecord>, RepoError>;

    async fn create_offering(&self, draft: &OfferingDraft) -> Result<OfferingRecord, RepoError>;

    /// Applies only the supplied fields in one statement. `NotFound` when
    /// the id does not exist.
    async fn update_offering(
        &self,
        id: i64,
        patch: &OfferingPatch,
    ) -> Result<OfferingRecord, RepoError>;

    /// Returns the removed row. `NotFound` when the id does not exist.
    async fn delete_offering(&self, id: i64) -> Result<OfferingRecord, RepoError>;
}

/// Liveness probe against the backing store.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn check(&self) -> Result<(), RepoError>;
}
