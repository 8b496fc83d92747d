//! Page content pipeline: validate, then write, then invalidate.
//!
//! The ordering is the whole point. Validation failures abort before the
//! store is touched; invalidation signals fire only once the upsert has
//! committed. The cache can therefore never be marked stale for a write
//! that did not happen, nor serve stale output for one that did.

use std::sync::Arc;

use metrics::counter;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use crate::application::repos::{PagesRepo, RepoError};
use crate::cache::CacheTrigger;
use crate::domain::content::{PageContent, PageKind};
use crate::schema::{self, ValidationError};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("stored content for `{slug}` no longer matches its schema")]
    Corrupt {
        slug: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// A validated page document together with its persistence metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDocument {
    pub kind: PageKind,
    pub content: PageContent,
    pub updated_at: OffsetDateTime,
}

#[derive(Clone)]
pub struct ContentService {
    pages: Arc<dyn PagesRepo>,
    trigger: CacheTrigger,
}

impl ContentService {
    pub fn new(pages: Arc<dyn PagesRepo>, trigger: CacheTrigger) -> Self {
        Self { pages, trigger }
    }

    /// Load and re-validate the stored document for `kind`.
    ///
    /// `None` means the page was never saved; callers render defaults.
    pub async fn page(&self, kind: PageKind) -> Result<Option<PageDocument>, ContentError> {
        let Some(record) = self.pages.find_page(kind.slug()).await? else {
            return Ok(None);
        };

        let content =
            PageContent::from_value(kind, record.content).map_err(|source| ContentError::Corrupt {
                slug: kind.slug(),
                source,
            })?;

        Ok(Some(PageDocument {
            kind,
            content,
            updated_at: record.updated_at,
        }))
    }

    /// Save a page: validate, upsert, invalidate, in that order.
    pub async fn save_page(
        &self,
        kind: PageKind,
        raw: serde_json::Value,
    ) -> Result<PageDocument, ContentError> {
        let content = schema::validate_page(kind, &raw)?;

        let value = content.to_value().map_err(|source| ContentError::Corrupt {
            slug: kind.slug(),
            source,
        })?;

        // The single durability point. Anything after this line must not
        // prevent the invalidation signals from being emitted.
        let record = self.pages.upsert_page(kind.slug(), &value).await?;

        self.trigger.page_saved(kind);
        counter!("vetrina_page_save_total", "slug" => kind.slug()).increment(1);
        info!(slug = kind.slug(), "page saved");

        Ok(PageDocument {
            kind,
            content,
            updated_at: record.updated_at,
        })
    }
}
