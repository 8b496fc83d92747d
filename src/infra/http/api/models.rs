//! Request and response bodies for the admin API.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::application::content::PageDocument;
use crate::cache::CacheTag;

/// The persisted page document: `{slug, content, updatedAt}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub slug: &'static str,
    pub content: serde_json::Value,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl PageResponse {
    pub fn from_document(document: PageDocument) -> Result<Self, serde_json::Error> {
        Ok(Self {
            slug: document.kind.slug(),
            content: document.content.to_value()?,
            updated_at: document.updated_at,
        })
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct OfferingListQuery {
    /// When true, only offerings with `isActive` set are returned.
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct CacheStampEntry {
    pub tag: CacheTag,
    pub stamp: u64,
}

#[derive(Debug, Serialize)]
pub struct CacheStampsResponse {
    pub stamps: Vec<CacheStampEntry>,
}
