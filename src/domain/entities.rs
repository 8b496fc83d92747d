//! Domain entities mirrored from persistent storage.

use serde::Serialize;
use time::OffsetDateTime;

/// A singleton page row. `content` is the raw stored document; callers that
/// need the typed form re-parse it via `PageContent::from_value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRecord {
    pub slug: String,
    pub content: serde_json::Value,
    pub updated_at: OffsetDateTime,
}

/// One advertised service or product, shown on the public site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub href: Option<String>,
    pub is_active: bool,
}
