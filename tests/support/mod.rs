//! Shared test fixtures: an in-memory store and a wired service stack.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use time::OffsetDateTime;

use vetrina::application::content::ContentService;
use vetrina::application::offerings::OfferingService;
use vetrina::application::repos::{
    OfferingsRepo, PagesRepo, RepoError, StoreHealth,
};
use vetrina::application::site::SiteService;
use vetrina::cache::{CacheTag, CacheTrigger, InvalidationSink, RecordingSink, TagStamps};
use vetrina::domain::entities::{OfferingRecord, PageRecord};
use vetrina::domain::offerings::{OfferingDraft, OfferingPatch};
use vetrina::infra::http::ApiState;

/// In-memory rendition of the two-table layout, with write counters so
/// tests can assert the store was never touched.
#[derive(Default)]
pub struct MemoryStore {
    pages: Mutex<HashMap<String, (serde_json::Value, OffsetDateTime)>>,
    offerings: Mutex<Vec<OfferingRecord>>,
    next_id: Mutex<i64>,
    pub page_writes: Mutex<usize>,
    pub offering_writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_write_count(&self) -> usize {
        *self.page_writes.lock().expect("page_writes lock")
    }

    pub fn offering_write_count(&self) -> usize {
        *self.offering_writes.lock().expect("offering_writes lock")
    }
}

#[async_trait]
impl PagesRepo for MemoryStore {
    async fn find_page(&self, slug: &str) -> Result<Option<PageRecord>, RepoError> {
        let pages = self.pages.lock().expect("pages lock");
        Ok(pages.get(slug).map(|(content, updated_at)| PageRecord {
            slug: slug.to_string(),
            content: content.clone(),
            updated_at: *updated_at,
        }))
    }

    async fn upsert_page(
        &self,
        slug: &str,
        content: &serde_json::Value,
    ) -> Result<PageRecord, RepoError> {
        *self.page_writes.lock().expect("page_writes lock") += 1;
        let now = OffsetDateTime::now_utc();
        let mut pages = self.pages.lock().expect("pages lock");
        pages.insert(slug.to_string(), (content.clone(), now));
        Ok(PageRecord {
            slug: slug.to_string(),
            content: content.clone(),
            updated_at: now,
        })
    }
}

#[async_trait]
impl OfferingsRepo for MemoryStore {
    async fn list_offerings(&self, only_active: bool) -> Result<Vec<OfferingRecord>, RepoError> {
        let offerings = self.offerings.lock().expect("offerings lock");
        Ok(offerings
            .iter()
            .filter(|row| !only_active || row.is_active)
            .cloned()
            .collect())
    }

    async fn create_offering(&self, draft: &OfferingDraft) -> Result<OfferingRecord, RepoError> {
        *self.offering_writes.lock().expect("offering_writes lock") += 1;
        let mut next_id = self.next_id.lock().expect("next_id lock");
        *next_id += 1;
        let record = OfferingRecord {
            id: *next_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            image_url: draft.image_url.clone(),
            href: draft.href.clone(),
            is_active: draft.is_active,
        };
        self.offerings
            .lock()
            .expect("offerings lock")
            .push(record.clone());
        Ok(record)
    }

    async fn update_offering(
        &self,
        id: i64,
        patch: &OfferingPatch,
    ) -> Result<OfferingRecord, RepoError> {
        *self.offering_writes.lock().expect("offering_writes lock") += 1;
        let mut offerings = self.offerings.lock().expect("offerings lock");
        let row = offerings
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(RepoError::NotFound)?;
        if let Some(title) = &patch.title {
            row.title = title.clone();
        }
        if let Some(description) = &patch.description {
            row.description = description.clone();
        }
        if let Some(image_url) = &patch.image_url {
            row.image_url = image_url.clone();
        }
        if let Some(href) = &patch.href {
            row.href = href.clone();
        }
        if let Some(is_active) = patch.is_active {
            row.is_active = is_active;
        }
        Ok(row.clone())
    }

    async fn delete_offering(&self, id: i64) -> Result<OfferingRecord, RepoError> {
        *self.offering_writes.lock().expect("offering_writes lock") += 1;
        let mut offerings = self.offerings.lock().expect("offerings lock");
        let position = offerings
            .iter()
            .position(|row| row.id == id)
            .ok_or(RepoError::NotFound)?;
        Ok(offerings.remove(position))
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn check(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

/// Feeds signals to both the stamp store (as production does) and the
/// recorder (so tests can assert on exact sequences).
struct FanoutSink {
    stamps: Arc<TagStamps>,
    recorder: Arc<RecordingSink>,
}

impl InvalidationSink for FanoutSink {
    fn invalidate(&self, tag: CacheTag) {
        self.stamps.invalidate(tag);
        self.recorder.invalidate(tag);
    }
}

pub struct TestStack {
    pub store: Arc<MemoryStore>,
    pub sink: Arc<RecordingSink>,
    pub content: Arc<ContentService>,
    pub offerings: Arc<OfferingService>,
    pub site: Arc<SiteService>,
    pub state: ApiState,
}

/// Wire the full service stack over the in-memory store, the way the
/// binary does over Postgres.
pub fn stack() -> TestStack {
    let store = Arc::new(MemoryStore::new());
    let sink = Arc::new(RecordingSink::new());
    let stamps = Arc::new(TagStamps::new());
    let trigger = CacheTrigger::new(Arc::new(FanoutSink {
        stamps: stamps.clone(),
        recorder: sink.clone(),
    }));

    let content = Arc::new(ContentService::new(store.clone(), trigger.clone()));
    let offerings = Arc::new(OfferingService::new(store.clone(), trigger));
    let site = Arc::new(SiteService::new(content.clone(), offerings.clone()));

    let state = ApiState {
        content: content.clone(),
        offerings: offerings.clone(),
        site: site.clone(),
        stamps,
        health: store.clone(),
    };

    TestStack {
        store,
        sink,
        content,
        offerings,
        site,
        state,
    }
}
