//! Invalidation sinks: where "mark stale" signals go.
//!
//! The rendering layer's cache is an external collaborator; the core only
//! needs a key-based, fire-and-forget notification channel. Invalidating
//! an already-stale key is a no-op, so at-least-once delivery is fine.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use super::keys::CacheTag;

/// Consumes invalidation signals. Implementations must be idempotent.
pub trait InvalidationSink: Send + Sync {
    fn invalidate(&self, tag: CacheTag);
}

/// In-memory stale markers for the rendering layer.
///
/// Each invalidation bumps a process-wide clock and stamps the tag with
/// it. A renderer holding output cached at stamp N re-fetches when the
/// tag's stamp exceeds N. Also backs the admin cache inspection endpoint.
#[derive(Debug, Default)]
pub struct TagStamps {
    clock: AtomicU64,
    stamps: DashMap<CacheTag, u64>,
}

impl TagStamps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp of the most recent invalidation for `tag`, if any.
    pub fn stamp(&self, tag: CacheTag) -> Option<u64> {
        self.stamps.get(&tag).map(|entry| *entry)
    }

    /// All stamped tags, ordered by tag key for deterministic output.
    pub fn snapshot(&self) -> Vec<(CacheTag, u64)> {
        let mut entries: Vec<(CacheTag, u64)> = self
            .stamps
            .iter()
            .map(|entry| (*entry.key(), *entry.value()))
            .collect();
        entries.sort_by_key(|(tag, _)| tag.as_str());
        entries
    }
}

impl InvalidationSink for TagStamps {
    fn invalidate(&self, tag: CacheTag) {
        let stamp = self.clock.fetch_add(1, Ordering::SeqCst) + 1;
        self.stamps.insert(tag, stamp);
    }
}

/// Test sink that records every signal in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<CacheTag>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CacheTag> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.events().is_empty()
    }
}

impl InvalidationSink for RecordingSink {
    fn invalidate(&self, tag: CacheTag) {
        if let Ok(mut events) = self.events.lock() {
            events.push(tag);
        }
    }
}
