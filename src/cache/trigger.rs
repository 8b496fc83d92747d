//! Cache trigger service.
//!
//! The one place write paths go to publish invalidation signals. Services
//! call the convenience method for what changed; the dependency table
//! decides which tags that means.

use std::sync::Arc;

use metrics::counter;
use tracing::debug;

use crate::domain::content::PageKind;

use super::keys::CacheTag;
use super::registry;
use super::sink::InvalidationSink;

/// Publishes cache invalidation signals after durable writes.
///
/// Must only be invoked after the corresponding write has committed;
/// services enforce the validate → write → invalidate ordering.
#[derive(Clone)]
pub struct CacheTrigger {
    sink: Arc<dyn InvalidationSink>,
}

impl CacheTrigger {
    pub fn new(sink: Arc<dyn InvalidationSink>) -> Self {
        Self { sink }
    }

    /// A page of the given kind was created or replaced.
    pub fn page_saved(&self, kind: PageKind) {
        self.publish(registry::page_dependents(kind));
    }

    /// The offerings collection changed (create, update or delete).
    pub fn offerings_changed(&self) {
        self.publish(registry::OFFERING_DEPENDENTS);
    }

    fn publish(&self, tags: &[CacheTag]) {
        for tag in tags {
            debug!(tag = %tag, "cache tag invalidated");
            counter!("vetrina_cache_invalidation_total", "tag" => tag.as_str()).increment(1);
            self.sink.invalidate(*tag);
        }
    }
}
