//! Cache invalidation signals.
//!
//! The rendering layer caches composed output under string tags; this
//! module owns the tag vocabulary, the static table mapping content to
//! the tags depending on it, and the trigger that publishes "mark stale"
//! signals after durable writes. The cache itself lives outside the core:
//! all we guarantee is that a signal is never emitted for a write that
//! did not happen, and never skipped for one that did.

mod keys;
mod registry;
mod sink;
mod trigger;

pub use keys::CacheTag;
pub use registry::{OFFERING_DEPENDENTS, page_dependents};
pub use sink::{InvalidationSink, RecordingSink, TagStamps};
pub use trigger::CacheTrigger;
