//! Offering mutations: validate, then write, then invalidate.
//!
//! Offerings are embedded in several independently cached views, so every
//! successful mutation fans out the same cross-cutting tag set. NotFound
//! is terminal and short-circuits before any signal is emitted.

use std::sync::Arc;

use metrics::counter;
use thiserror::Error;
use tracing::info;

use crate::application::repos::{OfferingsRepo, RepoError};
use crate::cache::CacheTrigger;
use crate::domain::entities::OfferingRecord;
use crate::schema::{self, ValidationError};

#[derive(Debug, Error)]
pub enum OfferingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Clone)]
pub struct OfferingService {
    offerings: Arc<dyn OfferingsRepo>,
    trigger: CacheTrigger,
}

impl OfferingService {
    pub fn new(offerings: Arc<dyn OfferingsRepo>, trigger: CacheTrigger) -> Self {
        Self { offerings, trigger }
    }

    pub async fn list(&self, only_active: bool) -> Result<Vec<OfferingRecord>, OfferingError> {
        self.offerings
            .list_offerings(only_active)
            .await
            .map_err(OfferingError::from)
    }

    pub async fn create(&self, raw: serde_json::Value) -> Result<OfferingRecord, OfferingError> {
        let draft = schema::validate_offering_draft(&raw)?;

        let record = self.offerings.create_offering(&draft).await?;

        self.trigger.offerings_changed();
        counter!("vetrina_offering_mutation_total", "op" => "create").increment(1);
        info!(id = record.id, "offering created");

        Ok(record)
    }

    pub async fn update(
        &self,
        id: i64,
        raw: serde_json::Value,
    ) -> Result<OfferingRecord, OfferingError> {
        let patch = schema::validate_offering_patch(&raw)?;

        let record = self.offerings.update_offering(id, &patch).await?;

        self.trigger.offerings_changed();
        counter!("vetrina_offering_mutation_total", "op" => "update").increment(1);
        info!(id = record.id, "offering updated");

        Ok(record)
    }

    pub async fn delete(&self, id: i64) -> Result<OfferingRecord, OfferingError> {
        let record = self.offerings.delete_offering(id).await?;

        self.trigger.offerings_changed();
        counter!("vetrina_offering_mutation_total", "op" => "delete").increment(1);
        info!(id = record.id, "offering deleted");

        Ok(record)
    }
}
