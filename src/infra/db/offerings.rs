use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};

use crate::{
    application::repos::{OfferingsRepo, RepoError},
    domain::entities::OfferingRecord,
    domain::offerings::{OfferingDraft, OfferingPatch},
};

use super::{PostgresRepositories, map_sqlx_error};

const OFFERING_COLUMNS: &str = "id, title, description, image_url, href, is_active";

#[derive(sqlx::FromRow)]
struct OfferingRow {
    id: i64,
    title: String,
    description: String,
    image_url: Option<String>,
    href: Option<String>,
    is_active: Option<bool>,
}

impl From<OfferingRow> for OfferingRecord {
    fn from(row: OfferingRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            href: row.href,
            // The column is nullable with DEFAULT TRUE; treat NULL as active.
            is_active: row.is_active.unwrap_or(true),
        }
    }
}

#[async_trait]
impl OfferingsRepo for PostgresRepositories {
    async fn list_offerings(&self, only_active: bool) -> Result<Vec<OfferingRecord>, RepoError> {
        let mut qb = QueryBuilder::<Postgres>::new(format!(
            "SELECT {OFFERING_COLUMNS} FROM offerings "
        ));
        if only_active {
            qb.push("WHERE is_active IS NOT FALSE ");
        }
        qb.push("ORDER BY id ASC");

        let rows = qb
            .build_query_as::<OfferingRow>()
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(OfferingRecord::from).collect())
    }

    async fn create_offering(&self, draft: &OfferingDraft) -> Result<OfferingRecord, RepoError> {
        let row = sqlx::query_as::<_, OfferingRow>(
            r#"
            INSERT INTO offerings (title, description, image_url, href, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, image_url, href, is_active
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(&draft.href)
        .bind(draft.is_active)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(OfferingRecord::from(row))
    }

    async fn update_offering(
        &self,
        id: i64,
        patch: &OfferingPatch,
    ) -> Result<OfferingRecord, RepoError> {
        // The pipeline rejects empty patches before we get here; a bare
        // repo call with one anyway is a caller bug, not a 500.
        if patch.is_empty() {
            return Err(RepoError::InvalidInput {
                message: "no fields provided to update".to_string(),
            });
        }

        let mut qb = QueryBuilder::<Postgres>::new("UPDATE offerings SET ");
        let mut assignments = qb.separated(", ");
        if let Some(title) = &patch.title {
            assignments.push("title = ");
            assignments.push_bind_unseparated(title);
        }
        if let Some(description) = &patch.description {
            assignments.push("description = ");
            assignments.push_bind_unseparated(description);
        }
        if let Some(image_url) = &patch.image_url {
            assignments.push("image_url = ");
            assignments.push_bind_unseparated(image_url);
        }
        if let Some(href) = &patch.href {
            assignments.push("href = ");
            assignments.push_bind_unseparated(href);
        }
        if let Some(is_active) = patch.is_active {
            assignments.push("is_active = ");
            assignments.push_bind_unseparated(is_active);
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(format!(" RETURNING {OFFERING_COLUMNS}"));

        let row = qb
            .build_query_as::<OfferingRow>()
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        row.map(OfferingRecord::from).ok_or(RepoError::NotFound)
    }

    async fn delete_offering(&self, id: i64) -> Result<OfferingRecord, RepoError> {
        let row = sqlx::query_as::<_, OfferingRow>(
            r#"
            DELETE FROM offerings
            WHERE id = $1
            RETURNING id, title, description, image_url, href, is_active
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        row.map(OfferingRecord::from).ok_or(RepoError::NotFound)
    }
}
