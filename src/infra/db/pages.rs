use async_trait::async_trait;
use time::OffsetDateTime;

use crate::{
    application::repos::{PagesRepo, RepoError},
    domain::entities::PageRecord,
};

use super::{PostgresRepositories, map_sqlx_error};

#[derive(sqlx::FromRow)]
struct PageRow {
    slug: String,
    content: serde_json::Value,
    updated_at: OffsetDateTime,
}

impl From<PageRow> for PageRecord {
    fn from(row: PageRow) -> Self {
        Self {
            slug: row.slug,
            content: row.content,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl PagesRepo for PostgresRepositories {
    async fn find_page(&self, slug: &str) -> Result<Option<PageRecord>, RepoError> {
        let row = sqlx::query_as::<_, PageRow>(
            r#"
            SELECT slug, content, updated_at
            FROM pages
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(PageRecord::from))
    }

    async fn upsert_page(
        &self,
        slug: &str,
        content: &serde_json::Value,
    ) -> Result<PageRecord, RepoError> {
        let row = sqlx::query_as::<_, PageRow>(
            r#"
            INSERT INTO pages (slug, content, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (slug) DO UPDATE
                SET content = EXCLUDED.content,
                    updated_at = EXCLUDED.updated_at
            RETURNING slug, content, updated_at
            "#,
        )
        .bind(slug)
        .bind(content)
        .fetch_one(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        Ok(PageRecord::from(row))
    }
}
