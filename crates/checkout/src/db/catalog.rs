//! Catalog store backed by `PostgreSQL`.

use async_trait::async_trait;
use sqlx::PgPool;

use golden_papaya_core::CatalogItemId;

use super::StoreError;
use crate::models::CatalogItem;
use crate::services::orders::CatalogStore;

/// Catalog store reading from `checkout.catalog_item`.
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    /// Create a new catalog store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CatalogItemRow {
    id: i32,
    name: String,
    picture_uri: String,
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn items_by_ids(&self, ids: &[CatalogItemId]) -> Result<Vec<CatalogItem>, StoreError> {
        let raw_ids: Vec<i32> = ids.iter().map(CatalogItemId::as_i32).collect();

        let rows = sqlx::query_as::<_, CatalogItemRow>(
            r"
            SELECT id, name, picture_uri
            FROM checkout.catalog_item
            WHERE id = ANY($1)
            ",
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CatalogItem {
                id: CatalogItemId::new(row.id),
                name: row.name,
                picture_uri: row.picture_uri,
            })
            .collect())
    }
}
