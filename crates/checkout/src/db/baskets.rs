//! Basket store backed by `PostgreSQL`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use golden_papaya_core::{BasketId, BuyerId, CatalogItemId};

use super::StoreError;
use crate::models::{Basket, BasketItem};
use crate::services::orders::BasketStore;

/// Basket store reading from the `checkout.basket` tables.
pub struct PgBasketStore {
    pool: PgPool,
}

impl PgBasketStore {
    /// Create a new basket store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BasketRow {
    id: i32,
    buyer_id: i32,
}

#[derive(sqlx::FromRow)]
struct BasketItemRow {
    catalog_item_id: i32,
    unit_price: Decimal,
    quantity: i32,
}

#[async_trait]
impl BasketStore for PgBasketStore {
    async fn basket_with_items(&self, id: BasketId) -> Result<Option<Basket>, StoreError> {
        let header = sqlx::query_as::<_, BasketRow>(
            r"
            SELECT id, buyer_id
            FROM checkout.basket
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        let Some(header) = header else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, BasketItemRow>(
            r"
            SELECT catalog_item_id, unit_price, quantity
            FROM checkout.basket_item
            WHERE basket_id = $1
            ORDER BY id
            ",
        )
        .bind(id.as_i32())
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Basket {
            id: BasketId::new(header.id),
            buyer_id: BuyerId::new(header.buyer_id),
            items: items
                .into_iter()
                .map(|row| BasketItem {
                    catalog_item_id: CatalogItemId::new(row.catalog_item_id),
                    unit_price: row.unit_price,
                    quantity: row.quantity,
                })
                .collect(),
        }))
    }
}
