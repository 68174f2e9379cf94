//! Order store backed by `PostgreSQL`.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use golden_papaya_core::OrderId;

use super::StoreError;
use crate::models::Order;
use crate::services::orders::OrderStore;

/// Order store writing to the `checkout."order"` tables.
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    /// Create a new order store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn add(&self, order: &Order) -> Result<OrderId, StoreError> {
        // Header and items land together or not at all.
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO checkout."order" (buyer_id, street, city, state, country, zip_code)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(order.buyer_id.as_i32())
        .bind(&order.shipping_address.street)
        .bind(&order.shipping_address.city)
        .bind(&order.shipping_address.state)
        .bind(&order.shipping_address.country)
        .bind(&order.shipping_address.zip_code)
        .fetch_one(&mut *tx)
        .await?;
        let order_id: i32 = row.try_get("id")?;

        for item in &order.items {
            sqlx::query(
                r"
                INSERT INTO checkout.order_item
                    (order_id, catalog_item_id, name, picture_uri, unit_price, quantity)
                VALUES ($1, $2, $3, $4, $5, $6)
                ",
            )
            .bind(order_id)
            .bind(item.catalog_item_id.as_i32())
            .bind(&item.name)
            .bind(&item.picture_uri)
            .bind(item.unit_price)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(OrderId::new(order_id))
    }
}
