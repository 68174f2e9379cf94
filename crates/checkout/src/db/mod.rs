//! Database operations for checkout `PostgreSQL`.
//!
//! # Database: `gp_checkout`
//!
//! ## Tables (schema `checkout`)
//!
//! - `basket` / `basket_item` - Buyer baskets awaiting checkout
//! - `catalog_item` - Catalog metadata snapshotted into orders
//! - `"order"` / `order_item` - Durable orders created at checkout
//!
//! # Migrations
//!
//! Migrations are stored in `crates/checkout/migrations/` and applied at
//! service startup via `sqlx::migrate!`.

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub mod baskets;
pub mod catalog;
pub mod orders;

pub use baskets::PgBasketStore;
pub use catalog::PgCatalogStore;
pub use orders::PgOrderStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
