//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::config::CheckoutConfig;
use crate::db::{PgBasketStore, PgCatalogStore, PgOrderStore};
use crate::services::orders::OrderService;
use crate::services::warehouse::{
    DeliveryError, KafkaReservationQueue, QueueError, WarehouseDeliveryClient,
};

/// Error creating the warehouse clients during startup.
#[derive(Debug, Error)]
pub enum StateInitError {
    #[error("reservation queue client: {0}")]
    Queue(#[from] QueueError),
    #[error("delivery client: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CheckoutConfig,
    pool: PgPool,
    orders: OrderService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Wires the Postgres-backed stores and warehouse clients into the order
    /// workflow.
    ///
    /// # Errors
    ///
    /// Returns an error if a warehouse client cannot be constructed.
    pub fn new(config: CheckoutConfig, pool: PgPool) -> Result<Self, StateInitError> {
        let reservations = KafkaReservationQueue::new(&config.warehouse)?;
        let delivery = WarehouseDeliveryClient::new(&config.warehouse)?;

        let orders = OrderService::new(
            Arc::new(PgBasketStore::new(pool.clone())),
            Arc::new(PgCatalogStore::new(pool.clone())),
            Arc::new(PgOrderStore::new(pool.clone())),
            Arc::new(reservations),
            Arc::new(delivery),
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                orders,
            }),
        })
    }

    /// Get a reference to the checkout configuration.
    #[must_use]
    pub fn config(&self) -> &CheckoutConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the order workflow.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }
}
