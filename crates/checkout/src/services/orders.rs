//! The order placement workflow.
//!
//! Turns a validated basket into a durable order: fetch and validate the
//! basket, snapshot catalog data into order items, notify the warehouse
//! (best-effort queue reservation, then a delivery posting), and persist the
//! order. Collaborators sit behind traits so the workflow can be exercised
//! against in-memory doubles.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use golden_papaya_core::{BasketId, CatalogItemId, OrderId};

use crate::db::StoreError;
use crate::models::{Address, Basket, CatalogItem, DeliveryInfo, Order, OrderItem, WarehouseOrderInfo};
use crate::services::warehouse::{DeliveryError, QueueError};

/// Reads baskets with their items.
#[async_trait]
pub trait BasketStore: Send + Sync {
    async fn basket_with_items(&self, id: BasketId) -> Result<Option<Basket>, StoreError>;
}

/// Reads catalog item metadata.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn items_by_ids(&self, ids: &[CatalogItemId]) -> Result<Vec<CatalogItem>, StoreError>;
}

/// Persists constructed orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn add(&self, order: &Order) -> Result<OrderId, StoreError>;
}

/// Sends stock-reservation notifications to the warehouse queue.
#[async_trait]
pub trait ReservationQueue: Send + Sync {
    async fn send_reservation(
        &self,
        basket_id: BasketId,
        lines: &[WarehouseOrderInfo],
    ) -> Result<(), QueueError>;
}

/// Posts delivery details to the warehouse.
#[async_trait]
pub trait DeliveryGateway: Send + Sync {
    async fn post_delivery(&self, delivery: &DeliveryInfo) -> Result<(), DeliveryError>;
}

/// Errors that can abort order placement.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No basket exists with the given id.
    #[error("basket {0} not found")]
    BasketNotFound(BasketId),

    /// The basket exists but has no items.
    #[error("basket {0} has no items")]
    EmptyBasket(BasketId),

    /// A basket item references a catalog item that no longer exists.
    #[error("basket {basket_id} references unknown catalog item {item_id}")]
    UnknownCatalogItem {
        basket_id: BasketId,
        item_id: CatalogItemId,
    },

    /// A store read or write failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The delivery posting failed in transit.
    #[error("delivery error: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Whether the warehouse was told to reserve stock for the order.
///
/// Reservation is best-effort: a failed send is logged and reported here
/// instead of aborting the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// The reservation notification reached the queue.
    Sent,
    /// The reservation notification could not be sent.
    Failed,
}

/// Outcome of a successful order placement.
#[derive(Debug, Clone, Copy)]
pub struct PlacedOrder {
    /// Id assigned to the persisted order.
    pub order_id: OrderId,
    /// Whether the warehouse reservation notification went out.
    pub reservation: ReservationStatus,
}

/// Orchestrates order placement across the stores and warehouse clients.
pub struct OrderService {
    baskets: Arc<dyn BasketStore>,
    catalog: Arc<dyn CatalogStore>,
    orders: Arc<dyn OrderStore>,
    reservations: Arc<dyn ReservationQueue>,
    delivery: Arc<dyn DeliveryGateway>,
}

impl OrderService {
    /// Create a new order service.
    #[must_use]
    pub fn new(
        baskets: Arc<dyn BasketStore>,
        catalog: Arc<dyn CatalogStore>,
        orders: Arc<dyn OrderStore>,
        reservations: Arc<dyn ReservationQueue>,
        delivery: Arc<dyn DeliveryGateway>,
    ) -> Self {
        Self {
            baskets,
            catalog,
            orders,
            reservations,
            delivery,
        }
    }

    /// Place an order for the given basket.
    ///
    /// Validates the basket, snapshots catalog data into order items, sends a
    /// best-effort reservation to the warehouse queue, posts delivery details,
    /// and persists the order, strictly in that sequence, with no retries.
    ///
    /// # Errors
    ///
    /// Returns a precondition error (`BasketNotFound`, `EmptyBasket`,
    /// `UnknownCatalogItem`) before any side effect, `Delivery` if the
    /// delivery posting fails in transit (the order is then NOT persisted),
    /// or `Store` if a read or the final write fails. A failed queue send is
    /// reported through [`PlacedOrder::reservation`], not as an error.
    #[instrument(skip(self, shipping_address), fields(basket_id = %basket_id))]
    pub async fn place_order(
        &self,
        basket_id: BasketId,
        shipping_address: Address,
    ) -> Result<PlacedOrder, OrderError> {
        let basket = self
            .baskets
            .basket_with_items(basket_id)
            .await?
            .ok_or(OrderError::BasketNotFound(basket_id))?;

        if basket.items.is_empty() {
            return Err(OrderError::EmptyBasket(basket_id));
        }

        let distinct_ids: Vec<CatalogItemId> = basket
            .items
            .iter()
            .map(|item| item.catalog_item_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let catalog_items = self.catalog.items_by_ids(&distinct_ids).await?;

        let items = snapshot_order_items(&basket, &catalog_items)?;
        let order = Order::new(basket.buyer_id, shipping_address, items);

        let lines: Vec<WarehouseOrderInfo> = basket
            .items
            .iter()
            .map(|item| WarehouseOrderInfo {
                catalog_item_id: item.catalog_item_id,
                quantity: item.quantity,
            })
            .collect();

        let reservation = match self.reservations.send_reservation(basket_id, &lines).await {
            Ok(()) => ReservationStatus::Sent,
            Err(error) => {
                // Best-effort: the warehouse may miss the reservation, but the
                // order still goes through.
                tracing::error!(%basket_id, %error, "warehouse reservation failed");
                ReservationStatus::Failed
            }
        };

        let delivery = DeliveryInfo::new(order.shipping_address.clone(), lines, order.total());
        self.delivery.post_delivery(&delivery).await?;

        let order_id = self.orders.add(&order).await?;
        tracing::info!(%basket_id, %order_id, ?reservation, "order placed");

        Ok(PlacedOrder {
            order_id,
            reservation,
        })
    }
}

/// Build order-item snapshots for every basket line.
///
/// Each snapshot pairs the catalog item's current name and picture with the
/// basket's locked-in unit price and quantity.
fn snapshot_order_items(
    basket: &Basket,
    catalog_items: &[CatalogItem],
) -> Result<Vec<OrderItem>, OrderError> {
    basket
        .items
        .iter()
        .map(|basket_item| {
            let catalog_item = catalog_items
                .iter()
                .find(|c| c.id == basket_item.catalog_item_id)
                .ok_or(OrderError::UnknownCatalogItem {
                    basket_id: basket.id,
                    item_id: basket_item.catalog_item_id,
                })?;

            Ok(OrderItem {
                catalog_item_id: catalog_item.id,
                name: catalog_item.name.clone(),
                picture_uri: catalog_item.picture_uri.clone(),
                unit_price: basket_item.unit_price,
                quantity: basket_item.quantity,
            })
        })
        .collect()
}
