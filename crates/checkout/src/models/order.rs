//! Order domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use golden_papaya_core::{BuyerId, CatalogItemId};

/// A shipping address.
///
/// Serialized camelCase because it is forwarded verbatim to the warehouse
/// delivery endpoint and accepted in the checkout API request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

/// The durable record created once a basket is checked out.
///
/// Constructed only after the basket is validated; owned by the order store
/// after persistence.
#[derive(Debug, Clone)]
pub struct Order {
    /// Buyer the order belongs to.
    pub buyer_id: BuyerId,
    /// Where the order ships to.
    pub shipping_address: Address,
    /// Ordered items with prices locked in at checkout.
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Create a new order.
    #[must_use]
    pub const fn new(buyer_id: BuyerId, shipping_address: Address, items: Vec<OrderItem>) -> Self {
        Self {
            buyer_id,
            shipping_address,
            items,
        }
    }

    /// Sum of unit price × quantity across all items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.unit_price * Decimal::from(item.quantity))
            .sum()
    }
}

/// Snapshot of an ordered catalog item.
///
/// Copies the catalog item's name and picture at order time so later catalog
/// changes don't alter historical orders.
#[derive(Debug, Clone)]
pub struct OrderItem {
    /// Catalog item this snapshot was taken from.
    pub catalog_item_id: CatalogItemId,
    /// Item name at order time.
    pub name: String,
    /// Picture URI at order time.
    pub picture_uri: String,
    /// Unit price locked in from the basket.
    pub unit_price: Decimal,
    /// Number of units ordered.
    pub quantity: i32,
}
