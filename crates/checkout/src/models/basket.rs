//! Basket domain types.

use rust_decimal::Decimal;

use golden_papaya_core::{BasketId, BuyerId, CatalogItemId};

/// A buyer's in-progress selection of catalog items before checkout.
#[derive(Debug, Clone)]
pub struct Basket {
    /// Unique basket ID.
    pub id: BasketId,
    /// Buyer who owns this basket.
    pub buyer_id: BuyerId,
    /// Items in the basket, in insertion order.
    pub items: Vec<BasketItem>,
}

/// A single line in a basket.
///
/// Carries the price the buyer saw when adding the item; checkout locks this
/// price into the order regardless of later catalog changes.
#[derive(Debug, Clone)]
pub struct BasketItem {
    /// Catalog item this line refers to.
    pub catalog_item_id: CatalogItemId,
    /// Unit price at the time the item was added.
    pub unit_price: Decimal,
    /// Number of units.
    pub quantity: i32,
}
