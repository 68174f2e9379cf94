//! Catalog domain types.

use golden_papaya_core::CatalogItemId;

/// Catalog item metadata needed at checkout.
#[derive(Debug, Clone)]
pub struct CatalogItem {
    /// Unique catalog item ID.
    pub id: CatalogItemId,
    /// Display name.
    pub name: String,
    /// Picture URI for the item.
    pub picture_uri: String,
}
