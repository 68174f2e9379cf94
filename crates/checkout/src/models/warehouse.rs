//! Warehouse wire formats.
//!
//! Transient records sent to the external fulfillment system; none of these
//! are persisted locally. Field names follow the warehouse's JSON contract,
//! hence the camelCase renames.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use golden_papaya_core::CatalogItemId;

use super::Address;

/// One (catalog item, quantity) pair.
///
/// Sent both in the reservation queue message and in the delivery posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseOrderInfo {
    pub catalog_item_id: CatalogItemId,
    pub quantity: i32,
}

/// Delivery details posted to the warehouse HTTP endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    /// Freshly generated identifier for this delivery posting.
    pub id: Uuid,
    /// Where the order ships to.
    pub shipping_address: Address,
    /// Per-item quantities.
    pub order_info: Vec<WarehouseOrderInfo>,
    /// Order total as text, per the warehouse contract.
    pub final_price: String,
}

impl DeliveryInfo {
    /// Build a delivery posting with a new random id.
    #[must_use]
    pub fn new(shipping_address: Address, order_info: Vec<WarehouseOrderInfo>, total: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            shipping_address,
            order_info,
            final_price: total.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            street: "1 Papaya Way".to_string(),
            city: "Honolulu".to_string(),
            state: "HI".to_string(),
            country: "US".to_string(),
            zip_code: "96801".to_string(),
        }
    }

    #[test]
    fn test_warehouse_order_info_wire_shape() {
        let info = WarehouseOrderInfo {
            catalog_item_id: CatalogItemId::new(1),
            quantity: 2,
        };
        let json = serde_json::to_value(&info).expect("serialize");
        assert_eq!(json, serde_json::json!({"catalogItemId": 1, "quantity": 2}));
    }

    #[test]
    fn test_delivery_info_wire_shape() {
        let delivery = DeliveryInfo {
            id: Uuid::nil(),
            shipping_address: address(),
            order_info: vec![WarehouseOrderInfo {
                catalog_item_id: CatalogItemId::new(1),
                quantity: 2,
            }],
            final_price: "25.00".to_string(),
        };

        let json = serde_json::to_value(&delivery).expect("serialize");
        assert!(json.get("id").is_some());
        assert!(json.get("shippingAddress").is_some());
        assert!(json.get("orderInfo").is_some());
        assert_eq!(
            json.get("finalPrice"),
            Some(&serde_json::Value::String("25.00".to_string()))
        );
    }

    #[test]
    fn test_delivery_info_formats_total_as_text() {
        let delivery = DeliveryInfo::new(address(), vec![], Decimal::new(2500, 2));
        assert_eq!(delivery.final_price, "25.00");
    }

    #[test]
    fn test_delivery_info_ids_are_unique() {
        let a = DeliveryInfo::new(address(), vec![], Decimal::ZERO);
        let b = DeliveryInfo::new(address(), vec![], Decimal::ZERO);
        assert_ne!(a.id, b.id);
    }
}
