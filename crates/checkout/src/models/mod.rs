//! Domain types for the checkout service.
//!
//! These types represent validated domain objects separate from database row
//! types and from the warehouse wire formats.

pub mod basket;
pub mod catalog;
pub mod order;
pub mod warehouse;

pub use basket::{Basket, BasketItem};
pub use catalog::CatalogItem;
pub use order::{Address, Order, OrderItem};
pub use warehouse::{DeliveryInfo, WarehouseOrderInfo};
