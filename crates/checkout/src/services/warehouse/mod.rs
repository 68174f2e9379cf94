//! Warehouse collaborator clients.
//!
//! Two independent channels to the external fulfillment system:
//!
//! - [`KafkaReservationQueue`] publishes best-effort stock-reservation
//!   notifications to a queue topic.
//! - [`WarehouseDeliveryClient`] posts delivery details to the warehouse's
//!   HTTP endpoint.
//!
//! The channels share the wire types in [`crate::models::warehouse`] but fail
//! independently; the workflow decides what each failure means.

mod delivery;
mod queue;

pub use delivery::{DeliveryError, WarehouseDeliveryClient};
pub use queue::{KafkaReservationQueue, QueueError};
