//! Business logic services for checkout.
//!
//! # Services
//!
//! - `orders` - The order placement workflow and its collaborator traits
//! - `warehouse` - Kafka reservation queue and delivery HTTP clients

pub mod orders;
pub mod warehouse;
