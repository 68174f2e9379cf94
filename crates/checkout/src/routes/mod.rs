//! HTTP route handlers for checkout.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health      - Health check
//!
//! # Orders
//! POST /api/orders  - Place an order from a basket
//! ```

pub mod health;
pub mod orders;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the checkout service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/orders", post(orders::place_order))
}
