//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::orders::OrderError;

/// Application-level error type for the checkout service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Order placement failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(
            self,
            Self::Order(OrderError::Store(_) | OrderError::Delivery(_))
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Order(err) => match err {
                OrderError::BasketNotFound(_) => StatusCode::NOT_FOUND,
                OrderError::EmptyBasket(_) | OrderError::UnknownCatalogItem { .. } => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                OrderError::Delivery(_) => StatusCode::BAD_GATEWAY,
                OrderError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Order(err) => match err {
                OrderError::BasketNotFound(_)
                | OrderError::EmptyBasket(_)
                | OrderError::UnknownCatalogItem { .. } => err.to_string(),
                OrderError::Delivery(_) => "Warehouse delivery failed".to_string(),
                OrderError::Store(_) => "Internal server error".to_string(),
            },
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use golden_papaya_core::{BasketId, CatalogItemId};

    use super::*;
    use crate::db::StoreError;
    use crate::services::warehouse::DeliveryError;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Order(OrderError::BasketNotFound(BasketId::new(3)));
        assert_eq!(err.to_string(), "Order error: basket 3 not found");
    }

    #[test]
    fn test_precondition_errors_are_client_errors() {
        assert_eq!(
            get_status(AppError::Order(OrderError::BasketNotFound(BasketId::new(
                1
            )))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Order(OrderError::EmptyBasket(BasketId::new(1)))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(AppError::Order(OrderError::UnknownCatalogItem {
                basket_id: BasketId::new(1),
                item_id: CatalogItemId::new(9),
            })),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_delivery_error_is_bad_gateway() {
        let delivery = DeliveryError::Serialize(serde_json::from_str::<i32>("x").unwrap_err());
        assert_eq!(
            get_status(AppError::Order(OrderError::Delivery(delivery))),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_store_error_is_internal() {
        let store = StoreError::Database(sqlx::Error::RowNotFound);
        assert_eq!(
            get_status(AppError::Order(OrderError::Store(store))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
