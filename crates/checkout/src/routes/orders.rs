//! Order route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use golden_papaya_core::{BasketId, OrderId};

use crate::error::AppError;
use crate::models::Address;
use crate::services::orders::ReservationStatus;
use crate::state::AppState;

/// Request body for placing an order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    /// Basket to check out.
    pub basket_id: BasketId,
    /// Where the order should ship to.
    pub shipping_address: Address,
}

/// Response body for a placed order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    /// Id of the persisted order.
    pub order_id: OrderId,
    /// Whether the warehouse reservation notification went out.
    pub reservation: ReservationStatus,
}

/// Place an order from a basket.
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let placed = state
        .orders()
        .place_order(request.basket_id, request.shipping_address)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PlaceOrderResponse {
            order_id: placed.order_id,
            reservation: placed.reservation,
        }),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_place_order_request_accepts_camel_case() {
        let request: PlaceOrderRequest = serde_json::from_str(
            r#"{
                "basketId": 10,
                "shippingAddress": {
                    "street": "1 Papaya Way",
                    "city": "Honolulu",
                    "state": "HI",
                    "country": "US",
                    "zipCode": "96801"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(request.basket_id, BasketId::new(10));
        assert_eq!(request.shipping_address.zip_code, "96801");
    }

    #[test]
    fn test_place_order_response_wire_shape() {
        let response = PlaceOrderResponse {
            order_id: OrderId::new(5),
            reservation: ReservationStatus::Failed,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"orderId": 5, "reservation": "failed"})
        );
    }
}
