//! HTTP client for warehouse delivery postings.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use thiserror::Error;
use url::Url;

use crate::config::WarehouseConfig;
use crate::models::DeliveryInfo;
use crate::services::orders::DeliveryGateway;

/// Errors that can occur when posting delivery details.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The delivery payload could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Delivery client posting to the warehouse HTTP endpoint.
#[derive(Clone)]
pub struct WarehouseDeliveryClient {
    client: reqwest::Client,
    delivery_url: Url,
}

impl WarehouseDeliveryClient {
    /// Create a new delivery client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &WarehouseConfig) -> Result<Self, DeliveryError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            delivery_url: config.delivery_url.clone(),
        })
    }
}

#[async_trait]
impl DeliveryGateway for WarehouseDeliveryClient {
    async fn post_delivery(&self, delivery: &DeliveryInfo) -> Result<(), DeliveryError> {
        let body = serde_json::to_vec(delivery)?;

        let response = self
            .client
            .post(self.delivery_url.clone())
            .body(body)
            .send()
            .await?;

        // The warehouse never promised a meaningful response; surface the
        // status for operators without acting on it.
        tracing::debug!(
            status = %response.status(),
            delivery_id = %delivery.id,
            "delivery details posted"
        );
        Ok(())
    }
}
