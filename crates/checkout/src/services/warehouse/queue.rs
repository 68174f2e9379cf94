//! Kafka client for warehouse stock reservations.

use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use thiserror::Error;

use golden_papaya_core::BasketId;

use crate::config::WarehouseConfig;
use crate::models::WarehouseOrderInfo;
use crate::services::orders::ReservationQueue;

/// How long a send may sit in the producer before it is abandoned.
const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur when publishing a reservation.
#[derive(Debug, Error)]
pub enum QueueError {
    /// The Kafka client rejected or failed the send.
    #[error("kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// The reservation payload could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reservation queue publishing to a warehouse Kafka topic.
pub struct KafkaReservationQueue {
    producer: FutureProducer,
    topic: String,
}

impl KafkaReservationQueue {
    /// Create a new reservation queue client.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::Kafka` if the producer cannot be created.
    pub fn new(config: &WarehouseConfig) -> Result<Self, QueueError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", "5000")
            .create()?;

        Ok(Self {
            producer,
            topic: config.reservation_topic.clone(),
        })
    }
}

#[async_trait]
impl ReservationQueue for KafkaReservationQueue {
    async fn send_reservation(
        &self,
        basket_id: BasketId,
        lines: &[WarehouseOrderInfo],
    ) -> Result<(), QueueError> {
        let payload = serde_json::to_string(lines)?;
        let key = basket_id.to_string();

        let record = FutureRecord::to(&self.topic).key(&key).payload(&payload);
        self.producer
            .send(record, Timeout::After(SEND_TIMEOUT))
            .await
            .map_err(|(error, _message)| QueueError::Kafka(error))?;

        tracing::debug!(
            topic = %self.topic,
            %basket_id,
            lines = lines.len(),
            "reservation published"
        );
        Ok(())
    }
}
