//! Kafka publisher for sales-producer.
//!
//! The emitter talks to the broker only through the [`Publisher`] trait: one
//! non-blocking `publish` per event and a `poll` that services pending
//! delivery callbacks. [`KafkaPublisher`] implements it on top of an rdkafka
//! `BaseProducer`, which never waits for delivery on `send`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sales_producer_kafka::{KafkaPublisher, Publisher};
//! use std::time::Duration;
//!
//! fn main() -> Result<(), sales_producer_kafka::PublishError> {
//!     let publisher = KafkaPublisher::new("localhost:9092", 5000)?;
//!     publisher.publish("sales", br#"{"hello":"world"}"#)?;
//!     publisher.poll(Duration::ZERO);
//!     Ok(())
//! }
//! ```

use rdkafka::producer::{BaseProducer, BaseRecord, Producer};
use rdkafka::ClientConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub mod context;
pub mod error;

pub use context::{DeliveryContext, DeliveryStats};
pub use error::PublishError;

/// Asynchronous message publishing capability.
pub trait Publisher: Send + Sync {
    /// Enqueue `payload` for delivery to `topic` without waiting for it.
    fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), PublishError>;

    /// Service pending delivery callbacks, blocking at most `timeout`.
    fn poll(&self, timeout: Duration);
}

impl<P: Publisher + ?Sized> Publisher for Arc<P> {
    fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), PublishError> {
        (**self).publish(topic, payload)
    }

    fn poll(&self, timeout: Duration) {
        (**self).poll(timeout)
    }
}

/// Kafka-backed [`Publisher`].
pub struct KafkaPublisher {
    producer: BaseProducer<DeliveryContext>,
}

impl KafkaPublisher {
    /// Create a new publisher for the given bootstrap servers.
    pub fn new(brokers: &str, message_timeout_ms: u64) -> Result<Self, PublishError> {
        let producer: BaseProducer<DeliveryContext> = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", message_timeout_ms.to_string())
            .create_with_context(DeliveryContext::default())?;

        debug!("Created Kafka producer for {brokers}");
        Ok(Self { producer })
    }

    /// Delivery reports received so far.
    pub fn delivery_stats(&self) -> DeliveryStats {
        self.producer.context().stats()
    }

    /// Messages enqueued but not yet acknowledged.
    pub fn in_flight_count(&self) -> i32 {
        self.producer.in_flight_count()
    }
}

impl Publisher for KafkaPublisher {
    fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), PublishError> {
        let record = BaseRecord::<(), [u8]>::to(topic).payload(payload);
        self.producer
            .send(record)
            .map_err(|(err, _)| PublishError::from(err))
    }

    fn poll(&self, timeout: Duration) {
        self.producer.poll(timeout);
    }
}
