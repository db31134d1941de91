//! sales-producer library
//!
//! Generates synthetic sales events and publishes them to the `sales` Kafka
//! topic at a configurable rate. Every message is a Kafka Connect JSON
//! envelope (`{"schema": ..., "payload": ...}`) so a JDBC sink can create and
//! fill the target table without a schema registry.
//!
//! # Crates
//!
//! - `sales_types` - Event model, Connect schema and envelope encoding
//! - `sales_generator` - Random event generation
//! - `sales_producer_kafka` - `Publisher` trait and the rdkafka implementation
//!
//! # CLI Usage
//!
//! ```bash
//! # Defaults: kafka:9092, 15 events/sec, run until interrupted
//! sales-producer
//!
//! # Same settings through the environment
//! KAFKA_BOOTSTRAP_SERVERS=localhost:9092 RATE_PER_SEC=50 sales-producer
//!
//! # Reproducible bounded run
//! sales-producer --bootstrap-servers localhost:9092 --seed 42 --count 1000
//! ```

pub mod args;
pub mod emitter;
pub mod error;
pub mod logging;

pub use args::{EmitterArgs, EmitterConfig, MIN_RATE_PER_SEC, SALES_TOPIC};
pub use emitter::{EmitMetrics, Emitter};
pub use error::EmitterError;
