//! Error types for the emitter loop.

use thiserror::Error;

/// Errors that stop the emitter loop.
#[derive(Error, Debug)]
pub enum EmitterError {
    #[error("Failed to encode sales event: {0}")]
    Serialization(#[from] sales_types::SalesTypesError),

    #[error("Failed to publish sales event: {0}")]
    Publish(#[from] sales_producer_kafka::PublishError),
}
