//! Error types for the Kafka publisher.

use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use thiserror::Error;

/// Errors that can occur when submitting a message.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Broker unavailable: {0}")]
    BrokerUnavailable(String),

    #[error("Local send buffer is full")]
    BufferFull,

    #[error("Kafka client error: {0}")]
    Client(#[source] KafkaError),
}

impl From<KafkaError> for PublishError {
    fn from(err: KafkaError) -> Self {
        match err.rdkafka_error_code() {
            Some(RDKafkaErrorCode::QueueFull) => PublishError::BufferFull,
            Some(
                RDKafkaErrorCode::AllBrokersDown
                | RDKafkaErrorCode::BrokerTransportFailure
                | RDKafkaErrorCode::BrokerNotAvailable
                | RDKafkaErrorCode::Resolve,
            ) => PublishError::BrokerUnavailable(err.to_string()),
            _ => PublishError::Client(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_full_is_buffer_full() {
        let err = KafkaError::MessageProduction(RDKafkaErrorCode::QueueFull);
        assert!(matches!(PublishError::from(err), PublishError::BufferFull));
    }

    #[test]
    fn test_transport_errors_are_broker_unavailable() {
        for code in [
            RDKafkaErrorCode::AllBrokersDown,
            RDKafkaErrorCode::BrokerTransportFailure,
            RDKafkaErrorCode::Resolve,
        ] {
            let mapped = PublishError::from(KafkaError::MessageProduction(code));
            assert!(
                matches!(mapped, PublishError::BrokerUnavailable(_)),
                "{mapped:?}"
            );
        }
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err = KafkaError::MessageProduction(RDKafkaErrorCode::MessageSizeTooLarge);
        assert!(matches!(PublishError::from(err), PublishError::Client(_)));
    }
}
