//! Delivery report handling.

use rdkafka::message::Message;
use rdkafka::producer::{DeliveryResult, ProducerContext};
use rdkafka::ClientContext;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{trace, warn};

/// Counts of delivery reports received so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryStats {
    pub delivered: u64,
    pub failed: u64,
}

/// Producer context that logs and counts delivery reports.
///
/// Callbacks only run while the producer is polled.
#[derive(Debug, Default)]
pub struct DeliveryContext {
    delivered: AtomicU64,
    failed: AtomicU64,
}

impl DeliveryContext {
    pub fn stats(&self) -> DeliveryStats {
        DeliveryStats {
            delivered: self.delivered.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

impl ClientContext for DeliveryContext {}

impl ProducerContext for DeliveryContext {
    type DeliveryOpaque = ();

    fn delivery(&self, delivery_result: &DeliveryResult<'_>, _delivery_opaque: Self::DeliveryOpaque) {
        match delivery_result {
            Ok(message) => {
                self.delivered.fetch_add(1, Ordering::Relaxed);
                trace!(
                    "Delivered message to {} [{}] at offset {}",
                    message.topic(),
                    message.partition(),
                    message.offset()
                );
            }
            Err((err, message)) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                warn!("Failed to deliver message to {}: {err}", message.topic());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_start_empty() {
        let context = DeliveryContext::default();
        assert_eq!(context.stats(), DeliveryStats::default());
    }
}
