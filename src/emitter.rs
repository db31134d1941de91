//! Rate-paced sales event emitter.
//!
//! Each iteration generates one event, wraps it in the schema envelope,
//! encodes it, hands it to the publisher and then sleeps for the configured
//! interval. Time spent generating and publishing is not subtracted from the
//! sleep, so the sustained rate sits slightly below the target.

use crate::args::EmitterConfig;
use crate::error::EmitterError;
use sales_generator::EventGenerator;
use sales_producer_kafka::Publisher;
use sales_types::Envelope;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Metrics from an emitter run.
#[derive(Debug, Clone, Default)]
pub struct EmitMetrics {
    /// Number of events accepted by the publisher.
    pub events_published: u64,
    /// Total encoded payload bytes accepted by the publisher.
    pub bytes_published: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl EmitMetrics {
    /// Calculate events per second.
    pub fn events_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.events_published as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Emits generated sales events through a [`Publisher`].
pub struct Emitter<P: Publisher> {
    publisher: P,
    generator: EventGenerator,
}

impl<P: Publisher> Emitter<P> {
    pub fn new(publisher: P, generator: EventGenerator) -> Self {
        Self {
            publisher,
            generator,
        }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Run until `cancel` fires, `config.limit` events are published, or an
    /// error occurs.
    ///
    /// Encoding and publish errors are returned immediately; no further
    /// events are published after a failure.
    pub async fn run(
        &mut self,
        config: &EmitterConfig,
        cancel: CancellationToken,
    ) -> Result<EmitMetrics, EmitterError> {
        let start_time = Instant::now();
        let interval = config.interval();
        let mut metrics = EmitMetrics::default();

        info!(
            "Emitting to topic '{}' at {:.3} events/sec (interval {:?})",
            config.topic, config.rate_per_sec, interval
        );

        while !cancel.is_cancelled() && !config.limit_reached(metrics.events_published) {
            let event = self.generator.next_event();
            let payload = Envelope::new(&event).to_bytes()?;

            self.publisher.publish(&config.topic, &payload)?;
            self.publisher.poll(Duration::ZERO);

            metrics.events_published += 1;
            metrics.bytes_published += payload.len() as u64;

            debug!(
                "Published event #{} {}: store={}, sku={}, qty={}",
                self.generator.current_index(),
                event.event_id,
                event.store_id,
                event.sku,
                event.qty
            );

            if config.limit_reached(metrics.events_published) {
                break;
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(interval) => {}
            }
        }

        metrics.total_duration = start_time.elapsed();

        info!(
            "Emitter stopped: {} events in {:?} ({:.2} events/sec)",
            metrics.events_published,
            metrics.total_duration,
            metrics.events_per_second()
        );

        Ok(metrics)
    }
}
