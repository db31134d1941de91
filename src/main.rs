//! Command-line interface for sales-producer
//!
//! ```bash
//! sales-producer --bootstrap-servers localhost:9092 --rate-per-sec 15
//! ```

use anyhow::Context;
use clap::Parser;
use sales_generator::EventGenerator;
use sales_producer::logging::mask_broker_credentials;
use sales_producer::{Emitter, EmitterArgs};
use sales_producer_kafka::KafkaPublisher;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = EmitterArgs::parse();
    let config = args.emitter_config();

    info!(
        "Starting sales producer: brokers={}, topic={}, rate={}/sec",
        mask_broker_credentials(&args.bootstrap_servers),
        config.topic,
        config.rate_per_sec
    );

    let publisher = KafkaPublisher::new(&args.bootstrap_servers, args.message_timeout_ms)
        .context("Failed to create Kafka producer")?;

    let generator = match args.seed {
        Some(seed) => EventGenerator::with_seed(seed),
        None => EventGenerator::new(),
    };

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received interrupt, stopping"),
            Err(e) => warn!("Failed to listen for interrupt: {e}"),
        }
        shutdown.cancel();
    });

    let mut emitter = Emitter::new(publisher, generator);
    let metrics = emitter
        .run(&config, cancel)
        .await
        .context("Sales event emitter failed")?;

    let stats = emitter.publisher().delivery_stats();
    info!(
        "Published {} events ({} bytes); delivered={}, failed={}, in flight={}",
        metrics.events_published,
        metrics.bytes_published,
        stats.delivered,
        stats.failed,
        emitter.publisher().in_flight_count()
    );

    Ok(())
}
