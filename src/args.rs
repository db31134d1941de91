//! CLI argument definitions and runtime configuration.

use clap::Parser;
use std::time::Duration;

/// Topic every event is published to.
pub const SALES_TOPIC: &str = "sales";

/// Lowest accepted rate; keeps the pacing interval finite.
pub const MIN_RATE_PER_SEC: f64 = 0.001;

/// Emit synthetic sales events to Kafka at a fixed rate.
#[derive(Parser, Clone, Debug)]
#[command(name = "sales-producer", version, about)]
pub struct EmitterArgs {
    /// Kafka bootstrap servers (comma-separated)
    #[arg(long, env = "KAFKA_BOOTSTRAP_SERVERS", default_value = "kafka:9092")]
    pub bootstrap_servers: String,

    /// Target events per second
    #[arg(long, env = "RATE_PER_SEC", default_value = "15", value_parser = parse_rate)]
    pub rate_per_sec: f64,

    /// Random seed for reproducible events (entropy-seeded when absent)
    #[arg(long, env = "SALES_SEED")]
    pub seed: Option<u64>,

    /// Stop after publishing this many events (unbounded when absent)
    #[arg(long, env = "SALES_COUNT")]
    pub count: Option<u64>,

    /// librdkafka message.timeout.ms
    #[arg(long, env = "KAFKA_MESSAGE_TIMEOUT_MS", default_value = "5000")]
    pub message_timeout_ms: u64,
}

fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("invalid rate '{s}': {e}"))?;
    if rate.is_finite() {
        Ok(rate)
    } else {
        Err(format!("rate must be a finite number, got '{s}'"))
    }
}

impl EmitterArgs {
    pub fn emitter_config(&self) -> EmitterConfig {
        EmitterConfig::new(self.rate_per_sec).with_limit(self.count)
    }
}

/// Validated settings for one run of the emitter loop.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    pub topic: String,
    /// Events per second, never below [`MIN_RATE_PER_SEC`].
    pub rate_per_sec: f64,
    pub limit: Option<u64>,
}

impl EmitterConfig {
    /// Config for the sales topic at `rate_per_sec`, floored at [`MIN_RATE_PER_SEC`].
    ///
    /// Non-finite rates (NaN, infinities) also fall back to the floor, so the
    /// interval is always finite and non-zero.
    pub fn new(rate_per_sec: f64) -> Self {
        let rate_per_sec = if rate_per_sec.is_finite() {
            rate_per_sec.max(MIN_RATE_PER_SEC)
        } else {
            MIN_RATE_PER_SEC
        };

        Self {
            topic: SALES_TOPIC.to_string(),
            rate_per_sec,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<u64>) -> Self {
        self.limit = limit;
        self
    }

    /// Whether `published` events exhaust the optional limit.
    pub fn limit_reached(&self, published: u64) -> bool {
        self.limit.is_some_and(|limit| published >= limit)
    }

    /// Pause between two publishes.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.rate_per_sec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = EmitterArgs::try_parse_from(["sales-producer"]).unwrap();
        assert_eq!(args.bootstrap_servers, "kafka:9092");
        assert_eq!(args.rate_per_sec, 15.0);
        assert_eq!(args.seed, None);
        assert_eq!(args.count, None);

        let config = args.emitter_config();
        assert_eq!(config.topic, "sales");
        assert_eq!(config.limit, None);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = EmitterArgs::try_parse_from([
            "sales-producer",
            "--bootstrap-servers",
            "broker1:9092,broker2:9092",
            "--rate-per-sec",
            "2.5",
            "--count",
            "10",
            "--seed",
            "42",
        ])
        .unwrap();

        assert_eq!(args.bootstrap_servers, "broker1:9092,broker2:9092");
        assert_eq!(args.seed, Some(42));

        let config = args.emitter_config();
        assert_eq!(config.rate_per_sec, 2.5);
        assert_eq!(config.limit, Some(10));
        assert!((config.interval().as_secs_f64() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_interval_for_default_rate() {
        let config = EmitterConfig::new(15.0);
        let expected = 1.0 / 15.0;
        assert!((config.interval().as_secs_f64() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_rate_floor() {
        for rate in [0.0, -3.0, 0.0001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = EmitterConfig::new(rate);
            assert_eq!(config.rate_per_sec, MIN_RATE_PER_SEC);
            assert!((config.interval().as_secs_f64() - 1000.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_non_finite_rate_rejected_on_command_line() {
        for rate in ["inf", "NaN", "-inf"] {
            let result =
                EmitterArgs::try_parse_from(["sales-producer", "--rate-per-sec", rate]);
            assert!(result.is_err(), "{rate} should be rejected");
        }
    }

    #[test]
    fn test_limit_reached() {
        let config = EmitterConfig::new(1.0);
        assert!(!config.limit_reached(u64::MAX));

        let config = config.with_limit(Some(0));
        assert!(config.limit_reached(0));

        let config = config.with_limit(Some(3));
        assert!(!config.limit_reached(2));
        assert!(config.limit_reached(3));
    }
}
