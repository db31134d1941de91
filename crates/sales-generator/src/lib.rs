//! Random sales event generator for sales-producer.
//!
//! This crate provides the `EventGenerator` which produces `SalesEvent`s with
//! uniformly drawn store, SKU and quantity values, a random v4 `event_id` and
//! the wall-clock time in milliseconds.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  EventGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - index         │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    SalesEvent { event_id, store_id, sku, qty, ts }
//! ```
//!
//! The RNG is not cryptographic. When built with [`EventGenerator::with_seed`]
//! every field except `ts` is reproducible across runs, including `event_id`,
//! which is drawn from the same RNG.
//!
//! # Example
//!
//! ```rust
//! use sales_generator::EventGenerator;
//!
//! let mut generator = EventGenerator::with_seed(42);
//! let event = generator.next_event();
//! assert!(event.validate().is_ok());
//! ```

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{EventGenerator, EventIterator};
