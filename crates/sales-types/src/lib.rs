//! Sales event types for sales-producer.
//!
//! This crate defines the synthetic sales event, the Kafka Connect JSON schema
//! that describes it, and the `{"schema": ..., "payload": ...}` envelope that is
//! written to the topic so schema-aware consumers (e.g. a JDBC sink connector)
//! can infer column types without a schema registry.
//!
//! # Architecture
//!
//! ```text
//! SalesEvent ──┐
//!              ├──▶ Envelope ──▶ JSON bytes ──▶ topic
//! SALES_SCHEMA ┘
//! ```
//!
//! # Modules
//!
//! - [`event`] - The `SalesEvent` record and its value ranges
//! - [`schema`] - Connect struct/field schema descriptors
//! - [`envelope`] - Envelope encoding and decoding
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```
//! use sales_types::{Envelope, SalesEvent};
//!
//! let event = SalesEvent {
//!     event_id: uuid::Uuid::nil(),
//!     store_id: 7,
//!     sku: 1234,
//!     qty: 2,
//!     ts: 1_700_000_000_000,
//! };
//! let bytes = Envelope::new(&event).to_bytes().unwrap();
//! let decoded = sales_types::DecodedEnvelope::from_slice(&bytes).unwrap();
//! assert_eq!(decoded.payload, event);
//! ```

pub mod envelope;
pub mod error;
pub mod event;
pub mod schema;

pub use envelope::{DecodedEnvelope, Envelope};
pub use error::{Result, SalesTypesError};
pub use event::{SalesEvent, QTY_RANGE, SKU_RANGE, STORE_ID_RANGE};
pub use schema::{sales_schema, ConnectType, FieldSchema, StructSchema};
