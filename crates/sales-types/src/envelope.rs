//! Schema + payload envelope.

use crate::error::Result;
use crate::event::SalesEvent;
use crate::schema::{sales_schema, StructSchema};
use serde::{Deserialize, Serialize};

/// Borrowed envelope pairing the static schema with one event.
///
/// Envelopes are built, encoded and dropped within a single publish; nothing
/// is retained between events.
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    pub schema: &'a StructSchema,
    pub payload: &'a SalesEvent,
}

impl<'a> Envelope<'a> {
    /// Wrap an event with the sales schema.
    pub fn new(payload: &'a SalesEvent) -> Self {
        Self {
            schema: sales_schema(),
            payload,
        }
    }

    /// Encode as compact UTF-8 JSON.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Owned envelope as read back from a topic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DecodedEnvelope {
    pub schema: StructSchema,
    pub payload: SalesEvent,
}

impl DecodedEnvelope {
    /// Decode an envelope from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SalesTypesError;
    use uuid::Uuid;

    fn event() -> SalesEvent {
        SalesEvent {
            event_id: Uuid::parse_str("0b5e3c6a-8f0e-4d8e-a6c1-3f3d2b1e9a77").unwrap(),
            store_id: 42,
            sku: 4711,
            qty: 3,
            ts: 1_723_456_789_012,
        }
    }

    #[test]
    fn test_envelope_key_order() {
        let bytes = Envelope::new(&event()).to_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with(r#"{"schema":{"type":"struct","name":"sales_event","optional":false,"fields":["#));
        assert!(text.ends_with(
            r#""payload":{"event_id":"0b5e3c6a-8f0e-4d8e-a6c1-3f3d2b1e9a77","store_id":42,"sku":4711,"qty":3,"ts":1723456789012}}"#
        ));
    }

    #[test]
    fn test_decode_preserves_values() {
        let original = event();
        let bytes = Envelope::new(&original).to_bytes().unwrap();
        let decoded = DecodedEnvelope::from_slice(&bytes).unwrap();

        assert_eq!(decoded.payload, original);
        assert_eq!(&decoded.schema, sales_schema());
    }

    #[test]
    fn test_large_timestamp_is_exact() {
        let original = SalesEvent {
            ts: i64::MAX,
            ..event()
        };
        let bytes = Envelope::new(&original).to_bytes().unwrap();
        let decoded = DecodedEnvelope::from_slice(&bytes).unwrap();
        assert_eq!(decoded.payload.ts, i64::MAX);
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let bytes = br#"{"schema":{"type":"struct","name":"sales_event","optional":false,"fields":[]},"payload":{"event_id":"0b5e3c6a-8f0e-4d8e-a6c1-3f3d2b1e9a77","store_id":1,"sku":1000,"qty":1}}"#;
        let err = DecodedEnvelope::from_slice(bytes).unwrap_err();
        assert!(matches!(err, SalesTypesError::Serialization(_)));
    }
}
