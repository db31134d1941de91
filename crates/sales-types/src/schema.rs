//! Kafka Connect JSON schema descriptors.
//!
//! Connect's `JsonConverter` with `schemas.enable=true` expects every message
//! to carry a `schema` object next to its `payload`. Only the subset of the
//! schema language needed for flat structs is modelled here.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Connect schema type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectType {
    Struct,
    String,
    Int32,
    Int64,
}

/// Schema of a single struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: ConnectType,
    pub optional: bool,
}

impl FieldSchema {
    /// A non-nullable field.
    pub fn required(field: &str, field_type: ConnectType) -> Self {
        Self {
            field: field.to_string(),
            field_type,
            optional: false,
        }
    }
}

/// Schema of a named struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructSchema {
    #[serde(rename = "type")]
    pub schema_type: ConnectType,
    pub name: String,
    pub optional: bool,
    pub fields: Vec<FieldSchema>,
}

static SALES_SCHEMA: LazyLock<StructSchema> = LazyLock::new(|| StructSchema {
    schema_type: ConnectType::Struct,
    name: "sales_event".to_string(),
    optional: false,
    fields: vec![
        FieldSchema::required("event_id", ConnectType::String),
        FieldSchema::required("store_id", ConnectType::Int32),
        FieldSchema::required("sku", ConnectType::Int32),
        FieldSchema::required("qty", ConnectType::Int32),
        FieldSchema::required("ts", ConnectType::Int64),
    ],
});

/// The schema describing [`crate::SalesEvent`]. Built once per process.
pub fn sales_schema() -> &'static StructSchema {
    &SALES_SCHEMA
}
