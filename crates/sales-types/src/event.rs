//! The sales event record.

use crate::error::{Result, SalesTypesError};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Valid store identifiers.
pub const STORE_ID_RANGE: RangeInclusive<i32> = 1..=250;

/// Valid stock keeping unit numbers.
pub const SKU_RANGE: RangeInclusive<i32> = 1000..=9999;

/// Valid quantities per sale.
pub const QTY_RANGE: RangeInclusive<i32> = 1..=5;

/// A single synthetic sale.
///
/// Field order matches the `sales_event` schema and is preserved on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesEvent {
    /// Random v4 identifier, serialized in hyphenated form.
    pub event_id: Uuid,
    pub store_id: i32,
    pub sku: i32,
    pub qty: i32,
    /// Milliseconds since the Unix epoch at generation time.
    pub ts: i64,
}

impl SalesEvent {
    /// Check that every integer field lies within its range.
    pub fn validate(&self) -> Result<()> {
        check_range("store_id", self.store_id, &STORE_ID_RANGE)?;
        check_range("sku", self.sku, &SKU_RANGE)?;
        check_range("qty", self.qty, &QTY_RANGE)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: i32, range: &RangeInclusive<i32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(SalesTypesError::OutOfRange {
            field,
            value: value.into(),
        })
    }
}
