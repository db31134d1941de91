//! Individual value generators for sales event fields.

pub mod numeric;
pub mod timestamp;
pub mod uuid;
