//! Crate error type.
//!
//! The geometric operations on [`GeoPoint`](crate::GeoPoint) never fail; only
//! the strict conversions (unit labels, coordinate slices) produce errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("unknown distance unit {0:?}, expected \"m\" or \"mi\"")]
    UnknownUnit(String),

    #[error("expected 2 or 3 coordinate components, got {0}")]
    Arity(usize),
}

pub type GeoResult<T> = Result<T, GeoError>;
