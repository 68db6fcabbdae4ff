//! Column decoding shared by the repositories.
//!
//! Rows are read with runtime `sqlx::query_as` into plain row structs and
//! converted here, so a corrupt value surfaces as `DbError::Initialization`
//! naming the offending column.

use crate::{DbError, Result as DbErrorResult};

use pm_core::ErrorLocation;

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Weak references are decoded leniently: a malformed id reads as absent.
pub(crate) fn optional_uuid(value: Option<&str>) -> Option<Uuid> {
    value.and_then(|s| Uuid::parse_str(s).ok())
}

#[track_caller]
pub(crate) fn timestamp(millis: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parsed<T>(value: &str, column: &str) -> DbErrorResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    T::from_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid value in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn bounded_u8(value: i64, column: &str) -> DbErrorResult<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= 100)
        .ok_or_else(|| DbError::Initialization {
            message: format!("Out of range value in {}: {}", column, value),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
pub(crate) fn positive_u32(value: i64, column: &str) -> DbErrorResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v >= 1)
        .ok_or_else(|| DbError::Initialization {
            message: format!("Out of range value in {}: {}", column, value),
            location: ErrorLocation::from(Location::caller()),
        })
}
