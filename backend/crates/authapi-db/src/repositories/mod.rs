pub mod user_profile_repository;
pub mod user_repository;

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

#[track_caller]
pub(crate) fn timestamp_to_datetime(
    column: &'static str,
    value: i64,
) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::RowDecode {
        message: format!("Invalid timestamp in {}: {}", column, value),
        location: ErrorLocation::from(Location::caller()),
    })
}
