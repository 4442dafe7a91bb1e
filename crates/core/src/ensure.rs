//! Argument precondition checks.
//!
//! Each function inspects one value and returns an [`EnsureError`] naming the
//! argument when the value violates the rule. Call them at the top of a
//! function body and propagate with `?`:
//!
//! ```
//! use linker_core::ensure;
//! use linker_core::error::EnsureResult;
//!
//! fn reserve(name: Option<&str>, seats: i32) -> EnsureResult<String> {
//!     let name = ensure::not_null_or_whitespace(name, "name")?;
//!     ensure::positive(seats, "seats")?;
//!     Ok(format!("{name}:{seats}"))
//! }
//!
//! assert!(reserve(Some("alice"), 2).is_ok());
//! assert!(reserve(Some("alice"), 0).is_err());
//! assert!(reserve(None, 2).is_err());
//! ```

use std::fmt::Display;

use chrono::{Duration, Local};
use uuid::Uuid;

use crate::error::{EnsureError, EnsureResult};
use crate::types::{LocalTime, Numeric};

/// Dates further than this many days in the past are rejected (~50 years).
pub const MAX_DATE_AGE_DAYS: i64 = 18_250;

/// Require a value to be present, returning it.
pub fn not_null<T>(value: Option<T>, name: &str) -> EnsureResult<T> {
    value.ok_or_else(|| EnsureError::null_argument(name, "Value cannot be null."))
}

/// Require a string to be present and non-empty.
pub fn not_null_or_empty<'a>(value: Option<&'a str>, name: &str) -> EnsureResult<&'a str> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(EnsureError::null_argument(
            name,
            format!("{name} cannot be null or empty."),
        )),
    }
}

/// Require a string to be present and contain at least one non-whitespace
/// character.
pub fn not_null_or_whitespace<'a>(value: Option<&'a str>, name: &str) -> EnsureResult<&'a str> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(EnsureError::null_argument(
            name,
            format!("{name} cannot be null, empty, or whitespace."),
        )),
    }
}

/// Require `value > 0`.
pub fn positive<T: Numeric>(value: T, name: &str) -> EnsureResult<()> {
    // NaN is not positive.
    if value > T::ZERO {
        return Ok(());
    }
    Err(EnsureError::out_of_range(
        name,
        format!("{name} should be positive."),
    ))
}

/// Require `value >= 0`.
pub fn non_negative<T: Numeric>(value: T, name: &str) -> EnsureResult<()> {
    // NaN is not non-negative either.
    if value >= T::ZERO {
        return Ok(());
    }
    Err(EnsureError::out_of_range(
        name,
        format!("{name} should be non negative."),
    ))
}

/// Require `date` to be no more than [`MAX_DATE_AGE_DAYS`] before the
/// current local time. Future dates always pass.
///
/// The clock is read on every call.
pub fn not_older_than_50_years(date: LocalTime, name: &str) -> EnsureResult<()> {
    not_older_than_50_years_at(date, Local::now().naive_local(), name)
}

/// Same rule as [`not_older_than_50_years`], evaluated against `now`.
pub fn not_older_than_50_years_at(
    date: LocalTime,
    now: LocalTime,
    name: &str,
) -> EnsureResult<()> {
    if now - date > Duration::days(MAX_DATE_AGE_DAYS) {
        return Err(EnsureError::out_of_range(
            name,
            format!("{name} should be a valid date"),
        ));
    }
    Ok(())
}

/// Require a UUID other than the nil (all-zero) value.
pub fn not_empty_uuid(id: Uuid, name: &str) -> EnsureResult<()> {
    if id.is_nil() {
        return Err(EnsureError::invalid_argument(
            name,
            format!("{name} should be non-empty GUID."),
        ));
    }
    Ok(())
}

/// Require `expected == actual`.
pub fn equal<T: PartialEq + Display>(expected: T, actual: T, name: &str) -> EnsureResult<()> {
    if expected != actual {
        return Err(EnsureError::invalid_argument(
            name,
            format!("{name} expected value: {expected}, actual value: {actual}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::error::ErrorKind;

    fn at(y: i32, m: u32, d: u32) -> LocalTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn not_null_returns_value() {
        assert_eq!(not_null(Some(7), "n").unwrap(), 7);
    }

    #[test]
    fn not_null_rejects_none() {
        let err = not_null::<i32>(None, "owner").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullArgument);
        assert_eq!(err.argument(), "owner");
    }

    #[test]
    fn empty_string_rejected() {
        assert!(not_null_or_empty(Some(""), "s").is_err());
        assert!(not_null_or_empty(None, "s").is_err());
        assert_eq!(not_null_or_empty(Some(" "), "s").unwrap(), " ");
    }

    #[test]
    fn whitespace_string_rejected() {
        assert!(not_null_or_whitespace(Some(" \t\n"), "s").is_err());
        assert!(not_null_or_whitespace(Some("\u{3000}"), "s").is_err());
        assert_eq!(not_null_or_whitespace(Some(" x "), "s").unwrap(), " x ");
    }

    #[test]
    fn string_failure_names_argument_not_value() {
        let err = not_null_or_empty(Some(""), "title").unwrap_err();
        assert_eq!(err.argument(), "title");
        assert_eq!(err.message(), "title cannot be null or empty.");
    }

    #[test]
    fn positive_boundaries() {
        assert!(positive(1, "n").is_ok());
        assert!(positive(0, "n").is_err());
        assert!(positive(-1i64, "n").is_err());
        assert!(positive(f64::NAN, "n").is_err());
    }

    #[test]
    fn positive_message() {
        let err = positive(0, "count").unwrap_err();
        assert_eq!(err.message(), "count should be positive.");
    }

    #[test]
    fn non_negative_boundaries() {
        assert!(non_negative(0, "n").is_ok());
        assert!(non_negative(5i64, "n").is_ok());
        let err = non_negative(-1, "balance").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.message(), "balance should be non negative.");
    }

    #[test]
    fn non_negative_rejects_nan() {
        let err = non_negative(f64::NAN, "ratio").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(non_negative(f32::NAN, "ratio").is_err());
        assert!(non_negative(0.0f64, "ratio").is_ok());
        assert!(non_negative(-0.0f64, "ratio").is_ok());
    }

    #[test]
    fn date_exactly_at_limit_passes() {
        let now = at(2024, 6, 1);
        let date = now - Duration::days(MAX_DATE_AGE_DAYS);
        assert!(not_older_than_50_years_at(date, now, "d").is_ok());
    }

    #[test]
    fn date_one_second_past_limit_fails() {
        let now = at(2024, 6, 1);
        let date = now - Duration::days(MAX_DATE_AGE_DAYS) - Duration::seconds(1);
        let err = not_older_than_50_years_at(date, now, "born").unwrap_err();
        assert_eq!(err.message(), "born should be a valid date");
    }

    #[test]
    fn far_future_date_passes() {
        let now = at(2024, 6, 1);
        assert!(not_older_than_50_years_at(at(2200, 1, 1), now, "d").is_ok());
    }

    #[test]
    fn nil_uuid_rejected() {
        let err = not_empty_uuid(Uuid::nil(), "id").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "id should be non-empty GUID.");
        assert!(not_empty_uuid(Uuid::new_v4(), "id").is_ok());
    }

    #[test]
    fn equal_mismatch_message() {
        let err = equal(5, 6, "version").unwrap_err();
        assert_eq!(err.message(), "version expected value: 5, actual value: 6");
        assert!(equal(true, true, "flag").is_ok());
    }
}
