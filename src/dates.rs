//! Date display and submission helpers.
//!
//! Missing values render as `"N/A"` rather than erroring; the backend is
//! lax about optional timestamps and the tables must still draw.

use time::format_description::BorrowedFormatItem;
use time::macros::{format_description, offset};
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Office timezone assumed for wall-clock form input (UTC+7).
pub const DEFAULT_OFFICE_OFFSET: UtcOffset = offset!(+7);

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const LONG_DATE_TIME: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:long] [day padding:none], [year] [hour repr:12]:[minute] [period]"
);

const LONG_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

const TIME_ONLY: &[BorrowedFormatItem<'static>] =
    format_description!("[hour repr:12]:[minute] [period]");

const SUBMISSION: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6][offset_hour sign:mandatory]:[offset_minute]"
);

fn format_or_na(value: Option<OffsetDateTime>, items: &[BorrowedFormatItem<'static>]) -> String {
    value
        .and_then(|ts| ts.format(&items).ok())
        .unwrap_or_else(|| "N/A".to_owned())
}

/// Long display form, e.g. `"January 5, 2026 08:30 AM"`.
#[must_use]
pub fn format_date_time(value: Option<OffsetDateTime>) -> String {
    format_or_na(value, LONG_DATE_TIME)
}

/// Time-only display form, e.g. `"08:30 AM"`.
#[must_use]
pub fn format_time(value: Option<OffsetDateTime>) -> String {
    format_or_na(value, TIME_ONLY)
}

/// Date-only display form, e.g. `"January 5, 2026"`.
#[must_use]
pub fn format_date(value: Option<Date>) -> String {
    value
        .and_then(|date| date.format(&LONG_DATE).ok())
        .unwrap_or_else(|| "N/A".to_owned())
}

/// Render a wall-clock form value as the offset-annotated string the
/// backend expects, e.g. `"2026-01-05T08:30:00.000000+07:00"`.
///
/// # Errors
///
/// Returns a format error if the timestamp cannot be rendered.
pub fn to_submission_string(
    local: PrimitiveDateTime,
    office_offset: UtcOffset,
) -> Result<String, time::error::Format> {
    local.assume_offset(office_offset).format(&SUBMISSION)
}

/// Serde adapter for optional `[year]-[month]-[day]` wire dates.
pub mod iso_date_option {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    use super::ISO_DATE;

    /// # Errors
    ///
    /// Returns a serializer error if the date cannot be formatted.
    pub fn serialize<S: Serializer>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => {
                let formatted = date.format(&ISO_DATE).map_err(serde::ser::Error::custom)?;
                serializer.serialize_some(&formatted)
            }
            None => serializer.serialize_none(),
        }
    }

    /// # Errors
    ///
    /// Returns a deserializer error if the value is not a valid date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| Date::parse(&s, &ISO_DATE).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod tests;
