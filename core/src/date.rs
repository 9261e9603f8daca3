//! Short, locale-style date rendering.
//!
//! # Design
//! A `DateInput` is first reduced to a `NaiveDate` (timestamps and
//! offset-bearing values go through the local time zone), then rendered with
//! a `ShortDateStyle`. The style comes from the host locale environment
//! unless the caller passes one explicitly.

use std::env;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::DateError;

/// Anything `format_date` knows how to turn into a calendar date.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Text(String),
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::Timestamp(millis)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(datetime: NaiveDateTime) -> Self {
        DateInput::Date(datetime.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(datetime: DateTime<Tz>) -> Self {
        DateInput::DateTime(datetime.fixed_offset())
    }
}

impl DateInput {
    /// Reduce to a calendar date in local time.
    pub fn to_calendar_date(&self) -> Result<NaiveDate, DateError> {
        match self {
            DateInput::Timestamp(millis) => DateTime::from_timestamp_millis(*millis)
                .as_ref()
                .and_then(local_date)
                .ok_or_else(|| invalid(&millis.to_string())),
            DateInput::Text(text) => parse_text(text),
            DateInput::Date(date) => Ok(*date),
            DateInput::DateTime(datetime) => {
                local_date(datetime).ok_or_else(|| invalid(&format!("{} UTC", datetime.naive_utc())))
            }
        }
    }
}

/// Calendar date of `datetime` in the host time zone. `None` when the local
/// wall-clock time falls outside chrono's range.
fn local_date<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Option<NaiveDate> {
    let utc = datetime.naive_utc();
    date_at_offset(utc, Local.offset_from_utc_datetime(&utc))
}

fn date_at_offset(utc: NaiveDateTime, offset: FixedOffset) -> Option<NaiveDate> {
    utc.checked_add_offset(offset).map(|local| local.date())
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

fn parse_text(text: &str) -> Result<NaiveDate, DateError> {
    let trimmed = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed).or_else(|_| DateTime::parse_from_rfc2822(trimmed)) {
        return local_date(&dt).ok_or_else(|| invalid(text));
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    Err(invalid(text))
}

fn invalid(input: &str) -> DateError {
    DateError::Invalid {
        input: input.to_string(),
    }
}

/// Numeric short-date pattern of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortDateStyle {
    /// `1/15/2024`
    #[default]
    MonthDayYear,
    /// `15/01/2024`
    DayMonthYear,
    /// `15.01.2024`
    DayMonthYearDotted,
    /// `2024-01-15`
    YearMonthDay,
}

impl ShortDateStyle {
    /// Style for a POSIX locale name such as `en_GB.UTF-8` or `de_DE@euro`.
    /// Unknown languages fall back to `MonthDayYear`.
    pub fn from_locale(locale: &str) -> Self {
        let name = locale.split(['.', '@']).next().unwrap_or("");
        let mut parts = name.split(['_', '-']);
        let language = parts.next().unwrap_or("").to_ascii_lowercase();
        let region = parts.next().unwrap_or("").to_ascii_uppercase();

        match (language.as_str(), region.as_str()) {
            ("en", "US" | "") => ShortDateStyle::MonthDayYear,
            ("en", "CA" | "ZA") => ShortDateStyle::YearMonthDay,
            ("en", _) => ShortDateStyle::DayMonthYear,
            ("fr" | "es" | "it" | "pt" | "nl" | "el" | "ga" | "ca" | "vi", _) => {
                ShortDateStyle::DayMonthYear
            }
            ("de" | "ru" | "pl" | "cs" | "sk" | "fi" | "nb" | "no" | "da" | "tr" | "uk" | "ro", _) => {
                ShortDateStyle::DayMonthYearDotted
            }
            ("sv" | "lt" | "ja" | "zh" | "ko" | "hu", _) => ShortDateStyle::YearMonthDay,
            _ => ShortDateStyle::MonthDayYear,
        }
    }

    /// Style of the host locale: first non-empty of `LC_ALL`, `LC_TIME`,
    /// `LANG`. `C`/`POSIX` and an unset environment mean `MonthDayYear`.
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .find(|value| !value.is_empty())
            .map(|locale| Self::from_locale(&locale))
            .unwrap_or_default()
    }

    pub fn render(&self, date: NaiveDate) -> String {
        match self {
            ShortDateStyle::MonthDayYear => date.format("%-m/%-d/%Y").to_string(),
            ShortDateStyle::DayMonthYear => date.format("%d/%m/%Y").to_string(),
            ShortDateStyle::DayMonthYearDotted => date.format("%d.%m.%Y").to_string(),
            ShortDateStyle::YearMonthDay => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Render `input` as a short date in the host locale's style.
pub fn format_date(input: impl Into<DateInput>) -> Result<String, DateError> {
    format_date_with(input, ShortDateStyle::from_env())
}

/// Render `input` as a short date in an explicit style.
pub fn format_date_with(input: impl Into<DateInput>, style: ShortDateStyle) -> Result<String, DateError> {
    let date = input.into().to_calendar_date()?;
    Ok(style.render(date))
}
