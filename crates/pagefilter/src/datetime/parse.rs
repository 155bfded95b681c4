//! Date-time normalization for deterministic request parameters.
//!
//! Accepts `YYYY-MM-DD`, optionally followed by `T` (or a space) and `HH:MM`, `HH:MM:SS`
//! or `HH:MM:SS.fraction`, optionally followed by `Z` or a `±HH:MM` / `±HHMM` / `±HH` offset.
//! Inputs without an offset are read as UTC.

use thiserror::Error;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

use crate::params::ParamLeaf;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("empty value")]
    Empty,
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("invalid time: {0}")]
    InvalidTime(String),
    #[error("invalid offset: {0}")]
    InvalidOffset(String),
    #[error("out of range in UTC: {0}")]
    OutOfRange(String),
}

/// Parse an ISO-8601 date or date-time into a UTC instant.
pub fn try_parse_utc(input: &str) -> Result<OffsetDateTime, DateTimeError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DateTimeError::Empty);
    }
    let (date_part, rest) = match s.find(['T', 't', ' ']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };
    let date = Date::parse(date_part, format_description!("[year]-[month]-[day]"))
        .map_err(|_| DateTimeError::InvalidDate(date_part.to_string()))?;
    let Some(rest) = rest else {
        return Ok(date.midnight().assume_utc());
    };
    let (time_part, offset) = split_offset(rest)?;
    let time = parse_time(time_part)?;
    PrimitiveDateTime::new(date, time)
        .assume_offset(offset)
        .checked_to_offset(UtcOffset::UTC)
        .ok_or_else(|| DateTimeError::OutOfRange(s.to_string()))
}

/// Lenient form of [`try_parse_utc`]: invalid input is None.
pub fn parse_utc(input: &str) -> Option<OffsetDateTime> {
    try_parse_utc(input).ok()
}

fn split_offset(rest: &str) -> Result<(&str, UtcOffset), DateTimeError> {
    if let Some(t) = rest.strip_suffix('Z').or_else(|| rest.strip_suffix('z')) {
        return Ok((t, UtcOffset::UTC));
    }
    let Some(i) = rest.rfind(|c: char| c == '+' || c == '-') else {
        return Ok((rest, UtcOffset::UTC));
    };
    let raw = &rest[i..];
    let offset = UtcOffset::parse(
        raw,
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
    .or_else(|_| {
        UtcOffset::parse(
            raw,
            format_description!("[offset_hour sign:mandatory][offset_minute]"),
        )
    })
    .or_else(|_| UtcOffset::parse(raw, format_description!("[offset_hour sign:mandatory]")))
    .map_err(|_| DateTimeError::InvalidOffset(raw.to_string()))?;
    Ok((&rest[..i], offset))
}

fn parse_time(s: &str) -> Result<Time, DateTimeError> {
    Time::parse(
        s,
        format_description!("[hour]:[minute]:[second].[subsecond]"),
    )
    .or_else(|_| Time::parse(s, format_description!("[hour]:[minute]:[second]")))
    .or_else(|_| Time::parse(s, format_description!("[hour]:[minute]")))
    .map_err(|_| DateTimeError::InvalidTime(s.to_string()))
}

/// `YYYY-MM-DDTHH:mm:ss.SSS` in UTC, milliseconds truncated.
/// None when the instant has no representable UTC date.
pub fn format_canonical(dt: OffsetDateTime) -> Option<String> {
    dt.checked_to_offset(UtcOffset::UTC)?
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]"
        ))
        .ok()
}

/// Canonical string for a raw scalar, or None when it is not a valid instant.
pub fn normalize_date_time_leaf(leaf: ParamLeaf<'_>) -> Option<String> {
    match leaf {
        ParamLeaf::Text(s) => parse_utc(s).and_then(format_canonical),
        ParamLeaf::DateTime(dt) => format_canonical(dt),
        ParamLeaf::Bool(_) => None,
    }
}

/// Same instant, expressed in `local`. Instants whose local date would fall outside
/// the supported range are returned unchanged.
pub fn utc_to_local(dt: OffsetDateTime, local: UtcOffset) -> OffsetDateTime {
    dt.checked_to_offset(local).unwrap_or(dt)
}
