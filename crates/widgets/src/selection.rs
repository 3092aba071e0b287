// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selection values for date/time widgets.
//!
//! A widget's "current" value arrives in one of four shapes. Normalization
//! turns any of them into a [`NaiveDateTime`]; shapes that cannot be parsed
//! degrade to the clock's current instant rather than failing, so rendering
//! stays infallible.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use serde::Deserialize;
use thiserror::Error;

use crate::clock::Clock;

/// The accepted shapes for a widget's selected value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateTimeValue {
    /// Seconds since the Unix epoch, interpreted in local time.
    Timestamp(i64),
    /// A structured instant.
    Instant(NaiveDateTime),
    /// A formatted date or date-time string.
    Formatted(String),
    /// A partial field-name to string-value mapping.
    Parts(DateTimeParts),
}

impl From<NaiveDateTime> for DateTimeValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Instant(value)
    }
}

impl From<i64> for DateTimeValue {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

impl From<&str> for DateTimeValue {
    fn from(value: &str) -> Self {
        Self::Formatted(value.to_string())
    }
}

impl From<String> for DateTimeValue {
    fn from(value: String) -> Self {
        Self::Formatted(value)
    }
}

impl From<DateTimeParts> for DateTimeValue {
    fn from(value: DateTimeParts) -> Self {
        Self::Parts(value)
    }
}

/// A partial mapping of field names to string values.
///
/// Year is required; a missing month or day defaults to 1, missing time
/// fields to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateTimeParts {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub hour: Option<String>,
    pub minute: Option<String>,
    pub second: Option<String>,
}

/// Why a selection value could not be turned into an instant.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("unrecognized date/time string: {0:?}")]
    Format(String),
    #[error("timestamp out of range: {0}")]
    Timestamp(i64),
    #[error("incomplete or invalid field mapping")]
    Parts,
}

/// Interval rounding policy for minute and second fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Round {
    /// Snap to the closest multiple, halves away from zero.
    #[default]
    Nearest,
    Up,
    Down,
}

/// The units that support interval rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundUnit {
    Minute,
    Second,
}

/// Normalize a selection value against the given clock.
///
/// `None` stays `None` (nothing selected, so `empty` options win); a present
/// but unparseable value falls back to the current instant.
pub fn resolve(value: Option<&DateTimeValue>, clock: &dyn Clock) -> Option<NaiveDateTime> {
    let value = value?;
    match try_instant(value) {
        Ok(instant) => Some(instant),
        Err(err) => {
            tracing::debug!("selection value rejected, using current time: {err}");
            Some(clock.now())
        }
    }
}

/// Strict conversion of one selection value into an instant.
pub fn try_instant(value: &DateTimeValue) -> Result<NaiveDateTime, SelectionError> {
    match value {
        DateTimeValue::Instant(instant) => Ok(*instant),
        DateTimeValue::Timestamp(seconds) => from_timestamp(*seconds),
        DateTimeValue::Formatted(text) => parse_formatted(text),
        DateTimeValue::Parts(parts) => from_parts(parts),
    }
}

fn from_timestamp(seconds: i64) -> Result<NaiveDateTime, SelectionError> {
    // Negative timestamps are treated as invalid input, not dates before 1970.
    if seconds < 0 {
        return Err(SelectionError::Timestamp(seconds));
    }
    chrono::Local
        .timestamp_opt(seconds, 0)
        .single()
        .map(|instant| instant.naive_local())
        .ok_or(SelectionError::Timestamp(seconds))
}

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

fn parse_formatted(text: &str) -> Result<NaiveDateTime, SelectionError> {
    let text = text.trim();
    for format in DATE_TIME_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(instant);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(SelectionError::Format(text.to_string()))
}

fn from_parts(parts: &DateTimeParts) -> Result<NaiveDateTime, SelectionError> {
    fn numeric(value: Option<&String>, default: u32) -> Result<u32, SelectionError> {
        match value {
            Some(text) => text.trim().parse().map_err(|_| SelectionError::Parts),
            None => Ok(default),
        }
    }

    let year: i32 = parts
        .year
        .as_ref()
        .ok_or(SelectionError::Parts)?
        .trim()
        .parse()
        .map_err(|_| SelectionError::Parts)?;
    let date = NaiveDate::from_ymd_opt(
        year,
        numeric(parts.month.as_ref(), 1)?,
        numeric(parts.day.as_ref(), 1)?,
    )
    .ok_or(SelectionError::Parts)?;
    date.and_hms_opt(
        numeric(parts.hour.as_ref(), 0)?,
        numeric(parts.minute.as_ref(), 0)?,
        numeric(parts.second.as_ref(), 0)?,
    )
    .ok_or(SelectionError::Parts)
}

/// Snap the instant's minute or second to a multiple of `interval`.
///
/// The adjustment is applied as a duration, so rounding up past the top of
/// the field carries into the next-larger field and cascades (23:58 with a
/// five-minute up-round lands on 00:00 of the next day).
pub fn round_to_interval(
    instant: NaiveDateTime,
    unit: RoundUnit,
    interval: u32,
    mode: Round,
) -> NaiveDateTime {
    if interval <= 1 {
        return instant;
    }
    let current = match unit {
        RoundUnit::Minute => instant.minute(),
        RoundUnit::Second => instant.second(),
    };
    let steps = f64::from(current) / f64::from(interval);
    let snapped = match mode {
        Round::Up => steps.ceil(),
        Round::Down => steps.floor(),
        Round::Nearest => steps.round(),
    };
    let delta = (snapped * f64::from(interval)) as i64 - i64::from(current);
    match unit {
        RoundUnit::Minute => instant + Duration::minutes(delta),
        RoundUnit::Second => instant + Duration::seconds(delta),
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
