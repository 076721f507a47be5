// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Egypt local time, the operating timezone of the teaching staff.
//!
//! All conversions go through the `Africa/Cairo` zone database entry. Egypt has
//! abolished and reinstated summer time several times, so no fixed offset or
//! hand-written transition rule is used anywhere in this module.

use std::borrow::Cow;

use jiff::civil::{Date, DateTime};
use jiff::fmt::strtime;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

use crate::parse::{format_hms, parse_time_of_day};
use crate::pattern::to_strftime;
use crate::zone::resolve_zone;
use crate::TimeError;

/// Zone database identifier for Egypt.
pub const EGYPT_ZONE: &str = "Africa/Cairo";

/// Rendered when a session has no date or time yet.
pub const NOT_SCHEDULED: &str = "Not scheduled";

/// Rendered when a UTC date-time cannot be parsed.
pub const INVALID_DATE: &str = "Invalid date";

/// Rendered when a separate UTC date and time cannot be combined.
pub const INVALID_DATE_TIME: &str = "Invalid date/time";

/// Default pattern used by the dashboards.
pub const DEFAULT_DISPLAY_PATTERN: &str = "dd/MM/yyyy h:mm a";

/// A UTC time of day ready to be persisted, converted from Egypt local time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EgyptConversionResult {
    /// UTC time as `HH:MM:SS`.
    pub utc_time_string: String,

    /// UTC date, which may differ from the Egypt date around midnight.
    pub utc_date: Date,
}

fn cairo() -> Result<TimeZone, TimeError> {
    resolve_zone(EGYPT_ZONE)
}

/// Formats a stored UTC date-time as Egypt local time.
///
/// Naive inputs such as `2024-06-15 13:00:00` are read as UTC. Returns
/// [`NOT_SCHEDULED`] for empty input and [`INVALID_DATE`] when the input cannot
/// be read, never an error.
pub fn format_utc_as_egypt(utc: &str, pattern: &str) -> String {
    let utc = utc.trim();
    if utc.is_empty() {
        return NOT_SCHEDULED.to_string();
    }

    match parse_utc(utc).and_then(|ts| render_in_egypt(ts, pattern)) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(input = utc, error = %e, "cannot format as Egypt time");
            INVALID_DATE.to_string()
        }
    }
}

/// Formats a stored UTC date and UTC time, kept in separate columns, as Egypt local time.
///
/// Returns [`NOT_SCHEDULED`] when either part is missing and [`INVALID_DATE_TIME`]
/// when they cannot be combined.
pub fn format_date_time_as_egypt(date: Option<&str>, time: Option<&str>, pattern: &str) -> String {
    fn non_empty(s: Option<&str>) -> Option<&str> {
        s.map(str::trim).filter(|s| !s.is_empty())
    }

    let (Some(date), Some(time)) = (non_empty(date), non_empty(time)) else {
        return NOT_SCHEDULED.to_string();
    };

    match parse_utc(&format!("{date}T{time}")).and_then(|ts| render_in_egypt(ts, pattern)) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(date, time, error = %e, "cannot format as Egypt time");
            INVALID_DATE_TIME.to_string()
        }
    }
}

/// Converts an Egypt local time typed by staff into the UTC time to persist.
#[tracing::instrument(level = "debug")]
pub fn egypt_local_to_utc(time24: &str, date: Date) -> Result<EgyptConversionResult, TimeError> {
    let time = parse_time_of_day(time24)?;
    let local = date.to_datetime(time);
    let zoned = cairo()?.to_zoned(local)?;
    let utc = zoned.with_time_zone(TimeZone::UTC);
    tracing::trace!(%local, offset = %zoned.offset(), %utc, "converted Egypt time to UTC");

    Ok(EgyptConversionResult {
        utc_time_string: format_hms(utc.time()),
        utc_date: utc.date(),
    })
}

/// Converts a stored UTC time on a UTC date back to Egypt local date and time.
pub fn utc_to_egypt_local(utc_time: &str, date: Date) -> Result<DateTime, TimeError> {
    let time = parse_time_of_day(utc_time)?;
    let zoned = date.to_datetime(time).to_zoned(TimeZone::UTC)?;
    Ok(zoned.with_time_zone(cairo()?).datetime())
}

/// The current calendar date in Egypt.
pub fn egypt_today() -> Result<Date, TimeError> {
    Ok(Zoned::now().with_time_zone(cairo()?).date())
}

/// Reads a UTC date-time, assuming UTC when no offset is given.
fn parse_utc(input: &str) -> Result<Timestamp, TimeError> {
    let normalized = normalize_utc(input);
    tracing::trace!(input, %normalized, "normalized UTC input");
    normalized
        .parse::<Timestamp>()
        .map_err(|e| TimeError::Conversion {
            message: format!("cannot parse '{input}' as UTC: {e}"),
        })
}

/// Makes a date-time string unambiguously UTC.
///
/// The first space becomes `T` and whitespace inside the time part is dropped, a
/// bare date gets midnight, and `Z` is added unless a `Z` or numeric offset is
/// already present. A trailing `[...]` annotation is kept after the marker.
pub(crate) fn normalize_utc(input: &str) -> Cow<'_, str> {
    let s = input.trim();
    let owned = match s.split_once(' ') {
        Some((date, time)) => format!("{date}T{}", time.split_whitespace().collect::<String>()),
        None if s.len() == 10 => format!("{s}T00:00:00"),
        None => s.to_string(),
    };

    let (datetime, annotation) = match owned.find('[') {
        Some(i) => owned.split_at(i),
        None => (owned.as_str(), ""),
    };
    if has_utc_marker(datetime) {
        if owned == s {
            return Cow::Borrowed(s);
        }
        return Cow::Owned(owned);
    }

    Cow::Owned(format!("{datetime}Z{annotation}"))
}

fn has_utc_marker(s: &str) -> bool {
    if s.ends_with(['Z', 'z']) {
        return true;
    }
    s.split_once(['T', 't'])
        .is_some_and(|(_, time)| time.contains(['+', '-']))
}

fn render_in_egypt(ts: Timestamp, pattern: &str) -> Result<String, TimeError> {
    let zoned = ts.to_zoned(cairo()?);
    let format = to_strftime(pattern);
    Ok(strtime::format(format.as_str(), &zoned)?)
}
