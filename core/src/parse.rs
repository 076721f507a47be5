// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Time};

use crate::TimeError;

/// Parses a calendar date in the form `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<Date, TimeError> {
    let s = s.trim();
    Date::strptime("%Y-%m-%d", s).map_err(|e| {
        tracing::debug!(input = s, error = %e, "failed to parse date");
        TimeError::InvalidDate {
            value: s.to_string(),
        }
    })
}

/// Parses a 24-hour time of day, either `HH:MM:SS` or `HH:MM`.
pub fn parse_time_of_day(s: &str) -> Result<Time, TimeError> {
    let s = s.trim();
    Time::strptime("%H:%M:%S", s)
        .or_else(|_| Time::strptime("%H:%M", s))
        .map_err(|e| {
            tracing::debug!(input = s, error = %e, "failed to parse time of day");
            TimeError::InvalidTime {
                value: s.to_string(),
            }
        })
}

/// Renders a time of day as the stable storage form `HH:MM:SS`.
pub(crate) fn format_hms(t: Time) -> String {
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}
