// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::{Time, time};

use crate::parse::format_hms;
use crate::{ClientHour, TimeError, TimezoneConfig};

/// Smallest UTC offset accepted by the fixed-offset path, in hours.
pub const MIN_OFFSET_HOURS: i8 = -12;

/// Largest UTC offset accepted by the fixed-offset path, in hours.
pub const MAX_OFFSET_HOURS: i8 = 14;

/// A one-hour `[start, end)` interval in UTC used to filter stored availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct UtcWindow {
    /// Inclusive start of the window.
    pub start: Time,

    /// Exclusive end of the window, one hour after `start` modulo 24h.
    pub end: Time,

    /// Whether the client's day and the UTC day differ for this window.
    pub crosses_midnight: bool,
}

impl UtcWindow {
    /// Builds the one-hour window starting at `start`.
    pub fn starting_at(start: Time, crosses_midnight: bool) -> Self {
        Self {
            start,
            end: start.wrapping_add(1.hour()),
            crosses_midnight,
        }
    }

    /// The start as `HH:MM:SS`.
    pub fn start_time(&self) -> String {
        format_hms(self.start)
    }

    /// The end as `HH:MM:SS`, `00:00:00` for a window starting at 23:00.
    pub fn end_time(&self) -> String {
        format_hms(self.end)
    }

    /// Whether the end wraps past midnight, i.e. the window ends on the next UTC day.
    pub fn wraps(&self) -> bool {
        self.end <= self.start
    }

    /// Whether a UTC time of day falls within the window.
    pub fn contains(&self, t: Time) -> bool {
        if self.wraps() {
            t >= self.start || t < self.end
        } else {
            self.start <= t && t < self.end
        }
    }
}

/// Converts a client hour to a UTC window using a constant offset.
///
/// Deprecated path: it ignores daylight saving and is only correct for zones whose
/// offset never changes. Prefer [`crate::client_hour_to_utc`].
#[tracing::instrument(level = "trace")]
pub fn to_utc_range(client_hour: ClientHour, offset_hours: i8) -> Result<UtcWindow, TimeError> {
    let raw = raw_utc_hour(client_hour, offset_hours)?;
    let crosses_midnight = !(0..24).contains(&raw);
    let start = if raw < 0 {
        raw + 24
    } else if raw >= 24 {
        raw - 24
    } else {
        raw
    };
    tracing::trace!(raw, start, crosses_midnight, "computed UTC hour");

    Ok(UtcWindow::starting_at(
        time(start, 0, 0, 0),
        crosses_midnight,
    ))
}

/// How many days the UTC date is ahead of the client date for this hour, `-1`, `0` or `1`.
pub fn utc_day_shift(client_hour: ClientHour, offset_hours: i8) -> Result<i8, TimeError> {
    let raw = raw_utc_hour(client_hour, offset_hours)?;
    Ok(if raw < 0 {
        -1
    } else if raw >= 24 {
        1
    } else {
        0
    })
}

fn raw_utc_hour(client_hour: ClientHour, offset_hours: i8) -> Result<i8, TimeError> {
    if !(MIN_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&offset_hours) {
        return Err(TimeError::OffsetOutOfRange {
            offset: i64::from(offset_hours),
        });
    }
    // Within -14..=35, no overflow.
    Ok(client_hour.as_i8() - offset_hours)
}

impl TimezoneConfig {
    /// The fixed-offset window for this zone, refused for zones with daylight saving.
    pub fn fixed_window(&self, client_hour: ClientHour) -> Result<UtcWindow, TimeError> {
        if self.observes_dst {
            tracing::warn!(key = self.key, "fixed-offset path requested for a DST zone");
            return Err(TimeError::FixedOffsetUnsupported { key: self.key });
        }
        to_utc_range(client_hour, self.fixed_offset_hours)
    }
}
