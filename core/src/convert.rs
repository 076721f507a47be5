// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, Time};
use jiff::tz::TimeZone;
use jiff::{Timestamp, ToSpan};

use crate::window::utc_day_shift;
use crate::zone::resolve_zone;
use crate::{ClientHour, TimeError, TimezoneConfig, UtcWindow};

/// The absolute instant a client wall-clock hour resolves to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UtcInstant {
    /// Hour of the instant in UTC.
    pub utc_hour: i8,

    /// Minute of the instant in UTC, non-zero for zones with fractional offsets.
    pub utc_minute: i8,

    /// Calendar date of the instant in UTC.
    pub utc_date: Date,

    /// The instant itself.
    pub instant: Timestamp,
}

impl UtcInstant {
    /// The UTC time of day.
    pub fn utc_time(&self) -> Time {
        jiff::civil::time(self.utc_hour, self.utc_minute, 0, 0)
    }
}

/// Which conversion strategy resolves a client hour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum ConversionPath {
    /// Legacy constant offsets, only valid for zones without daylight saving.
    #[cfg_attr(feature = "clap", clap(name = "fixed-offset", alias = "fixed"))]
    FixedOffset,

    /// Zone database rules for the specific date.
    #[default]
    #[cfg_attr(feature = "clap", clap(name = "zone-database", alias = "tzdb"))]
    ZoneDatabase,
}

/// Resolves `client_hour:00` on `client_date` in `iana_zone` to a UTC instant.
///
/// Wall-clock times skipped or repeated by a transition are resolved with the
/// zone library's compatible disambiguation: a skipped time moves forward by the
/// gap, a repeated time takes the earlier instant.
#[tracing::instrument(level = "debug")]
pub fn client_hour_to_utc(
    client_hour: ClientHour,
    client_date: Date,
    iana_zone: &str,
) -> Result<UtcInstant, TimeError> {
    let tz = resolve_zone(iana_zone)?;
    resolve_in(client_hour, client_date, &tz)
}

fn resolve_in(
    client_hour: ClientHour,
    client_date: Date,
    tz: &TimeZone,
) -> Result<UtcInstant, TimeError> {
    let local = client_date.at(client_hour.as_i8(), 0, 0, 0);
    let zoned = tz.to_zoned(local)?;
    let utc = zoned.with_time_zone(TimeZone::UTC);
    tracing::trace!(%local, offset = %zoned.offset(), %utc, "resolved client wall clock");

    Ok(UtcInstant {
        utc_hour: utc.hour(),
        utc_minute: utc.minute(),
        utc_date: utc.date(),
        instant: utc.timestamp(),
    })
}

/// The one-hour UTC window for a client hour, resolved through the zone database.
///
/// Returns the UTC date the window starts on alongside the window. The window
/// crosses midnight when that date differs from `client_date`.
pub fn utc_window_at(
    client_hour: ClientHour,
    client_date: Date,
    iana_zone: &str,
) -> Result<(Date, UtcWindow), TimeError> {
    let instant = client_hour_to_utc(client_hour, client_date, iana_zone)?;
    let window = UtcWindow::starting_at(instant.utc_time(), instant.utc_date != client_date);
    Ok((instant.utc_date, window))
}

impl TimezoneConfig {
    /// The UTC date and window for a client hour on `client_date`, using `path`.
    pub fn utc_window(
        &self,
        client_hour: ClientHour,
        client_date: Date,
        path: ConversionPath,
    ) -> Result<(Date, UtcWindow), TimeError> {
        match path {
            ConversionPath::FixedOffset => {
                let window = self.fixed_window(client_hour)?;
                let shift = utc_day_shift(client_hour, self.fixed_offset_hours)?;
                let utc_date = client_date.checked_add(i32::from(shift).days())?;
                Ok((utc_date, window))
            }
            ConversionPath::ZoneDatabase => {
                let tz = self.time_zone()?;
                let instant = resolve_in(client_hour, client_date, &tz)?;
                let window =
                    UtcWindow::starting_at(instant.utc_time(), instant.utc_date != client_date);
                Ok((instant.utc_date, window))
            }
        }
    }
}
