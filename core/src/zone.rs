// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::TimeError;

/// A client timezone the booking flow supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TimezoneConfig {
    /// Stable key used by callers and config files.
    pub key: &'static str,

    /// Human readable name.
    pub display_label: &'static str,

    /// Approximate UTC offset, only meaningful for the fixed-offset path.
    pub fixed_offset_hours: i8,

    /// Zone database identifier, authoritative for conversions.
    pub iana_zone_id: &'static str,

    /// Whether the zone has seasonal offset changes.
    pub observes_dst: bool,
}

/// The supported client timezones, in display order.
pub const SUPPORTED_TIMEZONES: &[TimezoneConfig] = &[
    TimezoneConfig {
        key: "saudi_arabia",
        display_label: "Saudi Arabia",
        fixed_offset_hours: 3,
        iana_zone_id: "Asia/Riyadh",
        observes_dst: false,
    },
    TimezoneConfig {
        key: "uae",
        display_label: "United Arab Emirates",
        fixed_offset_hours: 4,
        iana_zone_id: "Asia/Dubai",
        observes_dst: false,
    },
    TimezoneConfig {
        key: "qatar",
        display_label: "Qatar",
        fixed_offset_hours: 3,
        iana_zone_id: "Asia/Qatar",
        observes_dst: false,
    },
    TimezoneConfig {
        key: "kuwait",
        display_label: "Kuwait",
        fixed_offset_hours: 3,
        iana_zone_id: "Asia/Kuwait",
        observes_dst: false,
    },
    TimezoneConfig {
        key: "bahrain",
        display_label: "Bahrain",
        fixed_offset_hours: 3,
        iana_zone_id: "Asia/Bahrain",
        observes_dst: false,
    },
    TimezoneConfig {
        key: "oman",
        display_label: "Oman",
        fixed_offset_hours: 4,
        iana_zone_id: "Asia/Muscat",
        observes_dst: false,
    },
];

/// All supported timezones, in display order.
pub fn all() -> impl ExactSizeIterator<Item = &'static TimezoneConfig> {
    SUPPORTED_TIMEZONES.iter()
}

/// Looks up a supported timezone by key, ignoring ASCII case and surrounding whitespace.
///
/// An unknown key is an error, there is no fallback zone.
pub fn lookup(key: &str) -> Result<&'static TimezoneConfig, TimeError> {
    let needle = key.trim();
    SUPPORTED_TIMEZONES
        .iter()
        .find(|tz| tz.key.eq_ignore_ascii_case(needle))
        .ok_or_else(|| {
            tracing::debug!(key, "timezone key not found");
            TimeError::UnknownTimezone {
                key: needle.to_string(),
            }
        })
}

/// Resolves an IANA identifier through the zone database.
pub(crate) fn resolve_zone(zone: &str) -> Result<TimeZone, TimeError> {
    TimeZone::get(zone).map_err(|e| TimeError::UnknownZone {
        zone: zone.to_string(),
        message: e.to_string(),
    })
}

impl TimezoneConfig {
    /// The zone database entry for this timezone.
    pub fn time_zone(&self) -> Result<TimeZone, TimeError> {
        resolve_zone(self.iana_zone_id)
    }

    /// The fixed offset rendered as `+HH:00`.
    pub fn offset_label(&self) -> String {
        let sign = if self.fixed_offset_hours < 0 { '-' } else { '+' };
        format!("{sign}{:02}:00", self.fixed_offset_hours.unsigned_abs())
    }
}

/// Checks that every supported timezone agrees with the zone database during `year`.
///
/// Run once at startup, before anything is routed through the fixed-offset path.
pub fn verify_fixed_offsets(year: i16) -> Result<(), TimeError> {
    verify_fixed_offsets_of(SUPPORTED_TIMEZONES, year)
}

pub(crate) fn verify_fixed_offsets_of(
    configs: &'static [TimezoneConfig],
    year: i16,
) -> Result<(), TimeError> {
    // One winter and one summer probe, so a summer-only shift cannot hide.
    let probes = [Date::new(year, 1, 1)?, Date::new(year, 7, 1)?];

    for config in configs {
        if config.observes_dst {
            // Refused by `fixed_window`, nothing to compare.
            tracing::debug!(key = config.key, "skipping zone with daylight saving");
            continue;
        }

        let tz = config.time_zone()?;
        for day in probes {
            let zoned = day.at(12, 0, 0, 0).to_zoned(tz.clone())?;
            let actual = zoned.offset();
            if actual.seconds() != i32::from(config.fixed_offset_hours) * 3600 {
                tracing::error!(key = config.key, %actual, %day, "fixed offset is stale");
                return Err(TimeError::FixedOffsetMismatch {
                    key: config.key,
                    fixed_hours: config.fixed_offset_hours,
                    actual: actual.to_string(),
                    date: day.to_string(),
                });
            }
        }
        tracing::trace!(key = config.key, "fixed offset verified");
    }
    Ok(())
}
