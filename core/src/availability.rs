// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::{Date, Time};

use crate::{ClientHour, ConversionPath, HourSelection, TimeError, TimezoneConfig, UtcWindow};

/// First hour offered by the slot picker.
pub const FIRST_SLOT_HOUR: u8 = 8;

/// Last hour offered by the slot picker.
pub const LAST_SLOT_HOUR: u8 = 22;

/// An entry of the hourly slot picker.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HourlyTimeSlot {
    /// What the entry selects.
    pub selection: HourSelection,

    /// Label shown to the user.
    pub label: String,

    /// UTC start hour on the fixed-offset path, a hint for operators.
    pub utc_hour_hint: Option<u8>,
}

/// The selectable slots for a client timezone: "All Time" followed by 8 AM to 10 PM.
pub fn time_slots(config: &TimezoneConfig) -> Vec<HourlyTimeSlot> {
    let any = HourlyTimeSlot {
        selection: HourSelection::Any,
        label: HourSelection::Any.label(),
        utc_hour_hint: None,
    };

    let hours = (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .filter_map(|h| ClientHour::new(h).ok())
        .map(|hour| HourlyTimeSlot {
            selection: HourSelection::Specific(hour),
            label: hour.label(),
            utc_hour_hint: config
                .fixed_window(hour)
                .ok()
                .and_then(|w| u8::try_from(w.start.hour()).ok()),
        });

    std::iter::once(any).chain(hours).collect()
}

/// Query parameters for searching stored tutor availability.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AvailabilityFilter {
    /// Key of the client timezone.
    pub timezone: &'static str,

    /// The day the client picked, on their own calendar.
    pub client_date: Date,

    /// The UTC day the window starts on.
    pub utc_date: Date,

    /// The UTC window, `None` when every hour is wanted.
    pub window: Option<UtcWindow>,
}

impl AvailabilityFilter {
    /// Whether a stored availability row, keyed by UTC date and start time, matches.
    pub fn matches(&self, utc_date: Date, start: Time) -> bool {
        let Some(window) = &self.window else {
            return utc_date == self.utc_date;
        };

        if !window.wraps() {
            return utc_date == self.utc_date && window.contains(start);
        }

        // The tail of a wrapping window lies on the following UTC day.
        let next_day = self.utc_date.checked_add(1.day()).ok();
        (utc_date == self.utc_date && start >= window.start)
            || (Some(utc_date) == next_day && start < window.end)
    }
}

/// Turns a client's date, timezone and hour choice into an availability filter.
///
/// An unknown timezone key fails, the search must not run against a guessed zone.
#[tracing::instrument(level = "debug")]
pub fn resolve_availability(
    client_date: Date,
    timezone_key: &str,
    selection: HourSelection,
    path: ConversionPath,
) -> Result<AvailabilityFilter, TimeError> {
    let config = crate::lookup(timezone_key)?;

    let (utc_date, window) = match selection {
        HourSelection::Any => (client_date, None),
        HourSelection::Specific(hour) => {
            let (utc_date, window) = config.utc_window(hour, client_date, path)?;
            (utc_date, Some(window))
        }
    };

    tracing::debug!(
        timezone = config.key,
        %utc_date,
        start = ?window.map(|w| w.start_time()),
        "resolved availability filter"
    );
    Ok(AvailabilityFilter {
        timezone: config.key,
        client_date,
        utc_date,
        window,
    })
}
