// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised by conversions whose result feeds a query filter or a persisted write.
///
/// Display-only helpers never return this type, they degrade to sentinel strings instead.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The timezone key is not part of the supported table.
    #[error("Unknown timezone '{key}'")]
    UnknownTimezone {
        /// The key that was looked up
        key: String,
    },

    /// No timezone was given and no default is configured.
    #[error("No timezone selected and no default timezone configured")]
    NoTimezone,

    /// The IANA zone identifier cannot be resolved in the zone database.
    #[error("Unknown time zone '{zone}': {message}")]
    UnknownZone {
        /// The IANA zone identifier
        zone: String,
        /// Message from the zone database
        message: String,
    },

    /// A client hour outside `0..=23`.
    #[error("Hour {hour} is out of range, expected 0..=23")]
    HourOutOfRange {
        /// The rejected hour
        hour: i64,
    },

    /// A fixed UTC offset outside `-12..=14` hours.
    #[error("UTC offset {offset} hours is out of range, expected -12..=14")]
    OffsetOutOfRange {
        /// The rejected offset
        offset: i64,
    },

    /// A time of day that is not `HH:MM` or `HH:MM:SS`.
    #[error("Invalid time '{value}', expected HH:MM or HH:MM:SS")]
    InvalidTime {
        /// The rejected input
        value: String,
    },

    /// A calendar date that is not `YYYY-MM-DD`.
    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input
        value: String,
    },

    /// The zone observes daylight saving, so a fixed offset cannot describe it.
    #[error("Timezone '{key}' observes daylight saving and cannot use a fixed offset")]
    FixedOffsetUnsupported {
        /// The timezone key
        key: &'static str,
    },

    /// The compiled-in fixed offset disagrees with the zone database.
    #[error(
        "Fixed offset {fixed_hours}h of timezone '{key}' disagrees with the zone database offset {actual} on {date}"
    )]
    FixedOffsetMismatch {
        /// The timezone key
        key: &'static str,
        /// The compiled-in offset in hours
        fixed_hours: i8,
        /// The offset reported by the zone database
        actual: String,
        /// The date the offsets were compared on
        date: String,
    },

    /// Date arithmetic or zone resolution failed.
    #[error("Time zone conversion failed: {message}")]
    Conversion {
        /// Message from the conversion library
        message: String,
    },
}

impl From<jiff::Error> for TimeError {
    fn from(e: jiff::Error) -> Self {
        Self::Conversion {
            message: e.to_string(),
        }
    }
}
