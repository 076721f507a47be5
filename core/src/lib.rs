// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timezone conversion and slot resolution for tutoring schedules.
//!
//! Clients pick hourly slots on their own wall clock, availability is stored and
//! queried in UTC, and teaching staff read and enter times in Egypt local time.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro
)]

mod availability;
mod config;
mod convert;
mod egypt;
mod error;
mod hour;
mod parse;
pub mod pattern;
mod window;
mod zone;

pub use crate::availability::{
    AvailabilityFilter, FIRST_SLOT_HOUR, HourlyTimeSlot, LAST_SLOT_HOUR, resolve_availability,
    time_slots,
};
pub use crate::config::{APP_NAME, Config};
pub use crate::convert::{ConversionPath, UtcInstant, client_hour_to_utc, utc_window_at};
pub use crate::egypt::{
    DEFAULT_DISPLAY_PATTERN, EGYPT_ZONE, EgyptConversionResult, INVALID_DATE, INVALID_DATE_TIME,
    NOT_SCHEDULED, egypt_local_to_utc, egypt_today, format_date_time_as_egypt,
    format_utc_as_egypt, utc_to_egypt_local,
};
pub use crate::error::TimeError;
pub use crate::hour::{ClientHour, HourSelection, LEGACY_ANY_HOUR};
pub use crate::parse::{parse_date, parse_time_of_day};
pub use crate::window::{MAX_OFFSET_HOURS, MIN_OFFSET_HOURS, UtcWindow, to_utc_range, utc_day_shift};
pub use crate::zone::{SUPPORTED_TIMEZONES, TimezoneConfig, all, lookup, verify_fixed_offsets};
