// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use jiff::ToSpan;
use jiff::civil::{Date, date};
use slotwise_core::ClientHour;

/// Creates a client hour, panicking on invalid input.
#[must_use]
pub fn hour(h: u8) -> ClientHour {
    ClientHour::new(h).expect("test hour must be within 0..=23")
}

/// Every hour of the day, 0 through 23.
pub fn all_hours() -> impl Iterator<Item = ClientHour> {
    (0..=23).map(hour)
}

/// Every calendar day of `year`.
#[allow(dead_code)]
pub fn days_of_year(year: i16) -> impl Iterator<Item = Date> {
    let first = date(year, 1, 1);
    (0..first.days_in_year())
        .map(move |n| first.checked_add(i32::from(n).days()).expect("day within year"))
}
