// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use jiff::civil::Time;
use slotwise_core::UtcWindow;

/// Seconds since midnight of a time of day.
#[must_use]
pub fn hms(t: Time) -> i32 {
    i32::from(t.hour()) * 3600 + i32::from(t.minute()) * 60 + i32::from(t.second())
}

/// Asserts that the window ends exactly one hour after it starts, modulo 24 hours.
///
/// # Panics
///
/// Panics if the window is any other width.
pub fn assert_one_hour_wide(window: &UtcWindow) {
    let width = (hms(window.end) - hms(window.start)).rem_euclid(24 * 3600);
    assert_eq!(
        width,
        3600,
        "window {}..{} is not one hour wide",
        window.start_time(),
        window.end_time()
    );
}
