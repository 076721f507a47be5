// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Egypt display and storage directions.

use jiff::civil::date;
use slotwise_core::{
    NOT_SCHEDULED, egypt_local_to_utc, format_date_time_as_egypt, format_utc_as_egypt,
};

#[test]
fn storage_then_display_recovers_egypt_time() {
    let day = date(2024, 6, 15);
    let stored = egypt_local_to_utc("16:00", day).unwrap();
    let shown = format_date_time_as_egypt(
        Some(&stored.utc_date.to_string()),
        Some(&stored.utc_time_string),
        "HH:mm",
    );
    assert_eq!(shown, "16:00");

    let iso = format!("{}T{}", stored.utc_date, stored.utc_time_string);
    assert_eq!(format_utc_as_egypt(&iso, "HH:mm"), "16:00");
}

#[test]
fn round_trips_every_hour_in_winter_and_summer() {
    for day in [date(2024, 1, 15), date(2024, 8, 15), date(2021, 8, 15)] {
        for h in 0..24 {
            let local = format!("{h:02}:00");
            let stored = egypt_local_to_utc(&local, day).unwrap();
            let iso = format!("{}T{}", stored.utc_date, stored.utc_time_string);
            assert_eq!(format_utc_as_egypt(&iso, "HH:mm"), local, "{day} {local}");
            assert_eq!(
                format_utc_as_egypt(&iso, "yyyy-MM-dd"),
                day.to_string(),
                "{day} {local}"
            );
        }
    }
}

#[test]
fn missing_parts_are_not_scheduled() {
    assert_eq!(format_utc_as_egypt("", "HH:mm"), NOT_SCHEDULED);
    assert_eq!(
        format_date_time_as_egypt(None, None, "HH:mm"),
        NOT_SCHEDULED
    );
    assert_eq!(
        format_date_time_as_egypt(Some("2024-06-15"), Some("  "), "HH:mm"),
        NOT_SCHEDULED
    );
}
