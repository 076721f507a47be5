// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-offset hour-range converter.

use slotwise_core::{SUPPORTED_TIMEZONES, TimeError, lookup, to_utc_range};

use crate::common::{all_hours, assert_one_hour_wide, hour};

#[test]
fn adding_offset_back_recovers_client_hour() {
    for config in SUPPORTED_TIMEZONES {
        for h in all_hours() {
            let window = to_utc_range(h, config.fixed_offset_hours).unwrap();
            let back = (window.start.hour() + config.fixed_offset_hours).rem_euclid(24);
            assert_eq!(back as u8, h.get(), "{} at {h}", config.key);
        }
    }
}

#[test]
fn every_window_is_one_hour_wide() {
    for config in SUPPORTED_TIMEZONES {
        for h in all_hours() {
            assert_one_hour_wide(&to_utc_range(h, config.fixed_offset_hours).unwrap());
        }
    }
}

#[test]
fn midnight_flag_follows_raw_hour() {
    for config in SUPPORTED_TIMEZONES {
        for h in all_hours() {
            let raw = i16::from(h.get()) - i16::from(config.fixed_offset_hours);
            let window = to_utc_range(h, config.fixed_offset_hours).unwrap();
            assert_eq!(
                window.crosses_midnight,
                !(0..24).contains(&raw),
                "{} at {h}",
                config.key
            );
        }
    }
}

#[test]
fn concrete_windows() {
    let cases = [
        (16, 3, "13:00:00", "14:00:00", false),
        (1, 4, "21:00:00", "22:00:00", true),
        (23, 3, "20:00:00", "21:00:00", false),
        (2, 3, "23:00:00", "00:00:00", true),
        (0, 4, "20:00:00", "21:00:00", true),
    ];
    for (h, offset, start, end, crosses) in cases {
        let window = to_utc_range(hour(h), offset).unwrap();
        assert_eq!(window.start_time(), start, "{h} at +{offset}");
        assert_eq!(window.end_time(), end, "{h} at +{offset}");
        assert_eq!(window.crosses_midnight, crosses, "{h} at +{offset}");
    }
}

#[test]
fn unknown_timezone_yields_no_window() {
    let got = lookup("narnia").and_then(|tz| tz.fixed_window(hour(16)));
    assert_eq!(
        got,
        Err(TimeError::UnknownTimezone {
            key: "narnia".to_string()
        })
    );
}
