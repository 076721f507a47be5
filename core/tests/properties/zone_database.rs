// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Zone-database converter agreement with the fixed-offset path.

use slotwise_core::{
    ConversionPath, SUPPORTED_TIMEZONES, client_hour_to_utc, to_utc_range, verify_fixed_offsets,
};

use crate::common::{all_hours, assert_one_hour_wide, days_of_year};

#[test]
fn agrees_with_fixed_offsets_through_2024() {
    for config in SUPPORTED_TIMEZONES {
        for h in all_hours() {
            let fixed = to_utc_range(h, config.fixed_offset_hours).unwrap();
            for day in days_of_year(2024) {
                let got = client_hour_to_utc(h, day, config.iana_zone_id).unwrap();
                assert_eq!(got.utc_hour, fixed.start.hour(), "{} {day} {h}", config.key);
                assert_eq!(got.utc_minute, 0);
            }
        }
    }
}

#[test]
fn both_paths_give_identical_windows() {
    for config in SUPPORTED_TIMEZONES {
        for day in days_of_year(2024).step_by(7) {
            for h in all_hours() {
                let fixed = config
                    .utc_window(h, day, ConversionPath::FixedOffset)
                    .unwrap();
                let tzdb = config
                    .utc_window(h, day, ConversionPath::ZoneDatabase)
                    .unwrap();
                assert_eq!(fixed, tzdb, "{} {day} {h}", config.key);
                assert_one_hour_wide(&tzdb.1);
            }
        }
    }
}

#[test]
fn startup_check_passes_for_supported_zones() {
    verify_fixed_offsets(2024).unwrap();
    verify_fixed_offsets(2025).unwrap();
}
