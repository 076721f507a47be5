// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Availability filters built from client selections.

use jiff::civil::{date, time};
use slotwise_core::{
    ConversionPath, HourSelection, SUPPORTED_TIMEZONES, TimeError, resolve_availability,
    time_slots,
};

use crate::common::{all_hours, hour};

#[test]
fn any_selection_never_produces_a_window() {
    for config in SUPPORTED_TIMEZONES {
        let filter = resolve_availability(
            date(2024, 6, 15),
            config.key,
            HourSelection::from_legacy(-1).unwrap(),
            ConversionPath::ZoneDatabase,
        )
        .unwrap();
        assert!(filter.window.is_none());
    }
}

#[test]
fn window_start_matches_its_own_filter() {
    for config in SUPPORTED_TIMEZONES {
        for h in all_hours() {
            let filter = resolve_availability(
                date(2024, 6, 15),
                config.key,
                HourSelection::Specific(h),
                ConversionPath::ZoneDatabase,
            )
            .unwrap();
            let window = filter.window.unwrap();
            assert!(filter.matches(filter.utc_date, window.start));
            assert_eq!(filter.utc_date != filter.client_date, window.crosses_midnight);
        }
    }
}

#[test]
fn unknown_key_aborts_search() {
    let got = resolve_availability(
        date(2024, 6, 15),
        "egypt",
        HourSelection::Specific(hour(16)),
        ConversionPath::FixedOffset,
    );
    assert!(matches!(got, Err(TimeError::UnknownTimezone { .. })));
}

#[test]
fn slot_hints_agree_with_windows() {
    for config in SUPPORTED_TIMEZONES {
        for slot in time_slots(config).into_iter().skip(1) {
            let HourSelection::Specific(h) = slot.selection else {
                panic!("only the first slot selects every hour");
            };
            let window = config.fixed_window(h).unwrap();
            assert_eq!(slot.utc_hour_hint, Some(window.start.hour() as u8));
        }
    }
}

#[test]
fn filter_serializes_for_search_collaborator() {
    let filter = resolve_availability(
        date(2024, 6, 15),
        "saudi_arabia",
        HourSelection::Specific(hour(16)),
        ConversionPath::ZoneDatabase,
    )
    .unwrap();
    let json = serde_json::to_value(&filter).unwrap();
    assert_eq!(json["timezone"], "saudi_arabia");
    assert_eq!(json["utc_date"], "2024-06-15");
    assert_eq!(json["window"]["start"], "13:00:00");
    assert_eq!(json["window"]["end"], "14:00:00");
    assert!(filter.matches(date(2024, 6, 15), time(13, 15, 0, 0)));
}
