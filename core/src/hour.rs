// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::TimeError;

/// Legacy numeric value standing for "all hours" in slot pickers.
pub const LEGACY_ANY_HOUR: i64 = -1;

/// An hour of the day on the client's wall clock, always within `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct ClientHour(u8);

impl ClientHour {
    /// Creates a client hour, failing for anything outside `0..=23`.
    pub fn new(hour: u8) -> Result<Self, TimeError> {
        match hour {
            0..=23 => Ok(Self(hour)),
            _ => Err(TimeError::HourOutOfRange {
                hour: i64::from(hour),
            }),
        }
    }

    /// The hour as an integer in `0..=23`.
    pub const fn get(self) -> u8 {
        self.0
    }

    pub(crate) const fn as_i8(self) -> i8 {
        self.0 as i8
    }

    /// The 12-hour clock label used by slot pickers, e.g. `8:00 AM` or `12:00 PM`.
    pub fn label(self) -> String {
        let (hour, meridiem) = match self.0 {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{hour}:00 {meridiem}")
    }
}

impl TryFrom<i64> for ClientHour {
    type Error = TimeError;

    fn try_from(hour: i64) -> Result<Self, Self::Error> {
        u8::try_from(hour)
            .map_err(|_| TimeError::HourOutOfRange { hour })
            .and_then(Self::new)
    }
}

impl fmt::Display for ClientHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Which hours a client wants to see availability for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HourSelection {
    /// No hour filter, the whole day.
    Any,

    /// A single one-hour slot starting at the given client hour.
    Specific(ClientHour),
}

impl HourSelection {
    /// Maps the legacy picker value, where `-1` means all hours.
    pub fn from_legacy(value: i64) -> Result<Self, TimeError> {
        match value {
            LEGACY_ANY_HOUR => Ok(Self::Any),
            hour => ClientHour::try_from(hour).map(Self::Specific),
        }
    }

    /// The selected hour, if any.
    pub fn hour(self) -> Option<ClientHour> {
        match self {
            Self::Any => None,
            Self::Specific(hour) => Some(hour),
        }
    }

    /// The label shown in slot pickers.
    pub fn label(self) -> String {
        match self {
            Self::Any => "All Time".to_string(),
            Self::Specific(hour) => hour.label(),
        }
    }
}

impl FromStr for HourSelection {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("any") || s.eq_ignore_ascii_case("all") {
            return Ok(Self::Any);
        }

        let value: i64 = s.parse().map_err(|_| TimeError::InvalidTime {
            value: s.to_string(),
        })?;
        Self::from_legacy(value)
    }
}

impl fmt::Display for HourSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Specific(hour) => write!(f, "{hour}"),
        }
    }
}
