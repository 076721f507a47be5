// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::egypt::DEFAULT_DISPLAY_PATTERN;
use crate::{ConversionPath, TimeError, TimezoneConfig, lookup};

/// The name of the application.
pub const APP_NAME: &str = "slotwise";

/// Configuration for timezone resolution.
///
/// The set of supported timezones is compiled in and cannot be changed here.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Timezone key used when a caller does not pick one.
    #[serde(default)]
    pub default_timezone: Option<String>,

    /// Pattern for Egypt-local display strings.
    #[serde(default = "default_display_pattern")]
    pub display_pattern: String,

    /// Strategy for converting client hours to UTC.
    #[serde(default)]
    pub conversion_path: ConversionPath,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_timezone: None,
            display_pattern: default_display_pattern(),
            conversion_path: ConversionPath::default(),
        }
    }
}

fn default_display_pattern() -> String {
    DEFAULT_DISPLAY_PATTERN.to_string()
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), TimeError> {
        // Canonicalize the default timezone key, unknown keys are rejected here
        // rather than at the first booking.
        if let Some(key) = &self.default_timezone {
            let config = lookup(key)?;
            self.default_timezone = Some(config.key.to_string());
        }

        if self.display_pattern.trim().is_empty() {
            tracing::warn!("empty display pattern, using default");
            self.display_pattern = default_display_pattern();
        }

        if self.conversion_path == ConversionPath::FixedOffset {
            tracing::warn!("the fixed-offset conversion path is deprecated");
        }

        Ok(())
    }

    /// Resolves an explicit timezone key, or the configured default.
    pub fn timezone(&self, key: Option<&str>) -> Result<&'static TimezoneConfig, TimeError> {
        match key.or(self.default_timezone.as_deref()) {
            Some(key) => lookup(key),
            None => Err(TimeError::NoTimezone),
        }
    }
}
