// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use slotwise_core::{
    AvailabilityFilter, Config, ConversionPath, HourSelection, resolve_availability,
};

use crate::util::{
    ArgOutputFormat, arg_date, arg_timezone, date_or_today, get_date, get_timezone, print_json,
};

/// Resolves the UTC window used to search availability for a client's hour.
#[derive(Debug, Clone)]
pub struct CmdWindow {
    pub hour: HourSelection,
    pub timezone: Option<String>,
    pub date: Option<String>,
    pub path: Option<ConversionPath>,
    pub output_format: ArgOutputFormat,
}

impl CmdWindow {
    pub const NAME: &str = "window";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("w")
            .about("Resolve the UTC availability window for a client hour")
            .arg(
                arg!(hour: <HOUR> "Client hour 0-23, or `any` for the whole day")
                    .value_parser(value_parser!(HourSelection))
                    .allow_negative_numbers(true),
            )
            .arg(arg_timezone())
            .arg(arg_date())
            .arg(
                arg!(--path <PATH> "Conversion path, overrides the config file")
                    .value_parser(value_parser!(ConversionPath)),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let hour = match matches.get_one::<HourSelection>("hour") {
            Some(hour) => *hour,
            None => unreachable!("hour is required"),
        };

        Self {
            hour,
            timezone: get_timezone(matches),
            date: get_date(matches),
            path: matches.get_one("path").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "resolving availability window...");
        let tz = config.timezone(self.timezone.as_deref())?;
        let date = date_or_today(self.date.as_deref(), tz)?;
        let path = self.path.unwrap_or(config.conversion_path);

        let filter = resolve_availability(date, tz.key, self.hour, path)?;
        match self.output_format {
            ArgOutputFormat::Json => print_json(&filter),
            ArgOutputFormat::Table => {
                print!("{}", WindowFormatter::new(self.hour).format(&filter));
                Ok(())
            }
        }
    }
}

struct WindowFormatter {
    hour: HourSelection,
}

impl WindowFormatter {
    fn new(hour: HourSelection) -> Self {
        Self { hour }
    }

    fn format(&self, filter: &AvailabilityFilter) -> String {
        let mut rows = vec![
            ("Timezone", filter.timezone.to_string()),
            ("Client date", filter.client_date.to_string()),
            ("Hour", self.hour.label()),
            ("UTC date", filter.utc_date.to_string()),
        ];

        match &filter.window {
            Some(window) => {
                rows.push(("UTC start", window.start_time()));
                rows.push(("UTC end", window.end_time()));
                let crosses = if window.crosses_midnight {
                    "yes".yellow().to_string()
                } else {
                    "no".to_string()
                };
                rows.push(("Crosses midnight", crosses));
            }
            None => rows.push(("UTC window", "whole day".to_string())),
        }

        let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        rows.into_iter()
            .map(|(k, v)| format!("{}  {v}\n", format!("{k:<width$}").bold()))
            .collect()
    }
}
