// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::Zoned;
use jiff::civil::Date;
use slotwise_core::{TimezoneConfig, parse_date};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn arg_timezone() -> Arg {
    arg!(-z --timezone <TIMEZONE> "Client timezone key, e.g. saudi_arabia or uae")
        .long_help("Client timezone key. Defaults to `default_timezone` from the config file.")
}

pub fn get_timezone(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("timezone").cloned()
}

pub fn arg_date() -> Arg {
    arg!(-d --date <DATE> "Calendar date as YYYY-MM-DD")
}

pub fn get_date(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("date").cloned()
}

/// Parses the given date, or falls back to today in the given timezone.
pub fn date_or_today(date: Option<&str>, tz: &TimezoneConfig) -> Result<Date, Box<dyn Error>> {
    match date {
        Some(date) => Ok(parse_date(date)?),
        None => {
            let today = Zoned::now().with_time_zone(tz.time_zone()?).date();
            tracing::debug!(%today, timezone = tz.key, "no date given, using today");
            Ok(today)
        }
    }
}

/// Prints a value as pretty JSON.
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
