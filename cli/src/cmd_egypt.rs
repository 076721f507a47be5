// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use slotwise_core::{
    Config, EGYPT_ZONE, egypt_local_to_utc, egypt_today, format_date_time_as_egypt,
    format_utc_as_egypt, parse_date, utc_to_egypt_local,
};

use crate::util::{ArgOutputFormat, arg_date, get_date, print_json};

pub const NAME: &str = "egypt";

pub fn command() -> Command {
    Command::new(NAME)
        .alias("eg")
        .about("Convert between UTC and Egypt local time")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommand(CmdEgyptShow::command())
        .subcommand(CmdEgyptStore::command())
        .subcommand(CmdEgyptLocal::command())
}

/// Formats a stored UTC date-time for display in Egypt local time.
#[derive(Debug, Clone)]
pub struct CmdEgyptShow {
    pub utc: String,
    pub time: Option<String>,
    pub pattern: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdEgyptShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Display a UTC date-time as Egypt local time")
            .arg(arg!(utc: <UTC> "UTC date-time, or a UTC date when --time is given"))
            .arg(arg!(-t --time <TIME> "UTC time stored separately from the date"))
            .arg(
                arg!(-p --pattern <PATTERN> "Display pattern, e.g. 'dd/MM/yyyy h:mm a'")
                    .long_help(
                        "\
Display pattern with date-fns style tokens such as yyyy, MM, dd, HH, h, mm and a. \
Defaults to `display_pattern` from the config file.",
                    ),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            utc: matches.get_one::<String>("utc").cloned().unwrap_or_default(),
            time: matches.get_one::<String>("time").cloned(),
            pattern: matches.get_one::<String>("pattern").cloned(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "formatting as Egypt time...");
        let pattern = self.pattern.as_deref().unwrap_or(&config.display_pattern);
        let egypt = match &self.time {
            Some(time) => format_date_time_as_egypt(Some(&self.utc), Some(time), pattern),
            None => format_utc_as_egypt(&self.utc, pattern),
        };

        match self.output_format {
            ArgOutputFormat::Json => print_json(&ShowOutput {
                zone: EGYPT_ZONE,
                pattern,
                egypt: &egypt,
            }),
            ArgOutputFormat::Table => {
                println!("{egypt}");
                Ok(())
            }
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct ShowOutput<'a> {
    zone: &'a str,
    pattern: &'a str,
    egypt: &'a str,
}

/// Converts an Egypt local time entered by staff into the UTC time to persist.
#[derive(Debug, Clone)]
pub struct CmdEgyptStore {
    pub time: String,
    pub date: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdEgyptStore {
    pub const NAME: &str = "store";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Convert an Egypt local time to the UTC time to store")
            .arg(arg!(time: <TIME> "Egypt local time as HH:MM or HH:MM:SS"))
            .arg(arg_date().help("Egypt calendar date as YYYY-MM-DD, defaults to today in Egypt"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            time: matches.get_one::<String>("time").cloned().unwrap_or_default(),
            date: get_date(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting Egypt time to UTC...");
        let date = match self.date.as_deref() {
            Some(date) => parse_date(date)?,
            None => egypt_today()?,
        };

        let result = egypt_local_to_utc(&self.time, date)?;
        match self.output_format {
            ArgOutputFormat::Json => print_json(&result),
            ArgOutputFormat::Table => {
                println!("{} {}", result.utc_date, result.utc_time_string.bold());
                Ok(())
            }
        }
    }
}

/// Converts a stored UTC time back to the Egypt local date and time.
#[derive(Debug, Clone)]
pub struct CmdEgyptLocal {
    pub time: String,
    pub date: String,
    pub output_format: ArgOutputFormat,
}

impl CmdEgyptLocal {
    pub const NAME: &str = "local";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Convert a stored UTC time to Egypt local date and time")
            .arg(arg!(time: <TIME> "UTC time as HH:MM or HH:MM:SS"))
            .arg(arg_date().help("UTC calendar date as YYYY-MM-DD").required(true))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            time: matches.get_one::<String>("time").cloned().unwrap_or_default(),
            date: get_date(matches).unwrap_or_default(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, _config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting UTC time to Egypt...");
        let date = parse_date(&self.date)?;
        let local = utc_to_egypt_local(&self.time, date)?;

        match self.output_format {
            ArgOutputFormat::Json => print_json(&local),
            ArgOutputFormat::Table => {
                println!("{} {}", local.date(), local.time().strftime("%H:%M:%S"));
                Ok(())
            }
        }
    }
}
