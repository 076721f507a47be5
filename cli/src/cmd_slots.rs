// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use slotwise_core::{Config, HourlyTimeSlot, time_slots};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{ArgOutputFormat, arg_timezone, get_timezone, print_json};

#[derive(Debug, Clone)]
pub struct CmdSlots {
    pub timezone: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdSlots {
    pub const NAME: &str = "slots";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the hourly slots a client can pick")
            .arg(arg_timezone())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            timezone: get_timezone(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing slots...");
        let tz = config.timezone(self.timezone.as_deref())?;
        let slots = time_slots(tz);

        match self.output_format {
            ArgOutputFormat::Json => print_json(&slots),
            ArgOutputFormat::Table => {
                println!("{} ({})", tz.display_label, tz.iana_zone_id);
                let columns = [SlotColumn::Selection, SlotColumn::Label, SlotColumn::Utc];
                print!("{}", Table::new(&columns, &slots));
                Ok(())
            }
        }
    }
}

enum SlotColumn {
    Selection,
    Label,
    Utc,
}

impl Column<HourlyTimeSlot> for SlotColumn {
    fn header(&self) -> &'static str {
        match self {
            SlotColumn::Selection => "HOUR",
            SlotColumn::Label => "LABEL",
            SlotColumn::Utc => "UTC",
        }
    }

    fn format(&self, slot: &HourlyTimeSlot) -> String {
        match self {
            SlotColumn::Selection => slot.selection.to_string(),
            SlotColumn::Label => slot.label.clone(),
            SlotColumn::Utc => match slot.utc_hour_hint {
                Some(h) => format!("{h:02}:00"),
                None => "-".to_string(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            SlotColumn::Label => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
