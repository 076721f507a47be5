// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use slotwise_core::{Config, TimezoneConfig};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{ArgOutputFormat, print_json};

#[derive(Debug, Clone, Copy)]
pub struct CmdZones {
    pub output_format: ArgOutputFormat,
}

impl CmdZones {
    pub const NAME: &str = "zones";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("z")
            .about("List the supported client timezones")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing timezones...");
        let zones: Vec<TimezoneConfig> = slotwise_core::all().copied().collect();

        match self.output_format {
            ArgOutputFormat::Json => print_json(&zones),
            ArgOutputFormat::Table => {
                let columns = [
                    ZoneColumn::Key,
                    ZoneColumn::Label,
                    ZoneColumn::Offset,
                    ZoneColumn::Zone,
                    ZoneColumn::Default(config.default_timezone.clone()),
                ];
                print!("{}", Table::new(&columns, &zones));
                Ok(())
            }
        }
    }
}

enum ZoneColumn {
    Key,
    Label,
    Offset,
    Zone,
    Default(Option<String>),
}

impl Column<TimezoneConfig> for ZoneColumn {
    fn header(&self) -> &'static str {
        match self {
            ZoneColumn::Key => "KEY",
            ZoneColumn::Label => "NAME",
            ZoneColumn::Offset => "OFFSET",
            ZoneColumn::Zone => "ZONE",
            ZoneColumn::Default(_) => "DEFAULT",
        }
    }

    fn format(&self, tz: &TimezoneConfig) -> String {
        match self {
            ZoneColumn::Key => tz.key.to_string(),
            ZoneColumn::Label => tz.display_label.to_string(),
            ZoneColumn::Offset => tz.offset_label(),
            ZoneColumn::Zone => tz.iana_zone_id.to_string(),
            ZoneColumn::Default(Some(key)) if key == tz.key => "*".to_string(),
            ZoneColumn::Default(_) => String::new(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ZoneColumn::Offset => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, tz: &TimezoneConfig) -> Option<colored::Color> {
        match self {
            ZoneColumn::Key if tz.observes_dst => Some(colored::Color::Yellow),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zones() {
        let cmd = Command::new("test").subcommand(CmdZones::command());
        let matches = cmd
            .try_get_matches_from(["test", "zones", "--output-format", "json"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("zones").unwrap();
        let parsed = CmdZones::from(sub_matches);
        assert_eq!(parsed.output_format, ArgOutputFormat::Json);
    }

    #[test]
    fn test_zone_columns() {
        let tz = slotwise_core::lookup("oman").unwrap();
        assert_eq!(ZoneColumn::Offset.format(tz), "+04:00");
        assert_eq!(ZoneColumn::Zone.format(tz), "Asia/Muscat");
        assert_eq!(ZoneColumn::Default(Some("oman".into())).format(tz), "*");
        assert_eq!(ZoneColumn::Default(None).format(tz), "");
    }

    #[test]
    fn test_zones_render_as_table() {
        colored::control::set_override(false);
        let zones: Vec<_> = slotwise_core::all().copied().collect();
        let columns = [ZoneColumn::Key, ZoneColumn::Offset];
        let out = Table::new(&columns, &zones).to_string();
        assert_eq!(out.lines().count(), 1 + zones.len());
        assert!(out.contains("saudi_arabia"));
    }
}
