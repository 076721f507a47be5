// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use jiff::Zoned;
use slotwise_core::{APP_NAME, Config, verify_fixed_offsets};
use tracing_subscriber::EnvFilter;

use crate::cmd_egypt::{self, CmdEgyptLocal, CmdEgyptShow, CmdEgyptStore};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_slots::CmdSlots;
use crate::cmd_window::CmdWindow;
use crate::cmd_zones::CmdZones;
use crate::config::parse_config;

/// Run the slotwise command-line interface.
pub async fn run() -> ExitCode {
    init_tracing();
    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Resolve client hours to UTC windows and show them in Egypt time.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/slotwise/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/slotwise/config.toml on Windows. Can also be set with SLOTWISE_CONFIG.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdZones::command())
            .subcommand(CmdSlots::command())
            .subcommand(CmdWindow::command())
            .subcommand(cmd_egypt::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdZones::NAME, matches)) => Zones(CmdZones::from(matches)),
            Some((CmdSlots::NAME, matches)) => Slots(CmdSlots::from(matches)),
            Some((CmdWindow::NAME, matches)) => Window(CmdWindow::from(matches)),
            Some((cmd_egypt::NAME, matches)) => match matches.subcommand() {
                Some((CmdEgyptShow::NAME, matches)) => EgyptShow(CmdEgyptShow::from(matches)),
                Some((CmdEgyptStore::NAME, matches)) => EgyptStore(CmdEgyptStore::from(matches)),
                Some((CmdEgyptLocal::NAME, matches)) => EgyptLocal(CmdEgyptLocal::from(matches)),
                _ => unreachable!(),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches)?)
            }
            _ => return Err("no command given".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List the supported timezones
    Zones(CmdZones),

    /// List the selectable hourly slots
    Slots(CmdSlots),

    /// Resolve the UTC availability window for a client hour
    Window(CmdWindow),

    /// Display a UTC date-time in Egypt time
    EgyptShow(CmdEgyptShow),

    /// Convert an Egypt local time to UTC for storage
    EgyptStore(CmdEgyptStore),

    /// Convert a stored UTC time back to Egypt time
    EgyptLocal(CmdEgyptLocal),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Zones(a)      => a.run(&Self::prepare(config).await?),
            Slots(a)      => a.run(&Self::prepare(config).await?),
            Window(a)     => a.run(&Self::prepare(config).await?),
            EgyptShow(a)  => a.run(&Self::prepare(config).await?),
            EgyptStore(a) => a.run(&Self::prepare(config).await?),
            EgyptLocal(a) => a.run(&Self::prepare(config).await?),
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn prepare(config: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let mut config = parse_config(config).await?;
        config.normalize()?;

        let year = Zoned::now().year();
        tracing::debug!(year, "verifying fixed offsets against the zone database...");
        verify_fixed_offsets(year)?;
        Ok(config)
    }
}
