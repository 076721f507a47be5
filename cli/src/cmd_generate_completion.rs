// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, builder::PossibleValue, value_parser};
use clap_complete::Shell;
use clap_complete_nushell::Nushell;
use slotwise_core::APP_NAME;

use crate::Cli;

/// A shell `slotwise` can write a completion script for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionShell {
    /// One of the shells `clap_complete` ships.
    Builtin(Shell),
    Nushell,
}

impl ValueEnum for CompletionShell {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Builtin(Shell::Bash),
            Self::Builtin(Shell::Elvish),
            Self::Builtin(Shell::Fish),
            Self::Builtin(Shell::PowerShell),
            Self::Builtin(Shell::Zsh),
            Self::Nushell,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Builtin(shell) => shell.to_possible_value(),
            Self::Nushell => Some(PossibleValue::new("nushell").alias("nu")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: CompletionShell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about(format!("Write a {APP_NAME} completion script to stdout"))
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "Target shell")
                    .value_parser(value_parser!(CompletionShell)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let shell = matches
            .get_one::<CompletionShell>("shell")
            .copied()
            .ok_or("missing shell name")?;
        Ok(Self { shell })
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(shell = ?self.shell, "writing completion script");
        self.write_to(&mut io::stdout());
        Ok(())
    }

    /// Writes the completion script for the whole command tree.
    pub fn write_to(self, buf: &mut impl io::Write) {
        let mut cmd = Cli::command();
        match self.shell {
            CompletionShell::Builtin(shell) => {
                clap_complete::generate(shell, &mut cmd, APP_NAME, buf)
            }
            CompletionShell::Nushell => clap_complete::generate(Nushell, &mut cmd, APP_NAME, buf),
        }
    }
}
