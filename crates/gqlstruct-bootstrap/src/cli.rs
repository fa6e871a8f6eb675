use clap::error::ErrorKind;

use crate::{cli_directive, cli_generate};

pub struct Cli {
    cmd: clap::Command,
}

impl Cli {
    pub fn new() -> eyre::Result<Self> {
        Ok(Self {
            cmd: clap::Command::new("gqlstruct")
                .about("Generates Rust structs and proto3 services from @struct annotated schemas")
                .subcommand_required(true)
                .subcommand(cli_generate::GenerateCommand::new_cmd())
                .subcommand(cli_directive::DirectiveCommand::new_cmd()),
        })
    }

    pub fn execute(self, args: &[&str]) -> eyre::Result<()> {
        let matches = match self.cmd.try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    e.print()?;
                    return Ok(());
                }
                _ => return Err(e.into()),
            },
        };

        match matches.subcommand() {
            Some(("generate", args)) => cli_generate::GenerateCommand::exec(args)?,
            Some(("directive", _)) => cli_directive::DirectiveCommand::exec()?,
            _ => eyre::bail!("command missing"),
        }

        Ok(())
    }
}
