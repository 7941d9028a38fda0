use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{dump::dump, init::init, languages::languages, translate::translate},
    exit_status::ExitStatus,
};

/// Main entry point for the poglot CLI.
///
/// Prints help and succeeds when no command is given; otherwise dispatches to
/// the command handler.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Languages(cmd)) => languages(cmd),
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Dump(cmd)) => dump(cmd),
        Some(Command::Init) => init(),
        None => Ok(ExitStatus::Success),
    }
}
